/// Index of an entity in a construction's arena.
///
/// Entities are appended monotonically and only ever reference entities
/// with a smaller index, so the dependency graph is acyclic by construction.
pub(crate) type Index = u32;

/// Handle to a point in one particular [`Construction`](crate::Construction).
///
/// Handles are minted by the construction that owns the entity and are only
/// meaningful there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointHandle(pub(crate) Index);

/// Handle to a line in one particular [`Construction`](crate::Construction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineHandle(pub(crate) Index);

/// Handle to a circle in one particular [`Construction`](crate::Construction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CircleHandle(pub(crate) Index);

/// Handle to any entity, with its kind carried alongside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// A point.
    Point(PointHandle),
    /// A line.
    Line(LineHandle),
    /// A circle.
    Circle(CircleHandle),
}
