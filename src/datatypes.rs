use std::cell::Cell;

use crate::{
    id::{CircleHandle, LineHandle, PointHandle},
    vector::Vec2,
};

/// Styling data attached to an entity.
///
/// The engine stores this and hands it to the renderer unchanged; it never
/// interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Style {
    /// RGBA color, if the renderer wants one.
    pub color: Option<[u8; 4]>,
}

/// How an entity should be presented by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Appearance {
    /// Whether the renderer should draw this entity.
    pub visible: bool,
    /// Style override. `None` means the construction's default style.
    pub style: Option<Style>,
}

impl Appearance {
    /// Drawn, with the construction's default style.
    pub fn visible() -> Self {
        Self {
            visible: true,
            style: None,
        }
    }

    /// Not drawn (unless the construction shows intermediates).
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// Whether a line is interpreted as unbounded or as the segment
/// between its two defining points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Extent {
    /// Extends infinitely in both directions.
    #[default]
    Infinite,
    /// Bounded by its two defining points.
    Segment,
}

/// The kind of an entity, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// A point.
    Point,
    /// A line.
    Line,
    /// A circle.
    Circle,
}

impl std::fmt::Display for EntityKind {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Point => write!(f, "point"),
            EntityKind::Line => write!(f, "line"),
            EntityKind::Circle => write!(f, "circle"),
        }
    }
}

/// Position source for a free point: an axiom of the construction.
pub(crate) enum FreeValue {
    /// Pinned to a fixed position.
    Fixed(Vec2),
    /// Driven by the renderer's clock (milliseconds since start).
    Animated(Box<dyn Fn(f64) -> Vec2>),
}

/// How a point's position is defined.
pub(crate) enum PointKind {
    /// An input axiom, not derived from other entities.
    Free(FreeValue),
    /// Intersection of two lines. At most one solution, so no toggle.
    LineLine {
        line1: LineHandle,
        line2: LineHandle,
    },
    /// Intersection of a line and a circle.
    LineCircle {
        line: LineHandle,
        circle: CircleHandle,
        toggle: bool,
    },
    /// Intersection of two circles.
    CircleCircle {
        circle1: CircleHandle,
        circle2: CircleHandle,
        toggle: bool,
    },
}

/// Memoized resolution outcome for a point.
///
/// Valid only while `generation` matches the construction's current tick;
/// `value: None` caches "does not exist", which is data, not an error.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Cached {
    pub generation: u64,
    pub value: Option<Vec2>,
}

pub(crate) struct PointEntity {
    pub kind: PointKind,
    pub cache: Cell<Cached>,
    pub appearance: Appearance,
}

impl PointEntity {
    pub fn new(kind: PointKind, appearance: Appearance) -> Self {
        Self {
            kind,
            // Generation 0 never matches a live tick, so the first query resolves.
            cache: Cell::new(Cached::default()),
            appearance,
        }
    }
}

/// A straight line through two points. No cache of its own: its geometry is
/// derived fresh from the current positions of its defining points.
pub(crate) struct LineEntity {
    pub point1: PointHandle,
    pub point2: PointHandle,
    pub extent: Extent,
    pub appearance: Appearance,
}

/// A circle drawn by placing the compass at `center` and opening it to
/// `edge`. The radius is always recomputed from those two points.
pub(crate) struct CircleEntity {
    pub center: PointHandle,
    pub edge: PointHandle,
    pub appearance: Appearance,
}

pub(crate) enum Entity {
    Point(PointEntity),
    Line(LineEntity),
    Circle(CircleEntity),
}

impl Entity {
    pub fn appearance(&self) -> Appearance {
        match self {
            Entity::Point(p) => p.appearance,
            Entity::Line(l) => l.appearance,
            Entity::Circle(c) => c.appearance,
        }
    }
}
