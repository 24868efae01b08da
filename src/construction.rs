use indexmap::IndexMap;

use crate::{
    datatypes::{
        Appearance, Cached, CircleEntity, Entity, EntityKind, Extent, FreeValue, LineEntity,
        PointEntity, PointKind, Style,
    },
    error::Error,
    id::{CircleHandle, Handle, Index, LineHandle, PointHandle},
    intersect,
    render::{RenderedCircle, RenderedLine, RenderedPoint, Renderer},
    vector::Vec2,
    warnings::{Warning, WarningContent},
};

/// Compound constructors, expanded into primitive builder calls.
mod compound;

/// Separates a compound constructor's name from the suffixes of the
/// auxiliary entities it expands into. User-chosen names may not contain it.
pub(crate) const AUX_SEPARATOR: char = '#';

/// Resolved geometry of a line, for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineGeometry {
    /// Current position of the first defining point.
    pub point1: Vec2,
    /// Current position of the second defining point.
    pub point2: Vec2,
    /// Whether to interpret the line as bounded or infinite.
    pub extent: Extent,
}

/// Resolved geometry of a circle, for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleGeometry {
    /// Current position of the center point.
    pub center: Vec2,
    /// Distance from the center to the edge point.
    pub radius: f64,
}

/// A named, build-once graph of points, lines and circles, each defined
/// purely in terms of previously added entities.
///
/// Build it with the `add_*` methods, then each frame call
/// [`begin_tick`](Self::begin_tick) (or [`render`](Self::render)) and query
/// positions. Every point resolves lazily and at most once per tick, however
/// many entities depend on it. A point that has no real solution (parallel
/// lines, disjoint circles) resolves to `None`, and so does everything
/// downstream of it; that is ordinary data, not an error.
pub struct Construction {
    /// Arena of every entity, in insertion order. Entities reference each
    /// other by index and only ever point at smaller indices, which keeps
    /// the graph acyclic without any runtime cycle detection.
    entities: Vec<Entity>,
    /// Name table, consulted only while building.
    names: IndexMap<String, Index>,
    /// Diagnostics from builder calls that could not take effect.
    warnings: Vec<Warning>,
    /// Bumped once per tick; any point cache stamped with an older
    /// generation is stale. This invalidates every cache in O(1).
    generation: u64,
    /// The renderer's clock at the start of the current tick, in ms.
    now_ms: f64,
    /// Draw auxiliary entities even if they're individually hidden.
    intermediates_visible: bool,
    /// Style for entities that don't carry their own.
    default_style: Style,
}

impl Default for Construction {
    fn default() -> Self {
        Self::new()
    }
}

impl Construction {
    /// An empty construction.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            names: IndexMap::new(),
            warnings: Vec::new(),
            // Starts above the cache stamps' default of 0, so points added
            // before the first tick still resolve.
            generation: 1,
            now_ms: 0.0,
            intermediates_visible: false,
            default_style: Style::default(),
        }
    }

    /// Draw every entity during [`render`](Self::render), including the
    /// hidden auxiliary ones that compound constructors expand into.
    pub fn set_intermediates_visible(&mut self, visible: bool) -> &mut Self {
        self.intermediates_visible = visible;
        self
    }

    /// Style used for entities whose [`Appearance`] doesn't carry one.
    pub fn set_default_style(&mut self, style: Style) -> &mut Self {
        self.default_style = style;
        self
    }

    /// Diagnostics accumulated from misused builder calls.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    // ------------------------------------------------------------------
    // Building

    /// Add a free point pinned to a fixed position.
    ///
    /// The position is an axiom: to keep this a true compass-and-straightedge
    /// construction, derive everything else through lines, circles and
    /// intersections of previously added entities.
    pub fn add_point(&mut self, name: &str, position: Vec2, appearance: Appearance) -> &mut Self {
        if self.user_name_ok(name) {
            self.free_point_impl(name, FreeValue::Fixed(position), appearance);
        }
        self
    }

    /// Add a free point whose position is a function of the renderer's
    /// clock (milliseconds since start).
    pub fn add_animated_point(
        &mut self,
        name: &str,
        position: impl Fn(f64) -> Vec2 + 'static,
        appearance: Appearance,
    ) -> &mut Self {
        if self.user_name_ok(name) {
            self.free_point_impl(name, FreeValue::Animated(Box::new(position)), appearance);
        }
        self
    }

    /// Add a straight line through two previously added points.
    pub fn add_line(
        &mut self,
        name: &str,
        point1: &str,
        point2: &str,
        extent: Extent,
        appearance: Appearance,
    ) -> &mut Self {
        if self.user_name_ok(name) {
            self.line_impl(name, point1, point2, extent, appearance);
        }
        self
    }

    /// Add a circle drawn by placing the compass at `center` and opening it
    /// to `edge`.
    pub fn add_circle(
        &mut self,
        name: &str,
        center: &str,
        edge: &str,
        appearance: Appearance,
    ) -> &mut Self {
        if self.user_name_ok(name) {
            self.circle_impl(name, center, edge, appearance);
        }
        self
    }

    /// Add the point where two previously added lines/circles intersect.
    ///
    /// A line-circle or circle-circle pair intersects in up to two points;
    /// `toggle` picks which of the two this name designates. Asking for the
    /// intersection of anything with a point is a usage error and a no-op.
    pub fn add_intersection(
        &mut self,
        name: &str,
        object1: &str,
        object2: &str,
        toggle: bool,
        appearance: Appearance,
    ) -> &mut Self {
        if self.user_name_ok(name) {
            self.intersection_impl(name, object1, object2, toggle, appearance);
        }
        self
    }

    fn free_point_impl(&mut self, name: &str, value: FreeValue, appearance: Appearance) {
        self.register(
            name,
            Entity::Point(PointEntity::new(PointKind::Free(value), appearance)),
        );
    }

    fn line_impl(
        &mut self,
        name: &str,
        point1: &str,
        point2: &str,
        extent: Extent,
        appearance: Appearance,
    ) {
        let Some(point1) = self.point_dep(name, point1) else {
            return;
        };
        let Some(point2) = self.point_dep(name, point2) else {
            return;
        };
        self.register(
            name,
            Entity::Line(LineEntity {
                point1,
                point2,
                extent,
                appearance,
            }),
        );
    }

    fn circle_impl(&mut self, name: &str, center: &str, edge: &str, appearance: Appearance) {
        let Some(center) = self.point_dep(name, center) else {
            return;
        };
        let Some(edge) = self.point_dep(name, edge) else {
            return;
        };
        self.register(
            name,
            Entity::Circle(CircleEntity {
                center,
                edge,
                appearance,
            }),
        );
    }

    fn intersection_impl(
        &mut self,
        name: &str,
        object1: &str,
        object2: &str,
        toggle: bool,
        appearance: Appearance,
    ) {
        let Some(h1) = self.any_dep(name, object1) else {
            return;
        };
        let Some(h2) = self.any_dep(name, object2) else {
            return;
        };
        let kind = match (h1, h2) {
            (Handle::Line(line1), Handle::Line(line2)) => PointKind::LineLine { line1, line2 },
            (Handle::Line(line), Handle::Circle(circle)) => PointKind::LineCircle {
                line,
                circle,
                toggle,
            },
            // Same resolver, arguments swapped.
            (Handle::Circle(circle), Handle::Line(line)) => PointKind::LineCircle {
                line,
                circle,
                toggle,
            },
            (Handle::Circle(circle1), Handle::Circle(circle2)) => PointKind::CircleCircle {
                circle1,
                circle2,
                toggle,
            },
            (Handle::Point(_), _) | (_, Handle::Point(_)) => {
                self.warn(
                    Some(name),
                    WarningContent::PointIntersection {
                        object1: object1.to_owned(),
                        object2: object2.to_owned(),
                    },
                );
                return;
            }
        };
        self.register(name, Entity::Point(PointEntity::new(kind, appearance)));
    }

    /// Refuse names that would collide with auxiliary entities.
    fn user_name_ok(&mut self, name: &str) -> bool {
        if name.contains(AUX_SEPARATOR) {
            self.warn(
                None,
                WarningContent::ReservedSeparator {
                    name: name.to_owned(),
                },
            );
            return false;
        }
        true
    }

    /// Put an entity in the arena, unless the name is taken.
    fn register(&mut self, name: &str, entity: Entity) {
        if self.names.contains_key(name) {
            self.warn(
                Some(name),
                WarningContent::DuplicateName {
                    name: name.to_owned(),
                },
            );
            return;
        }
        let index = self.entities.len() as Index;
        self.entities.push(entity);
        self.names.insert(name.to_owned(), index);
    }

    fn warn(&mut self, about: Option<&str>, content: WarningContent) {
        self.warnings.push(Warning {
            about: about.map(str::to_owned),
            content,
        });
    }

    /// Resolve a dependency of any kind while registering `target`.
    fn any_dep(&mut self, target: &str, name: &str) -> Option<Handle> {
        let Some(&index) = self.names.get(name) else {
            self.warn(
                Some(target),
                WarningContent::UnknownReference {
                    name: name.to_owned(),
                },
            );
            return None;
        };
        Some(match self.entities[index as usize] {
            Entity::Point(_) => Handle::Point(PointHandle(index)),
            Entity::Line(_) => Handle::Line(LineHandle(index)),
            Entity::Circle(_) => Handle::Circle(CircleHandle(index)),
        })
    }

    /// Resolve a dependency that must be a point while registering `target`.
    fn point_dep(&mut self, target: &str, name: &str) -> Option<PointHandle> {
        match self.any_dep(target, name)? {
            Handle::Point(p) => Some(p),
            other => {
                self.warn(
                    Some(target),
                    WarningContent::WrongKind {
                        name: name.to_owned(),
                        expected: EntityKind::Point,
                        found: kind_of(other),
                    },
                );
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Lookup

    fn lookup(&self, name: &str) -> Result<(Index, &Entity), Error> {
        let Some(&index) = self.names.get(name) else {
            return Err(Error::Undefined {
                name: name.to_owned(),
            });
        };
        Ok((index, &self.entities[index as usize]))
    }

    /// Handle of the entity registered under `name`, whatever its kind.
    pub fn handle(&self, name: &str) -> Result<Handle, Error> {
        let (index, entity) = self.lookup(name)?;
        Ok(match entity {
            Entity::Point(_) => Handle::Point(PointHandle(index)),
            Entity::Line(_) => Handle::Line(LineHandle(index)),
            Entity::Circle(_) => Handle::Circle(CircleHandle(index)),
        })
    }

    /// Handle of the point registered under `name`.
    pub fn point(&self, name: &str) -> Result<PointHandle, Error> {
        match self.handle(name)? {
            Handle::Point(p) => Ok(p),
            other => Err(Error::WrongKind {
                name: name.to_owned(),
                expected: EntityKind::Point,
                found: kind_of(other),
            }),
        }
    }

    /// Handle of the line registered under `name`.
    pub fn line(&self, name: &str) -> Result<LineHandle, Error> {
        match self.handle(name)? {
            Handle::Line(l) => Ok(l),
            other => Err(Error::WrongKind {
                name: name.to_owned(),
                expected: EntityKind::Line,
                found: kind_of(other),
            }),
        }
    }

    /// Handle of the circle registered under `name`.
    pub fn circle(&self, name: &str) -> Result<CircleHandle, Error> {
        match self.handle(name)? {
            Handle::Circle(c) => Ok(c),
            other => Err(Error::WrongKind {
                name: name.to_owned(),
                expected: EntityKind::Circle,
                found: kind_of(other),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Resolution

    /// Start a new tick: stale every point cache (O(1), via the generation
    /// counter) and record the renderer's clock for animated points.
    pub fn begin_tick(&mut self, now_ms: f64) {
        self.generation += 1;
        self.now_ms = now_ms;
    }

    /// This point's position in the current tick, or `None` if it does not
    /// exist. Memoized: the underlying math runs at most once per tick no
    /// matter how many entities depend on this point.
    pub fn position(&self, point: PointHandle) -> Option<Vec2> {
        let entity = self.point_entity(point);
        let cached = entity.cache.get();
        if cached.generation == self.generation {
            return cached.value;
        }
        let value = self.calc_position(&entity.kind);
        entity.cache.set(Cached {
            generation: self.generation,
            value,
        });
        value
    }

    /// Shorthand for looking a point up by name and resolving it.
    pub fn position_of(&self, name: &str) -> Result<Option<Vec2>, Error> {
        Ok(self.position(self.point(name)?))
    }

    /// Both endpoint positions of this line, or `None` if either defining
    /// point does not exist this tick.
    pub fn line_geometry(&self, line: LineHandle) -> Option<LineGeometry> {
        let entity = self.line_entity(line);
        Some(LineGeometry {
            point1: self.position(entity.point1)?,
            point2: self.position(entity.point2)?,
            extent: entity.extent,
        })
    }

    /// Center and radius of this circle, or `None` if either defining point
    /// does not exist this tick.
    pub fn circle_geometry(&self, circle: CircleHandle) -> Option<CircleGeometry> {
        let entity = self.circle_entity(circle);
        let center = self.position(entity.center)?;
        let edge = self.position(entity.edge)?;
        Some(CircleGeometry {
            center,
            radius: center.euclidean_distance(edge),
        })
    }

    fn calc_position(&self, kind: &PointKind) -> Option<Vec2> {
        match kind {
            PointKind::Free(FreeValue::Fixed(position)) => Some(*position),
            PointKind::Free(FreeValue::Animated(f)) => Some(f(self.now_ms)),
            PointKind::LineLine { line1, line2 } => {
                let a = self.line_entity(*line1);
                let b = self.line_entity(*line2);
                intersect::line_line(
                    self.position(a.point1)?,
                    self.position(a.point2)?,
                    self.position(b.point1)?,
                    self.position(b.point2)?,
                )
            }
            PointKind::LineCircle {
                line,
                circle,
                toggle,
            } => {
                let l = self.line_entity(*line);
                let CircleGeometry { center, radius } = self.circle_geometry(*circle)?;
                intersect::line_circle(
                    self.position(l.point1)?,
                    self.position(l.point2)?,
                    center,
                    radius,
                    *toggle,
                )
            }
            PointKind::CircleCircle {
                circle1,
                circle2,
                toggle,
            } => {
                let g1 = self.circle_geometry(*circle1)?;
                let g2 = self.circle_geometry(*circle2)?;
                intersect::circle_circle(g1.center, g1.radius, g2.center, g2.radius, *toggle)
            }
        }
    }

    fn point_entity(&self, handle: PointHandle) -> &PointEntity {
        match &self.entities[handle.0 as usize] {
            Entity::Point(p) => p,
            _ => unreachable!("point handles only ever index point entities"),
        }
    }

    fn line_entity(&self, handle: LineHandle) -> &LineEntity {
        match &self.entities[handle.0 as usize] {
            Entity::Line(l) => l,
            _ => unreachable!("line handles only ever index line entities"),
        }
    }

    fn circle_entity(&self, handle: CircleHandle) -> &CircleEntity {
        match &self.entities[handle.0 as usize] {
            Entity::Circle(c) => c,
            _ => unreachable!("circle handles only ever index circle entities"),
        }
    }

    // ------------------------------------------------------------------
    // Drawing

    /// Run one frame: begin a tick at the renderer's clock, then hand every
    /// visible entity that exists this tick to the renderer, in insertion
    /// order. Entities whose geometry does not exist are skipped silently.
    pub fn render<R: Renderer>(&mut self, now_ms: f64, renderer: &mut R) {
        self.begin_tick(now_ms);
        for (name, &index) in &self.names {
            let entity = &self.entities[index as usize];
            let appearance = entity.appearance();
            if !(self.intermediates_visible || appearance.visible) {
                continue;
            }
            let style = appearance.style.unwrap_or(self.default_style);
            match entity {
                Entity::Point(_) => {
                    if let Some(position) = self.position(PointHandle(index)) {
                        renderer.draw_point(name, &RenderedPoint { position, style });
                    }
                }
                Entity::Line(_) => {
                    if let Some(geometry) = self.line_geometry(LineHandle(index)) {
                        renderer.draw_line(
                            name,
                            &RenderedLine {
                                point1: geometry.point1,
                                point2: geometry.point2,
                                extent: geometry.extent,
                                style,
                            },
                        );
                    }
                }
                Entity::Circle(_) => {
                    if let Some(geometry) = self.circle_geometry(CircleHandle(index)) {
                        renderer.draw_circle(
                            name,
                            &RenderedCircle {
                                center: geometry.center,
                                radius: geometry.radius,
                                style,
                            },
                        );
                    }
                }
            }
        }
    }
}

fn kind_of(handle: Handle) -> EntityKind {
    match handle {
        Handle::Point(_) => EntityKind::Point,
        Handle::Line(_) => EntityKind::Line,
        Handle::Circle(_) => EntityKind::Circle,
    }
}
