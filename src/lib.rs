//! A lazy construction-graph engine for compass-and-straightedge geometry.
//!
//! Declare a named graph of points, lines and circles, each defined purely
//! by ruler-and-compass operations on previously added entities. Positions
//! resolve on demand, are memoized for the current tick, and invalidate in
//! O(1) when the next tick begins, so constructions driven by a moving
//! input point recompute exactly once per frame.
//!
//! ```
//! use straightedge::{Appearance, Construction, Vec2};
//!
//! let mut c = Construction::new();
//! c.add_point("a", Vec2::new(0.0, 0.0), Appearance::hidden())
//!     .add_point("b", Vec2::new(2.0, 0.0), Appearance::hidden())
//!     .add_midpoint("m", "a", "b", Appearance::visible());
//! let m = c.position_of("m").unwrap().unwrap();
//! assert_eq!(m, Vec2::new(1.0, 0.0));
//! ```

pub use crate::construction::{CircleGeometry, Construction, LineGeometry};
pub use crate::datatypes::{Appearance, EntityKind, Extent, Style};
pub use crate::error::Error;
pub use crate::id::{CircleHandle, Handle, LineHandle, PointHandle};
pub use crate::render::{RenderedCircle, RenderedLine, RenderedPoint, Renderer};
pub use crate::vector::Vec2;
pub use crate::warnings::{Warning, WarningContent};

/// The registry, builder, and resolution engine.
mod construction;
/// Geometric data (points, lines, circles).
mod datatypes;
/// Errors from looking entities up by name.
mod error;
/// Handles of entities in a construction.
mod id;
/// Closed-form intersection math.
mod intersect;
/// The renderer collaborator boundary.
mod render;
mod vector;
/// Diagnostics for misused builder calls.
mod warnings;
