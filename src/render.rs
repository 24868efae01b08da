use crate::{
    datatypes::{Extent, Style},
    vector::Vec2,
};

/// A point with its geometry resolved, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedPoint {
    /// Where the point is this tick.
    pub position: Vec2,
    /// How to draw it. The engine never interprets this.
    pub style: Style,
}

/// A line with both endpoints resolved, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedLine {
    /// First defining point.
    pub point1: Vec2,
    /// Second defining point.
    pub point2: Vec2,
    /// Bounded segment or infinite line.
    pub extent: Extent,
    /// How to draw it.
    pub style: Style,
}

/// A circle with center and radius resolved, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedCircle {
    /// Center of the circle.
    pub center: Vec2,
    /// Radius, derived from the center and edge points.
    pub radius: f64,
    /// How to draw it.
    pub style: Style,
}

/// What the engine needs from the host's drawing layer.
///
/// The host owns the canvas, the animation loop, and the clock. Once per
/// frame it calls [`Construction::render`](crate::Construction::render) with
/// its monotonically increasing millisecond counter, and the engine calls
/// back here for every visible entity whose geometry exists that tick.
pub trait Renderer {
    /// Draw one point.
    fn draw_point(&mut self, name: &str, point: &RenderedPoint);
    /// Draw one line.
    fn draw_line(&mut self, name: &str, line: &RenderedLine);
    /// Draw one circle.
    fn draw_circle(&mut self, name: &str, circle: &RenderedCircle);
}
