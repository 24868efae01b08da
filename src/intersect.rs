//! Closed-form intersection resolvers.
//!
//! Each returns `None` when the intersection does not exist, including every
//! numeric degeneracy (parallel lines, concentric circles, a zero-length
//! direction). Exact zero tests below are the degeneracy conditions
//! themselves, not tolerance checks.
#![allow(clippy::float_cmp)]

use crate::vector::Vec2;

/// Intersection of the line through `p1`,`p2` with the line through
/// `p3`,`p4`. Parallel or coincident lines have no unique intersection.
pub(crate) fn line_line(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let den = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if den == 0.0 {
        return None;
    }
    let num1 = p1.cross_2d(&p2);
    let num2 = p3.cross_2d(&p4);
    Some(Vec2::new(
        (num1 * (p3.x - p4.x) - (p1.x - p2.x) * num2) / den,
        (num1 * (p3.y - p4.y) - (p1.y - p2.y) * num2) / den,
    ))
}

/// Intersection of the line through `p1`,`p2` with the circle around
/// `center` of the given `radius`.
///
/// In general there are two solutions; `toggle` picks between them. The
/// branch selection deliberately uses `sign(d.y)` in the x term and
/// `|d.y|` in the y term (with `sign(0)` taken as `+1`), so which physical
/// point `toggle == false` names is stable, including for vertical and
/// horizontal lines. Tangency falls out of the same formula with both
/// toggles coinciding.
pub(crate) fn line_circle(p1: Vec2, p2: Vec2, center: Vec2, radius: f64, toggle: bool) -> Option<Vec2> {
    // Work in the circle's local frame.
    let p1 = p1 - center;
    let p2 = p2 - center;
    let d = p2 - p1;
    let dr_sq = d.magnitude_squared();
    if dr_sq == 0.0 {
        // Both defining points coincide, so there is no line to intersect.
        return None;
    }
    let det = p1.cross_2d(&p2);
    let discriminant = radius * radius * dr_sq - det * det;
    if discriminant < 0.0 {
        return None;
    }
    let disc_sqrt = libm::sqrt(discriminant);
    let sgn = if d.y < 0.0 { -1.0 } else { 1.0 };
    let branch = if toggle { -1.0 } else { 1.0 };
    Some(
        center
            + Vec2::new(
                (det * d.y + branch * sgn * d.x * disc_sqrt) / dr_sq,
                (-det * d.x + branch * d.y.abs() * disc_sqrt) / dr_sq,
            ),
    )
}

/// Intersection of the circle around `c1` of radius `r1` with the circle
/// around `c2` of radius `r2`.
///
/// The two solutions are mirror images across the line joining the centers;
/// `toggle == true` takes the offset on the opposite side. Concentric
/// circles (`c1 == c2`) never intersect at a point, even with equal radii.
pub(crate) fn circle_circle(c1: Vec2, r1: f64, c2: Vec2, r2: f64, toggle: bool) -> Option<Vec2> {
    let d = (c1 - c2).magnitude();
    if d == 0.0 {
        return None;
    }
    // Distance from c1 to the radical line, along the center axis.
    let l = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h_sq = r1 * r1 - l * l;
    if h_sq < 0.0 {
        return None;
    }
    let mut h = libm::sqrt(h_sq);
    if toggle {
        h = -h;
    }
    let along = c2 - c1;
    let base = c1 + along * (l / d);
    let offset = along * (h / d);
    // Rotate the offset a quarter turn off the center line.
    Some(base + Vec2::new(offset.y, -offset.x))
}
