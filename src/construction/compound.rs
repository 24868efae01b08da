//! Compound constructors.
//!
//! Each expands, at build time, into a fixed sequence of primitive additions
//! under auxiliary names like `"{name}#c1"`. The auxiliaries are first-class
//! registry members: they resolve, they count for duplicate-name checks, and
//! they show up when the construction draws intermediates. If any step of a
//! compound fails to exist geometrically, everything downstream of it simply
//! resolves to `None`.

use super::{AUX_SEPARATOR, Construction};
use crate::datatypes::{Appearance, Extent};

fn aux(name: &str, suffix: &str) -> String {
    format!("{name}{AUX_SEPARATOR}{suffix}")
}

impl Construction {
    /// Add the perpendicular bisector of the segment `point1`-`point2`:
    /// a circle around each point through the other, then the line through
    /// their two mutual intersections.
    pub fn add_perpendicular_bisector(
        &mut self,
        name: &str,
        point1: &str,
        point2: &str,
        appearance: Appearance,
    ) -> &mut Self {
        if self.user_name_ok(name) {
            self.perpendicular_bisector_impl(name, point1, point2, appearance);
        }
        self
    }

    /// Add the midpoint of `point1` and `point2`: where the line through
    /// them crosses their perpendicular bisector.
    pub fn add_midpoint(
        &mut self,
        name: &str,
        point1: &str,
        point2: &str,
        appearance: Appearance,
    ) -> &mut Self {
        if !self.user_name_ok(name) {
            return self;
        }
        let l = aux(name, "l");
        let pb = aux(name, "pb");
        self.line_impl(&l, point1, point2, Extent::Infinite, Appearance::hidden());
        self.perpendicular_bisector_impl(&pb, point1, point2, Appearance::hidden());
        self.intersection_impl(name, &l, &pb, false, appearance);
        self
    }

    /// Add the circumcenter of three points: where the perpendicular
    /// bisectors of two of the sides cross. Does not exist when the three
    /// points are collinear.
    pub fn add_circumcenter(
        &mut self,
        name: &str,
        point1: &str,
        point2: &str,
        point3: &str,
        appearance: Appearance,
    ) -> &mut Self {
        if self.user_name_ok(name) {
            self.circumcenter_impl(name, point1, point2, point3, appearance);
        }
        self
    }

    /// Add the circle through three points: centered on their circumcenter,
    /// with `point1` on its edge.
    pub fn add_circle_through_points(
        &mut self,
        name: &str,
        point1: &str,
        point2: &str,
        point3: &str,
        appearance: Appearance,
    ) -> &mut Self {
        if !self.user_name_ok(name) {
            return self;
        }
        let cc = aux(name, "cc");
        self.circumcenter_impl(&cc, point1, point2, point3, Appearance::hidden());
        self.circle_impl(name, &cc, point1, appearance);
        self
    }

    /// Add the line through `point` perpendicular to `line`.
    ///
    /// `point_on_line` must name a point lying on `line`; a circle around
    /// `point` through it cuts the line in two spots symmetric about the
    /// foot of the perpendicular, and equal circles around those meet on
    /// the sought line.
    pub fn add_erected_perpendicular(
        &mut self,
        name: &str,
        point: &str,
        line: &str,
        point_on_line: &str,
        appearance: Appearance,
    ) -> &mut Self {
        if !self.user_name_ok(name) {
            return self;
        }
        let c1 = aux(name, "c1");
        let p1 = aux(name, "p1");
        let p2 = aux(name, "p2");
        let c2 = aux(name, "c2");
        let c3 = aux(name, "c3");
        let p3 = aux(name, "p3");
        self.circle_impl(&c1, point, point_on_line, Appearance::hidden());
        self.intersection_impl(&p1, line, &c1, false, Appearance::hidden());
        self.intersection_impl(&p2, line, &c1, true, Appearance::hidden());
        self.circle_impl(&c2, &p1, &p2, Appearance::hidden());
        self.circle_impl(&c3, &p2, &p1, Appearance::hidden());
        self.intersection_impl(&p3, &c2, &c3, false, Appearance::hidden());
        self.line_impl(name, &p3, point, Extent::Infinite, appearance);
        self
    }

    fn perpendicular_bisector_impl(
        &mut self,
        name: &str,
        point1: &str,
        point2: &str,
        appearance: Appearance,
    ) {
        let c1 = aux(name, "c1");
        let c2 = aux(name, "c2");
        let p1 = aux(name, "p1");
        let p2 = aux(name, "p2");
        self.circle_impl(&c1, point1, point2, Appearance::hidden());
        self.circle_impl(&c2, point2, point1, Appearance::hidden());
        self.intersection_impl(&p1, &c1, &c2, false, Appearance::hidden());
        self.intersection_impl(&p2, &c1, &c2, true, Appearance::hidden());
        self.line_impl(name, &p1, &p2, Extent::Infinite, appearance);
    }

    fn circumcenter_impl(
        &mut self,
        name: &str,
        point1: &str,
        point2: &str,
        point3: &str,
        appearance: Appearance,
    ) {
        let pb1 = aux(name, "pb1");
        let pb2 = aux(name, "pb2");
        self.perpendicular_bisector_impl(&pb1, point1, point2, Appearance::hidden());
        self.perpendicular_bisector_impl(&pb2, point1, point3, Appearance::hidden());
        self.intersection_impl(name, &pb1, &pb2, false, appearance);
    }
}
