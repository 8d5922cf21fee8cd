// Copyright 2024 the fontgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use alloc::vec::Vec;
use core::ops::Range;

use arrayvec::ArrayVec;

use crate::common::QUADRATIC_EPSILON;
use crate::param_curve::in_unit_interval;
use crate::{Axes, CubicBez, ParamCurve, ParamCurveExtrema, Point, Vec2, MAX_EXTREMA};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start point.
    pub p0: Point,
    /// The off-curve point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
}

/// The power basis form of a quadratic Bézier.
///
/// The position at `t` is `a t² + b t + c`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadParams {
    /// Quadratic coefficient.
    pub a: Vec2,
    /// Linear coefficient.
    pub b: Vec2,
    /// Constant term, the start point.
    pub c: Point,
}

impl QuadParams {
    /// Evaluate the polynomial at `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        Point::new(
            self.a.x * t2 + self.b.x * t + self.c.x,
            self.a.y * t2 + self.b.y * t + self.c.y,
        )
    }
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Raise the order by 1.
    ///
    /// Returns a cubic Bézier segment that exactly represents this quadratic.
    pub fn raise(&self) -> CubicBez {
        CubicBez::new(
            self.p0,
            self.p0 + (2.0 / 3.0) * (self.p1 - self.p0),
            self.p2 + (2.0 / 3.0) * (self.p1 - self.p2),
            self.p2,
        )
    }

    /// The power basis coefficients of this curve.
    pub fn parameters(&self) -> QuadParams {
        let b = 2.0 * (self.p1 - self.p0);
        let a = self.p2 - self.p0 - b;
        QuadParams { a, b, c: self.p0 }
    }

    /// Evaluate the curve at each parameter, in order.
    pub fn sample(&self, ts: impl IntoIterator<Item = f64>) -> Vec<Point> {
        let params = self.parameters();
        ts.into_iter().map(|t| params.eval(t)).collect()
    }
}

impl ParamCurve for QuadBez {
    /// Evaluate the curve at parameter `t`, using the power basis.
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.parameters().eval(t)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p2
    }

    fn subsegment(&self, range: Range<f64>) -> QuadBez {
        let (t0, t1) = (range.start, range.end);
        let p0 = self.eval(t0);
        let p2 = self.eval(t1);
        let p1 = p0 + (self.p1 - self.p0).lerp(self.p2 - self.p1, t0) * (t1 - t0);
        QuadBez { p0, p1, p2 }
    }
}

impl ParamCurveExtrema for QuadBez {
    /// The derivative `2a t + b` is linear, so each axis has at most one root.
    fn extrema_by(&self, axes: Axes, include_endpoints: bool) -> ArrayVec<f64, MAX_EXTREMA> {
        fn one_coord(result: &mut ArrayVec<f64, MAX_EXTREMA>, a: f64, b: f64, include: bool) {
            let slope = 2.0 * a;
            if slope.abs() < QUADRATIC_EPSILON {
                return;
            }
            let t = -b / slope;
            if in_unit_interval(t, include) {
                result.push(t);
            }
        }
        let params = self.parameters();
        let mut result = ArrayVec::new();
        if axes.horizontal() {
            one_coord(&mut result, params.a.y, params.b.y, include_endpoints);
        }
        if axes.vertical() {
            one_coord(&mut result, params.a.x, params.b.x, include_endpoints);
        }
        result
    }
}
