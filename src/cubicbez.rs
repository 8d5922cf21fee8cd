// Copyright 2024 the fontgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use alloc::vec::Vec;
use core::ops::Range;

use arrayvec::ArrayVec;

use crate::common::{solve_cubic, solve_quadratic};
use crate::param_curve::in_unit_interval;
use crate::{Axes, ParamCurve, ParamCurveExtrema, Point, Vec2, MAX_EXTREMA};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Number of polyline pieces used to estimate the length of a cubic.
pub const DEFAULT_LENGTH_PRECISION: usize = 10;

/// Inflections are only reported strictly between these parameters.
const INFLECTION_MIN: f64 = 0.001;
const INFLECTION_MAX: f64 = 0.99;

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The handle of the start point.
    pub p1: Point,
    /// The handle of the end point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

/// The power basis form of a cubic Bézier.
///
/// The position at `t` is `a t³ + b t² + c t + d`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicParams {
    /// Cubic coefficient.
    pub a: Vec2,
    /// Quadratic coefficient.
    pub b: Vec2,
    /// Linear coefficient.
    pub c: Vec2,
    /// Constant term, the start point.
    pub d: Point,
}

impl CubicParams {
    /// Evaluate the polynomial at `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        Point::new(
            self.a.x * t3 + self.b.x * t2 + self.c.x * t + self.d.x,
            self.a.y * t3 + self.b.y * t2 + self.c.y * t + self.d.y,
        )
    }

    /// Parameters where the x coordinate equals `x`, in no particular range.
    #[inline]
    pub fn solve_x(&self, x: f64) -> ArrayVec<f64, 3> {
        solve_cubic(self.d.x - x, self.c.x, self.b.x, self.a.x)
    }

    /// Parameters where the y coordinate equals `y`, in no particular range.
    #[inline]
    pub fn solve_y(&self, y: f64) -> ArrayVec<f64, 3> {
        solve_cubic(self.d.y - y, self.c.y, self.b.y, self.a.y)
    }
}

/// Bernstein blend of two points; exact at `t == 0` and `t == 1`.
#[inline]
fn blend(a: Point, b: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    Point::new(a.x * mt + b.x * t, a.y * mt + b.y * t)
}

/// Point on the quadratic `a b c`; exact at `t == 0` and `t == 1`.
#[inline]
fn quad_blend(a: Point, b: Point, c: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    Point::new(
        a.x * mt * mt + b.x * 2.0 * t * mt + c.x * t * t,
        a.y * mt * mt + b.y * 2.0 * t * mt + c.y * t * t,
    )
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// A straight cubic from `p0` to `p3`, with handles at one and two thirds
    /// of the chord.
    #[inline]
    pub fn line<P: Into<Point>>(p0: P, p3: P) -> CubicBez {
        let (p0, p3) = (p0.into(), p3.into());
        CubicBez {
            p0,
            p1: p0.lerp(p3, 1.0 / 3.0),
            p2: p0.lerp(p3, 2.0 / 3.0),
            p3,
        }
    }

    /// Are both handles retracted onto their on-curve points?
    #[inline]
    pub fn is_line_like(&self) -> bool {
        self.p0 == self.p1 && self.p2 == self.p3
    }

    /// The power basis coefficients of this curve.
    pub fn parameters(&self) -> CubicParams {
        let c = 3.0 * (self.p1 - self.p0);
        let b = 3.0 * (self.p2 - self.p1) - c;
        let a = self.p3 - self.p0 - c - b;
        CubicParams { a, b, c, d: self.p0 }
    }

    /// Evaluate the curve at each parameter, in order.
    pub fn sample(&self, ts: impl IntoIterator<Item = f64>) -> Vec<Point> {
        ts.into_iter().map(|t| self.eval(t)).collect()
    }

    /// Parameters where the selected derivatives vanish.
    ///
    /// This is [`ParamCurveExtrema::extrema_by`] with the power basis
    /// coefficients already at hand.
    pub(crate) fn extrema_with(
        params: &CubicParams,
        axes: Axes,
        include_endpoints: bool,
    ) -> ArrayVec<f64, MAX_EXTREMA> {
        // d/dt (a t³ + b t² + c t + d) = 3a t² + 2b t + c
        fn one_coord(
            result: &mut ArrayVec<f64, MAX_EXTREMA>,
            a: f64,
            b: f64,
            c: f64,
            include_endpoints: bool,
        ) {
            for t in solve_quadratic(c, 2.0 * b, 3.0 * a) {
                if in_unit_interval(t, include_endpoints) {
                    result.push(t);
                }
            }
        }
        let mut result = ArrayVec::new();
        if axes.horizontal() {
            one_coord(&mut result, params.a.y, params.b.y, params.c.y, include_endpoints);
        }
        if axes.vertical() {
            one_coord(&mut result, params.a.x, params.b.x, params.c.x, include_endpoints);
        }
        result
    }

    /// Parameters where the curvature changes sign.
    ///
    /// Only inflections inside (0.001, 0.99) are reported, so that the
    /// points where a curve meets its neighbour are not picked up.
    pub fn inflections(&self) -> ArrayVec<f64, 2> {
        let a = self.p1 - self.p0;
        let b = self.p2 - self.p1 - a;
        let c = self.p3 - self.p2 - a - 2.0 * b;

        // The cross product of the first and second derivatives is
        // proportional to c0 + c1 t + c2 t².
        let c0 = a.cross(b);
        let c1 = a.cross(c);
        let c2 = b.cross(c);

        let mut result = ArrayVec::new();
        let mut push = |t: f64| {
            if t > INFLECTION_MIN && t < INFLECTION_MAX {
                result.push(t);
            }
        };
        if c2.abs() > 1e-5 {
            let disc = c1 * c1 - 4.0 * c0 * c2;
            let c2 = 2.0 * c2;
            if disc.abs() < 1e-6 {
                push(-c1 / c2);
            } else if disc > 0.0 {
                let disc = disc.sqrt();
                push((-c1 - disc) / c2);
                push((-c1 + disc) / c2);
            }
        } else if c1 != 0.0 {
            push(-c0 / c1);
        }
        result
    }

    /// Estimate the arc length by summing a polyline through `precision + 1`
    /// evenly spaced samples.
    ///
    /// This underestimates the true length of curved segments; the error
    /// shrinks as `precision` grows.
    pub fn estimate_length(&self, precision: usize) -> f64 {
        let precision = precision.max(1);
        let step = 1.0 / precision as f64;
        let mut length = 0.0;
        let mut last = self.p0;
        for i in 1..=precision {
            let p = self.eval(i as f64 * step);
            length += last.distance(p);
            last = p;
        }
        length
    }
}

impl ParamCurve for CubicBez {
    /// Evaluate the curve at parameter `t`.
    ///
    /// The ends are returned exactly, and `t == 0.5` is computed by
    /// repeated midpoint bisection of the control polygon, which keeps
    /// symmetric curves symmetric.
    fn eval(&self, t: f64) -> Point {
        if t == 0.0 {
            return self.p0;
        }
        if t == 1.0 {
            return self.p3;
        }
        if t == 0.5 {
            let a = self.p0.midpoint(self.p1);
            let b = self.p1.midpoint(self.p2);
            let c = self.p2.midpoint(self.p3);
            let d = a.midpoint(b);
            let e = b.midpoint(c);
            return d.midpoint(e);
        }
        self.parameters().eval(t)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }

    /// The part of the curve between `range.start` and `range.end`.
    ///
    /// The control points are found by de Casteljau interpolation at both
    /// parameters. The result starts exactly at `eval(range.start)` for
    /// `range.start` of 0 and ends exactly at `p3` for `range.end` of 1, and
    /// adjacent subsegments share their common end point bit for bit.
    fn subsegment(&self, range: Range<f64>) -> CubicBez {
        let (t0, t1) = (range.start, range.end);
        let q0 = quad_blend(self.p0, self.p1, self.p2, t0);
        let q1 = quad_blend(self.p0, self.p1, self.p2, t1);
        let q2 = quad_blend(self.p1, self.p2, self.p3, t0);
        let q3 = quad_blend(self.p1, self.p2, self.p3, t1);
        CubicBez {
            p0: blend(q0, q2, t0),
            p1: blend(q0, q2, t1),
            p2: blend(q1, q3, t0),
            p3: blend(q1, q3, t1),
        }
    }
}

impl ParamCurveExtrema for CubicBez {
    fn extrema_by(&self, axes: Axes, include_endpoints: bool) -> ArrayVec<f64, MAX_EXTREMA> {
        CubicBez::extrema_with(&self.parameters(), axes, include_endpoints)
    }
}
