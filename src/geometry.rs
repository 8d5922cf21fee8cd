// Copyright 2024 the fontgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point and triangle geometry helpers.
//!
//! The handle triangle of a cubic segment is formed by the start point
//! `p0`, the end point `p3` and the intersection `I` of the lines
//! `p0 p1` and `p3 p2`:
//!
//! ```text
//!            I
//!           / \
//!       a  /   \  c
//!         /     \
//!     p0 *-------* p3
//!            b
//! ```
//!
//! `alpha` is the angle at `p0`, `gamma` the angle at `p3` and `beta`
//! the angle at `I`.

use core::f64::consts::PI;

use crate::{GeometryError, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Below this magnitude, the sine of the angle at the handle intersection
/// is considered zero.
const SINE_EPSILON: f64 = 1e-12;

/// Whether a measurement is reported as is or rounded to the nearest integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Keep the full floating point value.
    #[default]
    Exact,
    /// Round to the nearest integer, halfway cases away from zero.
    Nearest,
}

impl Rounding {
    /// Apply this rounding mode to a value.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Exact => value,
            Rounding::Nearest => value.round(),
        }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p0: Point, p1: Point, rounding: Rounding) -> f64 {
    rounding.apply(p0.distance(p1))
}

/// Angle of the direction from `p0` to `p1`, in radians.
#[inline]
pub fn angle(p0: Point, p1: Point, rounding: Rounding) -> f64 {
    rounding.apply((p1 - p0).atan2())
}

/// The point halfway between two points.
#[inline]
pub fn midpoint(p0: Point, p1: Point, rounding: Rounding) -> Point {
    let mid = p0.midpoint(p1);
    match rounding {
        Rounding::Exact => mid,
        Rounding::Nearest => mid.round(),
    }
}

/// Twice the signed area of the triangle `a b c`.
///
/// The result is positive when `c` lies to the left of the directed line
/// from `a` to `b` (in a y-up coordinate system).
#[inline]
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - a)
}

/// Is point `c` on the left of the directed line `a b`?
#[inline]
pub fn is_on_left(a: Point, b: Point, c: Point) -> bool {
    triangle_area(a, b, c) > 0.0
}

/// Is point `c` on the right of the directed line `a b`?
#[inline]
pub fn is_on_right(a: Point, b: Point, c: Point) -> bool {
    triangle_area(a, b, c) < 0.0
}

/// Is point `c` exactly on the line through `a` and `b`?
///
/// This is an exact test: the smallest rounding error in the inputs makes
/// nearly collinear points report `false`.
#[inline]
pub fn is_collinear(a: Point, b: Point, c: Point) -> bool {
    triangle_area(a, b, c) == 0.0
}

/// Coefficients `(A, B, C)` of the line `A x + B y = C` through two points.
fn line_coefficients(p0: Point, p1: Point) -> (f64, f64, f64) {
    let a = p0.y - p1.y;
    let b = p1.x - p0.x;
    let c = p0.x * p1.y - p1.x * p0.y;
    (a, b, -c)
}

/// Intersection of the infinite line through `p0` and `p1` with the infinite
/// line through `p3` and `p2`.
///
/// The argument order matches the control points of a cubic segment, so
/// `line_intersect(p0, p1, p2, p3)` extends both handles until they meet.
///
/// Returns `None` only when the determinant is exactly zero, which happens
/// for parallel or coincident lines and for zero-length input segments.
/// Nearly parallel lines produce a very distant intersection instead.
///
/// # Examples
///
/// ```
/// use fontgeom::{line_intersect, Point};
///
/// let hit = line_intersect(
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(-1.0, 5.0),
///     Point::new(1.0, 5.0),
/// );
/// assert_eq!(hit, Some(Point::new(0.0, 5.0)));
/// ```
pub fn line_intersect(p0: Point, p1: Point, p2: Point, p3: Point) -> Option<Point> {
    let l1 = line_coefficients(p0, p1);
    let l2 = line_coefficients(p3, p2);
    let d = l1.0 * l2.1 - l1.1 * l2.0;
    if d == 0.0 {
        return None;
    }
    let dx = l1.2 * l2.1 - l1.1 * l2.2;
    let dy = l1.0 * l2.2 - l1.2 * l2.0;
    Some(Point::new(dx / d, dy / d))
}

/// The angles `(alpha, beta, gamma)` of the handle triangle of a segment.
///
/// See the [module documentation](self) for the naming.
pub fn triangle_angles(p0: Point, p1: Point, p2: Point, p3: Point) -> (f64, f64, f64) {
    let alpha = (p3 - p0).atan2() - (p1 - p0).atan2();
    // Measured from the y axis, hence the swapped arguments.
    let gamma = (p3.x - p0.x).atan2(p3.y - p0.y) - (p3.x - p2.x).atan2(p3.y - p2.y);
    let beta = PI - alpha - gamma;
    (alpha, beta, gamma)
}

/// The side lengths `(a, b, c)` of the handle triangle of a segment.
///
/// `b` is the chord from `p0` to `p3`; `a` and `c` are derived from it with
/// the law of sines.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateTriangle`] when the handles are
/// collinear with the chord, so that the angle at the handle intersection
/// has a zero sine.
pub fn triangle_sides(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
) -> Result<(f64, f64, f64), GeometryError> {
    let (alpha, beta, gamma) = triangle_angles(p0, p1, p2, p3);
    let b = p0.distance(p3);
    let sin_beta = beta.sin();
    if sin_beta.abs() < SINE_EPSILON {
        log::warn!(
            "degenerate handle triangle: alpha {:.4}°, beta {:.4}°, gamma {:.4}°",
            alpha.to_degrees(),
            beta.to_degrees(),
            gamma.to_degrees()
        );
        return Err(GeometryError::DegenerateTriangle { alpha, beta, gamma });
    }
    let a = b * alpha.sin() / sin_beta;
    let c = b * gamma.sin() / sin_beta;
    Ok((a, b, c))
}

/// Dot product of the unit vectors from `p1` to `p2` and from `p1` to `p3`.
///
/// This is the cosine of the angle at `p1`. It is NaN when either vector
/// has zero length.
pub fn unit_dot(p1: Point, p2: Point, p3: Point) -> f64 {
    (p2 - p1).normalize().dot((p3 - p1).normalize())
}

/// Do both handles of a segment point towards `i`, within ±90°?
///
/// `i` is usually the handle intersection found by [`line_intersect`].
pub fn same_direction(p0: Point, p1: Point, p2: Point, p3: Point, i: Point) -> bool {
    !(unit_dot(p0, p1, i) < 0.0 || unit_dot(p3, p2, i) < 0.0)
}
