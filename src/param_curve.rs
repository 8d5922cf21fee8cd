// Copyright 2024 the fontgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits for curves parametrized by a scalar.

use core::ops::Range;

use arrayvec::ArrayVec;

use crate::Point;

/// The maximum number of extrema that can be reported in the `ParamCurveExtrema` trait.
///
/// This is 4 to accommodate cubic Béziers, two per axis.
pub const MAX_EXTREMA: usize = 4;

/// Selects which derivative zeros count as extrema.
///
/// The names follow the type-design convention: a *horizontal* extremum is
/// where the tangent is horizontal, i.e. the topmost or bottommost point of
/// a bowl, found from the zeros of the y derivative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axes {
    /// Zeros of the y derivative (horizontal tangents).
    #[default]
    Horizontal,
    /// Zeros of the x derivative (vertical tangents).
    Vertical,
    /// Both of the above, horizontal ones first.
    Both,
}

impl Axes {
    /// Does this selection include horizontal tangents?
    #[inline]
    pub fn horizontal(self) -> bool {
        matches!(self, Axes::Horizontal | Axes::Both)
    }

    /// Does this selection include vertical tangents?
    #[inline]
    pub fn vertical(self) -> bool {
        matches!(self, Axes::Vertical | Axes::Both)
    }
}

/// A curve parametrized by a scalar.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// Get a subsegment of the curve for the given parameter range.
    ///
    /// The range may be reversed, yielding a reversed subsegment.
    fn subsegment(&self, range: Range<f64>) -> Self;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A parametrized curve that reports its extrema.
pub trait ParamCurveExtrema: ParamCurve {
    /// Compute the parameter values where the selected derivatives vanish.
    ///
    /// Roots are kept when they lie in the open interval (0, 1), or in the
    /// closed interval [0, 1] when `include_endpoints` is set. Roots for the
    /// horizontal axis are listed before roots for the vertical axis.
    fn extrema_by(&self, axes: Axes, include_endpoints: bool) -> ArrayVec<f64, MAX_EXTREMA>;

    /// Compute the extrema in both axes, strictly inside the curve.
    ///
    /// The result is sorted in increasing order.
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = self.extrema_by(Axes::Both, false);
        result.sort_by(f64::total_cmp);
        result
    }
}

/// Keep a root if it lies in (0, 1), or in [0, 1] when endpoints count.
#[inline]
pub(crate) fn in_unit_interval(t: f64, include_endpoints: bool) -> bool {
    if include_endpoints {
        (0.0..=1.0).contains(&t)
    } else {
        t > 0.0 && t < 1.0
    }
}
