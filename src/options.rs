// Copyright 2024 the fontgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options for building and searching piecewise curves.

use crate::DEFAULT_LENGTH_PRECISION;

/// Default spacing between raster points, in font units.
pub const DEFAULT_RASTER_LENGTH: f64 = 0.25;

/// Upper bound on the raster steps of a single segment.
///
/// Very small raster lengths are capped here instead of allocating an
/// unbounded raster.
pub const MAX_RASTER_STEPS: usize = 1 << 18;

/// How [`PiecewiseCurve::locate`](crate::PiecewiseCurve::locate) finds the
/// parameter for a query point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStrategy {
    /// Walk the raster points of each segment.
    #[default]
    Raster,
    /// Solve the first segment's polynomials for the query coordinates,
    /// walking the raster when that has no unique answer.
    ///
    /// Only valid while the curve is consumed from its start in increasing
    /// parameter order.
    Analytic,
}

/// Options for a [`PiecewiseCurve`](crate::PiecewiseCurve).
///
/// # Examples
///
/// ```
/// use fontgeom::{SearchOptions, SearchStrategy};
///
/// let opts = SearchOptions::default()
///     .with_raster_length(0.5)
///     .with_strategy(SearchStrategy::Analytic);
/// assert_eq!(opts.raster_length, 0.5);
/// assert_eq!(opts.length_precision, 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Target distance between raster points along a segment.
    ///
    /// Must be positive and finite.
    pub raster_length: f64,
    /// Number of polyline pieces used to estimate segment lengths.
    pub length_precision: usize,
    /// Strategy used by `locate` and `split_at_point`.
    pub strategy: SearchStrategy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            raster_length: DEFAULT_RASTER_LENGTH,
            length_precision: DEFAULT_LENGTH_PRECISION,
            strategy: SearchStrategy::Raster,
        }
    }
}

impl SearchOptions {
    /// Builder method for setting the raster spacing.
    #[must_use]
    pub fn with_raster_length(mut self, raster_length: f64) -> Self {
        self.raster_length = raster_length;
        self
    }

    /// Builder method for setting the length estimation precision.
    #[must_use]
    pub fn with_length_precision(mut self, precision: usize) -> Self {
        self.length_precision = precision;
        self
    }

    /// Builder method for setting the search strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
