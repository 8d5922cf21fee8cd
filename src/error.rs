// Copyright 2024 the fontgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for curve construction and triangle geometry.

use thiserror::Error;

use crate::Point;

/// Errors that can occur while building curves or measuring handle triangles.
///
/// Failing to find a parameter for a query point is not an error; those
/// searches return `None`.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// A segment was given with a point count other than 2 (line) or 4 (cubic).
    #[error("a segment needs 2 or 4 points, got {count}")]
    InvalidSegment {
        /// Number of points supplied.
        count: usize,
    },

    /// A segment does not start where the previous one ended.
    #[error("segment {index} starts at {found} but the previous segment ends at {expected}")]
    Discontinuous {
        /// Index the segment would have had in the curve.
        index: usize,
        /// End point of the previous segment.
        expected: Point,
        /// Start point of the rejected segment.
        found: Point,
    },

    /// The raster spacing is zero, negative or not finite.
    #[error("raster length must be positive and finite, got {raster_length}")]
    InvalidRasterLength {
        /// The rejected spacing.
        raster_length: f64,
    },

    /// The handle triangle has a zero angle sine, so its sides are undefined.
    ///
    /// This happens when the handles are collinear with the chord.
    #[error("degenerate handle triangle (alpha: {alpha}, beta: {beta}, gamma: {gamma})")]
    DegenerateTriangle {
        /// Angle at the start point, in radians.
        alpha: f64,
        /// Angle at the handle intersection, in radians.
        beta: f64,
        /// Angle at the end point, in radians.
        gamma: f64,
    },
}
