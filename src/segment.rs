// Copyright 2024 the fontgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A cubic segment with cached derived data.

use alloc::vec;
use alloc::vec::Vec;
use core::cell::OnceCell;

use arrayvec::ArrayVec;

use crate::{
    Axes, CubicBez, CubicParams, ParamCurve, Point, SearchOptions, DEFAULT_LENGTH_PRECISION,
    DEFAULT_RASTER_LENGTH, MAX_EXTREMA, MAX_RASTER_STEPS,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// One cubic Bézier of a [`PiecewiseCurve`](crate::PiecewiseCurve).
///
/// The control points never change after construction, so every derived
/// value (length, raster, extrema, inflections) is computed on first use
/// and kept for the lifetime of the segment.
///
/// The only mutable state is the split cursor used by [`split_at`](Self::split_at).
#[derive(Clone, Debug)]
pub struct CubicSegment {
    curve: CubicBez,
    raster_length: f64,
    length_precision: usize,
    params: OnceCell<CubicParams>,
    length: OnceCell<f64>,
    raster_steps: OnceCell<usize>,
    raster: OnceCell<Vec<Point>>,
    extrema: OnceCell<ArrayVec<f64, MAX_EXTREMA>>,
    extremum_points: OnceCell<ArrayVec<Point, MAX_EXTREMA>>,
    inflections: OnceCell<ArrayVec<f64, 2>>,
    inflection_points: OnceCell<ArrayVec<Point, 2>>,
    split_t: f64,
}

impl CubicSegment {
    /// Create a segment with the default raster spacing and length precision.
    pub fn new(curve: CubicBez) -> CubicSegment {
        CubicSegment::with_raster(curve, DEFAULT_RASTER_LENGTH, DEFAULT_LENGTH_PRECISION)
    }

    /// Create a segment with the raster settings from `options`.
    pub fn with_options(curve: CubicBez, options: &SearchOptions) -> CubicSegment {
        CubicSegment::with_raster(curve, options.raster_length, options.length_precision)
    }

    fn with_raster(curve: CubicBez, raster_length: f64, length_precision: usize) -> CubicSegment {
        CubicSegment {
            curve,
            raster_length,
            length_precision,
            params: OnceCell::new(),
            length: OnceCell::new(),
            raster_steps: OnceCell::new(),
            raster: OnceCell::new(),
            extrema: OnceCell::new(),
            extremum_points: OnceCell::new(),
            inflections: OnceCell::new(),
            inflection_points: OnceCell::new(),
            split_t: 0.0,
        }
    }

    /// The underlying curve.
    #[inline]
    pub fn curve(&self) -> &CubicBez {
        &self.curve
    }

    /// Target distance between raster points.
    #[inline]
    pub fn raster_length(&self) -> f64 {
        self.raster_length
    }

    /// The power basis coefficients of the curve.
    pub fn params(&self) -> &CubicParams {
        self.params.get_or_init(|| self.curve.parameters())
    }

    /// Estimated arc length of the curve.
    pub fn length(&self) -> f64 {
        *self
            .length
            .get_or_init(|| self.curve.estimate_length(self.length_precision))
    }

    /// Number of raster intervals needed to reach the target spacing.
    ///
    /// At most [`MAX_RASTER_STEPS`]; a spacing of zero yields the cap.
    pub fn raster_steps(&self) -> usize {
        *self.raster_steps.get_or_init(|| {
            let steps = (self.length() / self.raster_length).round();
            if steps.is_nan() {
                0
            } else {
                steps.min(MAX_RASTER_STEPS as f64) as usize
            }
        })
    }

    /// Points on the curve, spaced roughly `raster_length` apart.
    ///
    /// Segments that are too short for two raster steps, or whose handles
    /// both sit on their on-curve points, are treated as straight and only
    /// yield their two end points. Otherwise `raster_steps() + 1` points are
    /// sampled at evenly spaced parameters; the first and last are exactly
    /// the end points.
    pub fn raster_points(&self) -> &[Point] {
        self.raster.get_or_init(|| {
            let steps = self.raster_steps();
            if steps < 2 || self.curve.is_line_like() {
                vec![self.curve.p0, self.curve.p3]
            } else {
                let n = steps as f64;
                self.curve.sample((0..=steps).map(|i| i as f64 / n))
            }
        })
    }

    /// Number of intervals between raster points.
    ///
    /// The raster point at index `i` lies at parameter `i / raster_len()`.
    #[inline]
    pub fn raster_len(&self) -> usize {
        self.raster_points().len() - 1
    }

    /// Parameters of the horizontal-tangent extrema, end points included.
    pub fn extrema(&self) -> &[f64] {
        self.extrema
            .get_or_init(|| CubicBez::extrema_with(self.params(), Axes::Horizontal, true))
    }

    /// Points at the horizontal-tangent extrema.
    pub fn extremum_points(&self) -> &[Point] {
        self.extremum_points
            .get_or_init(|| self.extrema().iter().map(|&t| self.curve.eval(t)).collect())
    }

    /// Parameters of the inflections.
    pub fn inflections(&self) -> &[f64] {
        self.inflections.get_or_init(|| self.curve.inflections())
    }

    /// Points at the inflections.
    pub fn inflection_points(&self) -> &[Point] {
        self.inflection_points
            .get_or_init(|| self.inflections().iter().map(|&t| self.curve.eval(t)).collect())
    }

    /// The parameter where the next split starts.
    #[inline]
    pub fn split_cursor(&self) -> f64 {
        self.split_t
    }

    /// Cut off the part of the curve between the split cursor and `t`, and
    /// move the cursor to `t`.
    ///
    /// Walking `t` upwards and finishing with `split_at(1.0)` cuts the curve
    /// into consecutive pieces that together cover it from `p0` to `p3`;
    /// each piece starts exactly where the previous one ended.
    pub fn split_at(&mut self, t: f64) -> CubicBez {
        let piece = self.curve.subsegment(self.split_t..t);
        self.split_t = t;
        piece
    }

    /// Move the split cursor back to the start of the curve.
    #[inline]
    pub fn reset_split(&mut self) {
        self.split_t = 0.0;
    }
}

impl From<CubicBez> for CubicSegment {
    fn from(curve: CubicBez) -> CubicSegment {
        CubicSegment::new(curve)
    }
}

#[cfg(test)]
mod tests {
    use crate::{CubicBez, CubicSegment, ParamCurve, Point, SearchOptions, MAX_RASTER_STEPS};

    fn arch() -> CubicBez {
        CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0))
    }

    #[test]
    fn segment_length_cached() {
        let seg = CubicSegment::new(arch());
        let length = seg.length();
        assert_eq!(length, arch().estimate_length(10));
        assert_eq!(seg.length(), length);
        assert_eq!(seg.raster_steps(), (length / 0.25).round() as usize);
    }

    #[test]
    fn segment_raster() {
        let seg = CubicSegment::new(CubicBez::line((0.0, 0.0), (10.0, 0.0)));
        assert_eq!(seg.raster_steps(), 40);
        let raster = seg.raster_points();
        assert_eq!(raster.len(), 41);
        assert_eq!(seg.raster_len(), 40);
        assert_eq!(raster[0], Point::new(0.0, 0.0));
        assert_eq!(raster[40], Point::new(10.0, 0.0));
        for pair in raster.windows(2) {
            assert!((pair[0].distance(pair[1]) - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn segment_raster_straight() {
        // Too short for two steps.
        let seg = CubicSegment::new(CubicBez::line((0.0, 0.0), (0.3, 0.0)));
        assert_eq!(seg.raster_steps(), 1);
        assert_eq!(seg.raster_points(), [Point::new(0.0, 0.0), Point::new(0.3, 0.0)]);

        // Retracted handles.
        let seg = CubicSegment::new(CubicBez::new((0.0, 0.0), (0.0, 0.0), (50.0, 50.0), (50.0, 50.0)));
        assert!(seg.raster_steps() > 2);
        assert_eq!(seg.raster_points().len(), 2);
        assert_eq!(seg.raster_len(), 1);
    }

    #[test]
    fn segment_raster_options() {
        let opts = SearchOptions::default().with_raster_length(1.0);
        let seg = CubicSegment::with_options(CubicBez::line((0.0, 0.0), (10.0, 0.0)), &opts);
        assert_eq!(seg.raster_length(), 1.0);
        assert_eq!(seg.raster_points().len(), 11);
    }

    #[test]
    fn segment_raster_capped() {
        let curve = CubicBez::new((0.0, 0.0), (0.0, 55.0), (45.0, 100.0), (100.0, 100.0));
        for raster_length in [0.0, 1e-300] {
            let opts = SearchOptions::default().with_raster_length(raster_length);
            let seg = CubicSegment::with_options(curve, &opts);
            assert_eq!(seg.raster_steps(), MAX_RASTER_STEPS);
            let raster = seg.raster_points();
            assert_eq!(raster.len(), MAX_RASTER_STEPS + 1);
            assert_eq!(raster[MAX_RASTER_STEPS], curve.p3);
        }

        // Zero length over zero spacing.
        let opts = SearchOptions::default().with_raster_length(0.0);
        let dot = CubicSegment::with_options(CubicBez::line((5.0, 5.0), (5.0, 5.0)), &opts);
        assert_eq!(dot.raster_steps(), 0);
        assert_eq!(dot.raster_points().len(), 2);
    }

    #[test]
    fn segment_extrema() {
        let seg = CubicSegment::new(arch());
        assert_eq!(seg.extrema(), &[0.5]);
        assert_eq!(seg.extremum_points(), &[Point::new(50.0, 75.0)]);
        assert!(seg.inflections().is_empty());
        assert!(seg.inflection_points().is_empty());

        let s = CubicSegment::new(CubicBez::new((0.0, 0.0), (1.0, 1.0), (2.0, -1.0), (3.0, 0.0)));
        assert_eq!(s.inflections(), &[0.5]);
        assert_eq!(s.inflection_points(), &[Point::new(1.5, 0.0)]);
    }

    #[test]
    fn segment_split_walk() {
        let curve = CubicBez::new((0.0, 0.0), (10.0, 40.0), (60.0, 40.0), (100.0, 0.0));
        let mut seg = CubicSegment::new(curve);
        let pieces: Vec<CubicBez> = [0.2, 0.5, 0.7, 1.0]
            .into_iter()
            .map(|t| seg.split_at(t))
            .collect();
        assert_eq!(seg.split_cursor(), 1.0);
        assert_eq!(pieces[0].p0, curve.p0);
        assert_eq!(pieces[3].p3, curve.p3);
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].p3, pair[1].p0);
        }
        assert!(pieces[1].eval(0.5).distance(curve.eval(0.35)) < 1e-9);

        seg.reset_split();
        assert_eq!(seg.split_cursor(), 0.0);
        assert_eq!(seg.split_at(0.2), pieces[0]);
    }

    #[test]
    fn segment_split_single() {
        let curve = arch();
        let mut seg = CubicSegment::from(curve);
        let head = seg.split_at(0.4);
        let tail = seg.split_at(1.0);
        assert_eq!(head.p0, curve.p0);
        assert_eq!(head.p3, tail.p0);
        assert_eq!(tail.p3, curve.p3);
        assert!(head.p3.distance(curve.eval(0.4)) < 1e-9);
    }
}
