// Copyright 2024 the fontgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise cubic curves with point-to-parameter lookup.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::{
    CubicBez, CubicSegment, GeometryError, Point, QuadBez, SearchOptions, SearchStrategy,
};

/// A location on a [`PiecewiseCurve`]: a segment index and a parameter on
/// that segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveParam {
    /// Index of the segment.
    pub segment: usize,
    /// Parameter in [0, 1] on that segment.
    pub t: f64,
}

impl CurveParam {
    /// Create a new location.
    #[inline]
    pub fn new(segment: usize, t: f64) -> CurveParam {
        CurveParam { segment, t }
    }
}

/// Where the raster walk resumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SearchCursor {
    segment: usize,
    step: usize,
}

/// Memo key; the bit patterns of the query coordinates.
type PointKey = (u64, u64);

/// Equal points give equal keys; adding zero turns `-0.0` into `0.0`.
#[inline]
fn point_key(pt: Point) -> PointKey {
    ((pt.x + 0.0).to_bits(), (pt.y + 0.0).to_bits())
}

/// Outcome of walking the rasters from the cursor.
enum RasterWalk {
    Found(CurveParam),
    /// The distance grew right away on the first segment walked, so the
    /// point may lie before the cursor.
    Behind(CurveParam),
    Exhausted,
}

/// Is `pt` inside the 2×2 box around the rounded `node`?
#[inline]
fn near_node(pt: Point, node: Point) -> bool {
    let node = node.round();
    (node.x - 1.0..=node.x + 1.0).contains(&pt.x) && (node.y - 1.0..=node.y + 1.0).contains(&pt.y)
}

/// A sequence of cubic segments joined end to end.
///
/// The main operation is [`nearest_parameter`](Self::nearest_parameter),
/// which maps a point known to lie on (or very close to) the curve back to a
/// segment and parameter. Lookups are fastest when they arrive in the order
/// the points occur along the curve: a search cursor remembers where the last
/// lookup ended and the next one resumes from there. A point before the
/// cursor is detected and searched again from the start, so order only
/// affects speed. Every successful lookup is memoized by the query
/// coordinates, so repeating a query always yields the same answer
/// regardless of the cursor.
///
/// The curve can also be cut into consecutive pieces at looked-up points
/// with [`split_at_point`](Self::split_at_point).
///
/// # Examples
///
/// ```
/// use fontgeom::{ParamCurve, PiecewiseCurve, Point};
///
/// let mut curve = PiecewiseCurve::new();
/// curve.append(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]).unwrap();
/// curve
///     .append(&[
///         Point::new(100.0, 0.0),
///         Point::new(155.0, 0.0),
///         Point::new(200.0, 45.0),
///         Point::new(200.0, 100.0),
///     ])
///     .unwrap();
///
/// let pt = curve.segment(1).unwrap().curve().eval(0.3);
/// let found = curve.nearest_parameter(pt).unwrap();
/// assert_eq!(found.segment, 1);
/// assert!((found.t - 0.3).abs() < 0.01);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PiecewiseCurve {
    segments: Vec<CubicSegment>,
    options: SearchOptions,
    cursor: SearchCursor,
    memo: BTreeMap<PointKey, CurveParam>,
    split_segment: usize,
}

impl PiecewiseCurve {
    /// Create an empty curve with default options.
    pub fn new() -> PiecewiseCurve {
        PiecewiseCurve::default()
    }

    /// Create an empty curve with the given options.
    pub fn with_options(options: SearchOptions) -> PiecewiseCurve {
        PiecewiseCurve {
            options,
            ..PiecewiseCurve::default()
        }
    }

    /// Build curves from a sequence of segment point lists.
    ///
    /// A new curve is started whenever a segment does not begin where the
    /// previous one ended, so the result holds one curve per connected run.
    ///
    /// # Errors
    ///
    /// Fails on the first segment that [`append`](Self::append) rejects.
    pub fn from_segments<I, S>(
        segments: I,
        options: SearchOptions,
    ) -> Result<Vec<PiecewiseCurve>, GeometryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[Point]>,
    {
        let mut curves = Vec::new();
        let mut current = PiecewiseCurve::with_options(options);
        for points in segments {
            let points = points.as_ref();
            if let (Some(end), Some(start)) = (current.end(), points.first()) {
                if end != *start {
                    let run = core::mem::replace(&mut current, PiecewiseCurve::with_options(options));
                    curves.push(run);
                }
            }
            current.append(points)?;
        }
        if !current.is_empty() {
            curves.push(current);
        }
        Ok(curves)
    }

    /// Append a segment given by its points.
    ///
    /// Four points make a cubic. Two points make a straight segment, which is
    /// stored as a cubic with its handles at one and two thirds of the chord.
    /// The first point must equal the end of the current last segment.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSegment`] for any other point count,
    /// otherwise fails like [`push_cubic`](Self::push_cubic).
    pub fn append(&mut self, points: &[Point]) -> Result<(), GeometryError> {
        let curve = match *points {
            [p0, p1, p2, p3] => CubicBez::new(p0, p1, p2, p3),
            [p0, p3] => CubicBez::line(p0, p3),
            _ => {
                return Err(GeometryError::InvalidSegment {
                    count: points.len(),
                })
            }
        };
        self.push_cubic(curve)
    }

    /// Append a cubic segment.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRasterLength`] when the curve's raster
    /// length is not positive and finite, and
    /// [`GeometryError::Discontinuous`] when `curve` does not start at the
    /// current end point.
    pub fn push_cubic(&mut self, curve: CubicBez) -> Result<(), GeometryError> {
        let raster_length = self.options.raster_length;
        if !(raster_length > 0.0 && raster_length.is_finite()) {
            return Err(GeometryError::InvalidRasterLength { raster_length });
        }
        if let Some(expected) = self.end() {
            if expected != curve.p0 {
                return Err(GeometryError::Discontinuous {
                    index: self.segments.len(),
                    expected,
                    found: curve.p0,
                });
            }
        }
        self.segments
            .push(CubicSegment::with_options(curve, &self.options));
        Ok(())
    }

    /// Append a quadratic segment, raised to a cubic.
    pub fn push_quad(&mut self, quad: QuadBez) -> Result<(), GeometryError> {
        self.push_cubic(quad.raise())
    }

    /// The options this curve was built with.
    #[inline]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Does the curve have no segments?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments, in order.
    #[inline]
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// The segment at `index`, if any.
    #[inline]
    pub fn segment(&self, index: usize) -> Option<&CubicSegment> {
        self.segments.get(index)
    }

    /// The first point of the curve.
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|s| s.curve().p0)
    }

    /// The last point of the curve.
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|s| s.curve().p3)
    }

    /// The segment index and raster step where the next walk resumes.
    #[inline]
    pub fn search_position(&self) -> (usize, usize) {
        (self.cursor.segment, self.cursor.step)
    }

    /// Inflection points of all segments, in segment order.
    pub fn all_inflection_points(&self) -> SmallVec<[Point; 8]> {
        self.segments
            .iter()
            .flat_map(|s| s.inflection_points().iter().copied())
            .collect()
    }

    /// Horizontal-tangent extremum points of all segments, in segment order.
    ///
    /// End points count, so an extremum on a joint shows up once for each
    /// segment meeting there.
    pub fn all_extremum_points(&self) -> SmallVec<[Point; 8]> {
        self.segments
            .iter()
            .flat_map(|s| s.extremum_points().iter().copied())
            .collect()
    }

    /// Find the segment and parameter of a point on the curve.
    ///
    /// Memoized results are returned first. Otherwise the segment ends from
    /// the cursor onwards are checked against the point; a point within one
    /// unit of a rounded end point snaps to it. Failing that, the raster of
    /// each segment is walked from the cursor until the distance to the
    /// point starts growing again.
    ///
    /// When the cursor has moved and the point turns out to lie before it,
    /// or no segment after it matches, the search is repeated once from the
    /// start of the curve.
    ///
    /// Returns `None` when every segment is exhausted without a match.
    pub fn nearest_parameter(&mut self, pt: Point) -> Option<CurveParam> {
        let key = point_key(pt);
        if let Some(&found) = self.memo.get(&key) {
            return Some(found);
        }
        let found = self.search(pt);
        match found {
            Some(found) => {
                self.memo.insert(key, found);
            }
            None => log::debug!("no parameter found for {pt}; all segments exhausted"),
        }
        found
    }

    fn search(&mut self, pt: Point) -> Option<CurveParam> {
        let resumed = self.cursor != SearchCursor::default();
        if let Some(found) = self.snap_to_node(pt) {
            return Some(found);
        }
        match self.walk_raster(pt) {
            RasterWalk::Found(found) => Some(found),
            RasterWalk::Behind(found) if !resumed => Some(found),
            RasterWalk::Exhausted if !resumed => None,
            RasterWalk::Behind(_) | RasterWalk::Exhausted => {
                log::debug!("{pt} not found after the search cursor; restarting from the start");
                self.reset_cursor();
                self.snap_to_node(pt).or_else(|| match self.walk_raster(pt) {
                    RasterWalk::Found(found) | RasterWalk::Behind(found) => Some(found),
                    RasterWalk::Exhausted => None,
                })
            }
        }
    }

    fn snap_to_node(&mut self, pt: Point) -> Option<CurveParam> {
        for index in self.cursor.segment..self.segments.len() {
            let segment = &self.segments[index];
            if near_node(pt, segment.curve().p0) {
                log::trace!("{pt} snapped to the start of segment {index}");
                self.cursor = SearchCursor {
                    segment: index,
                    step: 0,
                };
                return Some(CurveParam::new(index, 0.0));
            }
            if near_node(pt, segment.curve().p3) {
                log::trace!("{pt} snapped to the end of segment {index}");
                self.cursor = SearchCursor {
                    segment: index,
                    step: segment.raster_len(),
                };
                return Some(CurveParam::new(index, 1.0));
            }
        }
        None
    }

    fn walk_raster(&mut self, pt: Point) -> RasterWalk {
        let first = self.cursor.segment;
        for index in first..self.segments.len() {
            self.cursor.segment = index;
            let segment = &self.segments[index];
            let raster = segment.raster_points();
            let last = raster.len() - 1;
            if last == 1 {
                // Straight: project onto the chord.
                let chord = raster[1] - raster[0];
                let len2 = chord.hypot2();
                if len2 > 0.0 {
                    let t = (pt - raster[0]).dot(chord) / len2;
                    if t <= 1.0 {
                        let found = CurveParam::new(index, t.max(0.0));
                        return if index == first && t < 0.0 {
                            RasterWalk::Behind(found)
                        } else {
                            RasterWalk::Found(found)
                        };
                    }
                }
            } else {
                let start = self.cursor.step;
                let mut prev = f64::INFINITY;
                for step in start..=last {
                    let dist = pt.distance(raster[step]);
                    if dist > prev {
                        log::trace!("{pt} passed at step {step}/{last} of segment {index}");
                        self.cursor.step = step;
                        let found = CurveParam::new(index, step as f64 / last as f64);
                        return if index == first && step == start + 1 {
                            RasterWalk::Behind(found)
                        } else {
                            RasterWalk::Found(found)
                        };
                    }
                    prev = dist;
                }
            }
            self.cursor.step = 0;
        }
        RasterWalk::Exhausted
    }

    /// Find the parameter of a point on the first segment by solving its
    /// polynomials.
    ///
    /// The y polynomial must have exactly one root in [0, 1) and the x
    /// polynomial at least one; the result is the mean of the y root and the
    /// first x root. Anything else falls back to
    /// [`nearest_parameter`](Self::nearest_parameter).
    pub fn nearest_parameter_fast(&mut self, pt: Point) -> Option<CurveParam> {
        let params = self.segments.first()?.params();
        let in_range = |t: &f64| (0.0..1.0).contains(t);
        let ys: ArrayVec<f64, 3> = params.solve_y(pt.y).into_iter().filter(in_range).collect();
        let xs: ArrayVec<f64, 3> = params.solve_x(pt.x).into_iter().filter(in_range).collect();
        if let ([ty], Some(tx)) = (ys.as_slice(), xs.first()) {
            return Some(CurveParam::new(0, 0.5 * (tx + ty)));
        }
        log::debug!(
            "{pt} has {} y and {} x roots on the first segment; walking the raster",
            ys.len(),
            xs.len()
        );
        self.nearest_parameter(pt)
    }

    /// Look up a point with the configured [`SearchStrategy`].
    pub fn locate(&mut self, pt: Point) -> Option<CurveParam> {
        match self.options.strategy {
            SearchStrategy::Raster => self.nearest_parameter(pt),
            SearchStrategy::Analytic => self.nearest_parameter_fast(pt),
        }
    }

    /// Cut the curve at a point.
    ///
    /// The point is located with [`locate`](Self::locate) and its segment is
    /// split from that segment's split cursor up to the found parameter. The
    /// segment is remembered for [`split_remainder`](Self::split_remainder).
    pub fn split_at_point(&mut self, pt: Point) -> Option<CubicBez> {
        let found = self.locate(pt)?;
        Some(self.split_found(found))
    }

    /// Like [`split_at_point`](Self::split_at_point), but always using
    /// [`nearest_parameter_fast`](Self::nearest_parameter_fast).
    pub fn split_at_point_fast(&mut self, pt: Point) -> Option<CubicBez> {
        let found = self.nearest_parameter_fast(pt)?;
        Some(self.split_found(found))
    }

    fn split_found(&mut self, found: CurveParam) -> CubicBez {
        self.split_segment = found.segment;
        self.segments[found.segment].split_at(found.t)
    }

    /// The rest of the most recently split segment, from its split cursor to
    /// its end.
    pub fn split_remainder(&mut self) -> Option<CubicBez> {
        let segment = self.segments.get_mut(self.split_segment)?;
        Some(segment.split_at(1.0))
    }

    /// Move every split cursor and the search cursor back to the start.
    ///
    /// Memoized lookups are kept.
    pub fn reset_split(&mut self) {
        for segment in &mut self.segments {
            segment.reset_split();
        }
        self.split_segment = 0;
        self.reset_cursor();
    }

    /// Move the search cursor back to the start of the curve.
    #[inline]
    pub fn reset_cursor(&mut self) {
        self.cursor = SearchCursor::default();
    }
}

#[cfg(test)]
mod tests {
    use super::point_key;
    use crate::{
        CubicBez, CurveParam, GeometryError, ParamCurve, PiecewiseCurve, Point, QuadBez,
        SearchOptions, SearchStrategy,
    };

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&p| p.into()).collect()
    }

    const ARCH_LEFT: [(f64, f64); 4] = [(0.0, 0.0), (0.0, 55.0), (45.0, 100.0), (100.0, 100.0)];
    const ARCH_RIGHT: [(f64, f64); 4] = [
        (100.0, 100.0),
        (155.0, 100.0),
        (200.0, 55.0),
        (200.0, 0.0),
    ];

    fn arch() -> PiecewiseCurve {
        let mut curve = PiecewiseCurve::new();
        curve.append(&pts(&ARCH_LEFT)).unwrap();
        curve.append(&pts(&ARCH_RIGHT)).unwrap();
        curve
    }

    #[test]
    fn append_errors() {
        let mut curve = PiecewiseCurve::new();
        assert_eq!(
            curve.append(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])),
            Err(GeometryError::InvalidSegment { count: 3 })
        );
        assert!(curve.is_empty());
        curve.append(&pts(&[(0.0, 0.0), (30.0, 0.0)])).unwrap();
        assert_eq!(
            curve.append(&pts(&[(31.0, 0.0), (40.0, 0.0)])),
            Err(GeometryError::Discontinuous {
                index: 1,
                expected: Point::new(30.0, 0.0),
                found: Point::new(31.0, 0.0),
            })
        );
        assert_eq!(curve.len(), 1);
    }

    #[test]
    fn append_straight() {
        let mut curve = PiecewiseCurve::new();
        curve.append(&pts(&[(0.0, 0.0), (30.0, 0.0)])).unwrap();
        let c = curve.segment(0).unwrap().curve();
        assert_eq!(c.p1, Point::new(10.0, 0.0));
        assert_eq!(c.p2, Point::new(20.0, 0.0));
        curve
            .push_quad(QuadBez::new((30.0, 0.0), (40.0, 10.0), (50.0, 0.0)))
            .unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.start(), Some(Point::new(0.0, 0.0)));
        assert_eq!(curve.end(), Some(Point::new(50.0, 0.0)));
    }

    #[test]
    fn from_segments_runs() {
        let segments = [
            pts(&ARCH_LEFT),
            pts(&ARCH_RIGHT),
            pts(&[(300.0, 0.0), (400.0, 0.0)]),
            pts(&[(400.0, 0.0), (400.0, 100.0)]),
            pts(&[(400.0, 100.0), (300.0, 0.0)]),
        ];
        let curves = PiecewiseCurve::from_segments(&segments, SearchOptions::default()).unwrap();
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].len(), 2);
        assert_eq!(curves[1].len(), 3);
        assert_eq!(curves[1].start(), Some(Point::new(300.0, 0.0)));

        let bad = [pts(&ARCH_LEFT), pts(&[(100.0, 100.0)])];
        assert_eq!(
            PiecewiseCurve::from_segments(&bad, SearchOptions::default()).unwrap_err(),
            GeometryError::InvalidSegment { count: 1 }
        );
    }

    #[test]
    fn snap_to_nodes() {
        let mut curve = arch();
        assert_eq!(
            curve.nearest_parameter(Point::new(100.4, 99.7)),
            Some(CurveParam::new(0, 1.0))
        );
        assert_eq!(curve.search_position().0, 0);
        assert_eq!(
            curve.nearest_parameter(Point::new(199.5, 0.9)),
            Some(CurveParam::new(1, 1.0))
        );
        assert_eq!(curve.search_position().0, 1);
    }

    #[test]
    fn walk_single_segment() {
        let mut curve = arch();
        let segment = curve.segment(0).unwrap().curve().to_owned();
        let spacing = 2.0 * curve.options().raster_length;
        for t in [0.2, 0.35, 0.5, 0.8] {
            let pt = segment.eval(t);
            let found = curve.nearest_parameter(pt).unwrap();
            assert_eq!(found.segment, 0);
            assert!(segment.eval(found.t).distance(pt) < spacing, "{t} -> {found:?}");
        }
    }

    #[test]
    fn walk_into_next_segment() {
        let mut curve = arch();
        let left = curve.segment(0).unwrap().curve().to_owned();
        let right = curve.segment(1).unwrap().curve().to_owned();
        let found = curve.nearest_parameter(left.eval(0.4)).unwrap();
        assert_eq!(found.segment, 0);

        let pt = right.eval(0.5);
        let found = curve.nearest_parameter(pt).unwrap();
        assert_eq!(found.segment, 1);
        assert!((found.t - 0.5).abs() < 0.01);
        assert_eq!(curve.search_position().0, 1);
    }

    #[test]
    fn walk_straight() {
        let opts = SearchOptions::default().with_raster_length(100.0);
        let mut curve = PiecewiseCurve::with_options(opts);
        curve.append(&pts(&[(0.0, 0.0), (100.0, 0.0)])).unwrap();
        assert_eq!(curve.segment(0).unwrap().raster_len(), 1);
        let found = curve.nearest_parameter(Point::new(40.0, 3.0)).unwrap();
        assert_eq!(found.segment, 0);
        assert!((found.t - 0.4).abs() < 1e-12);
        assert_eq!(curve.nearest_parameter(Point::new(150.0, 0.0)), None);

        // Before the start clamps to 0.
        let found = curve.nearest_parameter(Point::new(-20.0, 5.0)).unwrap();
        assert_eq!(found, CurveParam::new(0, 0.0));
    }

    #[test]
    fn invalid_raster_length() {
        for raster_length in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let opts = SearchOptions::default().with_raster_length(raster_length);
            let mut curve = PiecewiseCurve::with_options(opts);
            let err = curve.append(&pts(&ARCH_LEFT)).unwrap_err();
            assert!(
                matches!(err, GeometryError::InvalidRasterLength { .. }),
                "{raster_length} -> {err:?}"
            );
            assert!(curve.is_empty());
            assert_eq!(curve.nearest_parameter(Point::new(20.0, 60.0)), None);
        }

        // Tiny spacing is capped rather than exhausting memory.
        let opts = SearchOptions::default().with_raster_length(1e-300);
        let mut curve = PiecewiseCurve::with_options(opts);
        curve.append(&pts(&ARCH_LEFT)).unwrap();
        let c = curve.segment(0).unwrap().curve().to_owned();
        let found = curve.nearest_parameter(c.eval(0.3)).unwrap();
        assert_eq!(found.segment, 0);
        assert!((found.t - 0.3).abs() < 1e-3);
    }

    #[test]
    fn out_of_order_queries() {
        let mut curve = arch();
        let left = curve.segment(0).unwrap().curve().to_owned();
        let right = curve.segment(1).unwrap().curve().to_owned();

        let ahead = curve.nearest_parameter(left.eval(0.8)).unwrap();
        assert!((ahead.t - 0.8).abs() < 0.01);
        let pt = left.eval(0.3);
        let behind = curve.nearest_parameter(pt).unwrap();
        assert_eq!(behind.segment, 0);
        assert!(left.eval(behind.t).distance(pt) < 0.5, "{behind:?}");

        // Behind the cursor on an earlier segment, and on a node.
        curve.nearest_parameter(right.eval(0.6)).unwrap();
        assert_eq!(curve.search_position().0, 1);
        let pt = left.eval(0.5);
        let found = curve.nearest_parameter(pt).unwrap();
        assert_eq!(found.segment, 0);
        assert!(left.eval(found.t).distance(pt) < 0.5, "{found:?}");
        curve.nearest_parameter(right.eval(0.7)).unwrap();
        assert_eq!(
            curve.nearest_parameter(Point::new(0.3, -0.2)),
            Some(CurveParam::new(0, 0.0))
        );
    }

    #[test]
    fn memo_key_signed_zero() {
        assert_eq!(
            point_key(Point::new(-0.0, 0.0)),
            point_key(Point::new(0.0, -0.0))
        );

        let mut curve = PiecewiseCurve::new();
        curve.append(&pts(&[(0.0, 0.0), (0.0, 100.0)])).unwrap();
        let first = curve.nearest_parameter(Point::new(0.0, 30.0)).unwrap();
        curve.nearest_parameter(Point::new(0.0, 80.0)).unwrap();
        let position = curve.search_position();
        assert_eq!(curve.nearest_parameter(Point::new(-0.0, 30.0)), Some(first));
        assert_eq!(curve.search_position(), position);
    }

    #[test]
    fn exhausted() {
        let mut curve = PiecewiseCurve::new();
        curve.append(&pts(&ARCH_LEFT)).unwrap();
        assert_eq!(curve.nearest_parameter(Point::new(1000.0, 1000.0)), None);
        assert_eq!(PiecewiseCurve::new().nearest_parameter(Point::ZERO), None);
    }

    #[test]
    fn memo_is_stable() {
        let mut curve = arch();
        let left = curve.segment(0).unwrap().curve().to_owned();
        let pt = left.eval(0.3);
        let first = curve.nearest_parameter(pt).unwrap();
        // Move the cursor past the point.
        curve.nearest_parameter(left.eval(0.9)).unwrap();
        assert_eq!(curve.nearest_parameter(pt), Some(first));
        curve.reset_cursor();
        assert_eq!(curve.nearest_parameter(pt), Some(first));
        curve.reset_split();
        assert_eq!(curve.nearest_parameter(pt), Some(first));
    }

    #[test]
    fn split_reconstructs_segment() {
        let mut curve = arch();
        let left = curve.segment(0).unwrap().curve().to_owned();
        let mut pieces = Vec::new();
        for t in [0.25, 0.5, 0.75] {
            pieces.push(curve.split_at_point(left.eval(t)).unwrap());
        }
        pieces.push(curve.split_remainder().unwrap());
        assert_eq!(pieces[0].p0, left.p0);
        assert_eq!(pieces[3].p3, left.p3);
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].p3, pair[1].p0);
        }
        for (piece, t) in pieces.iter().zip([0.25, 0.5, 0.75]) {
            assert!(piece.p3.distance(left.eval(t)) < 0.5);
        }

        curve.reset_split();
        assert_eq!(curve.split_at_point(left.eval(0.25)), Some(pieces[0]));
    }

    #[test]
    fn split_across_segments() {
        let mut curve = arch();
        let right = curve.segment(1).unwrap().curve().to_owned();
        let head = curve.split_at_point(right.eval(0.5)).unwrap();
        assert_eq!(head.p0, right.p0);
        let tail = curve.split_remainder().unwrap();
        assert_eq!(head.p3, tail.p0);
        assert_eq!(tail.p3, right.p3);
        assert_eq!(curve.segment(1).unwrap().split_cursor(), 1.0);
        assert_eq!(curve.segment(0).unwrap().split_cursor(), 0.0);
    }

    #[test]
    fn fast_parameter() {
        let mut curve = arch();
        let left = curve.segment(0).unwrap().curve().to_owned();
        let found = curve.nearest_parameter_fast(left.eval(0.3)).unwrap();
        assert_eq!(found.segment, 0);
        assert!((found.t - 0.3).abs() < 1e-9);

        // Two y roots on the bowl: falls back to the raster walk.
        let mut bowl = PiecewiseCurve::new();
        bowl.append(&pts(&[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0)]))
            .unwrap();
        let c = bowl.segment(0).unwrap().curve().to_owned();
        let found = bowl.nearest_parameter_fast(c.eval(0.25)).unwrap();
        assert_eq!(found.segment, 0);
        assert!((found.t - 0.25).abs() < 0.01);
    }

    #[test]
    fn analytic_strategy() {
        let opts = SearchOptions::default().with_strategy(SearchStrategy::Analytic);
        let mut curve = PiecewiseCurve::with_options(opts);
        curve.append(&pts(&ARCH_LEFT)).unwrap();
        let c = curve.segment(0).unwrap().curve().to_owned();
        let head = curve.split_at_point(c.eval(0.6)).unwrap();
        assert!(head.p3.distance(c.eval(0.6)) < 1e-6);
        let tail = curve.split_remainder().unwrap();
        assert_eq!(head.p3, tail.p0);

        let mut raster = arch();
        let head = raster.split_at_point_fast(c.eval(0.6)).unwrap();
        assert!(head.p3.distance(c.eval(0.6)) < 1e-6);
    }

    #[test]
    fn extremum_and_inflection_points() {
        let curve = arch();
        let corner = Point::new(100.0, 100.0);
        assert_eq!(curve.all_extremum_points().as_slice(), &[corner, corner]);
        assert!(curve.all_inflection_points().is_empty());

        let mut s = PiecewiseCurve::new();
        s.push_cubic(CubicBez::new((0.0, 0.0), (1.0, 1.0), (2.0, -1.0), (3.0, 0.0)))
            .unwrap();
        assert_eq!(s.all_inflection_points().as_slice(), &[Point::new(1.5, 0.0)]);
    }
}
