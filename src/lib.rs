// Copyright 2024 the fontgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve geometry for font outlines.
//!
//! The fontgeom library provides the geometric building blocks used when
//! analysing and reshaping glyph outlines: points and vectors, cubic and
//! quadratic Bézier segments, handle triangle measurements, and a
//! [`PiecewiseCurve`] that maps points lying on an outline back to the
//! segment and parameter they came from.
//!
//! # Examples
//!
//! Locating points on a contour and cutting it there:
//!
//! ```
//! use fontgeom::{ParamCurve, PiecewiseCurve, Point};
//!
//! let mut curve = PiecewiseCurve::new();
//! curve
//!     .append(&[
//!         Point::new(0.0, 0.0),
//!         Point::new(0.0, 55.0),
//!         Point::new(45.0, 100.0),
//!         Point::new(100.0, 100.0),
//!     ])
//!     .unwrap();
//!
//! let on_curve = curve.segment(0).unwrap().curve().eval(0.5);
//! let head = curve.split_at_point(on_curve).unwrap();
//! let tail = curve.split_remainder().unwrap();
//! assert_eq!(head.p0, Point::new(0.0, 0.0));
//! assert_eq!(head.p3, tail.p0);
//! assert_eq!(tail.p3, Point::new(100.0, 100.0));
//! ```
//!
//! Measuring the handle triangle of a segment:
//!
//! ```
//! use fontgeom::geometry::triangle_sides;
//! use fontgeom::Point;
//!
//! let (a, b, c) = triangle_sides(
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(9.0, 1.0),
//!     Point::new(10.0, 0.0),
//! )
//! .unwrap();
//! assert!((b - 10.0).abs() < 1e-9);
//! assert!((a - c).abs() < 1e-9);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The crate uses the `alloc` crate regardless.
//!
//! Diagnostics are emitted through the [`log`] facade; install any logger
//! to see them.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("fontgeom requires either the `std` or `libm` feature");

extern crate alloc;

pub mod common;
mod cubicbez;
mod error;
pub mod geometry;
mod options;
mod param_curve;
mod piecewise;
mod point;
mod quadbez;
mod segment;
mod vec2;

pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::geometry::{line_intersect, Rounding};
pub use crate::options::*;
pub use crate::param_curve::*;
pub use crate::piecewise::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::segment::*;
pub use crate::vec2::*;
