// Copyright 2025 the Continuous Corners Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounded rectangles with continuous corners.
//!
//! A classic rounded rectangle joins each straight edge to a quarter circle.
//! The tangent is continuous at the joint but the curvature jumps from zero
//! to `1/r`, which reads as a visible kink. This crate builds outlines whose
//! corners ease into the edges instead, with a selectable order of
//! continuity:
//!
//! - [`Continuity::G0`]: a straight diagonal cut.
//! - [`Continuity::G1`]: a quarter circle.
//! - [`Continuity::G2`]: cubic Béziers matching the edge and a shortened
//!   arc in both tangent and curvature. This is the default.
//! - [`Continuity::G3`]: an empirical ramp of curvature, kept for
//!   compatibility.
//!
//! Outlines are returned as a [`Contour`]: a closed, clockwise (y down)
//! sequence of lines, arcs and cubic Béziers that can be converted to a
//! [`BezPath`] for rendering.
//!
//! # Examples
//!
//! ```
//! use continuous_corners::{Continuity, ContinuousRoundedRect, Rect};
//!
//! let shape = ContinuousRoundedRect::new(
//!     Rect::new(0.0, 0.0, 200.0, 100.0),
//!     24.0,
//!     Continuity::default(),
//! );
//! let contour = shape.contour().unwrap();
//! assert!(contour.is_closed(1e-9));
//!
//! // A concentric shape 8 units inside the first.
//! let inner = shape.concentric(8.0);
//! assert_eq!(inner.radii.top_left, 16.0);
//!
//! let path = shape.to_bez_path(0.1).unwrap();
//! assert!(!path.elements().is_empty());
//! ```
//!
//! Animating between continuities:
//!
//! ```
//! use continuous_corners::{Continuity, G3Continuity};
//!
//! let from = Continuity::G1;
//! let to = Continuity::G3(G3Continuity::new(0.8));
//! assert_eq!(from.lerp(&to, 0.5), Continuity::G3(G3Continuity::new(0.4)));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. Without `std` the
//! solved corner curves are not cached, and every outline solves them anew.
//!
//! [`libm`]: https://docs.rs/libm

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
compile_error!("continuous-corners requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod arc;
mod bezpath;
mod cache;
mod circle;
pub mod common;
mod config;
mod continuity;
mod contour;
mod corner;
mod cubicbez;
mod error;
mod g0;
mod g1;
mod g2;
mod g3;
mod line;
mod param_curve;
mod point;
mod quadbez;
mod rect;
mod rounded_rect;
mod rounded_rect_radii;
mod segment;
mod size;
mod solver;
mod vec2;

pub use crate::arc::*;
pub use crate::bezpath::*;
pub use crate::circle::*;
pub use crate::config::*;
pub use crate::continuity::*;
pub use crate::contour::*;
pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::g3::G3Continuity;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::rect::*;
pub use crate::rounded_rect::*;
pub use crate::rounded_rect_radii::*;
pub use crate::segment::*;
pub use crate::size::*;
pub use crate::solver::*;
pub use crate::vec2::*;
