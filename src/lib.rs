// Copyright 2025 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squircle path generation.
//!
//! A squircle is a rounded rectangle whose corners blend a circular arc
//! with cubic-Bezier "shoulders", giving a smoother curvature transition
//! than a plain quarter-circle. This crate turns a rectangle size, four
//! corner radii and a smoothing factor into a closed contour, rendered
//! as an SVG path data string usable by any path-consuming drawing
//! surface.
//!
//! Everything is a pure function of its inputs: there is no state, no
//! I/O and no error path. Radii too large for the rectangle are clamped
//! so adjacent corners never overlap, however extreme the request.
//!
//! # Examples
//!
//! A uniform squircle:
//! ```
//! use squircle::Squircle;
//!
//! let svg = Squircle::new((200.0, 100.0), 24.0, 0.6).to_svg();
//! assert!(svg.starts_with("M "));
//! ```
//!
//! Per-corner radii and an outline for a stroke drawn outside the fill:
//! ```
//! use squircle::{Outline, Squircle};
//!
//! let fill = Squircle::new((100.0, 100.0), 10.0, 0.6)
//!     .with_top_left_radius(20.0)
//!     .with_preserve_smoothing(true);
//! let fill_path = fill.to_svg();
//!
//! let stroke = Outline::uniform(2.0).inflate(&fill);
//! let stroke_path = stroke.to_svg();
//! # assert_ne!(fill_path, stroke_path);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod budget;
mod corner;
mod outline;
mod path;
mod point;
mod radii;
mod size;
mod squircle;
mod vec2;

pub use crate::corner::*;
pub use crate::outline::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::radii::*;
pub use crate::size::*;
pub use crate::squircle::*;
pub use crate::vec2::*;
