// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronoscope_view --heading-base-level=0

//! Chronoscope View: the time-axis viewport.
//!
//! This crate provides a small, headless model of a horizontal time axis
//! viewed through a pan/zoom transform. It is made of three pieces:
//! - [`TimeScale`]: the base linear map from a fixed year domain onto the
//!   screen range `[margin, width - margin]`.
//! - [`ZoomTransform`]: the current `(k, x)` affine applied on top of the base
//!   scale, `screen_x = k * base(year) + x`.
//! - [`Viewport`]: owns both, clamps `k` into a [`ScaleExtent`], and tracks the
//!   logical surface size.
//!
//! It does **not** own any dataset or rendering backend. Callers are expected
//! to feed gesture results into [`Viewport::set_transform`] (or the
//! [`Viewport::pan_by`] / [`Viewport::zoom_about`] helpers) and to call
//! [`Viewport::resize`] when the surface changes size.
//!
//! ## Minimal example
//!
//! ```rust
//! use chronoscope_view::{Viewport, ZoomTransform};
//!
//! let mut view = Viewport::new(1000.0, 600.0);
//!
//! // The full domain spans the range between the margins at k = 1.
//! assert_eq!(view.year_to_screen_x(-3200.0), 60.0);
//! assert!((view.year_to_screen_x(2030.0) - 940.0).abs() < 1e-9);
//!
//! // Zoom gestures are clamped into the scale extent.
//! view.set_transform(ZoomTransform::new(500.0, 0.0));
//! assert_eq!(view.scale(), 100.0);
//! ```
//!
//! ## Design notes
//!
//! - Only the X axis is transformed; Y layout is left to callers.
//! - Panning is unconstrained; only the scale is clamped.
//! - Resizing recomputes the base range but keeps the zoom transform, so the
//!   user's zoom state survives window resizes.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

mod scale;
mod viewport;

pub use scale::{ScaleExtent, TimeScale, ZoomTransform};
pub use viewport::{ViewConfig, Viewport};
