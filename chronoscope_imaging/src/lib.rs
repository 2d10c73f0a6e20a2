// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronoscope_imaging --heading-base-level=0

//! Chronoscope Imaging: backend-agnostic draw ops and the [`Surface`] trait.
//!
//! The timeline only ever draws four things: a background clear, straight
//! lines (the axis and its ticks), filled circles (event dots and glows) and
//! short text runs (tick labels and event titles). This crate names exactly
//! those as [`DrawOp`]s and leaves rasterization to backends:
//!
//! - `chronoscope_imaging_ref` records ops for tests.
//! - `chronoscope_imaging_vello_cpu` rasterizes them into a pixmap.
//!
//! All coordinates are **logical pixels** measured from the top-left corner.
//! A surface that is backed by a denser buffer (a device pixel ratio above 1)
//! applies the ratio itself; callers never see physical pixels.
//!
//! ```rust
//! use chronoscope_imaging::{DrawOp, Surface, SurfaceExt};
//! use kurbo::{Point, Size};
//! use peniko::Color;
//!
//! struct Count(usize);
//! impl Surface for Count {
//!     fn size(&self) -> Size { Size::new(100.0, 100.0) }
//!     fn scale_factor(&self) -> f64 { 1.0 }
//!     fn resize(&mut self, _size: Size, _scale_factor: f64) {}
//!     fn draw(&mut self, _op: DrawOp) { self.0 += 1; }
//! }
//!
//! let mut surface = Count(0);
//! surface.clear(Color::BLACK);
//! surface.fill_circle(Point::new(50.0, 50.0), 4.0, Color::WHITE);
//! surface.present();
//! assert_eq!(surface.0, 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;

pub use kurbo::{Circle, Line, Point, Size};
pub use peniko::{Brush, Color};

/// Horizontal alignment of a [`TextRun`] relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// The anchor is the left edge of the run.
    #[default]
    Start,
    /// The anchor is the horizontal center of the run.
    Center,
    /// The anchor is the right edge of the run.
    End,
}

/// A single line of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// The text to draw.
    pub text: String,
    /// Baseline anchor point.
    pub anchor: Point,
    /// Font size in logical pixels.
    pub size: f32,
    /// Fill brush.
    pub brush: Brush,
    /// Alignment relative to `anchor.x`.
    pub align: TextAlign,
}

/// Drawing operations understood by every [`Surface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the whole surface with a color.
    Clear(Color),
    /// Stroke a line segment.
    StrokeLine {
        /// Segment to stroke.
        line: Line,
        /// Stroke width in logical pixels.
        width: f64,
        /// Stroke brush.
        brush: Brush,
    },
    /// Fill a circle.
    FillCircle {
        /// Circle to fill.
        circle: Circle,
        /// Fill brush; may be a gradient.
        brush: Brush,
    },
    /// Draw a text run.
    Text(TextRun),
}

/// A drawing target.
///
/// Frames are issued as a sequence of [`Surface::draw`] calls followed by one
/// [`Surface::present`].
pub trait Surface {
    /// Logical size of the surface.
    fn size(&self) -> Size;

    /// Ratio of backing pixels to logical pixels.
    fn scale_factor(&self) -> f64;

    /// Changes the logical size and the device pixel ratio.
    ///
    /// The next frame is expected to redraw everything.
    fn resize(&mut self, size: Size, scale_factor: f64);

    /// Applies one draw op.
    fn draw(&mut self, op: DrawOp);

    /// Finishes the current frame.
    fn present(&mut self) {}
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn scale_factor(&self) -> f64 {
        (**self).scale_factor()
    }

    fn resize(&mut self, size: Size, scale_factor: f64) {
        (**self).resize(size, scale_factor);
    }

    fn draw(&mut self, op: DrawOp) {
        (**self).draw(op);
    }

    fn present(&mut self) {
        (**self).present();
    }
}

/// Convenience helpers for issuing [`DrawOp`]s.
pub trait SurfaceExt: Surface {
    /// Issues [`DrawOp::Clear`].
    #[inline]
    fn clear(&mut self, color: Color) {
        self.draw(DrawOp::Clear(color));
    }

    /// Issues [`DrawOp::StrokeLine`].
    #[inline]
    fn stroke_line(&mut self, line: Line, width: f64, brush: impl Into<Brush>) {
        self.draw(DrawOp::StrokeLine {
            line,
            width,
            brush: brush.into(),
        });
    }

    /// Issues [`DrawOp::FillCircle`].
    #[inline]
    fn fill_circle(&mut self, center: Point, radius: f64, brush: impl Into<Brush>) {
        self.draw(DrawOp::FillCircle {
            circle: Circle::new(center, radius),
            brush: brush.into(),
        });
    }

    /// Issues [`DrawOp::Text`].
    #[inline]
    fn text(
        &mut self,
        text: impl Into<String>,
        anchor: Point,
        size: f32,
        brush: impl Into<Brush>,
        align: TextAlign,
    ) {
        self.draw(DrawOp::Text(TextRun {
            text: text.into(),
            anchor,
            size,
            brush: brush.into(),
            align,
        }));
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}

/// Returns the backing-buffer dimension for a logical length.
///
/// This is `ceil(logical * scale_factor)`, at least 1, saturating at
/// `u16::MAX`. Non-finite inputs yield 1.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "range is checked before the cast"
)]
pub fn physical_extent(logical: f64, scale_factor: f64) -> u16 {
    let physical = libm::ceil(logical * scale_factor);
    if !physical.is_finite() || physical < 1.0 {
        return 1;
    }
    if physical >= f64::from(u16::MAX) {
        return u16::MAX;
    }
    physical as u16
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{
        Brush, Color, DrawOp, Line, Point, Size, Surface, SurfaceExt, TextAlign,
        physical_extent,
    };

    #[derive(Default)]
    struct Log(Vec<DrawOp>);

    impl Surface for Log {
        fn size(&self) -> Size {
            Size::new(10.0, 10.0)
        }
        fn scale_factor(&self) -> f64 {
            1.0
        }
        fn resize(&mut self, _size: Size, _scale_factor: f64) {}
        fn draw(&mut self, op: DrawOp) {
            self.0.push(op);
        }
    }

    #[test]
    fn helpers_build_expected_ops() {
        let mut log = Log::default();
        log.stroke_line(Line::new((0.0, 5.0), (10.0, 5.0)), 1.0, Color::WHITE);
        log.text("1066", Point::new(5.0, 9.0), 11.0, Color::WHITE, TextAlign::Center);

        assert!(matches!(
            &log.0[0],
            DrawOp::StrokeLine { width, brush: Brush::Solid(c), .. }
                if *width == 1.0 && *c == Color::WHITE
        ));
        let DrawOp::Text(run) = &log.0[1] else {
            panic!("expected a text run");
        };
        assert_eq!(run.text, "1066");
        assert_eq!(run.align, TextAlign::Center);
    }

    #[test]
    fn helpers_work_through_mutable_references() {
        fn paint<S: Surface>(mut surface: S) {
            surface.clear(Color::BLACK);
        }

        let mut log = Log::default();
        paint(&mut log);
        assert_eq!(log.0, [DrawOp::Clear(Color::BLACK)]);
    }

    #[test]
    fn physical_extent_rounds_up_and_saturates() {
        assert_eq!(physical_extent(100.0, 1.0), 100);
        assert_eq!(physical_extent(100.5, 2.0), 201);
        assert_eq!(physical_extent(100.2, 1.5), 151);
        assert_eq!(physical_extent(0.0, 2.0), 1);
        assert_eq!(physical_extent(f64::NAN, 2.0), 1);
        assert_eq!(physical_extent(1.0e9, 1.0), u16::MAX);
    }
}
