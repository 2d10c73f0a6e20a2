// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronoscope_imaging_ref --heading-base-level=0

//! Chronoscope Imaging Recording Surface.
//!
//! This crate provides [`RecordingSurface`], an implementation of
//! [`Surface`] for **op recording and frame counting**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It keeps the ops of the most recently presented frame, plus the ops of
//!   the frame in progress, so tests can assert on what a redraw emitted.
//! - It counts presented frames, so tests can assert on whether a state
//!   change triggered a redraw.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use chronoscope_imaging::{DrawOp, Size, Surface, TextRun};

/// Recording implementation of [`Surface`].
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    scale_factor: f64,
    pending: Vec<DrawOp>,
    last_frame: Vec<DrawOp>,
    frames: u64,
    resizes: u64,
}

impl RecordingSurface {
    /// Creates a surface of the given logical size with a scale factor of 1.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            scale_factor: 1.0,
            pending: Vec::new(),
            last_frame: Vec::new(),
            frames: 0,
            resizes: 0,
        }
    }

    /// Ops of the most recently presented frame.
    pub fn last_frame(&self) -> &[DrawOp] {
        &self.last_frame
    }

    /// Ops issued since the last [`Surface::present`].
    pub fn pending(&self) -> &[DrawOp] {
        &self.pending
    }

    /// Number of presented frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of [`Surface::resize`] calls.
    pub fn resizes(&self) -> u64 {
        self.resizes
    }

    /// Text runs of the most recently presented frame, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> + '_ {
        self.last_frame.iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Returns `true` if the last frame contains a text run with exactly `text`.
    pub fn has_text(&self, text: &str) -> bool {
        self.texts().any(|run| run.text == text)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    fn resize(&mut self, size: Size, scale_factor: f64) {
        self.size = size;
        self.scale_factor = scale_factor;
        self.resizes += 1;
    }

    fn draw(&mut self, op: DrawOp) {
        self.pending.push(op);
    }

    fn present(&mut self) {
        self.last_frame = core::mem::take(&mut self.pending);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use chronoscope_imaging::{Color, DrawOp, Point, Size, Surface, SurfaceExt, TextAlign};

    use super::RecordingSurface;

    #[test]
    fn present_moves_pending_into_last_frame() {
        let mut surface = RecordingSurface::new(100.0, 50.0);
        surface.clear(Color::BLACK);
        surface.text("1500", Point::new(10.0, 40.0), 11.0, Color::WHITE, TextAlign::Center);
        assert_eq!(surface.pending().len(), 2);
        assert_eq!(surface.frames(), 0);

        surface.present();
        assert!(surface.pending().is_empty());
        assert_eq!(surface.frames(), 1);
        assert_eq!(surface.last_frame()[0], DrawOp::Clear(Color::BLACK));
        assert!(surface.has_text("1500"));
        assert!(!surface.has_text("1600"));
    }

    #[test]
    fn empty_frame_still_counts() {
        let mut surface = RecordingSurface::new(1.0, 1.0);
        surface.present();
        surface.present();
        assert_eq!(surface.frames(), 2);
        assert!(surface.last_frame().is_empty());
    }

    #[test]
    fn resize_tracks_size_and_scale() {
        let mut surface = RecordingSurface::new(100.0, 50.0);
        surface.resize(Size::new(640.0, 480.0), 2.0);
        assert_eq!(surface.size(), Size::new(640.0, 480.0));
        assert_eq!(surface.scale_factor(), 2.0);
        assert_eq!(surface.resizes(), 1);
    }
}
