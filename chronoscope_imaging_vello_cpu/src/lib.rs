// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronoscope_imaging_vello_cpu --heading-base-level=0

//! Vello CPU–backed implementation of the Chronoscope [`Surface`].
//!
//! [`CpuSurface`] rasterizes [`DrawOp`]s with the sparse-strips
//! [`vello_cpu::RenderContext`] into an owned [`Pixmap`].
//!
//! Callers always speak logical pixels. The backing pixmap is
//! `ceil(logical * scale_factor)` pixels on each axis and the scale factor is
//! applied as a transform, so a surface created at 800×600 with a scale factor
//! of 2 renders into a 1600×1200 buffer with crisp edges.
//!
//! Text is drawn from glyph outlines of a caller-supplied font (see
//! [`CpuSurface::with_font`]). Without a font, text ops are skipped.
//!
//! ```rust
//! use chronoscope_imaging::{Color, Point, Size, Surface, SurfaceExt};
//! use chronoscope_imaging_vello_cpu::CpuSurface;
//!
//! let mut surface = CpuSurface::new(Size::new(64.0, 32.0), 2.0).unwrap();
//! assert_eq!(surface.physical_size(), (128, 64));
//!
//! surface.clear(Color::BLACK);
//! surface.fill_circle(Point::new(32.0, 16.0), 8.0, Color::WHITE);
//! surface.present();
//!
//! let rgba = surface.to_rgba8();
//! assert_eq!(rgba.len(), 128 * 64 * 4);
//! ```

mod text;

use core::fmt;

use chronoscope_imaging::{Brush, DrawOp, Size, Surface, TextRun, physical_extent};
use log::{debug, warn};
use skrifa::FontRef;
use vello_cpu::kurbo::{
    Affine as CpuAffine, BezPath, Circle as CpuCircle, Point as CpuPoint, Rect as CpuRect, Shape,
    Stroke,
};
use vello_cpu::{Pixmap, RenderContext, RenderMode, RenderSettings};

/// Flattening tolerance for circles, in physical pixels.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// Errors produced while creating or resizing a [`CpuSurface`].
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The logical size was zero, negative, or not finite.
    #[error("surface size {width}x{height} is empty or not finite")]
    EmptySize {
        /// Requested logical width.
        width: f64,
        /// Requested logical height.
        height: f64,
    },
    /// The scale factor was zero, negative, or not finite.
    #[error("invalid scale factor {0}")]
    InvalidScaleFactor(f64),
    /// The backing pixmap would exceed the rasterizer's `u16` limits.
    #[error("backing buffer of {width}x{height} pixels exceeds {max}x{max}", max = u16::MAX)]
    TooLarge {
        /// Physical width that was requested.
        width: f64,
        /// Physical height that was requested.
        height: f64,
    },
    /// The font bytes could not be parsed.
    #[error("unreadable font: {0}")]
    Font(#[from] skrifa::raw::ReadError),
}

/// A raster [`Surface`] backed by `vello_cpu`.
pub struct CpuSurface {
    ctx: RenderContext,
    pixmap: Pixmap,
    size: Size,
    scale_factor: f64,
    font: Option<Vec<u8>>,
    reported_missing: Vec<char>,
}

impl fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuSurface")
            .field("size", &self.size)
            .field("scale_factor", &self.scale_factor)
            .field("physical_size", &self.physical_size())
            .field("has_font", &self.font.is_some())
            .finish_non_exhaustive()
    }
}

fn render_settings() -> RenderSettings {
    RenderSettings {
        render_mode: RenderMode::OptimizeSpeed,
        ..RenderSettings::default()
    }
}

fn checked_extents(size: Size, scale_factor: f64) -> Result<(u16, u16), SurfaceError> {
    if !(size.width.is_finite() && size.height.is_finite())
        || size.width <= 0.0
        || size.height <= 0.0
    {
        return Err(SurfaceError::EmptySize {
            width: size.width,
            height: size.height,
        });
    }
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err(SurfaceError::InvalidScaleFactor(scale_factor));
    }
    let width = (size.width * scale_factor).ceil();
    let height = (size.height * scale_factor).ceil();
    if width > f64::from(u16::MAX) || height > f64::from(u16::MAX) {
        return Err(SurfaceError::TooLarge { width, height });
    }
    Ok((
        physical_extent(size.width, scale_factor),
        physical_extent(size.height, scale_factor),
    ))
}

impl CpuSurface {
    /// Creates a surface with the given logical size and device pixel ratio.
    pub fn new(size: Size, scale_factor: f64) -> Result<Self, SurfaceError> {
        let (width, height) = checked_extents(size, scale_factor)?;
        Ok(Self {
            ctx: RenderContext::new_with(width, height, render_settings()),
            pixmap: Pixmap::new(width, height),
            size,
            scale_factor,
            font: None,
            reported_missing: Vec::new(),
        })
    }

    /// Uses the given font (TrueType or OpenType bytes) for text ops.
    pub fn with_font(mut self, font: Vec<u8>) -> Result<Self, SurfaceError> {
        FontRef::new(&font)?;
        self.font = Some(font);
        self.reported_missing.clear();
        Ok(self)
    }

    /// Changes the logical size and device pixel ratio, reallocating the
    /// backing pixmap.
    ///
    /// On error the surface is left unchanged.
    pub fn try_resize(&mut self, size: Size, scale_factor: f64) -> Result<(), SurfaceError> {
        let (width, height) = checked_extents(size, scale_factor)?;
        self.size = size;
        self.scale_factor = scale_factor;
        if (width, height) != self.physical_size() {
            self.ctx = RenderContext::new_with(width, height, render_settings());
            self.pixmap = Pixmap::new(width, height);
        } else {
            self.ctx.reset();
        }
        Ok(())
    }

    /// Dimensions of the backing pixmap in physical pixels.
    pub fn physical_size(&self) -> (u16, u16) {
        (self.pixmap.width(), self.pixmap.height())
    }

    /// The pixmap holding the last presented frame.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Returns the last presented frame as unpremultiplied RGBA8 rows.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let pixels = self.pixmap.clone().take_unpremultiplied();
        let mut bytes = Vec::with_capacity(pixels.len() * 4);
        for p in pixels {
            bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        bytes
    }

    fn device_transform(&self) -> CpuAffine {
        CpuAffine::scale(self.scale_factor)
    }

    fn set_brush(&mut self, brush: Brush) {
        match brush {
            Brush::Solid(color) => self.ctx.set_paint(color),
            Brush::Gradient(gradient) => self.ctx.set_paint(gradient),
            Brush::Image(_) => {
                debug!("image brushes are not supported, drawing transparent");
                self.ctx.set_paint(chronoscope_imaging::Color::TRANSPARENT);
            }
        }
    }

    fn draw_text(&mut self, run: TextRun) {
        let Some(font_bytes) = self.font.as_deref() else {
            debug!("no font set, skipping text {:?}", run.text);
            return;
        };
        let Ok(font) = FontRef::new(font_bytes) else {
            return;
        };
        let anchor = CpuPoint::new(run.anchor.x, run.anchor.y);
        let (path, missing) = text::outline_run(&font, &run.text, run.size, anchor, run.align);
        for ch in missing {
            if !self.reported_missing.contains(&ch) {
                warn!("font has no glyph for {ch:?}");
                self.reported_missing.push(ch);
            }
        }
        if path.elements().is_empty() {
            return;
        }
        self.set_brush(run.brush);
        self.ctx.fill_path(&path);
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    fn resize(&mut self, size: Size, scale_factor: f64) {
        if let Err(err) = self.try_resize(size, scale_factor) {
            warn!("ignoring resize: {err}");
        }
    }

    fn draw(&mut self, op: DrawOp) {
        self.ctx.set_transform(self.device_transform());
        match op {
            DrawOp::Clear(color) => {
                self.ctx.set_paint(color);
                self.ctx
                    .fill_rect(&CpuRect::new(0.0, 0.0, self.size.width, self.size.height));
            }
            DrawOp::StrokeLine { line, width, brush } => {
                let mut path = BezPath::new();
                path.move_to((line.p0.x, line.p0.y));
                path.line_to((line.p1.x, line.p1.y));
                self.set_brush(brush);
                self.ctx.set_stroke(Stroke::new(width));
                self.ctx.stroke_path(&path);
            }
            DrawOp::FillCircle { circle, brush } => {
                let shape = CpuCircle::new((circle.center.x, circle.center.y), circle.radius);
                let path = shape.to_path(CIRCLE_TOLERANCE / self.scale_factor);
                self.set_brush(brush);
                self.ctx.fill_path(&path);
            }
            DrawOp::Text(run) => self.draw_text(run),
        }
    }

    fn present(&mut self) {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        self.ctx.reset();
    }
}
