// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph outlines for text runs.
//!
//! There is no shaping here: characters map one-to-one onto glyphs through
//! the font's character map and are advanced by their horizontal metrics.
//! That is enough for year labels and short event titles.

use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::GlyphMetrics;
use skrifa::outline::OutlinePen;
use skrifa::{FontRef, GlyphId, MetadataProvider};
use vello_cpu::kurbo::{Affine, BezPath, Point};

use chronoscope_imaging::TextAlign;

/// Fallback advance, as a fraction of the font size, for glyphs without metrics.
const FALLBACK_ADVANCE: f32 = 0.6;

/// Collects an outline into a [`BezPath`], flipping from font (y up) to
/// screen (y down) coordinates.
struct PathPen {
    path: BezPath,
}

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((f64::from(x), -f64::from(y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((f64::from(x), -f64::from(y)));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path.quad_to(
            (f64::from(x1), -f64::from(y1)),
            (f64::from(x), -f64::from(y)),
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.curve_to(
            (f64::from(x1), -f64::from(y1)),
            (f64::from(x2), -f64::from(y2)),
            (f64::from(x), -f64::from(y)),
        );
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// Lays out `text` on a baseline and returns the glyph outlines in logical
/// coordinates, together with the characters the font could not map.
pub(crate) fn outline_run(
    font: &FontRef<'_>,
    text: &str,
    size_px: f32,
    anchor: Point,
    align: TextAlign,
) -> (BezPath, Vec<char>) {
    let charmap = font.charmap();
    let size = Size::new(size_px);
    let metrics = GlyphMetrics::new(font, size, LocationRef::default());

    let mut missing = Vec::new();
    let mut glyphs: Vec<(GlyphId, f32)> = Vec::with_capacity(text.len());
    let mut advance = 0.0_f32;
    for ch in text.chars() {
        let Some(gid) = charmap.map(ch) else {
            if !ch.is_whitespace() {
                missing.push(ch);
            }
            advance += size_px * FALLBACK_ADVANCE;
            continue;
        };
        glyphs.push((gid, advance));
        advance += metrics
            .advance_width(gid)
            .unwrap_or(size_px * FALLBACK_ADVANCE);
    }

    let start_x = match align {
        TextAlign::Start => anchor.x,
        TextAlign::Center => anchor.x - f64::from(advance) / 2.0,
        TextAlign::End => anchor.x - f64::from(advance),
    };

    let outlines = font.outline_glyphs();
    let mut run = BezPath::new();
    for (gid, x) in glyphs {
        let Some(glyph) = outlines.get(gid) else {
            continue;
        };
        let mut pen = PathPen {
            path: BezPath::new(),
        };
        if glyph
            .draw((size, LocationRef::default()), &mut pen)
            .is_err()
        {
            continue;
        }
        let placed = Affine::translate((start_x + f64::from(x), anchor.y)) * pen.path;
        run.extend(placed.elements().iter().copied());
    }
    (run, missing)
}
