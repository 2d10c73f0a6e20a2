// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Chronoscope demos.
//!
//! Demos load a scene file (see [`scene::SceneConfig`]), replay its steps
//! through a [`chronoscope_interaction::Controller`] drawing on a CPU
//! surface, and write the final frame as a PNG.

pub mod scene;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chronoscope_imaging_vello_cpu::CpuSurface;
use png::{BitDepth, ColorType, Encoder};

/// Writes the surface's last presented frame to `path` as an RGBA PNG.
pub fn write_png(surface: &CpuSurface, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = surface.physical_size();
    let file = BufWriter::new(File::create(path)?);
    let mut encoder = Encoder::new(file, u32::from(width), u32::from(height));
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&surface.to_rgba8())?;
    Ok(())
}
