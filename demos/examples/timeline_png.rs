// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a scripted timeline scene to a PNG without a window.
//!
//! The scene file names a dataset, an optional category table and font, a
//! surface size, and a list of steps (zoom, pan, hover, select, filter)
//! replayed in order. The frame after the last step is written out.
//!
//! Examples:
//!   `cargo run -p chronoscope_demos --example timeline_png`
//!   `cargo run -p chronoscope_demos --example timeline_png -- demos/data/scene.json out.png`
//!
//! Set `RUST_LOG=debug` to trace every state transition.

use std::env;
use std::path::PathBuf;

use chronoscope_axis::YearLabel;
use chronoscope_demos::scene::Scene;
use chronoscope_demos::write_png;
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args_os().skip(1);
    let scene_path = args.next().map_or_else(
        || PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/scene.json")),
        PathBuf::from,
    );
    let out_path = args
        .next()
        .map_or_else(|| PathBuf::from("timeline.png"), PathBuf::from);

    let mut scene = Scene::load(&scene_path)?;
    let changes = scene.replay()?;
    info!("replayed {}: {changes:?}", scene_path.display());

    if let Some(detail) = scene.controller.detail() {
        info!(
            "selected {} ({}, {}): {}",
            detail.event.title,
            YearLabel(i64::from(detail.event.year)),
            detail.category.label,
            detail.event.description
        );
    }
    if let Some(tooltip) = scene.controller.tooltip() {
        info!("tooltip for {} at {:?}", tooltip.event.title, tooltip.pointer);
    }

    let surface = scene
        .controller
        .surface()
        .ok_or("scene has no surface attached")?;
    write_png(surface, &out_path)?;
    info!("wrote {}", out_path.display());
    Ok(())
}
