// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Colors used by the [`Renderer`](crate::Renderer).
///
/// The default is a dark theme: light marks on a near-black background.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Surface clear color.
    pub background: Color,
    /// Axis line and tick marks.
    pub axis: Color,
    /// Tick year labels.
    pub tick_label: Color,
    /// Event titles.
    pub label: Color,
    /// Year sub-labels under event titles.
    pub sub_label: Color,
    /// Dot color of hovered or selected events.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(0x0b, 0x0d, 0x17, 0xff),
            axis: Color::from_rgba8(0xff, 0xff, 0xff, 0x4d),
            tick_label: Color::from_rgba8(0xff, 0xff, 0xff, 0x80),
            label: Color::WHITE,
            sub_label: Color::from_rgba8(0xff, 0xff, 0xff, 0x99),
            highlight: Color::WHITE,
        }
    }
}

/// Sizes and offsets used by the [`Renderer`](crate::Renderer), in logical pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Stroke width of the axis line.
    pub axis_width: f64,
    /// Tick marks extend this far above and below the axis.
    pub tick_half_length: f64,
    /// Stroke width of tick marks.
    pub tick_width: f64,
    /// Baseline of tick labels, measured down from the axis.
    pub tick_label_offset: f64,
    /// Font size of tick labels.
    pub tick_font_size: f32,
    /// Font size of event titles.
    pub title_font_size: f32,
    /// Font size of event titles when hovered or selected.
    pub title_font_size_emphasized: f32,
    /// Font size of year sub-labels.
    pub year_font_size: f32,
    /// Font size of year sub-labels when hovered or selected.
    pub year_font_size_emphasized: f32,
    /// Gap between the top of a dot and the year sub-label baseline.
    pub label_gap: f64,
    /// Distance between the year sub-label and the title baselines.
    pub line_spacing: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_width: 1.0,
            tick_half_length: 5.0,
            tick_width: 1.0,
            tick_label_offset: 20.0,
            tick_font_size: 11.0,
            title_font_size: 12.0,
            title_font_size_emphasized: 14.0,
            year_font_size: 10.0,
            year_font_size_emphasized: 11.0,
            label_gap: 6.0,
            line_spacing: 14.0,
        }
    }
}
