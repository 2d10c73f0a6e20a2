// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronoscope_render --heading-base-level=0

//! Chronoscope Render: draws one timeline frame onto a [`Surface`].
//!
//! A frame is drawn back to front:
//!
//! 1. clear to the theme background;
//! 2. the horizontal axis line at half the viewport height;
//! 3. tick marks and year labels, with the interval picked from the visible
//!    span by [`chronoscope_axis::tick_interval`];
//! 4. for each visible event, in dataset order: an optional radial glow, the
//!    dot, then an optional title with a year sub-label above the dot.
//!
//! Ticks and events are culled when their x lies outside
//! `[-50, width + 50]`. The renderer reads state and never mutates it; the
//! only side effects are the ops sent to the surface, followed by
//! [`Surface::present`].
//!
//! Emphasis rules (hovered or selected counts as emphasized):
//! - glow: drawn for significance ≥ 4 or emphasis, at 2× the dot radius and
//!   15% opacity, or 3× and 30% when emphasized ([`glow`]);
//! - dot: the highlight color when emphasized, otherwise the category color
//!   at `0.6 + significance * 0.08` opacity ([`dot_opacity`]);
//! - label: shown when `(sig ≥ 4 && k > 1) || (sig ≥ 3 && k > 3)` or the
//!   event is emphasized ([`shows_label`]), in a larger font when emphasized.

mod theme;

pub use theme::{RenderStyle, Theme};

use chronoscope_axis::{YearLabel, tick_years};
use chronoscope_events::{CategoryFilter, CategoryRegistry, Dataset, Event, EventId, Significance};
use chronoscope_imaging::{Surface, SurfaceExt, TextAlign};
use chronoscope_layout::{PlacedEvent, layout_visible};
use chronoscope_view::Viewport;
use kurbo::{Line, Point};
use peniko::{Brush, Color, Gradient};

/// Marks whose x lies this far outside the viewport are not drawn.
pub const CULL_MARGIN: f64 = 50.0;

/// Everything a frame depends on. Borrowed, never mutated.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// All events.
    pub dataset: &'a Dataset,
    /// Category colors and labels.
    pub registry: &'a CategoryRegistry,
    /// Active categories.
    pub filter: &'a CategoryFilter,
    /// Current viewport.
    pub viewport: &'a Viewport,
    /// Event under the pointer.
    pub hovered: Option<EventId>,
    /// Event chosen by the last click.
    pub selected: Option<EventId>,
}

impl Frame<'_> {
    /// Returns `true` if `id` is hovered or selected.
    #[must_use]
    pub fn is_emphasized(&self, id: EventId) -> bool {
        self.hovered == Some(id) || self.selected == Some(id)
    }

    /// Positions of the events visible in this frame, in dataset order.
    #[must_use]
    pub fn layout(&self) -> Vec<PlacedEvent> {
        layout_visible(self.dataset, self.filter, self.viewport)
    }
}

/// Glow parameters for an event: `(radius factor, opacity)`, or `None` when
/// no glow is drawn.
#[must_use]
pub fn glow(significance: Significance, emphasized: bool) -> Option<(f64, f32)> {
    if emphasized {
        Some((3.0, 0.3))
    } else if significance.get() >= 4 {
        Some((2.0, 0.15))
    } else {
        None
    }
}

/// Base dot opacity for a significance.
#[must_use]
pub fn dot_opacity(significance: Significance) -> f32 {
    0.6 + f32::from(significance.get()) * 0.08
}

/// Returns `true` if an event's title and year are drawn at zoom scale `k`.
#[must_use]
pub fn shows_label(significance: Significance, k: f64, emphasized: bool) -> bool {
    let sig = significance.get();
    (sig >= 4 && k > 1.0) || (sig >= 3 && k > 3.0) || emphasized
}

/// Returns `true` if `x` lies within the culling bounds of a viewport of the given width.
#[must_use]
pub fn in_cull_bounds(x: f64, width: f64) -> bool {
    (-CULL_MARGIN..=width + CULL_MARGIN).contains(&x)
}

/// Draws timeline frames.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    /// Colors.
    pub theme: Theme,
    /// Sizes and offsets.
    pub style: RenderStyle,
}

impl Renderer {
    /// Creates a renderer with the given theme and the default style.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            style: RenderStyle::default(),
        }
    }

    /// Draws and presents a frame, laying out visible events first.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, frame: &Frame<'_>) {
        let placed = frame.layout();
        self.draw_with_layout(surface, frame, &placed);
    }

    /// Draws and presents a frame from an existing layout of `frame`.
    pub fn draw_with_layout<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        frame: &Frame<'_>,
        placed: &[PlacedEvent],
    ) {
        surface.clear(self.theme.background);
        self.draw_axis(surface, frame.viewport);
        for event in placed {
            if !in_cull_bounds(event.placement.center.x, frame.viewport.width()) {
                continue;
            }
            let Some(data) = frame.dataset.get(event.id) else {
                continue;
            };
            self.draw_event(surface, frame, event, data);
        }
        surface.present();
    }

    fn draw_axis<S: Surface + ?Sized>(&self, surface: &mut S, viewport: &Viewport) {
        let width = viewport.width();
        let axis_y = viewport.height() / 2.0;
        surface.stroke_line(
            Line::new((0.0, axis_y), (width, axis_y)),
            self.style.axis_width,
            self.theme.axis,
        );

        for year in tick_years(viewport.visible_domain()) {
            #[allow(
                clippy::cast_precision_loss,
                reason = "tick years are small enough to be exact in f64"
            )]
            let x = viewport.year_to_screen_x(year as f64);
            if !in_cull_bounds(x, width) {
                continue;
            }
            surface.stroke_line(
                Line::new(
                    (x, axis_y - self.style.tick_half_length),
                    (x, axis_y + self.style.tick_half_length),
                ),
                self.style.tick_width,
                self.theme.axis,
            );
            surface.text(
                YearLabel(year).to_string(),
                Point::new(x, axis_y + self.style.tick_label_offset),
                self.style.tick_font_size,
                self.theme.tick_label,
                TextAlign::Center,
            );
        }
    }

    fn draw_event<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        frame: &Frame<'_>,
        placed: &PlacedEvent,
        event: &Event,
    ) {
        let emphasized = frame.is_emphasized(placed.id);
        let center = placed.placement.center;
        let radius = placed.placement.radius;
        let category = frame.registry.resolve(&event.category);

        if let Some((factor, opacity)) = glow(event.significance, emphasized) {
            let glow_radius = radius * factor;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "gradient radii are f32 in peniko"
            )]
            let gradient = Gradient::new_radial(center, glow_radius as f32).with_stops([
                (0.0, category.color.multiply_alpha(opacity)),
                (1.0, category.color.multiply_alpha(0.0)),
            ]);
            surface.fill_circle(center, glow_radius, Brush::Gradient(gradient));
        }

        let dot: Color = if emphasized {
            self.theme.highlight
        } else {
            category
                .color
                .multiply_alpha(dot_opacity(event.significance))
        };
        surface.fill_circle(center, radius, dot);

        if shows_label(event.significance, frame.viewport.scale(), emphasized) {
            let (title_size, year_size) = if emphasized {
                (
                    self.style.title_font_size_emphasized,
                    self.style.year_font_size_emphasized,
                )
            } else {
                (self.style.title_font_size, self.style.year_font_size)
            };
            let year_y = center.y - radius - self.style.label_gap;
            surface.text(
                event.title.clone(),
                Point::new(center.x, year_y - self.style.line_spacing),
                title_size,
                self.theme.label,
                TextAlign::Center,
            );
            surface.text(
                YearLabel(i64::from(event.year)).to_string(),
                Point::new(center.x, year_y),
                year_size,
                self.theme.sub_label,
                TextAlign::Center,
            );
        }
    }
}
