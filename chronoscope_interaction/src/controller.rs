// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronoscope_events::{
    CategoryRegistry, Dataset, Event, EventId, FilterError, ResolvedCategory,
};
use chronoscope_hit::HitParams;
use chronoscope_imaging::Surface;
use chronoscope_render::{Frame, Renderer};
use chronoscope_view::ViewConfig;
use kurbo::{Point, Size};
use log::debug;

use crate::command::{Changes, Command};
use crate::state::ViewState;

/// What a tooltip shows: the hovered event and where the pointer was.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tooltip<'a> {
    /// Hovered event id.
    pub id: EventId,
    /// Hovered event.
    pub event: &'a Event,
    /// Category color and label.
    pub category: ResolvedCategory<'a>,
    /// Last pointer position over the event, in logical pixels.
    pub pointer: Point,
}

/// What a detail panel shows: the selected event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detail<'a> {
    /// Selected event id.
    pub id: EventId,
    /// Selected event.
    pub event: &'a Event,
    /// Category color and label.
    pub category: ResolvedCategory<'a>,
}

/// Owns the dataset, the interaction state and the surface, and redraws
/// synchronously after every command that changes something.
///
/// A controller can run without a surface; redraws are then skipped.
#[derive(Debug)]
pub struct Controller<S> {
    dataset: Dataset,
    registry: CategoryRegistry,
    state: ViewState,
    renderer: Renderer,
    hit_params: HitParams,
    surface: Option<S>,
}

impl<S: Surface> Controller<S> {
    /// Creates a controller for a view of the given logical size.
    pub fn new(
        dataset: Dataset,
        registry: CategoryRegistry,
        width: f64,
        height: f64,
    ) -> Result<Self, FilterError> {
        Self::with_config(dataset, registry, ViewConfig::default(), width, height)
    }

    /// Creates a controller with an explicit viewport configuration.
    pub fn with_config(
        dataset: Dataset,
        registry: CategoryRegistry,
        config: ViewConfig,
        width: f64,
        height: f64,
    ) -> Result<Self, FilterError> {
        let state = ViewState::new(&dataset, &registry, config, width, height)?;
        Ok(Self {
            dataset,
            registry,
            state,
            renderer: Renderer::default(),
            hit_params: HitParams::default(),
            surface: None,
        })
    }

    /// Replaces the renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replaces the hit-test parameters.
    #[must_use]
    pub fn with_hit_params(mut self, params: HitParams) -> Self {
        self.hit_params = params;
        self
    }

    /// Attaches a surface, adopting its device pixel ratio, and draws a frame.
    ///
    /// Returns the previously attached surface, if any.
    pub fn attach_surface(&mut self, surface: S) -> Option<S> {
        let scale_factor = surface.scale_factor();
        let previous = self.surface.replace(surface);
        let viewport = self.state.viewport();
        let (width, height) = (viewport.width(), viewport.height());
        self.state.apply(
            &self.dataset,
            &self.hit_params,
            Command::Resize {
                width,
                height,
                scale_factor,
            },
        );
        self.sync_surface_size();
        self.redraw();
        previous
    }

    /// Detaches and returns the surface.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// The attached surface.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// The attached surface, mutably.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// The dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The category registry.
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// The interaction state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The renderer.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Applies a command, resizing the surface and redrawing as needed.
    pub fn dispatch(&mut self, command: Command) -> Changes {
        let changes = self.state.apply(&self.dataset, &self.hit_params, command);
        if changes.contains(Changes::SIZE) {
            self.sync_surface_size();
        }
        if changes.needs_redraw() {
            self.redraw();
        }
        changes
    }

    /// Draws the current state onto the surface.
    pub fn redraw(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            debug!("no surface attached, skipping redraw");
            return;
        };
        let frame = Frame {
            dataset: &self.dataset,
            registry: &self.registry,
            filter: self.state.filter(),
            viewport: self.state.viewport(),
            hovered: self.state.hovered(),
            selected: self.state.selected(),
        };
        self.renderer.draw(surface, &frame);
    }

    /// The tooltip to show, if an event is hovered and nothing is selected.
    pub fn tooltip(&self) -> Option<Tooltip<'_>> {
        if self.state.selected().is_some() {
            return None;
        }
        let id = self.state.hovered()?;
        let pointer = self.state.pointer()?;
        let event = self.dataset.get(id)?;
        Some(Tooltip {
            id,
            event,
            category: self.registry.resolve(&event.category),
            pointer,
        })
    }

    /// The detail panel content, if an event is selected.
    pub fn detail(&self) -> Option<Detail<'_>> {
        let id = self.state.selected()?;
        let event = self.dataset.get(id)?;
        Some(Detail {
            id,
            event,
            category: self.registry.resolve(&event.category),
        })
    }

    fn sync_surface_size(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let viewport = self.state.viewport();
        let size = Size::new(viewport.width(), viewport.height());
        let scale_factor = self.state.scale_factor();
        if surface.size() != size || surface.scale_factor() != scale_factor {
            surface.resize(size, scale_factor);
        }
    }
}
