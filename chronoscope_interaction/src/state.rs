// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronoscope_events::{CategoryFilter, CategoryRegistry, Dataset, EventId, FilterError};
use chronoscope_hit::{HitParams, hit_test_view};
use chronoscope_view::{ViewConfig, Viewport};
use kurbo::Point;
use log::{debug, warn};

use crate::command::{Changes, Command};

/// Interaction state: viewport, filter, hover and selection.
///
/// Hover and selection are independent. A selection suppresses the tooltip
/// but hover tracking continues underneath it. Both only ever refer to
/// events that pass the current filter at the current zoom scale.
#[derive(Clone, Debug)]
pub struct ViewState {
    viewport: Viewport,
    filter: CategoryFilter,
    scale_factor: f64,
    hovered: Option<EventId>,
    selected: Option<EventId>,
    pointer: Option<Point>,
}

impl ViewState {
    /// Creates the initial state with every category active.
    ///
    /// Active categories are the registry's, in registration order, followed
    /// by any other category seen in the dataset. Fails only when both are
    /// empty.
    pub fn new(
        dataset: &Dataset,
        registry: &CategoryRegistry,
        config: ViewConfig,
        width: f64,
        height: f64,
    ) -> Result<Self, FilterError> {
        let filter = CategoryFilter::new(registry.ids().chain(dataset.categories()))?;
        Ok(Self {
            viewport: Viewport::with_config(config, width, height),
            filter,
            scale_factor: 1.0,
            hovered: None,
            selected: None,
            pointer: None,
        })
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The active categories.
    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Device pixel ratio of the surface.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Event under the pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<EventId> {
        self.hovered
    }

    /// Event chosen by the last click.
    #[must_use]
    pub fn selected(&self) -> Option<EventId> {
        self.selected
    }

    /// Last pointer position at which an event was hit.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Applies a command and reports what changed.
    pub fn apply(
        &mut self,
        dataset: &Dataset,
        params: &HitParams,
        command: Command,
    ) -> Changes {
        let changes = match command {
            Command::PointerMove(pt) => {
                let hit = hit_test_view(dataset, &self.filter, &self.viewport, pt, params);
                if hit.is_some() {
                    self.pointer = Some(pt);
                }
                self.set_hovered(hit.map(|h| h.id))
            }
            Command::PointerClick(pt) => {
                let hit = hit_test_view(dataset, &self.filter, &self.viewport, pt, params);
                self.set_selected(hit.map(|h| h.id))
            }
            Command::PointerLeave => self.set_hovered(None),
            Command::Dismiss => self.set_selected(None),
            Command::ToggleCategory(category) => {
                let toggle = self.filter.toggle(&category);
                debug!("toggle {category:?}: {toggle:?}");
                if toggle.changed() {
                    Changes::FILTER
                } else {
                    Changes::empty()
                }
            }
            Command::SoloCategory(category) => {
                if !self.filter.is_known(&category) {
                    debug!("solo {category:?}: unknown category");
                }
                if self.filter.solo(&category) {
                    Changes::FILTER
                } else {
                    Changes::empty()
                }
            }
            Command::ShowAllCategories => {
                if self.filter.activate_all() {
                    Changes::FILTER
                } else {
                    Changes::empty()
                }
            }
            Command::Zoom(transform) => {
                if self.viewport.set_transform(transform) {
                    Changes::VIEW
                } else {
                    Changes::empty()
                }
            }
            Command::Resize {
                width,
                height,
                scale_factor,
            } => self.resize(width, height, scale_factor),
        };

        if changes.intersects(Changes::FILTER | Changes::VIEW) {
            changes | self.drop_hidden(dataset)
        } else {
            changes
        }
    }

    fn set_hovered(&mut self, hovered: Option<EventId>) -> Changes {
        if self.hovered == hovered {
            return Changes::empty();
        }
        debug!("hover {:?} -> {hovered:?}", self.hovered);
        self.hovered = hovered;
        if hovered.is_none() {
            self.pointer = None;
        }
        Changes::HOVER
    }

    fn set_selected(&mut self, selected: Option<EventId>) -> Changes {
        if self.selected == selected {
            return Changes::empty();
        }
        debug!("selection {:?} -> {selected:?}", self.selected);
        self.selected = selected;
        Changes::SELECTION
    }

    fn resize(&mut self, width: f64, height: f64, scale_factor: f64) -> Changes {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            warn!("ignoring resize to {width}x{height}");
            return Changes::empty();
        }
        let scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            warn!("invalid scale factor {scale_factor}, keeping {}", self.scale_factor);
            self.scale_factor
        };
        let mut changed = self.viewport.resize(width, height);
        if scale_factor != self.scale_factor {
            self.scale_factor = scale_factor;
            changed = true;
        }
        if changed {
            Changes::SIZE
        } else {
            Changes::empty()
        }
    }

    /// Clears hover and selection that the current filter or scale hides.
    fn drop_hidden(&mut self, dataset: &Dataset) -> Changes {
        let k = self.viewport.scale();
        let visible = |id: EventId| {
            dataset
                .get(id)
                .is_some_and(|event| self.filter.accepts(event, k))
        };
        let hide_hovered = self.hovered.is_some_and(|id| !visible(id));
        let hide_selected = self.selected.is_some_and(|id| !visible(id));
        let mut changes = Changes::empty();
        if hide_hovered {
            changes |= self.set_hovered(None);
        }
        if hide_selected {
            changes |= self.set_selected(None);
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use chronoscope_events::{CategoryRegistry, Dataset, Event, EventId, Significance};
    use chronoscope_hit::HitParams;
    use chronoscope_layout::place;
    use chronoscope_view::{ViewConfig, ZoomTransform};
    use kurbo::Point;

    use super::ViewState;
    use crate::command::{Changes, Command};

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Event::new(1066, "Hastings", Significance::MAX, "war"),
            Event::new(1215, "Magna Carta", Significance::clamped(3), "politics"),
        ])
    }

    fn state(dataset: &Dataset) -> ViewState {
        ViewState::new(
            dataset,
            &CategoryRegistry::default(),
            ViewConfig::default(),
            1000.0,
            600.0,
        )
        .unwrap()
    }

    fn center_of(dataset: &Dataset, state: &ViewState, id: EventId) -> Point {
        place(dataset.get(id).unwrap(), state.viewport()).center
    }

    #[test]
    fn initial_filter_covers_dataset_categories() {
        let dataset = dataset();
        let state = state(&dataset);
        assert_eq!(
            state.filter().active().collect::<Vec<_>>(),
            ["war", "politics"]
        );
    }

    #[test]
    fn empty_inputs_cannot_build_a_filter() {
        assert!(
            ViewState::new(
                &Dataset::default(),
                &CategoryRegistry::default(),
                ViewConfig::default(),
                100.0,
                100.0,
            )
            .is_err()
        );
    }

    #[test]
    fn hover_changes_only_when_target_changes() {
        let dataset = dataset();
        let params = HitParams::default();
        let mut state = state(&dataset);
        let hastings = center_of(&dataset, &state, EventId(0));

        let first = state.apply(&dataset, &params, Command::PointerMove(hastings));
        assert_eq!(first, Changes::HOVER);
        assert_eq!(state.hovered(), Some(EventId(0)));
        assert_eq!(state.pointer(), Some(hastings));

        let nudged = Point::new(hastings.x + 1.0, hastings.y + 1.0);
        let second = state.apply(&dataset, &params, Command::PointerMove(nudged));
        assert!(second.is_empty());
        assert_eq!(state.pointer(), Some(nudged));

        let away = state.apply(
            &dataset,
            &params,
            Command::PointerMove(Point::new(5.0, 5.0)),
        );
        assert_eq!(away, Changes::HOVER);
        assert_eq!(state.hovered(), None);
        assert_eq!(state.pointer(), None);
    }

    #[test]
    fn zooming_out_drops_hidden_selection() {
        let dataset = dataset();
        let params = HitParams::default();
        let mut state = state(&dataset);
        let magna = center_of(&dataset, &state, EventId(1));

        state.apply(&dataset, &params, Command::PointerClick(magna));
        assert_eq!(state.selected(), Some(EventId(1)));

        // k < 1 hides significance 3.
        let changes = state.apply(
            &dataset,
            &params,
            Command::Zoom(ZoomTransform::new(0.8, 0.0)),
        );
        assert_eq!(changes, Changes::VIEW | Changes::SELECTION);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn invalid_resizes_are_ignored() {
        let dataset = dataset();
        let params = HitParams::default();
        let mut state = state(&dataset);

        let bad = Command::Resize {
            width: 0.0,
            height: 600.0,
            scale_factor: 1.0,
        };
        assert!(state.apply(&dataset, &params, bad).is_empty());

        let dpr_only = Command::Resize {
            width: 1000.0,
            height: 600.0,
            scale_factor: 2.0,
        };
        assert_eq!(state.apply(&dataset, &params, dpr_only), Changes::SIZE);
        assert_eq!(state.scale_factor(), 2.0);
    }
}
