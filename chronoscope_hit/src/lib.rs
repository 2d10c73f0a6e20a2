// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronoscope_hit --heading-base-level=0

//! Chronoscope Hit: which event is under the pointer.
//!
//! Hit testing works on the same positioned visible set the renderer draws
//! ([`chronoscope_layout::layout_visible`]), so a dot that is on screen is
//! always pickable and a hidden one never is.
//!
//! An event qualifies when the pointer's Euclidean distance to its center is
//! strictly less than its radius plus [`HitParams::tolerance`]. Among
//! qualifying events the nearest wins; on equal distances the first in
//! dataset order wins.
//!
//! ```rust
//! use chronoscope_events::{CategoryFilter, Dataset, Event, EventId, Significance};
//! use chronoscope_hit::{HitParams, hit_test_view};
//! use chronoscope_view::Viewport;
//! use kurbo::Point;
//!
//! let dataset = Dataset::new(vec![Event::new(0, "Year zero", Significance::MAX, "misc")]);
//! let filter = CategoryFilter::new(["misc"]).unwrap();
//! let view = Viewport::new(1000.0, 600.0);
//!
//! let center = chronoscope_layout::place(dataset.get(EventId(0)).unwrap(), &view).center;
//! let hit = hit_test_view(&dataset, &filter, &view, center, &HitParams::default()).unwrap();
//! assert_eq!(hit.id, EventId(0));
//!
//! assert!(hit_test_view(&dataset, &filter, &view, Point::new(0.0, 0.0), &HitParams::default()).is_none());
//! ```

use chronoscope_events::{CategoryFilter, Dataset, EventId};
use chronoscope_layout::{PlacedEvent, Placement, layout_visible};
use chronoscope_view::Viewport;
use kurbo::Point;

/// Parameters for hit testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Extra distance, in logical pixels, added to each event's radius.
    pub tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self { tolerance: 10.0 }
    }
}

/// A successful hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// The event under the pointer.
    pub id: EventId,
    /// Distance from the pointer to the event center.
    pub distance: f64,
}

/// Something that can be hit by a pointer.
pub trait HitTarget {
    /// Returns the pointer's distance to the target if it qualifies as a hit.
    fn hit_distance(&self, pt: Point, params: &HitParams) -> Option<f64>;
}

impl HitTarget for Placement {
    fn hit_distance(&self, pt: Point, params: &HitParams) -> Option<f64> {
        let distance = self.center.distance(pt);
        (distance < self.radius + params.tolerance).then_some(distance)
    }
}

/// Returns the nearest qualifying event among `placed`.
///
/// `placed` is expected in dataset order; ties keep the earliest entry.
#[must_use]
pub fn hit_test(placed: &[PlacedEvent], pt: Point, params: &HitParams) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for event in placed {
        let Some(distance) = event.placement.hit_distance(pt, params) else {
            continue;
        };
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Hit {
                id: event.id,
                distance,
            });
        }
    }
    best
}

/// Lays out the visible events of a view and hit-tests `pt` against them.
#[must_use]
pub fn hit_test_view(
    dataset: &Dataset,
    filter: &CategoryFilter,
    viewport: &Viewport,
    pt: Point,
    params: &HitParams,
) -> Option<Hit> {
    hit_test(&layout_visible(dataset, filter, viewport), pt, params)
}
