// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronoscope_layout --heading-base-level=0

//! Chronoscope Layout: where each event lands on screen.
//!
//! Placement is a pure function of the event, the viewport transform and the
//! viewport height. Nothing is cached and no random state is stored, so
//! rendering and hit-testing can both recompute the same positions at any
//! time and always agree.
//!
//! - **x** comes from the viewport: `k * base(year) + x`.
//! - **y** is the axis line (`height / 2`) plus a jitter derived from a hash of
//!   the year and the first UTF-16 code unit of the title, folded into
//!   `[0, 100)`. With `h` the folded hash:
//!
//!   ```text
//!   jitter = (h / 100 - 0.5) * 0.6
//!   offset = ((5 - significance) / 5) * 0.2
//!   spread = min(height * 0.35, 200)
//!   y      = height / 2 + (jitter + offset) * spread
//!   ```
//!
//! - **radius** grows with significance and zoom:
//!   `(3 + significance * 3.5) * clamp(k * 0.5, 0.5, 2)`.
//!
//! ```rust
//! use chronoscope_events::{CategoryFilter, Dataset, Event, Significance};
//! use chronoscope_layout::{layout_visible, place};
//! use chronoscope_view::Viewport;
//!
//! let dataset = Dataset::new(vec![
//!     Event::new(1969, "Moon landing", Significance::MAX, "science"),
//!     Event::new(1971, "Email", Significance::MIN, "science"),
//! ]);
//! let filter = CategoryFilter::new(["science"]).unwrap();
//! let view = Viewport::new(1000.0, 600.0);
//!
//! // At k = 1 only significance >= 3 is visible.
//! let placed = layout_visible(&dataset, &filter, &view);
//! assert_eq!(placed.len(), 1);
//! assert_eq!(placed[0].placement, place(dataset.get(placed[0].id).unwrap(), &view));
//! ```

use chronoscope_events::{CategoryFilter, Dataset, Event, EventId, Significance};
use chronoscope_view::Viewport;
use kurbo::{Circle, Point};

/// Modulus the jitter hash is folded into.
const JITTER_BUCKETS: i64 = 100;
/// Peak-to-peak jitter, as a fraction of the spread.
const JITTER_AMPLITUDE: f64 = 0.6;
/// Largest significance offset, as a fraction of the spread.
const SIGNIFICANCE_OFFSET: f64 = 0.2;
/// Spread as a fraction of the viewport height.
const SPREAD_FRACTION: f64 = 0.35;
/// Upper bound of the spread in logical pixels.
const MAX_SPREAD: f64 = 200.0;

/// Screen position and radius of an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Dot center in logical pixels.
    pub center: Point,
    /// Dot radius in logical pixels.
    pub radius: f64,
}

impl Placement {
    /// The dot as a circle.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

/// A visible event with its placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedEvent {
    /// The event.
    pub id: EventId,
    /// Where it is drawn.
    pub placement: Placement,
}

/// Folds `(year, first UTF-16 code unit of title)` into `0..100`.
///
/// An empty title contributes a code unit of `0`.
#[must_use]
pub fn jitter_hash(year: i32, title: &str) -> u8 {
    let code = title.encode_utf16().next().unwrap_or(0);
    let mixed = i64::from(year) * 7919 + i64::from(code) * 104_729;
    // rem_euclid keeps the value in 0..100, so the conversion cannot fail.
    u8::try_from(mixed.rem_euclid(JITTER_BUCKETS)).unwrap_or_default()
}

/// Vertical spread, in logical pixels, for a viewport of the given height.
#[must_use]
pub fn spread(height: f64) -> f64 {
    (height * SPREAD_FRACTION).min(MAX_SPREAD)
}

/// Vertical position of an event for a viewport of the given height.
#[must_use]
pub fn event_y(event: &Event, height: f64) -> f64 {
    let h = f64::from(jitter_hash(event.year, &event.title));
    #[allow(
        clippy::cast_precision_loss,
        reason = "JITTER_BUCKETS is a small constant"
    )]
    let jitter = (h / JITTER_BUCKETS as f64 - 0.5) * JITTER_AMPLITUDE;
    let offset = (Significance::MAX.as_f64() - event.significance.as_f64())
        / Significance::MAX.as_f64()
        * SIGNIFICANCE_OFFSET;
    height / 2.0 + (jitter + offset) * spread(height)
}

/// Dot radius for a significance at zoom scale `k`.
#[must_use]
pub fn radius(significance: Significance, k: f64) -> f64 {
    (3.0 + significance.as_f64() * 3.5) * (k * 0.5).clamp(0.5, 2.0)
}

/// Places one event in the viewport.
#[must_use]
pub fn place(event: &Event, viewport: &Viewport) -> Placement {
    Placement {
        center: Point::new(
            viewport.year_to_screen_x(f64::from(event.year)),
            event_y(event, viewport.height()),
        ),
        radius: radius(event.significance, viewport.scale()),
    }
}

/// Places every event visible under `filter` at the viewport's scale.
///
/// The result follows dataset order; hit-testing relies on this for stable
/// tie-breaking.
#[must_use]
pub fn layout_visible(
    dataset: &Dataset,
    filter: &CategoryFilter,
    viewport: &Viewport,
) -> Vec<PlacedEvent> {
    dataset
        .visible(filter, viewport.scale())
        .map(|(id, event)| PlacedEvent {
            id,
            placement: place(event, viewport),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chronoscope_events::{Event, Significance};
    use chronoscope_view::{Viewport, ZoomTransform};

    use super::{event_y, jitter_hash, place, radius, spread};

    #[test]
    fn hash_stays_in_buckets() {
        for year in [-3200, -1, 0, 1, 2030, i32::MIN, i32::MAX] {
            for title in ["", "a", "Zed", "\u{1F600} emoji", "Ωmega"] {
                assert!(jitter_hash(year, title) < 100);
            }
        }
    }

    #[test]
    fn hash_uses_only_first_code_unit() {
        assert_eq!(jitter_hash(1066, "Hastings"), jitter_hash(1066, "H"));
        assert_ne!(jitter_hash(1066, "Hastings"), jitter_hash(1067, "Hastings"));
    }

    #[test]
    fn spread_is_capped() {
        assert_eq!(spread(400.0), 140.0);
        assert_eq!(spread(2000.0), 200.0);
    }

    #[test]
    fn y_matches_formula() {
        let event = Event::new(1215, "Magna Carta", Significance::clamped(2), "politics");
        let h = f64::from(jitter_hash(1215, "M"));
        let expected = 300.0 + ((h / 100.0 - 0.5) * 0.6 + 0.6 * 0.2) * 200.0;
        assert_eq!(event_y(&event, 600.0), expected);
    }

    #[test]
    fn y_stays_near_axis() {
        // |jitter| <= 0.3 and offset <= 0.16, so y is within 0.46 spreads.
        let event = Event::new(-500, "x", Significance::MIN, "c");
        let y = event_y(&event, 600.0);
        assert!((y - 300.0).abs() <= 0.46 * 200.0);
    }

    #[test]
    fn radius_clamps_zoom_factor() {
        let five = Significance::MAX;
        assert_eq!(radius(five, 0.3), 20.5 * 0.5);
        assert_eq!(radius(five, 1.0), 20.5 * 0.5);
        assert_eq!(radius(five, 3.0), 20.5 * 1.5);
        assert_eq!(radius(five, 100.0), 41.0);
        assert_eq!(radius(Significance::MIN, 2.0), 6.5);
    }

    #[test]
    fn placement_follows_viewport() {
        let mut view = Viewport::new(1000.0, 600.0);
        let event = Event::new(-3200, "Writing", Significance::MAX, "science");
        let before = place(&event, &view);
        assert_eq!(before.center.x, 60.0);

        view.set_transform(ZoomTransform::new(4.0, -100.0));
        let after = place(&event, &view);
        assert_eq!(after.center.x, 4.0 * 60.0 - 100.0);
        assert_eq!(after.center.y, before.center.y);
        assert_eq!(after.radius, 20.5 * 2.0);
    }
}
