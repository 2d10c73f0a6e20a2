// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronoscope_events --heading-base-level=0

//! Chronoscope Events: the dataset side of the timeline.
//!
//! This crate owns everything that is known about events before any pixel is
//! computed:
//! - [`Event`] and [`Dataset`]: the immutable, ordered event list, addressed
//!   by [`EventId`] (the insertion index).
//! - [`Significance`]: the 1–5 rating driving visibility and emphasis.
//! - [`CategoryRegistry`]: a total lookup from category to display color and
//!   label, with deterministic fallbacks for unknown categories.
//! - [`CategoryFilter`] and [`min_significance`]: the level-of-detail (LOD)
//!   filter deciding which events are visible at a given zoom scale.
//!
//! ## Example
//!
//! ```rust
//! use chronoscope_events::{CategoryFilter, Dataset, Event, Significance};
//!
//! let dataset = Dataset::new(vec![
//!     Event::new(-776, "First Olympic Games", Significance::clamped(4), "culture"),
//!     Event::new(1969, "Moon landing", Significance::clamped(5), "science"),
//!     Event::new(1971, "Email", Significance::clamped(2), "science"),
//! ]);
//! let filter = CategoryFilter::new(["culture", "science"]).unwrap();
//!
//! // Zoomed out (k < 0.5) only significance-5 events survive.
//! let titles: Vec<&str> = dataset
//!     .visible(&filter, 0.4)
//!     .map(|(_, event)| event.title.as_str())
//!     .collect();
//! assert_eq!(titles, ["Moon landing"]);
//! ```
//!
//! ## Loading
//!
//! [`Dataset::from_json_str`] and [`CategoryRegistry::from_json_str`] accept the
//! JSON formats used by the demo scenes. Significance values outside `1..=5`
//! are clamped into range (and logged at `warn`); years must be integers.

mod category;
mod dataset;
mod event;
mod filter;

pub use category::{
    CategoryConfig, CategoryEntry, CategoryRegistry, CategoryStyle, ConfigError, DEFAULT_COLOR,
    HexColor, ResolvedCategory,
};
pub use dataset::{Dataset, DatasetError};
pub use event::{Event, EventId, Significance};
pub use filter::{CategoryFilter, FilterError, Toggle, min_significance};
