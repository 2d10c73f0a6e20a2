// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronoscope_interaction --heading-base-level=0

//! Chronoscope Interaction: turns input commands into state changes and
//! redraws.
//!
//! [`ViewState`] is the state machine. It owns the viewport, the active
//! category filter, the hovered and selected events and the device pixel
//! ratio, and reports what each [`Command`] changed as [`Changes`].
//!
//! [`Controller`] wraps a [`ViewState`] together with the dataset, a
//! renderer and an optional surface. Every dispatched command that changes
//! something triggers one synchronous redraw; commands that change nothing
//! draw nothing.
//!
//! Rules the state machine keeps:
//! - a click on empty space deselects;
//! - hover is tracked while something is selected, but
//!   [`Controller::tooltip`] is suppressed until the selection is dismissed;
//! - the last active category cannot be toggled off, and categories
//!   outside the registry and dataset are ignored;
//! - after a filter or zoom change, a hovered or selected event that is no
//!   longer visible is dropped.
//!
//! ```rust
//! use chronoscope_events::{CategoryRegistry, Dataset, Event, Significance};
//! use chronoscope_imaging_ref::RecordingSurface;
//! use chronoscope_interaction::{Changes, Command, Controller};
//!
//! let dataset = Dataset::new(vec![Event::new(1066, "Hastings", Significance::MAX, "war")]);
//! let mut controller: Controller<RecordingSurface> =
//!     Controller::new(dataset, CategoryRegistry::default(), 1000.0, 600.0).unwrap();
//! controller.attach_surface(RecordingSurface::new(1000.0, 600.0));
//!
//! // The only category cannot be switched off.
//! let changes = controller.dispatch(Command::ToggleCategory("war".into()));
//! assert_eq!(changes, Changes::empty());
//! assert_eq!(controller.surface().unwrap().frames(), 1);
//! ```

mod command;
mod controller;
mod state;

pub use command::{Changes, Command};
pub use controller::{Controller, Detail, Tooltip};
pub use state::ViewState;
