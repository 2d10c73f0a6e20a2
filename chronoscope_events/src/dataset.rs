// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;

use log::warn;
use serde::Deserialize;

use crate::event::{Event, EventId, Significance};
use crate::filter::CategoryFilter;

/// Errors produced while loading a [`Dataset`].
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The input could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The input was not a JSON array of events.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Wire shape of an event; significance is validated after parsing.
#[derive(Deserialize)]
struct RawEvent {
    year: i32,
    title: String,
    #[serde(default)]
    description: String,
    significance: i64,
    category: String,
}

/// Immutable, ordered list of events.
///
/// Iteration always follows insertion order, which is also [`EventId`] order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    events: Vec<Event>,
}

impl Dataset {
    /// Wraps an ordered event list.
    ///
    /// Lists longer than `u32::MAX` are truncated, since ids are `u32`.
    #[must_use]
    pub fn new(mut events: Vec<Event>) -> Self {
        let max = u32::MAX as usize;
        if events.len() > max {
            warn!("dataset truncated from {} to {max} events", events.len());
            events.truncate(max);
        }
        Self { events }
    }

    /// Parses a JSON array of events.
    ///
    /// Significance outside `1..=5` is clamped into range and logged.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let raw: Vec<RawEvent> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Reads a JSON array of events from `reader`.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DatasetError> {
        let raw: Vec<RawEvent> = serde_json::from_reader(io::BufReader::new(reader))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: Vec<RawEvent>) -> Self {
        let events = raw
            .into_iter()
            .map(|r| {
                let significance = Significance::clamped(r.significance);
                if i64::from(significance.get()) != r.significance {
                    warn!(
                        "event {:?} ({}): significance {} clamped to {significance}",
                        r.title, r.year, r.significance
                    );
                }
                Event {
                    year: r.year,
                    title: r.title,
                    description: r.description,
                    significance,
                    category: r.category,
                }
            })
            .collect();
        Self::new(events)
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if there are no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the event with the given id.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.get(id.index())
    }

    /// All events with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EventId, &Event)> + '_ {
        self.events.iter().enumerate().map(|(i, event)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Dataset::new caps the length at u32::MAX"
            )]
            let id = EventId(i as u32);
            (id, event)
        })
    }

    /// Events passing `filter` at zoom scale `k`, in insertion order.
    pub fn visible<'a>(
        &'a self,
        filter: &'a CategoryFilter,
        k: f64,
    ) -> impl Iterator<Item = (EventId, &'a Event)> + 'a {
        self.iter().filter(move |(_, event)| filter.accepts(event, k))
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for event in &self.events {
            if !seen.contains(&event.category.as_str()) {
                seen.push(&event.category);
            }
        }
        seen
    }
}
