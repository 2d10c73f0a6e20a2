// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Identifier of an event: its index in dataset insertion order.
///
/// Ids are stable for the lifetime of the [`Dataset`](crate::Dataset) that
/// produced them, and their ordering is the dataset order.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u32);

impl EventId {
    /// Returns the id as a slice index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Importance rating of an event, always in `1..=5`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Significance(u8);

impl Significance {
    /// Lowest rating.
    pub const MIN: Self = Self(1);
    /// Highest rating.
    pub const MAX: Self = Self(5);

    /// Returns `Some` if `value` is in `1..=5`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Clamps any integer into `1..=5`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "value is clamped into 1..=5 first"
        )]
        let v = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0)) as u8;
        Self(v)
    }

    /// Returns the rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the rating as `f64`, for layout math.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dated event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Year of the event; negative years are BC.
    pub year: i32,
    /// Short title, used for labels and layout jitter.
    pub title: String,
    /// Free-form description shown by detail panels.
    pub description: String,
    /// Importance rating.
    pub significance: Significance,
    /// Category key, resolved through a [`CategoryRegistry`](crate::CategoryRegistry).
    pub category: String,
}

impl Event {
    /// Creates an event with an empty description.
    pub fn new(
        year: i32,
        title: impl Into<String>,
        significance: Significance,
        category: impl Into<String>,
    ) -> Self {
        Self {
            year,
            title: title.into(),
            description: String::new(),
            significance,
            category: category.into(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
