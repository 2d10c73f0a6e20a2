// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::event::{Event, Significance};

/// Minimum significance visible at zoom scale `k`.
///
/// Zooming out tightens the threshold so only the most significant events
/// remain; zooming in progressively reveals the rest:
/// `k < 0.5 → 5`, `k < 1 → 4`, `k < 2 → 3`, `k < 5 → 2`, otherwise `1`.
#[must_use]
pub fn min_significance(k: f64) -> Significance {
    let level = if k < 0.5 {
        5
    } else if k < 1.0 {
        4
    } else if k < 2.0 {
        3
    } else if k < 5.0 {
        2
    } else {
        1
    };
    Significance::clamped(level)
}

/// Errors produced by [`CategoryFilter`] construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// The initial set of active categories was empty.
    #[error("a category filter needs at least one active category")]
    Empty,
}

/// Outcome of [`CategoryFilter::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// The category was inactive and is now active.
    Activated,
    /// The category was active and is now inactive.
    Deactivated,
    /// The category is the last active one and stays active.
    RejectedLastActive,
    /// The category is not one the filter was created with.
    Unknown,
}

impl Toggle {
    /// Returns `true` if the active set changed.
    #[must_use]
    pub fn changed(self) -> bool {
        matches!(self, Self::Activated | Self::Deactivated)
    }
}

/// The set of active categories. Never empty.
///
/// The categories given to [`CategoryFilter::new`] are the known set; only
/// those can ever be active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    known: SmallVec<[String; 8]>,
    active: SmallVec<[String; 8]>,
}

impl CategoryFilter {
    /// Creates a filter that knows, and activates, the given categories.
    ///
    /// Duplicates are ignored. Fails if no category is given.
    pub fn new<I, S>(categories: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut known: SmallVec<[String; 8]> = SmallVec::new();
        for category in categories {
            let category = category.into();
            if !known.contains(&category) {
                known.push(category);
            }
        }
        if known.is_empty() {
            return Err(FilterError::Empty);
        }
        Ok(Self {
            active: known.clone(),
            known,
        })
    }

    /// Returns `true` if `category` is one this filter can activate.
    #[must_use]
    pub fn is_known(&self, category: &str) -> bool {
        self.known.iter().any(|c| c == category)
    }

    /// Known categories, in the order they were first given.
    pub fn known(&self) -> impl Iterator<Item = &str> + '_ {
        self.known.iter().map(String::as_str)
    }

    /// Returns `true` if `category` is active.
    #[must_use]
    pub fn is_active(&self, category: &str) -> bool {
        self.active.iter().any(|c| c == category)
    }

    /// Active categories, in activation order.
    pub fn active(&self) -> impl Iterator<Item = &str> + '_ {
        self.active.iter().map(String::as_str)
    }

    /// Number of active categories (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Always `false`; provided for API symmetry with [`CategoryFilter::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Flips `category`, refusing to deactivate the last active category.
    ///
    /// Unknown categories are left alone.
    pub fn toggle(&mut self, category: &str) -> Toggle {
        if !self.is_known(category) {
            return Toggle::Unknown;
        }
        match self.active.iter().position(|c| c == category) {
            Some(_) if self.active.len() == 1 => Toggle::RejectedLastActive,
            Some(slot) => {
                self.active.remove(slot);
                Toggle::Deactivated
            }
            None => {
                self.active.push(category.to_owned());
                Toggle::Activated
            }
        }
    }

    /// Makes `category` the only active category. Returns `true` on change.
    ///
    /// An unknown category changes nothing.
    pub fn solo(&mut self, category: &str) -> bool {
        if !self.is_known(category) || (self.active.len() == 1 && self.active[0] == category) {
            return false;
        }
        self.active.clear();
        self.active.push(category.to_owned());
        true
    }

    /// Activates every known category. Returns `true` on change.
    pub fn activate_all(&mut self) -> bool {
        let before = self.active.len();
        for category in &self.known {
            if !self.active.contains(category) {
                self.active.push(category.clone());
            }
        }
        self.active.len() != before
    }

    /// Returns `true` if `event` passes both the category and LOD tests at scale `k`.
    #[must_use]
    pub fn accepts(&self, event: &Event, k: f64) -> bool {
        event.significance >= min_significance(k) && self.is_active(&event.category)
    }
}
