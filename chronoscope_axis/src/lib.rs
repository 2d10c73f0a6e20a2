// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronoscope_axis --heading-base-level=0

//! Chronoscope Axis: year ticks and labels.
//!
//! The year axis picks one "nice" tick interval from a fixed ladder based on
//! how many years are currently visible, then walks the visible range in
//! multiples of that interval:
//!
//! | visible span (years) | interval |
//! |---|---|
//! | > 3000 | 1000 |
//! | > 1000 | 500 |
//! | > 500 | 100 |
//! | > 100 | 50 |
//! | > 50 | 10 |
//! | otherwise | 5 |
//!
//! ```rust
//! use chronoscope_axis::{YearLabel, tick_interval, tick_years};
//!
//! assert_eq!(tick_interval(4000.0), 1000);
//! assert_eq!(tick_interval(40.0), 5);
//!
//! let years: Vec<i64> = tick_years(-1200.0..1700.0).collect();
//! assert_eq!(years, [-1000, -500, 0, 500, 1000, 1500]);
//!
//! assert_eq!(YearLabel(-776).to_string(), "776 BC");
//! assert_eq!(YearLabel(1971).to_string(), "1971");
//! ```
//!
//! Culling ticks against the screen is left to the caller, which knows the
//! year-to-pixel mapping.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

use core::fmt;
use core::ops::Range;

/// Span thresholds and the interval used above each, checked in order.
const INTERVAL_LADDER: [(f64, i64); 5] = [
    (3000.0, 1000),
    (1000.0, 500),
    (500.0, 100),
    (100.0, 50),
    (50.0, 10),
];

/// Interval used for spans at or below the last ladder threshold.
const FINEST_INTERVAL: i64 = 5;

/// `2^63`: the first tick must lie in `[-I64_LIMIT, I64_LIMIT)` to be an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Returns the tick interval, in years, for a visible span of `span` years.
#[must_use]
pub fn tick_interval(span: f64) -> i64 {
    INTERVAL_LADDER
        .iter()
        .find(|(threshold, _)| span > *threshold)
        .map_or(FINEST_INTERVAL, |&(_, interval)| interval)
}

/// Returns the tick years covering `visible`, using [`tick_interval`] of its span.
///
/// The first tick is the smallest multiple of the interval that is not less
/// than `visible.start`; ticks continue while they do not exceed
/// `visible.end`. Non-finite ranges, and ranges whose ticks would not fit in
/// an `i64`, yield no ticks.
#[must_use]
pub fn tick_years(visible: Range<f64>) -> TickYears {
    let step = tick_interval(visible.end - visible.start);
    TickYears::new(visible, step)
}

/// Iterator over tick years produced by [`tick_years`].
#[derive(Clone, Debug)]
pub struct TickYears {
    next: i64,
    end: f64,
    step: i64,
    done: bool,
}

impl TickYears {
    fn new(visible: Range<f64>, step: i64) -> Self {
        if !visible.start.is_finite() || !visible.end.is_finite() || visible.end < visible.start {
            return Self {
                next: 0,
                end: 0.0,
                step,
                done: true,
            };
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "tick intervals are small enough to be exact in f64"
        )]
        let step_f = step as f64;
        let first = libm::ceil(visible.start / step_f) * step_f;
        if !(-I64_LIMIT..I64_LIMIT).contains(&first) {
            return Self {
                next: 0,
                end: 0.0,
                step,
                done: true,
            };
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "range is checked before the cast"
        )]
        let first = first as i64;
        Self {
            next: first,
            end: visible.end,
            step,
            done: false,
        }
    }

    /// The interval between consecutive ticks, in years.
    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }
}

impl Iterator for TickYears {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "tick years are small enough to be exact in f64"
        )]
        let year = self.next as f64;
        if year > self.end {
            self.done = true;
            return None;
        }
        let current = self.next;
        match self.next.checked_add(self.step) {
            Some(next) => self.next = next,
            None => self.done = true,
        }
        Some(current)
    }
}

/// Display adapter rendering a year as `"N"` or, for negative years, `"N BC"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearLabel(pub i64);

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "{} BC", self.0.unsigned_abs())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
