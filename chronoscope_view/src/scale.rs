// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Linear map from a world-space domain (years) onto a view-space range (pixels).
#[derive(Clone, Debug, PartialEq)]
pub struct TimeScale {
    domain: Range<f64>,
    range: Range<f64>,
}

impl TimeScale {
    /// Creates a scale mapping `domain` linearly onto `range`.
    #[must_use]
    pub fn new(domain: Range<f64>, range: Range<f64>) -> Self {
        Self { domain, range }
    }

    /// Returns the world-space domain.
    #[must_use]
    pub fn domain(&self) -> Range<f64> {
        self.domain.clone()
    }

    /// Returns the view-space range.
    #[must_use]
    pub fn range(&self) -> Range<f64> {
        self.range.clone()
    }

    /// Replaces the view-space range, keeping the domain.
    pub fn set_range(&mut self, range: Range<f64>) {
        self.range = range;
    }

    /// Maps a domain value into the range.
    ///
    /// A degenerate domain maps everything onto the middle of the range.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let d_len = self.domain.end - self.domain.start;
        let r_len = self.range.end - self.range.start;
        if d_len == 0.0 {
            return self.range.start + r_len * 0.5;
        }
        self.range.start + (value - self.domain.start) * (r_len / d_len)
    }

    /// Maps a range value back into the domain.
    #[must_use]
    pub fn invert(&self, value: f64) -> f64 {
        let d_len = self.domain.end - self.domain.start;
        let r_len = self.range.end - self.range.start;
        if r_len == 0.0 {
            return self.domain.start + d_len * 0.5;
        }
        self.domain.start + (value - self.range.start) * (d_len / r_len)
    }
}

/// Current zoom/pan state along the X axis.
///
/// Maps a base-scale pixel `v` to `v * k + x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    /// Scale factor.
    pub k: f64,
    /// Translation in view pixels.
    pub x: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    /// The identity transform (`k = 1`, `x = 0`).
    pub const IDENTITY: Self = Self { k: 1.0, x: 0.0 };

    /// Creates a transform with the given scale and translation.
    #[must_use]
    pub const fn new(k: f64, x: f64) -> Self {
        Self { k, x }
    }

    /// Applies the transform to a base-scale pixel coordinate.
    #[must_use]
    pub fn apply_x(&self, value: f64) -> f64 {
        value * self.k + self.x
    }

    /// Inverts [`ZoomTransform::apply_x`].
    #[must_use]
    pub fn invert_x(&self, value: f64) -> f64 {
        (value - self.x) / self.k
    }

    /// Returns this transform translated by `dx` view pixels.
    #[must_use]
    pub fn translated(self, dx: f64) -> Self {
        Self {
            k: self.k,
            x: self.x + dx,
        }
    }

    /// Returns the transform with scale `k` that keeps `anchor` (a view-space
    /// coordinate) fixed on screen.
    #[must_use]
    pub fn rescaled_about(self, anchor: f64, k: f64) -> Self {
        let base = self.invert_x(anchor);
        Self { k, x: anchor - base * k }
    }

    /// Returns `true` when both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.k.is_finite() && self.x.is_finite()
    }
}

/// Allowed zoom scale interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleExtent {
    min: f64,
    max: f64,
}

impl Default for ScaleExtent {
    fn default() -> Self {
        Self::new(0.3, 100.0)
    }
}

impl ScaleExtent {
    /// Creates an extent; bounds are normalized so that `min <= max`.
    ///
    /// NaN bounds fall back to the default extent.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min.is_nan() || max.is_nan() {
            return Self::default();
        }
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `k` into the extent.
    #[must_use]
    pub fn clamp(&self, k: f64) -> f64 {
        k.clamp(self.min, self.max)
    }
}
