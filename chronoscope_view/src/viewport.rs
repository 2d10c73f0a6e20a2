// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::Size;

use crate::scale::{ScaleExtent, TimeScale, ZoomTransform};

/// Smallest base range span kept when the surface is narrower than its margins.
const MIN_RANGE_SPAN: f64 = 1.0;

/// Static configuration of a [`Viewport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// World-space domain in years.
    pub domain: Range<f64>,
    /// Screen margin on each side of the base range, in logical pixels.
    pub margin: f64,
    /// Allowed zoom scale interval.
    pub scale_extent: ScaleExtent,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            domain: -3200.0..2030.0,
            margin: 60.0,
            scale_extent: ScaleExtent::default(),
        }
    }
}

/// Horizontal time viewport.
///
/// `Viewport` combines a base [`TimeScale`] (domain onto
/// `[margin, width - margin]`) with the current [`ZoomTransform`]. The scale
/// component of the transform always lies inside the configured
/// [`ScaleExtent`].
#[derive(Clone, Debug)]
pub struct Viewport {
    config: ViewConfig,
    base: TimeScale,
    transform: ZoomTransform,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport with the default configuration.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_config(ViewConfig::default(), width, height)
    }

    /// Creates a viewport with an explicit configuration.
    ///
    /// The initial transform is the identity, clamped into the scale extent.
    #[must_use]
    pub fn with_config(config: ViewConfig, width: f64, height: f64) -> Self {
        let base = TimeScale::new(config.domain.clone(), base_range(width, config.margin));
        let transform = ZoomTransform::new(config.scale_extent.clamp(1.0), 0.0);
        Self {
            config,
            base,
            transform,
            width,
            height,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Logical width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Logical height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Logical size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the base (unzoomed) scale.
    #[must_use]
    pub fn base(&self) -> &TimeScale {
        &self.base
    }

    /// Recomputes the base range for a new logical size.
    ///
    /// The zoom transform is kept. Returns `true` if the size changed.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.base.set_range(base_range(width, self.config.margin));
        true
    }

    /// Returns the current zoom transform.
    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// Returns the current zoom scale `k`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.k
    }

    /// Replaces the zoom transform, clamping its scale into the extent.
    ///
    /// Non-finite transforms are ignored. Returns `true` if the stored
    /// transform changed.
    pub fn set_transform(&mut self, transform: ZoomTransform) -> bool {
        if !transform.is_finite() {
            return false;
        }
        let clamped = ZoomTransform::new(self.config.scale_extent.clamp(transform.k), transform.x);
        if clamped == self.transform {
            return false;
        }
        self.transform = clamped;
        true
    }

    /// Pans by `dx` logical pixels.
    pub fn pan_by(&mut self, dx: f64) -> bool {
        self.set_transform(self.transform.translated(dx))
    }

    /// Returns the transform [`Viewport::zoom_about`] would apply.
    ///
    /// The scale is clamped before the translation is solved, so `anchor_x`
    /// stays fixed even when the requested scale is out of range. A factor
    /// that is not a positive number yields the current transform.
    #[must_use]
    pub fn zoomed_about(&self, anchor_x: f64, factor: f64) -> ZoomTransform {
        if factor.is_nan() || factor <= 0.0 {
            return self.transform;
        }
        let k = self.config.scale_extent.clamp(self.transform.k * factor);
        self.transform.rescaled_about(anchor_x, k)
    }

    /// Multiplies the scale by `factor`, keeping `anchor_x` fixed on screen.
    ///
    /// When the new scale clamps, the anchor is kept fixed for the clamped
    /// scale instead.
    pub fn zoom_about(&mut self, anchor_x: f64, factor: f64) -> bool {
        self.set_transform(self.zoomed_about(anchor_x, factor))
    }

    /// Maps a year onto a logical screen X coordinate.
    #[must_use]
    pub fn year_to_screen_x(&self, year: f64) -> f64 {
        self.transform.apply_x(self.base.apply(year))
    }

    /// Maps a logical screen X coordinate back onto a year.
    #[must_use]
    pub fn screen_x_to_year(&self, x: f64) -> f64 {
        self.base.invert(self.transform.invert_x(x))
    }

    /// Returns the year range currently covering `[0, width]`.
    #[must_use]
    pub fn visible_domain(&self) -> Range<f64> {
        let start = self.screen_x_to_year(0.0);
        let end = self.screen_x_to_year(self.width);
        if start <= end { start..end } else { end..start }
    }
}

fn base_range(width: f64, margin: f64) -> Range<f64> {
    let end = (width - margin).max(margin + MIN_RANGE_SPAN);
    margin..end
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{ViewConfig, Viewport};
    use crate::{ScaleExtent, ZoomTransform};

    #[test]
    fn zoom_request_beyond_extent_is_clamped() {
        let mut vp = Viewport::new(1000.0, 600.0);
        assert!(vp.set_transform(ZoomTransform::new(500.0, 12.0)));
        assert_eq!(vp.scale(), 100.0);
        assert_eq!(vp.transform().x, 12.0);

        vp.set_transform(ZoomTransform::new(0.01, 0.0));
        assert_eq!(vp.scale(), 0.3);
    }

    #[test]
    fn non_finite_transform_is_ignored() {
        let mut vp = Viewport::new(1000.0, 600.0);
        vp.set_transform(ZoomTransform::new(2.0, 5.0));
        assert!(!vp.set_transform(ZoomTransform::new(f64::NAN, 0.0)));
        assert!(!vp.set_transform(ZoomTransform::new(2.0, f64::INFINITY)));
        assert_eq!(vp.transform(), ZoomTransform::new(2.0, 5.0));
    }

    #[test]
    fn resize_keeps_transform_and_moves_base_range() {
        let mut vp = Viewport::new(1000.0, 600.0);
        vp.set_transform(ZoomTransform::new(3.0, -250.0));
        assert!(vp.resize(1400.0, 700.0));
        assert_eq!(vp.transform(), ZoomTransform::new(3.0, -250.0));
        assert_eq!(vp.base().range(), 60.0..1340.0);
        assert!(!vp.resize(1400.0, 700.0));
    }

    #[test]
    fn narrow_surface_keeps_monotonic_base_range() {
        let vp = Viewport::new(50.0, 50.0);
        let range = vp.base().range();
        assert!(range.end > range.start);
        assert!(vp.year_to_screen_x(0.0) < vp.year_to_screen_x(1.0));
    }

    #[test]
    fn visible_domain_at_identity_extends_past_margins() {
        let vp = Viewport::new(1000.0, 600.0);
        let visible = vp.visible_domain();
        assert!(visible.start < -3200.0);
        assert!(visible.end > 2030.0);
        let px_per_year = 880.0 / 5230.0;
        assert!((visible.start - (-3200.0 - 60.0 / px_per_year)).abs() < 1e-6);
    }

    #[test]
    fn zoom_about_anchor_keeps_year_under_pointer() {
        let mut vp = Viewport::new(1000.0, 600.0);
        let anchor = 420.0;
        let year = vp.screen_x_to_year(anchor);
        assert!(vp.zoom_about(anchor, 4.0));
        assert_eq!(vp.scale(), 4.0);
        assert!((vp.screen_x_to_year(anchor) - year).abs() < 1e-9);

        // Clamped zoom still keeps the anchor fixed.
        vp.zoom_about(anchor, 1_000.0);
        assert_eq!(vp.scale(), 100.0);
        assert!((vp.screen_x_to_year(anchor) - year).abs() < 1e-6);

        assert!(!vp.zoom_about(anchor, 0.0));
    }

    #[test]
    fn zoomed_about_clamps_before_solving_the_anchor() {
        let vp = Viewport::new(1000.0, 600.0);
        let anchor = 500.0;
        let year = vp.screen_x_to_year(anchor);

        let transform = vp.zoomed_about(anchor, 1_000.0);
        assert_eq!(transform.k, 100.0);
        let mut zoomed = vp.clone();
        assert!(zoomed.set_transform(transform));
        assert!((zoomed.screen_x_to_year(anchor) - year).abs() < 1e-6);

        assert_eq!(vp.zoomed_about(anchor, -2.0), vp.transform());
        assert_eq!(vp.zoomed_about(anchor, f64::NAN), vp.transform());
    }

    #[test]
    fn pan_is_unconstrained() {
        let mut vp = Viewport::new(1000.0, 600.0);
        assert!(vp.pan_by(1.0e7));
        assert_eq!(vp.transform().x, 1.0e7);
    }

    #[test]
    fn custom_extent_clamps_initial_scale() {
        let config = ViewConfig {
            scale_extent: ScaleExtent::new(2.0, 8.0),
            ..ViewConfig::default()
        };
        let vp = Viewport::with_config(config, 800.0, 400.0);
        assert_eq!(vp.scale(), 2.0);
    }

    proptest! {
        #[test]
        fn earlier_years_map_strictly_left(
            a in -3200_i32..2030,
            b in -3200_i32..2030,
            k in 0.3_f64..100.0,
            x in -50_000.0_f64..50_000.0,
            width in 200.0_f64..3000.0,
        ) {
            prop_assume!(a != b);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            let mut vp = Viewport::new(width, 600.0);
            vp.set_transform(ZoomTransform::new(k, x));
            prop_assert!(vp.year_to_screen_x(f64::from(lo)) < vp.year_to_screen_x(f64::from(hi)));
        }
    }
}
