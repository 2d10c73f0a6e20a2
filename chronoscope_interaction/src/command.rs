// Copyright 2025 the Chronoscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronoscope_view::ZoomTransform;
use kurbo::Point;

/// Input to the interaction state machine.
///
/// Pointer positions are logical pixels from the surface's top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// The pointer moved.
    PointerMove(Point),
    /// The pointer was clicked.
    PointerClick(Point),
    /// The pointer left the surface.
    PointerLeave,
    /// The detail panel was closed.
    Dismiss,
    /// A filter button was toggled.
    ToggleCategory(String),
    /// Only this category should be shown.
    SoloCategory(String),
    /// Every known category should be shown.
    ShowAllCategories,
    /// A zoom gesture produced a new transform. The scale is clamped on apply.
    Zoom(ZoomTransform),
    /// The surface changed size or device pixel ratio.
    Resize {
        /// Logical width.
        width: f64,
        /// Logical height.
        height: f64,
        /// Device pixel ratio.
        scale_factor: f64,
    },
}

bitflags::bitflags! {
    /// What a [`Command`] changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// The hovered event changed.
        const HOVER     = 0b0000_0001;
        /// The selected event changed.
        const SELECTION = 0b0000_0010;
        /// The active category set changed.
        const FILTER    = 0b0000_0100;
        /// The zoom transform changed.
        const VIEW      = 0b0000_1000;
        /// The logical size or device pixel ratio changed.
        const SIZE      = 0b0001_0000;
    }
}

impl Changes {
    /// Returns `true` if the frame must be redrawn.
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        !self.is_empty()
    }
}
