#![forbid(unsafe_code)]

//! Read-only geometry for drawing the selector.
//!
//! A [`TrackFrame`] is everything a renderer needs in screen X coordinates:
//! where the handles are, which parts of the track lie outside the selection
//! (shaded), where the selection border runs, and which handle to highlight.
//! Building one never mutates the selector.

use crate::geometry::TrackLayout;
use crate::hit_test::Handle;
use crate::range::NormalizedRange;

/// Horizontal interval `[start, end]` in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub start: f64,
    pub end: f64,
}

impl Extent {
    #[inline]
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `end - start`, zero when inverted.
    #[inline]
    #[must_use]
    pub fn len(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0.0
    }
}

/// Screen geometry of one selector frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackFrame {
    /// Screen X of the MIN handle position.
    pub min_x: f64,
    /// Screen X of the MAX handle position.
    pub max_x: f64,
    /// Shaded area left of the selection, from the view's left edge.
    pub left_shade: Extent,
    /// Shaded area right of the selection, up to the right padding.
    pub right_shade: Extent,
    /// Top/bottom border of the selection, inset by half a handle each side.
    pub border: Extent,
    /// MIN handle body, drawn right of its position.
    pub min_handle: Extent,
    /// MAX handle body, drawn left of its position.
    pub max_handle: Extent,
    /// Handle to draw in its pressed state.
    pub pressed: Option<Handle>,
}

impl TrackFrame {
    #[must_use]
    pub fn compute(
        layout: &TrackLayout,
        range: NormalizedRange,
        handle_width: f64,
        pressed: Option<Handle>,
    ) -> Self {
        let min_x = layout.to_screen(range.min);
        let max_x = layout.to_screen(range.max);
        let half = handle_width / 2.0;
        Self {
            min_x,
            max_x,
            left_shade: Extent::new(0.0, min_x),
            right_shade: Extent::new(max_x, layout.width - layout.padding_right),
            border: Extent::new(min_x + half, max_x - half),
            min_handle: Extent::new(min_x, min_x + handle_width),
            max_handle: Extent::new(max_x - handle_width, max_x),
            pressed,
        }
    }

    /// Whether `handle` should be drawn highlighted.
    #[inline]
    #[must_use]
    pub fn is_pressed(&self, handle: Handle) -> bool {
        self.pressed == Some(handle)
    }
}
