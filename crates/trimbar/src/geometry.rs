#![forbid(unsafe_code)]

//! Screen-space ↔ normalized mapping along the track.
//!
//! The host owns layout. It hands the selector a [`LayoutSource`] with every
//! event, and the selector asks it for a fresh [`TrackLayout`] each time it
//! needs to map a coordinate, so a resize between two events is picked up
//! without any invalidation step.
//!
//! All functions here are pure. The only guarded condition is a track whose
//! padding swallows its whole width: mapping into it yields `0.0` instead of
//! dividing by zero.

/// Measured horizontal geometry of the track, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackLayout {
    /// Total measured width of the track view.
    pub width: f64,
    /// Inset from the left edge.
    pub padding_left: f64,
    /// Inset from the right edge.
    pub padding_right: f64,
}

impl TrackLayout {
    /// Layout with no padding.
    #[inline]
    #[must_use]
    pub const fn new(width: f64) -> Self {
        Self {
            width,
            padding_left: 0.0,
            padding_right: 0.0,
        }
    }

    /// Set left and right padding.
    #[inline]
    #[must_use]
    pub const fn with_padding(mut self, left: f64, right: f64) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    /// Width between the paddings. Negative when the paddings overlap.
    #[inline]
    #[must_use]
    pub fn usable_width(&self) -> f64 {
        self.width - self.padding_left - self.padding_right
    }

    /// Whether there is no usable width left for mapping.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.usable_width() <= 0.0
    }

    /// Screen X of the padded track's center.
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.padding_left + self.usable_width() / 2.0
    }

    /// Map a screen X to a normalized track position. See [`screen_to_normalized`].
    #[inline]
    #[must_use]
    pub fn to_normalized(&self, x: f64) -> f64 {
        screen_to_normalized(x, self.width, self.padding_left, self.padding_right)
    }

    /// Map a normalized track position to a screen X. See [`normalized_to_screen`].
    #[inline]
    #[must_use]
    pub fn to_screen(&self, value: f64) -> f64 {
        normalized_to_screen(value, self.width, self.padding_left, self.padding_right)
    }
}

/// Inverse-affine map from a screen X to a normalized track position.
///
/// The result is not clamped: a point left of the track maps below `0.0`.
/// Returns `0.0` when `track_width` leaves no room between the paddings.
#[must_use]
pub fn screen_to_normalized(
    x: f64,
    track_width: f64,
    padding_left: f64,
    padding_right: f64,
) -> f64 {
    let usable = track_width - padding_left - padding_right;
    if usable <= 0.0 {
        return 0.0;
    }
    (x - padding_left) / usable
}

/// Affine map from a normalized track position to a screen X.
#[must_use]
pub fn normalized_to_screen(
    value: f64,
    track_width: f64,
    padding_left: f64,
    padding_right: f64,
) -> f64 {
    padding_left + value * (track_width - padding_left - padding_right)
}

// ---------------------------------------------------------------------------
// LayoutSource
// ---------------------------------------------------------------------------

/// Host-side layout query.
///
/// Implemented for [`TrackLayout`] itself (a fixed layout) and for any
/// `Fn() -> TrackLayout`, so a host can pass a closure reading its live view
/// measurements.
pub trait LayoutSource {
    /// Current track layout.
    fn track_layout(&self) -> TrackLayout;
}

impl LayoutSource for TrackLayout {
    #[inline]
    fn track_layout(&self) -> TrackLayout {
        *self
    }
}

impl<F> LayoutSource for F
where
    F: Fn() -> TrackLayout,
{
    #[inline]
    fn track_layout(&self) -> TrackLayout {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn maps_padded_track_both_ways() {
        let layout = TrackLayout::new(120.0).with_padding(10.0, 10.0);
        assert_eq!(layout.usable_width(), 100.0);
        assert_eq!(layout.to_screen(0.0), 10.0);
        assert_eq!(layout.to_screen(1.0), 110.0);
        assert_eq!(layout.to_screen(0.25), 35.0);
        assert_eq!(layout.to_normalized(35.0), 0.25);
        assert_eq!(layout.to_normalized(110.0), 1.0);
    }

    #[test]
    fn normalized_is_not_clamped() {
        let layout = TrackLayout::new(100.0);
        assert_eq!(layout.to_normalized(-50.0), -0.5);
        assert_eq!(layout.to_normalized(150.0), 1.5);
    }

    #[test]
    fn zero_width_track_maps_to_zero() {
        assert_eq!(screen_to_normalized(40.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(screen_to_normalized(40.0, 20.0, 10.0, 10.0), 0.0);
        assert_eq!(screen_to_normalized(40.0, 15.0, 10.0, 10.0), 0.0);
        assert!(TrackLayout::new(20.0).with_padding(10.0, 10.0).is_degenerate());
    }

    #[test]
    fn midpoint_respects_asymmetric_padding() {
        let layout = TrackLayout::new(100.0).with_padding(20.0, 0.0);
        assert_eq!(layout.midpoint(), 60.0);
    }

    #[test]
    fn closure_layout_is_queried_every_time() {
        let width = Cell::new(100.0);
        let source = || TrackLayout::new(width.get());
        assert_eq!(source.track_layout().width, 100.0);
        width.set(250.0);
        assert_eq!(source.track_layout().width, 250.0);
    }
}
