#![forbid(unsafe_code)]

//! Deciding which handle a press grabs.
//!
//! A handle is hit when the touch lies within `half_width * tolerance` of the
//! handle's screen position. The default tolerance is wider than the drawn
//! handle so it stays easy to grab on touch screens.
//!
//! When both windows contain the touch (a collapsed selection), the side of
//! the track decides: a touch right of the midpoint grabs MIN and a touch
//! left of it grabs MAX. Pulling from the side touched then widens the range
//! instead of pushing a handle into the wall.

use std::fmt;

/// One of the two selection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Min,
    Max,
}

impl Handle {
    /// The opposite handle.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("min"),
            Self::Max => f.write_str("max"),
        }
    }
}

/// Default hit window, as a multiple of the handle half width.
pub const DEFAULT_HIT_TOLERANCE: f64 = 2.0;

/// Handle picker with a tunable hit window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbHitTester {
    tolerance: f64,
}

impl Default for ThumbHitTester {
    fn default() -> Self {
        Self::new(DEFAULT_HIT_TOLERANCE)
    }
}

impl ThumbHitTester {
    #[inline]
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    #[inline]
    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Whether `touch_x` is inside the hit window of a handle at `handle_x`.
    #[inline]
    #[must_use]
    pub fn is_within(&self, touch_x: f64, handle_x: f64, half_width: f64) -> bool {
        (touch_x - handle_x).abs() <= half_width * self.tolerance
    }

    /// Pick the handle under `touch_x`, or `None` when neither is hit.
    ///
    /// `midpoint_x` is the screen X of the track center, used only to break
    /// the tie when both handles are hit.
    #[must_use]
    pub fn hit_test(
        &self,
        touch_x: f64,
        min_x: f64,
        max_x: f64,
        half_width: f64,
        midpoint_x: f64,
    ) -> Option<Handle> {
        let on_min = self.is_within(touch_x, min_x, half_width);
        let on_max = self.is_within(touch_x, max_x, half_width);
        match (on_min, on_max) {
            (true, true) if touch_x > midpoint_x => Some(Handle::Min),
            (true, true) => Some(Handle::Max),
            (true, false) => Some(Handle::Min),
            (false, true) => Some(Handle::Max),
            (false, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_touch_resolves_to_that_handle() {
        let tester = ThumbHitTester::default();
        assert_eq!(
            tester.hit_test(10.0, 10.0, 90.0, 5.0, 50.0),
            Some(Handle::Min)
        );
        assert_eq!(
            tester.hit_test(90.0, 10.0, 90.0, 5.0, 50.0),
            Some(Handle::Max)
        );
    }

    #[test]
    fn window_is_tolerance_times_half_width() {
        let tester = ThumbHitTester::default();
        assert_eq!(
            tester.hit_test(20.0, 10.0, 90.0, 5.0, 50.0),
            Some(Handle::Min)
        );
        assert_eq!(tester.hit_test(20.5, 10.0, 90.0, 5.0, 50.0), None);
        assert_eq!(
            tester.hit_test(80.0, 10.0, 90.0, 5.0, 50.0),
            Some(Handle::Max)
        );
    }

    #[test]
    fn empty_track_is_no_hit() {
        let tester = ThumbHitTester::default();
        assert_eq!(tester.hit_test(50.0, 10.0, 90.0, 5.0, 50.0), None);
    }

    #[test]
    fn coincident_handles_break_tie_by_side() {
        let tester = ThumbHitTester::default();
        assert_eq!(
            tester.hit_test(70.0, 50.0, 50.0, 10.0, 50.0),
            Some(Handle::Min)
        );
        assert_eq!(
            tester.hit_test(30.0, 50.0, 50.0, 10.0, 50.0),
            Some(Handle::Max)
        );
        // Exactly on the midpoint counts as the left half.
        assert_eq!(
            tester.hit_test(50.0, 50.0, 50.0, 10.0, 50.0),
            Some(Handle::Max)
        );
    }

    #[test]
    fn narrower_tolerance_shrinks_window() {
        let tester = ThumbHitTester::new(1.0);
        assert_eq!(tester.hit_test(16.0, 10.0, 90.0, 5.0, 50.0), None);
        assert_eq!(
            tester.hit_test(15.0, 10.0, 90.0, 5.0, 50.0),
            Some(Handle::Min)
        );
    }

    #[test]
    fn other_flips() {
        assert_eq!(Handle::Min.other(), Handle::Max);
        assert_eq!(Handle::Max.other(), Handle::Min);
        assert_eq!(Handle::Max.to_string(), "max");
    }
}
