#![forbid(unsafe_code)]

//! Selector configuration.
//!
//! Layout (track width and padding) is not configuration: the host supplies
//! it with every event through [`LayoutSource`](crate::geometry::LayoutSource).

use thiserror::Error;

use crate::hit_test::DEFAULT_HIT_TOLERANCE;
use crate::range::AbsoluteBounds;

/// Span above which the pixel minimum gap keeps sub-pixel precision
/// (five minutes, in milliseconds).
pub const DEFAULT_LONG_RANGE_THRESHOLD: f64 = 5.0 * 60.0 * 1000.0;

/// Thresholds, tolerances, and domain settings for a `RangeSelector`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// Absolute extent of the track (default: `0..60_000`).
    pub bounds: AbsoluteBounds,
    /// Minimum absolute width of the selection (default: `5_000`).
    pub min_span: f64,
    /// Handle body width in pixels (default: 24).
    pub handle_width: f64,
    /// Movement in pixels before a pressed, non-tracking pointer starts a
    /// drag (default: 8).
    pub touch_slop: f64,
    /// Hit window as a multiple of the handle half width (default: 2.0).
    pub hit_tolerance: f64,
    /// Jitter window as a multiple of the handle half width (default: 0.5).
    pub snap_tolerance: f64,
    /// Edge snap window as a fraction of the handle width (default: 2/3).
    pub edge_dead_zone: f64,
    /// Spans above this keep a four-decimal pixel gap (default: 300_000).
    pub long_range_threshold: f64,
    /// Emit a notification for every tracked move (default: false).
    pub notify_while_dragging: bool,
    /// Start tracking on the press itself instead of after slop (default: true).
    pub drag_on_press: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            bounds: AbsoluteBounds::default(),
            min_span: 5_000.0,
            handle_width: 24.0,
            touch_slop: 8.0,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            snap_tolerance: 0.5,
            edge_dead_zone: 2.0 / 3.0,
            long_range_threshold: DEFAULT_LONG_RANGE_THRESHOLD,
            notify_while_dragging: false,
            drag_on_press: true,
        }
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: f64, max: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("edge_dead_zone must be within [0, 1], got {0}")]
    DeadZoneOutOfRange(f64),
}

impl SelectorConfig {
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = AbsoluteBounds::new(min, max);
        self
    }

    #[must_use]
    pub fn with_min_span(mut self, min_span: f64) -> Self {
        self.min_span = min_span;
        self
    }

    #[must_use]
    pub fn with_handle_width(mut self, handle_width: f64) -> Self {
        self.handle_width = handle_width;
        self
    }

    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    #[must_use]
    pub fn with_hit_tolerance(mut self, hit_tolerance: f64) -> Self {
        self.hit_tolerance = hit_tolerance;
        self
    }

    #[must_use]
    pub fn with_snap_tolerance(mut self, snap_tolerance: f64) -> Self {
        self.snap_tolerance = snap_tolerance;
        self
    }

    #[must_use]
    pub fn with_edge_dead_zone(mut self, edge_dead_zone: f64) -> Self {
        self.edge_dead_zone = edge_dead_zone;
        self
    }

    #[must_use]
    pub fn with_long_range_threshold(mut self, threshold: f64) -> Self {
        self.long_range_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_notify_while_dragging(mut self, notify: bool) -> Self {
        self.notify_while_dragging = notify;
        self
    }

    #[must_use]
    pub fn with_drag_on_press(mut self, drag_on_press: bool) -> Self {
        self.drag_on_press = drag_on_press;
        self
    }

    /// Half of the handle width.
    #[inline]
    #[must_use]
    pub fn half_handle_width(&self) -> f64 {
        self.handle_width / 2.0
    }

    /// Check every numeric field.
    ///
    /// A configuration that fails here still works with `RangeSelector::new`,
    /// it just produces inert or degenerate behavior instead of an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("bounds.min", self.bounds.min),
            ("bounds.max", self.bounds.max),
            ("min_span", self.min_span),
            ("handle_width", self.handle_width),
            ("touch_slop", self.touch_slop),
            ("hit_tolerance", self.hit_tolerance),
            ("snap_tolerance", self.snap_tolerance),
            ("edge_dead_zone", self.edge_dead_zone),
            ("long_range_threshold", self.long_range_threshold),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if self.bounds.min > self.bounds.max {
            return Err(ConfigError::InvertedBounds {
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        for (field, value) in [
            ("min_span", self.min_span),
            ("touch_slop", self.touch_slop),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        for (field, value) in [
            ("handle_width", self.handle_width),
            ("hit_tolerance", self.hit_tolerance),
            ("snap_tolerance", self.snap_tolerance),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.edge_dead_zone) {
            return Err(ConfigError::DeadZoneOutOfRange(self.edge_dead_zone));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(SelectorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn builder_sets_fields() {
        let config = SelectorConfig::default()
            .with_bounds(1_000.0, 9_000.0)
            .with_min_span(500.0)
            .with_handle_width(30.0)
            .with_notify_while_dragging(true)
            .with_drag_on_press(false);
        assert_eq!(config.bounds, AbsoluteBounds::new(1_000.0, 9_000.0));
        assert_eq!(config.min_span, 500.0);
        assert_eq!(config.half_handle_width(), 15.0);
        assert!(config.notify_while_dragging);
        assert!(!config.drag_on_press);
    }

    #[test]
    fn rejects_non_finite() {
        let err = SelectorConfig::default()
            .with_min_span(f64::INFINITY)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotFinite {
                field: "min_span",
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = SelectorConfig::default()
            .with_bounds(10.0, 5.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "bounds are inverted: min 10 > max 5");
    }

    #[test]
    fn rejects_bad_widths_and_tolerances() {
        assert!(matches!(
            SelectorConfig::default().with_handle_width(0.0).validate(),
            Err(ConfigError::NotPositive {
                field: "handle_width",
                ..
            })
        ));
        assert!(matches!(
            SelectorConfig::default().with_touch_slop(-1.0).validate(),
            Err(ConfigError::Negative {
                field: "touch_slop",
                ..
            })
        ));
        assert_eq!(
            SelectorConfig::default().with_edge_dead_zone(1.5).validate(),
            Err(ConfigError::DeadZoneOutOfRange(1.5))
        );
    }

    #[test]
    fn equal_bounds_are_allowed() {
        assert!(
            SelectorConfig::default()
                .with_bounds(3.0, 3.0)
                .validate()
                .is_ok()
        );
    }
}
