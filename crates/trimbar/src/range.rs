#![forbid(unsafe_code)]

//! The selection value model.
//!
//! [`RangeModel`] holds two normalized pairs:
//!
//! - [`NormalizedRange`]: the live handle positions as fractions of the
//!   padded track. This is what gets drawn.
//! - [`CommittedRange`]: the positions as fractions of the *time* track (the
//!   track minus both handle bodies), written by every tracked update. This
//!   is what the absolute getters report.
//!
//! # Invariants
//!
//! 1. `0 <= normalized.min <= normalized.max <= 1` after every setter.
//! 2. Both committed values are in `[0, 1]`.
//! 3. `selected_min()` / `selected_max()` derive from the committed range only.
//!
//! Setters never reject input. Out-of-range values are clamped, and
//! degenerate bounds (`min == max`) pin the handles to their defaults.

/// Absolute extent represented by the whole track (e.g. milliseconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsoluteBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for AbsoluteBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 60_000.0,
        }
    }
}

impl AbsoluteBounds {
    #[inline]
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`.
    #[inline]
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the bounds collapse to a single point.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Absolute value → unclamped fraction of the span. `0.0` when degenerate.
    #[must_use]
    pub fn to_normalized(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (value - self.min) / self.span()
    }

    /// Fraction of the span → absolute value.
    #[inline]
    #[must_use]
    pub fn to_absolute(&self, normalized: f64) -> f64 {
        self.min + normalized * self.span()
    }
}

/// Live handle positions, fractions of the padded track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRange {
    pub min: f64,
    pub max: f64,
}

impl Default for NormalizedRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Handle positions as last resolved by a tracked update, fractions of the
/// time track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommittedRange {
    pub min: f64,
    pub max: f64,
}

impl Default for CommittedRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

#[inline]
fn unit_clamp(value: f64) -> f64 {
    // NaN falls through both comparisons; pin it to the lower edge.
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Minimum pixel gap between the inner edges of the two handle bodies.
///
/// `raw = min_span / span * (usable_width - 2 * handle_width)`. Spans longer
/// than `long_threshold` keep four decimals, shorter spans round up to a
/// whole pixel. Degenerate inputs yield `0.0`.
#[must_use]
pub fn min_gap_px(
    bounds: AbsoluteBounds,
    min_span: f64,
    usable_width: f64,
    handle_width: f64,
    long_threshold: f64,
) -> f64 {
    let span = bounds.span();
    let time_width = usable_width - 2.0 * handle_width;
    if span <= 0.0 || time_width <= 0.0 || min_span <= 0.0 {
        return 0.0;
    }
    let raw = min_span / span * time_width;
    if span > long_threshold {
        (raw * 10_000.0).round() / 10_000.0
    } else {
        raw.ceil()
    }
}

// ---------------------------------------------------------------------------
// RangeModel
// ---------------------------------------------------------------------------

/// Selection state plus the absolute domain it maps onto.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeModel {
    bounds: AbsoluteBounds,
    min_span: f64,
    normalized: NormalizedRange,
    committed: CommittedRange,
}

impl Default for RangeModel {
    fn default() -> Self {
        Self::new(AbsoluteBounds::default(), 0.0)
    }
}

impl RangeModel {
    /// Full selection over `bounds`.
    #[must_use]
    pub fn new(bounds: AbsoluteBounds, min_span: f64) -> Self {
        Self {
            bounds,
            min_span,
            normalized: NormalizedRange::default(),
            committed: CommittedRange::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> AbsoluteBounds {
        self.bounds
    }

    /// Replace the absolute extent. Normalized state is kept as is.
    pub fn set_bounds(&mut self, bounds: AbsoluteBounds) {
        self.bounds = bounds;
    }

    #[inline]
    #[must_use]
    pub fn min_span(&self) -> f64 {
        self.min_span
    }

    pub fn set_min_span(&mut self, min_span: f64) {
        self.min_span = min_span;
    }

    #[inline]
    #[must_use]
    pub fn normalized(&self) -> NormalizedRange {
        self.normalized
    }

    #[inline]
    #[must_use]
    pub fn committed(&self) -> CommittedRange {
        self.committed
    }

    /// No sub-range can satisfy the minimum span: the selector ignores input.
    #[inline]
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.bounds.span() <= self.min_span
    }

    /// Store `clamp(0, 1, min(value, max))`.
    pub fn set_min_value(&mut self, value: f64) {
        self.normalized.min = unit_clamp(value.min(self.normalized.max));
    }

    /// Store `clamp(0, 1, max(value, min))`.
    pub fn set_max_value(&mut self, value: f64) {
        self.normalized.max = unit_clamp(value.max(self.normalized.min));
    }

    /// Write the committed MIN value, clamped to `[0, 1]`.
    pub fn commit_min(&mut self, value: f64) {
        self.committed.min = unit_clamp(value);
    }

    /// Write the committed MAX value, clamped to `[0, 1]`.
    pub fn commit_max(&mut self, value: f64) {
        self.committed.max = unit_clamp(value);
    }

    /// Set the MIN handle from an absolute value and commit it.
    pub fn set_selected_min(&mut self, value: f64) {
        if self.bounds.is_degenerate() {
            self.set_min_value(0.0);
        } else {
            self.set_min_value(self.bounds.to_normalized(value));
        }
        self.committed.min = self.normalized.min;
    }

    /// Set the MAX handle from an absolute value and commit it.
    pub fn set_selected_max(&mut self, value: f64) {
        if self.bounds.is_degenerate() {
            self.set_max_value(1.0);
        } else {
            self.set_max_value(self.bounds.to_normalized(value));
        }
        self.committed.max = self.normalized.max;
    }

    /// Absolute start of the committed selection.
    #[must_use]
    pub fn selected_min(&self) -> f64 {
        self.bounds.to_absolute(self.committed.min)
    }

    /// Absolute end of the committed selection.
    #[must_use]
    pub fn selected_max(&self) -> f64 {
        self.bounds.to_absolute(self.committed.max)
    }

    /// Pixel minimum gap for the current layout. See [`min_gap_px`].
    #[must_use]
    pub fn min_gap_px(&self, usable_width: f64, handle_width: f64, long_threshold: f64) -> f64 {
        min_gap_px(
            self.bounds,
            self.min_span,
            usable_width,
            handle_width,
            long_threshold,
        )
    }

    /// Overwrite both pairs verbatim (state restore).
    pub(crate) fn restore(&mut self, normalized: NormalizedRange, committed: CommittedRange) {
        self.normalized = normalized;
        self.committed = committed;
    }
}
