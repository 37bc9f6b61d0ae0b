#![forbid(unsafe_code)]

//! Per-move value resolution for the pressed handle.
//!
//! Positions are measured along the padded track (`0..=L`, `L` the usable
//! width). The MIN handle body occupies `[min_x, min_x + H]` and the MAX
//! handle body `[max_x - H, max_x]`, so both bodies sit inside the selection
//! and the visible gap between them is `max_x - min_x - 2H`. The *time
//! track* is what remains once both bodies are taken out, `L - 2H` wide:
//!
//! ```text
//! committed.min = min_x / (L - 2H)
//! committed.max = 1 - (L - max_x) / (L - 2H)
//! ```
//!
//! Steps, in order:
//!
//! 1. A touch within `snap_tolerance * H/2` of the handle's current position
//!    leaves the value untouched (sub-pixel jitter).
//! 2. The candidate follows the touch 1:1 from the handle's current position.
//! 3. The candidate is clamped so the gap to the other handle never drops
//!    below the minimum gap; hitting that clamp marks the result collapsed.
//! 4. Within `edge_dead_zone * H` of the handle's own track edge the
//!    candidate snaps onto the edge.

use crate::geometry::TrackLayout;
use crate::hit_test::Handle;
use crate::range::NormalizedRange;

/// Everything a single resolution step reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveInput {
    /// Handle being dragged.
    pub handle: Handle,
    /// Screen X of the active pointer.
    pub touch_x: f64,
    /// Current live handle positions.
    pub range: NormalizedRange,
    /// Handle body width `H`.
    pub handle_width: f64,
    /// Minimum pixel gap between the handle bodies.
    pub min_gap: f64,
    /// Jitter window, multiple of `H/2`.
    pub snap_tolerance: f64,
    /// Edge snap window, fraction of `H`.
    pub edge_dead_zone: f64,
}

/// Outcome of one resolution step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// The touch is within the jitter window or the layout has no room; keep
    /// the current value and do not commit.
    Unchanged,
    /// A new position for the handle.
    Moved {
        /// New live value, fraction of the padded track, clamped to `[0, 1]`.
        normalized: f64,
        /// New committed value, fraction of the time track, clamped to `[0, 1]`.
        committed: f64,
        /// The minimum-gap clamp decided the position.
        collapsed: bool,
    },
}

impl Resolution {
    /// Whether the minimum gap limited this step.
    #[inline]
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Self::Moved { collapsed: true, .. })
    }
}

/// Resolve the pressed handle's new value for a touch at `input.touch_x`.
#[must_use]
pub fn resolve_handle(layout: &TrackLayout, input: &ResolveInput) -> Resolution {
    let track = layout.usable_width();
    let handle_width = input.handle_width;
    let time_track = track - 2.0 * handle_width;
    if track <= 0.0 || time_track <= 0.0 {
        return Resolution::Unchanged;
    }

    let touch = input.touch_x - layout.padding_left;
    let min_x = input.range.min * track;
    let max_x = input.range.max * track;
    let snap = handle_width / 2.0 * input.snap_tolerance;
    let dead_zone = handle_width * input.edge_dead_zone;

    match input.handle {
        Handle::Min => {
            if (touch - min_x).abs() <= snap {
                return Resolution::Unchanged;
            }
            let mut candidate = min_x + (touch - min_x);

            let trailing_max = (track - max_x).max(0.0);
            let limit = time_track - (trailing_max + input.min_gap);
            let mut collapsed = false;
            if candidate > limit {
                collapsed = true;
                candidate = limit;
            }
            if candidate < dead_zone {
                candidate = 0.0;
            }

            Resolution::Moved {
                normalized: unit(candidate / track),
                committed: unit(candidate / time_track),
                collapsed,
            }
        }
        Handle::Max => {
            if (touch - max_x).abs() <= snap {
                return Resolution::Unchanged;
            }
            let mut candidate = max_x + (touch - max_x);

            let limit = time_track - (min_x + input.min_gap);
            let mut trailing = track - candidate;
            let mut collapsed = false;
            if trailing > limit {
                collapsed = true;
                candidate = track - limit;
                trailing = limit;
            }
            if trailing < dead_zone {
                candidate = track;
                trailing = 0.0;
            }

            Resolution::Moved {
                normalized: unit(candidate / track),
                committed: unit(1.0 - trailing / time_track),
                collapsed,
            }
        }
    }
}

/// Committed value of `handle` resting at live position `normalized`,
/// measured on the time track of `layout`.
///
/// `None` when the layout leaves no room for both handle bodies.
#[must_use]
pub fn committed_at(
    layout: &TrackLayout,
    handle: Handle,
    normalized: f64,
    handle_width: f64,
) -> Option<f64> {
    let track = layout.usable_width();
    let time_track = track - 2.0 * handle_width;
    if track <= 0.0 || time_track <= 0.0 {
        return None;
    }
    let x = normalized * track;
    Some(match handle {
        Handle::Min => unit(x / time_track),
        Handle::Max => unit(1.0 - (track - x) / time_track),
    })
}

#[inline]
fn unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}
