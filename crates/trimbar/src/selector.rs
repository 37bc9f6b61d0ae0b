#![forbid(unsafe_code)]

//! The range selector: drag state machine over the value model.
//!
//! [`RangeSelector`] consumes a [`PointerEvent`] stream and drives the
//! [`RangeModel`] through hit testing and per-move resolution, reporting to
//! one [`RangeChangeListener`].
//!
//! # State Machine
//!
//! ```text
//! Idle ──press on handle──▶ Pressed ──slop crossed──▶ Dragging ──release──▶ Idle
//!                             │  (skipped when drag_on_press)   │
//!                             └──────────release (tap)──────────┴──cancel──▶ Idle
//! ```
//!
//! # Invariants
//!
//! 1. `0 <= normalized.min <= normalized.max <= 1` after every event.
//! 2. One pointer drives the session. `PointerDown` re-anchors to the newest
//!    pointer; `PointerUp` of the active pointer re-anchors to the remaining one.
//! 3. A press that hits no handle is never consumed.
//! 4. While not dragging, events with more than one pointer pass through.
//! 5. When `span <= min_span` every event passes through.
//! 6. A tracked update re-measures both committed values on the current
//!    layout, so a resize between drags cannot invert the selection.
//!
//! # Failure Modes
//!
//! - A pointer id missing from the event skips that update; state is kept.
//! - A pointer lost without `Up`/`Cancel` leaves the session dragging until
//!   the next press or [`RangeSelector::reset_session`]. There is no timeout.

use std::fmt;

use crate::config::{ConfigError, SelectorConfig};
use crate::event::{PointerEvent, PointerEventKind};
use crate::frame::TrackFrame;
use crate::geometry::{LayoutSource, TrackLayout};
use crate::hit_test::{Handle, ThumbHitTester};
use crate::notify::{ChangeNotifier, RangeChange, RangeChangeKind, RangeChangeListener};
use crate::persist::RangePersistState;
use crate::range::{AbsoluteBounds, CommittedRange, NormalizedRange, RangeModel};
use crate::resolve::{Resolution, ResolveInput, committed_at, resolve_handle};
use crate::session::{DragPhase, TouchSession};
use crate::{debug, trace};

/// What the host should do with an event after the selector saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Not consumed; apply default handling.
    PassThrough,
    /// Consumed.
    Consumed,
    /// Consumed, and ancestors must stop intercepting this gesture.
    Claimed,
}

impl Disposition {
    #[inline]
    #[must_use]
    pub fn is_consumed(self) -> bool {
        !matches!(self, Self::PassThrough)
    }
}

/// The parts of [`SelectorConfig`] that are not the value domain. Bounds and
/// minimum span live in the [`RangeModel`] only.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tuning {
    handle_width: f64,
    touch_slop: f64,
    snap_tolerance: f64,
    edge_dead_zone: f64,
    long_range_threshold: f64,
    notify_while_dragging: bool,
    drag_on_press: bool,
}

impl From<&SelectorConfig> for Tuning {
    fn from(config: &SelectorConfig) -> Self {
        Self {
            handle_width: config.handle_width,
            touch_slop: config.touch_slop,
            snap_tolerance: config.snap_tolerance,
            edge_dead_zone: config.edge_dead_zone,
            long_range_threshold: config.long_range_threshold,
            notify_while_dragging: config.notify_while_dragging,
            drag_on_press: config.drag_on_press,
        }
    }
}

/// Dual-handle range selector.
pub struct RangeSelector {
    tuning: Tuning,
    hit_tester: ThumbHitTester,
    model: RangeModel,
    session: TouchSession,
    notifier: ChangeNotifier,
    enabled: bool,
    suspended: bool,
}

impl fmt::Debug for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSelector")
            .field("model", &self.model)
            .field("phase", &self.session.phase())
            .field("enabled", &self.enabled)
            .field("suspended", &self.suspended)
            .finish()
    }
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl RangeSelector {
    /// Create a selector with a full selection. Does not validate `config`.
    #[must_use]
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            tuning: Tuning::from(&config),
            hit_tester: ThumbHitTester::new(config.hit_tolerance),
            model: RangeModel::new(config.bounds, config.min_span),
            session: TouchSession::default(),
            notifier: ChangeNotifier::default(),
            enabled: true,
            suspended: false,
        }
    }

    /// Create a selector after [`SelectorConfig::validate`].
    pub fn try_new(config: SelectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Current configuration, including runtime changes made through the
    /// setters below.
    #[must_use]
    pub fn config(&self) -> SelectorConfig {
        SelectorConfig {
            bounds: self.model.bounds(),
            min_span: self.model.min_span(),
            handle_width: self.tuning.handle_width,
            touch_slop: self.tuning.touch_slop,
            hit_tolerance: self.hit_tester.tolerance(),
            snap_tolerance: self.tuning.snap_tolerance,
            edge_dead_zone: self.tuning.edge_dead_zone,
            long_range_threshold: self.tuning.long_range_threshold,
            notify_while_dragging: self.tuning.notify_while_dragging,
            drag_on_press: self.tuning.drag_on_press,
        }
    }

    /// Install the listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl RangeChangeListener + 'static) {
        self.notifier.set_listener(Box::new(listener));
    }

    /// Remove the listener.
    pub fn clear_listener(&mut self) {
        self.notifier.take_listener();
    }

    #[inline]
    #[must_use]
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    // -- reconfiguration ----------------------------------------------------

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> AbsoluteBounds {
        self.model.bounds()
    }

    /// Replace the absolute extent. The normalized selection is kept.
    pub fn set_bounds(&mut self, min: f64, max: f64) {
        self.model.set_bounds(AbsoluteBounds::new(min, max));
    }

    #[inline]
    #[must_use]
    pub fn min_span(&self) -> f64 {
        self.model.min_span()
    }

    pub fn set_min_span(&mut self, min_span: f64) {
        self.model.set_min_span(min_span);
    }

    #[inline]
    #[must_use]
    pub fn notify_while_dragging(&self) -> bool {
        self.tuning.notify_while_dragging
    }

    pub fn set_notify_while_dragging(&mut self, notify: bool) {
        self.tuning.notify_while_dragging = notify;
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A disabled selector lets every event pass through.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Host-held input lock: while suspended every event passes through.
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    // -- value access -------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn model(&self) -> &RangeModel {
        &self.model
    }

    #[inline]
    #[must_use]
    pub fn normalized(&self) -> NormalizedRange {
        self.model.normalized()
    }

    #[inline]
    #[must_use]
    pub fn committed(&self) -> CommittedRange {
        self.model.committed()
    }

    /// Absolute start of the committed selection.
    #[inline]
    #[must_use]
    pub fn selected_min(&self) -> f64 {
        self.model.selected_min()
    }

    /// Absolute end of the committed selection.
    #[inline]
    #[must_use]
    pub fn selected_max(&self) -> f64 {
        self.model.selected_max()
    }

    pub fn set_selected_min(&mut self, value: f64) {
        self.model.set_selected_min(value);
    }

    pub fn set_selected_max(&mut self, value: f64) {
        self.model.set_selected_max(value);
    }

    /// Move the live MIN handle without committing.
    pub fn set_normalized_min(&mut self, value: f64) {
        self.model.set_min_value(value);
    }

    /// Move the live MAX handle without committing.
    pub fn set_normalized_max(&mut self, value: f64) {
        self.model.set_max_value(value);
    }

    #[inline]
    #[must_use]
    pub fn session(&self) -> &TouchSession {
        &self.session
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.session.phase()
    }

    /// Drop any in-progress interaction without notifying. Use when the host
    /// loses the pointer stream (focus loss, detach).
    pub fn reset_session(&mut self) {
        self.session.reset();
    }

    /// Pixel minimum gap for the current layout.
    #[must_use]
    pub fn min_gap_px<L: LayoutSource + ?Sized>(&self, layout: &L) -> f64 {
        let layout = layout.track_layout();
        self.model.min_gap_px(
            layout.usable_width(),
            self.tuning.handle_width,
            self.tuning.long_range_threshold,
        )
    }

    /// Geometry for drawing the current state.
    #[must_use]
    pub fn frame<L: LayoutSource + ?Sized>(&self, layout: &L) -> TrackFrame {
        TrackFrame::compute(
            &layout.track_layout(),
            self.model.normalized(),
            self.tuning.handle_width,
            self.session.pressed(),
        )
    }

    // -- persistence ----------------------------------------------------------

    #[must_use]
    pub fn save_state(&self) -> RangePersistState {
        RangePersistState::from_ranges(self.model.normalized(), self.model.committed())
    }

    /// Restore verbatim; bounds are not re-applied.
    pub fn restore_state(&mut self, state: RangePersistState) {
        debug!(
            message = "selector.restore",
            min = state.normalized_min,
            max = state.normalized_max
        );
        self.model.restore(state.normalized(), state.committed());
    }

    // -- event handling -------------------------------------------------------

    /// Process one pointer event to completion.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn handle_event<L: LayoutSource + ?Sized>(
        &mut self,
        event: &PointerEvent,
        layout: &L,
    ) -> Disposition {
        if let Some(reason) = self.pass_through_reason(event) {
            trace!(message = "selector.pass_through", reason, kind = ?event.kind);
            return Disposition::PassThrough;
        }

        match event.kind {
            PointerEventKind::Down => self.on_down(event, layout),
            PointerEventKind::Move => self.on_move(event, layout),
            PointerEventKind::Up => self.on_up(event, layout),
            PointerEventKind::PointerDown => self.on_pointer_down(event),
            PointerEventKind::PointerUp => self.on_pointer_up(event),
            PointerEventKind::Cancel => self.on_cancel(),
        }
    }

    fn pass_through_reason(&self, event: &PointerEvent) -> Option<&'static str> {
        if self.suspended {
            Some("suspended")
        } else if event.pointer_count() > 1 && !self.session.is_dragging() {
            Some("multi_pointer")
        } else if !self.enabled {
            Some("disabled")
        } else if self.model.is_inert() {
            Some("span_not_above_min_span")
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

impl RangeSelector {
    fn on_down<L: LayoutSource + ?Sized>(&mut self, event: &PointerEvent, layout: &L) -> Disposition {
        self.session.reset();
        let Some(sample) = event.last() else {
            return Disposition::PassThrough;
        };

        let track = layout.track_layout();
        let range = self.model.normalized();
        let Some(handle) = self.hit_tester.hit_test(
            sample.x,
            track.to_screen(range.min),
            track.to_screen(range.max),
            self.tuning.handle_width / 2.0,
            track.midpoint(),
        ) else {
            debug!(message = "selector.press_missed", x = sample.x);
            return Disposition::PassThrough;
        };

        debug!(message = "selector.press", handle = %handle, x = sample.x);
        self.session.anchor(sample.id, sample.x);
        self.session.press(handle);

        let disposition = if self.tuning.drag_on_press {
            self.session.start_tracking();
            self.track(event, layout);
            Disposition::Claimed
        } else {
            Disposition::Consumed
        };
        self.emit(RangeChangeKind::Press);
        disposition
    }

    fn on_move<L: LayoutSource + ?Sized>(&mut self, event: &PointerEvent, layout: &L) -> Disposition {
        if self.session.pressed().is_none() {
            return Disposition::PassThrough;
        }

        let mut disposition = Disposition::Consumed;
        if self.session.is_dragging() {
            self.track(event, layout);
        } else {
            let Some(x) = self
                .session
                .active_pointer()
                .and_then(|pointer| event.x_of(pointer))
            else {
                trace!(message = "selector.pointer_missing", kind = "move");
                return Disposition::Consumed;
            };
            if (x - self.session.down_x()).abs() > self.tuning.touch_slop {
                debug!(message = "selector.slop_crossed", x);
                self.session.start_tracking();
                self.track(event, layout);
                disposition = Disposition::Claimed;
            }
        }

        // Moves before slop is crossed are not tracked and not reported.
        if self.tuning.notify_while_dragging && self.session.is_dragging() {
            self.emit(RangeChangeKind::Move);
        }
        disposition
    }

    fn on_up<L: LayoutSource + ?Sized>(&mut self, event: &PointerEvent, layout: &L) -> Disposition {
        if self.session.pressed().is_none() {
            return Disposition::PassThrough;
        }

        // A release without a drag is a tap: one tracked update at the tap.
        if !self.session.is_dragging() {
            self.session.start_tracking();
        }
        self.track(event, layout);
        self.session.stop_tracking();

        debug!(
            message = "selector.release",
            handle = ?self.session.pressed(),
            collapsed = self.session.collapsed()
        );
        self.emit(RangeChangeKind::Release);
        self.session.reset();
        Disposition::Consumed
    }

    fn on_pointer_down(&mut self, event: &PointerEvent) -> Disposition {
        if self.session.pressed().is_none() {
            return Disposition::PassThrough;
        }
        if let Some(sample) = event.last() {
            self.session.anchor(sample.id, sample.x);
        }
        Disposition::Consumed
    }

    fn on_pointer_up(&mut self, event: &PointerEvent) -> Disposition {
        if self.session.pressed().is_none() {
            return Disposition::PassThrough;
        }
        let index = event.action_index;
        let Some(released) = event.get(index) else {
            trace!(message = "selector.pointer_missing", kind = "pointer_up");
            return Disposition::Consumed;
        };
        if Some(released.id) == self.session.active_pointer() {
            let remaining = if index == 0 { 1 } else { 0 };
            match event.get(remaining) {
                Some(sample) => self.session.anchor(sample.id, sample.x),
                None => trace!(message = "selector.pointer_missing", kind = "pointer_up"),
            }
        }
        Disposition::Consumed
    }

    fn on_cancel(&mut self) -> Disposition {
        let had_session = self.session.pressed().is_some() || self.session.is_dragging();
        let was_dragging = self.session.is_dragging();
        self.session.reset();
        if was_dragging {
            debug!(message = "selector.cancel");
            self.notifier.notify_cancelled();
        }
        if had_session {
            Disposition::Consumed
        } else {
            Disposition::PassThrough
        }
    }

    /// One tracked update of the pressed handle from the active pointer.
    fn track<L: LayoutSource + ?Sized>(
        &mut self,
        event: &PointerEvent,
        layout: &L,
    ) -> Option<Resolution> {
        if event.pointer_count() > 1 {
            return None;
        }
        let handle = self.session.pressed()?;
        let pointer = self.session.active_pointer()?;
        let Some(touch_x) = event.x_of(pointer) else {
            trace!(message = "selector.pointer_missing", kind = "track");
            return None;
        };

        let track = layout.track_layout();
        let min_gap = self.model.min_gap_px(
            track.usable_width(),
            self.tuning.handle_width,
            self.tuning.long_range_threshold,
        );
        let resolution = resolve_handle(
            &track,
            &ResolveInput {
                handle,
                touch_x,
                range: self.model.normalized(),
                handle_width: self.tuning.handle_width,
                min_gap,
                snap_tolerance: self.tuning.snap_tolerance,
                edge_dead_zone: self.tuning.edge_dead_zone,
            },
        );

        if let Resolution::Moved {
            normalized,
            committed,
            ..
        } = resolution
        {
            match handle {
                Handle::Min => {
                    self.model.set_min_value(normalized);
                    self.model.commit_min(committed);
                }
                Handle::Max => {
                    self.model.set_max_value(normalized);
                    self.model.commit_max(committed);
                }
            }
            // The other handle's committed value may date from another layout.
            self.recommit(handle.other(), &track);
        }
        self.session.set_collapsed(resolution.is_collapsed());
        trace!(
            message = "selector.track",
            handle = %handle,
            x = touch_x,
            min_gap,
            collapsed = resolution.is_collapsed()
        );
        Some(resolution)
    }

    /// Re-measure `handle`'s committed value from its live position on `track`.
    fn recommit(&mut self, handle: Handle, track: &TrackLayout) {
        let live = self.model.normalized();
        let normalized = match handle {
            Handle::Min => live.min,
            Handle::Max => live.max,
        };
        let Some(committed) = committed_at(track, handle, normalized, self.tuning.handle_width)
        else {
            return;
        };
        match handle {
            Handle::Min => self.model.commit_min(committed),
            Handle::Max => self.model.commit_max(committed),
        }
    }

    fn emit(&mut self, kind: RangeChangeKind) {
        let change = RangeChange {
            selected_min: self.model.selected_min(),
            selected_max: self.model.selected_max(),
            kind,
            collapsed: self.session.collapsed(),
            handle: self.session.pressed(),
        };
        self.notifier.notify(&change);
    }
}
