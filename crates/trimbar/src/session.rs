#![forbid(unsafe_code)]

//! Live state of one press → release interaction.

use crate::event::PointerId;
use crate::hit_test::Handle;

/// Coarse interaction phase derived from a [`TouchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No handle pressed.
    Idle,
    /// A handle is pressed but tracking has not started (slop not crossed).
    Pressed,
    /// Pointer moves are being tracked.
    Dragging,
}

/// Active pointer, anchor, and pressed handle of an interaction.
///
/// At most one pointer drives the session. Secondary pointers only re-anchor
/// it (see `RangeSelector::handle_event`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchSession {
    active_pointer: Option<PointerId>,
    down_x: f64,
    dragging: bool,
    pressed: Option<Handle>,
    collapsed: bool,
}

impl TouchSession {
    #[inline]
    #[must_use]
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    /// X where the active pointer was anchored.
    #[inline]
    #[must_use]
    pub fn down_x(&self) -> f64 {
        self.down_x
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    #[must_use]
    pub fn pressed(&self) -> Option<Handle> {
        self.pressed
    }

    /// Whether the last tracked update hit the minimum-gap clamp.
    #[inline]
    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match (self.pressed, self.dragging) {
            (_, true) => DragPhase::Dragging,
            (Some(_), false) => DragPhase::Pressed,
            (None, false) => DragPhase::Idle,
        }
    }

    pub(crate) fn anchor(&mut self, pointer: PointerId, x: f64) {
        self.active_pointer = Some(pointer);
        self.down_x = x;
    }

    pub(crate) fn press(&mut self, handle: Handle) {
        self.pressed = Some(handle);
        self.collapsed = false;
    }

    pub(crate) fn start_tracking(&mut self) {
        self.dragging = true;
    }

    pub(crate) fn stop_tracking(&mut self) {
        self.dragging = false;
    }

    pub(crate) fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Back to idle.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
