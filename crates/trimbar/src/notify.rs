#![forbid(unsafe_code)]

//! Range-changed notifications to a single external listener.
//!
//! The selector reports at three points of an interaction: the press, each
//! tracked move (only with `notify_while_dragging`), and the release. A
//! cancelled drag produces a separate [`RangeChangeListener::on_drag_cancelled`]
//! signal and no range report.
//!
//! Closures of type `FnMut(&RangeChange)` implement the listener trait.

use std::fmt;

use crate::hit_test::Handle;

/// Interaction point a notification was emitted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeChangeKind {
    Press,
    Move,
    Release,
}

/// Payload of a range-changed notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeChange {
    /// Absolute start of the committed selection.
    pub selected_min: f64,
    /// Absolute end of the committed selection.
    pub selected_max: f64,
    pub kind: RangeChangeKind,
    /// The last tracked update was limited by the minimum span.
    pub collapsed: bool,
    /// Handle being interacted with.
    pub handle: Option<Handle>,
}

/// Receiver of range-changed notifications.
pub trait RangeChangeListener {
    fn on_range_changed(&mut self, change: &RangeChange);

    /// A drag ended through cancellation rather than release.
    fn on_drag_cancelled(&mut self) {}
}

impl<F> RangeChangeListener for F
where
    F: FnMut(&RangeChange),
{
    fn on_range_changed(&mut self, change: &RangeChange) {
        self(change);
    }
}

/// Holds the (optional) listener and counts deliveries.
#[derive(Default)]
pub struct ChangeNotifier {
    listener: Option<Box<dyn RangeChangeListener>>,
    delivered: u64,
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("has_listener", &self.listener.is_some())
            .field("delivered", &self.delivered)
            .finish()
    }
}

impl ChangeNotifier {
    /// Replace the listener. Returns the previous one.
    pub fn set_listener(
        &mut self,
        listener: Box<dyn RangeChangeListener>,
    ) -> Option<Box<dyn RangeChangeListener>> {
        self.listener.replace(listener)
    }

    /// Remove and return the listener.
    pub fn take_listener(&mut self) -> Option<Box<dyn RangeChangeListener>> {
        self.listener.take()
    }

    #[inline]
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Range reports delivered to a listener so far.
    #[inline]
    #[must_use]
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn notify(&mut self, change: &RangeChange) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_range_changed(change);
            self.delivered += 1;
        }
    }

    pub fn notify_cancelled(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_drag_cancelled();
        }
    }
}
