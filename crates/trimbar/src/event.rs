#![forbid(unsafe_code)]

//! Pointer input, abstracted from platform touch APIs.
//!
//! A [`PointerEvent`] carries every pointer currently down, the way a
//! platform motion event does, plus the index of the pointer the event is
//! about (`action_index`). Only the horizontal coordinate matters to a
//! range selector, so samples carry `x` alone.
//!
//! # Design Notes
//!
//! - `Down` is the first pointer touching; `PointerDown` / `PointerUp` are
//!   additional pointers arriving or leaving while others stay down.
//! - `Up` is the last pointer leaving; `Cancel` ends the gesture without a
//!   release position.
//! - Pointer ids are stable for the lifetime of one pointer; indices are not.

/// Stable identity of one pointer for the duration of its contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

/// One pointer's position within an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f64,
}

impl PointerSample {
    #[inline]
    #[must_use]
    pub const fn new(id: u32, x: f64) -> Self {
        Self {
            id: PointerId(id),
            x,
        }
    }
}

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// First pointer went down.
    Down,
    /// One or more pointers moved.
    Move,
    /// Last pointer went up.
    Up,
    /// An additional pointer went down.
    PointerDown,
    /// A non-last pointer went up.
    PointerUp,
    /// The gesture was taken away (e.g. by an ancestor).
    Cancel,
}

/// A pointer event with all pointers currently in contact.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pointers: Vec<PointerSample>,
    /// Index into `pointers` of the pointer this event is about. Meaningful
    /// for `PointerDown` / `PointerUp`.
    pub action_index: usize,
}

impl PointerEvent {
    /// Build an event from its parts.
    #[must_use]
    pub fn new(kind: PointerEventKind, pointers: Vec<PointerSample>, action_index: usize) -> Self {
        Self {
            kind,
            pointers,
            action_index,
        }
    }

    /// Single-pointer `Down`.
    #[must_use]
    pub fn down(id: u32, x: f64) -> Self {
        Self::new(PointerEventKind::Down, vec![PointerSample::new(id, x)], 0)
    }

    /// Single-pointer `Move`.
    #[must_use]
    pub fn moved(id: u32, x: f64) -> Self {
        Self::new(PointerEventKind::Move, vec![PointerSample::new(id, x)], 0)
    }

    /// Single-pointer `Up`.
    #[must_use]
    pub fn up(id: u32, x: f64) -> Self {
        Self::new(PointerEventKind::Up, vec![PointerSample::new(id, x)], 0)
    }

    /// `Cancel` with no pointers attached.
    #[must_use]
    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, Vec::new(), 0)
    }

    /// `PointerDown` for the pointer at `action_index` of `pointers`.
    #[must_use]
    pub fn pointer_down(pointers: Vec<PointerSample>, action_index: usize) -> Self {
        Self::new(PointerEventKind::PointerDown, pointers, action_index)
    }

    /// `PointerUp` for the pointer at `action_index` of `pointers`.
    #[must_use]
    pub fn pointer_up(pointers: Vec<PointerSample>, action_index: usize) -> Self {
        Self::new(PointerEventKind::PointerUp, pointers, action_index)
    }

    /// Number of pointers in contact.
    #[inline]
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// The most recently reported pointer.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<PointerSample> {
        self.pointers.last().copied()
    }

    /// Sample at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<PointerSample> {
        self.pointers.get(index).copied()
    }

    /// Index of the pointer with `id`, if still present.
    #[must_use]
    pub fn find_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    /// X of the pointer with `id`, if still present.
    #[must_use]
    pub fn x_of(&self, id: PointerId) -> Option<f64> {
        self.find_index(id).map(|index| self.pointers[index].x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pointer_constructors() {
        let down = PointerEvent::down(3, 12.5);
        assert_eq!(down.kind, PointerEventKind::Down);
        assert_eq!(down.pointer_count(), 1);
        assert_eq!(down.last(), Some(PointerSample::new(3, 12.5)));
        assert_eq!(PointerEvent::cancel().pointer_count(), 0);
    }

    #[test]
    fn lookup_by_id() {
        let event = PointerEvent::pointer_down(
            vec![PointerSample::new(0, 10.0), PointerSample::new(7, 80.0)],
            1,
        );
        assert_eq!(event.find_index(PointerId(7)), Some(1));
        assert_eq!(event.x_of(PointerId(0)), Some(10.0));
        assert_eq!(event.x_of(PointerId(9)), None);
        assert_eq!(event.get(2), None);
    }
}
