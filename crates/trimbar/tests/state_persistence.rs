#![forbid(unsafe_code)]
#![cfg(feature = "state-persistence")]

//! JSON save/restore of the selector state.
//!
//! Run:
//!   cargo test -p trimbar --features state-persistence --test state_persistence

use trimbar::{PersistError, PointerEvent, RangePersistState, RangeSelector, SelectorConfig, TrackLayout};

fn dragged_selector() -> RangeSelector {
    let layout = TrackLayout::new(600.0);
    let mut selector = RangeSelector::new(
        SelectorConfig::default()
            .with_bounds(0.0, 90_000.0)
            .with_min_span(3_000.0),
    );
    for event in [
        PointerEvent::down(0, 0.0),
        PointerEvent::moved(0, 140.0),
        PointerEvent::up(0, 140.0),
        PointerEvent::down(1, 600.0),
        PointerEvent::moved(1, 410.0),
        PointerEvent::up(1, 410.0),
    ] {
        selector.handle_event(&event, &layout);
    }
    selector
}

#[test]
fn restore_from_json_reproduces_selection() {
    let selector = dragged_selector();
    let json = selector.save_state().to_json().unwrap();

    let mut restored = RangeSelector::new(
        SelectorConfig::default()
            .with_bounds(0.0, 90_000.0)
            .with_min_span(3_000.0),
    );
    restored.restore_state(RangePersistState::from_json(&json).unwrap());

    assert_eq!(restored.selected_min(), selector.selected_min());
    assert_eq!(restored.selected_max(), selector.selected_max());
    assert_eq!(restored.normalized(), selector.normalized());
    assert_eq!(restored.committed(), selector.committed());
}

#[test]
fn record_carries_all_four_values() {
    let state = dragged_selector().save_state();
    let value: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
    for key in [
        "normalized_min",
        "normalized_max",
        "normalized_min_time",
        "normalized_max_time",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert!(state.normalized_min < state.normalized_max);
}

#[test]
fn restore_does_not_reapply_bounds() {
    let state = dragged_selector().save_state();
    let mut restored = RangeSelector::new(SelectorConfig::default().with_bounds(0.0, 30_000.0));
    restored.restore_state(state);
    assert_eq!(restored.normalized().min, state.normalized_min);
    assert_eq!(
        restored.selected_min(),
        state.normalized_min_time * 30_000.0
    );
}

#[test]
fn malformed_json_is_an_error() {
    let err = RangePersistState::from_json("{\"normalized_min\": \"zero\"}").unwrap_err();
    assert!(matches!(err, PersistError::Json(_)));
    assert!(err.to_string().starts_with("JSON error"));
}
