#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use trimbar::{PointerEvent, PointerEventKind, PointerSample, RangeSelector, SelectorConfig, TrackLayout};

#[derive(Debug, Arbitrary)]
struct Input {
    width: u16,
    padding: u8,
    handle: u8,
    span: u32,
    min_span: u32,
    notify: bool,
    drag_on_press: bool,
    events: Vec<RawEvent>,
}

#[derive(Debug, Arbitrary)]
struct RawEvent {
    kind: u8,
    action_index: u8,
    pointers: Vec<(u8, i16)>,
    setter: Option<(bool, i16)>,
}

fuzz_target!(|input: Input| {
    let layout = TrackLayout::new(f64::from(input.width))
        .with_padding(f64::from(input.padding), f64::from(input.padding));
    let mut selector = RangeSelector::new(
        SelectorConfig::default()
            .with_bounds(0.0, f64::from(input.span))
            .with_min_span(f64::from(input.min_span))
            .with_handle_width(f64::from(input.handle))
            .with_notify_while_dragging(input.notify)
            .with_drag_on_press(input.drag_on_press),
    );

    for raw in input.events.iter().take(256) {
        if let Some((is_min, value)) = raw.setter {
            let value = f64::from(value) / 1000.0;
            if is_min {
                selector.set_normalized_min(value);
            } else {
                selector.set_normalized_max(value);
            }
        }

        let kind = match raw.kind % 6 {
            0 => PointerEventKind::Down,
            1 => PointerEventKind::Move,
            2 => PointerEventKind::Up,
            3 => PointerEventKind::PointerDown,
            4 => PointerEventKind::PointerUp,
            _ => PointerEventKind::Cancel,
        };
        let pointers = raw
            .pointers
            .iter()
            .take(4)
            .map(|&(id, x)| PointerSample::new(u32::from(id % 4), f64::from(x)))
            .collect();
        let event = PointerEvent::new(kind, pointers, usize::from(raw.action_index % 4));
        selector.handle_event(&event, &layout);

        // Post-conditions that must always hold:
        let live = selector.normalized();
        let committed = selector.committed();
        assert!(0.0 <= live.min && live.min <= live.max && live.max <= 1.0, "live {live:?}");
        assert!((0.0..=1.0).contains(&committed.min), "committed {committed:?}");
        assert!((0.0..=1.0).contains(&committed.max), "committed {committed:?}");
        let _ = selector.frame(&layout);
    }
});
