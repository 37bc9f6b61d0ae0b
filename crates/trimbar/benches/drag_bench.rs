//! Benchmark: per-event cost of the range selector.
//!
//! Run with: `cargo bench -p trimbar --bench drag_bench`
//!
//! Measures hit testing, a single resolution step, and a full
//! press/drag/release gesture at pointer-move rates.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use trimbar::resolve::{ResolveInput, resolve_handle};
use trimbar::{
    Handle, NormalizedRange, PointerEvent, RangeSelector, SelectorConfig, ThumbHitTester,
    TrackLayout,
};

// ===========================================================================
// Building blocks
// ===========================================================================

fn bench_hit_test(c: &mut Criterion) {
    let tester = ThumbHitTester::default();
    c.bench_function("hit_test/overlapping", |b| {
        b.iter(|| {
            tester.hit_test(
                black_box(305.0),
                black_box(300.0),
                black_box(300.0),
                12.0,
                300.0,
            )
        });
    });
}

fn bench_resolve(c: &mut Criterion) {
    let layout = TrackLayout::new(600.0);
    let input = ResolveInput {
        handle: Handle::Min,
        touch_x: 420.0,
        range: NormalizedRange { min: 0.1, max: 0.8 },
        handle_width: 24.0,
        min_gap: 46.0,
        snap_tolerance: 0.5,
        edge_dead_zone: 2.0 / 3.0,
    };
    c.bench_function("resolve/min_collapse", |b| {
        b.iter(|| resolve_handle(black_box(&layout), black_box(&input)));
    });
}

// ===========================================================================
// Full gesture
// ===========================================================================

fn gesture(moves: usize, width: f64) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(moves + 2);
    events.push(PointerEvent::down(0, 0.0));
    for step in 0..moves {
        let x = width * 0.8 * (step as f64 / moves as f64);
        events.push(PointerEvent::moved(0, x));
    }
    events.push(PointerEvent::up(0, width * 0.8));
    events
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");
    let layout = TrackLayout::new(1080.0);

    for &moves in &[16usize, 128, 1024] {
        let events = gesture(moves, layout.width);
        for notify in [false, true] {
            let id = BenchmarkId::new(if notify { "notify" } else { "quiet" }, moves);
            group.bench_with_input(id, &events, |b, events| {
                b.iter(|| {
                    let mut selector = RangeSelector::new(
                        SelectorConfig::default().with_notify_while_dragging(notify),
                    );
                    selector.set_listener(|change: &trimbar::RangeChange| {
                        black_box(change);
                    });
                    for event in events {
                        black_box(selector.handle_event(event, &layout));
                    }
                    selector.selected_min()
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_resolve, bench_gesture);
criterion_main!(benches);
