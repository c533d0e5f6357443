//! Performance benchmarks for input dispatch.
//!
//! Measures the hotkey match scan at different registry sizes and the swipe
//! classification hot path. Run with: cargo bench

use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glimpse_input::gesture::{SwipeClassifier, SwipeConfig};
use glimpse_input::{FocusTarget, Hotkey, HotkeyMatcher, HotkeyRegistry, KeyCombo, KeyPress, Point};

/// Builds a registry with `n` distinct single-letter registrations.
fn populated_registry(n: usize) -> HotkeyRegistry {
    let registry = HotkeyRegistry::new();
    for i in 0..n {
        let key = char::from(b'a' + (i % 26) as u8).to_string();
        let combo = match i / 26 {
            0 => KeyCombo::plain(&key),
            1 => KeyCombo::ctrl(&key),
            2 => KeyCombo::shift(&key),
            _ => KeyCombo::alt(&key),
        };
        registry.register(Hotkey::new(combo, "bench", "Bench", || {}));
    }
    registry
}

fn bench_hotkey_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotkey_dispatch");

    for size in [4, 16, 64].iter() {
        let matcher = HotkeyMatcher::new(populated_registry(*size));
        // Worst case: the press matches nothing, so the whole snapshot is
        // scanned.
        let press = KeyPress::plain("F12");

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_registrations", size)),
            &press,
            |b, press| {
                b.iter(|| {
                    let outcome = matcher.on_key_press(black_box(press), FocusTarget::General);
                    black_box(outcome)
                });
            },
        );
    }

    group.finish();
}

fn bench_swipe_classification(c: &mut Criterion) {
    c.bench_function("swipe_classification", |b| {
        let start = Instant::now();
        let end = start + Duration::from_millis(150);
        b.iter(|| {
            let mut classifier = SwipeClassifier::new(SwipeConfig::default());
            classifier.touch_start(black_box(Point::new(300.0, 200.0)), 1, start);
            let direction = classifier.touch_end(black_box(Point::new(150.0, 210.0)), end);
            black_box(direction)
        });
    });
}

criterion_group!(benches, bench_hotkey_dispatch, bench_swipe_classification);
criterion_main!(benches);
