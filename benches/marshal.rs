//! Marshalling benchmarks
//!
//! Measures the per-frame cost of converting arguments and running a draw
//! call through the bridge.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rexx_raylib::{to_color, to_long, to_text, Bridge, Function, HostArg, IntegerMode, MarshalConfig, Recorder};

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    group.bench_function("color", |b| {
        b.iter(|| to_color(black_box(HostArg::from("#E62937FF"))))
    });

    for input in ["7", "-2147483648", "42abc", "   1280px"] {
        group.bench_with_input(BenchmarkId::new("integer", input), input, |b, input| {
            b.iter(|| to_long(black_box(HostArg::from(input)), IntegerMode::Lenient))
        });
    }

    for len in [8usize, 64, 1024] {
        let text = "x".repeat(len);
        group.bench_with_input(BenchmarkId::new("text", len), &text, |b, text| {
            b.iter(|| to_text(black_box(HostArg::from(text.as_str()))))
        });
    }

    group.finish();
}

fn bench_entry_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_points");

    let rect = ["10", "20", "30", "40", "#E62937FF"].map(HostArg::from);
    group.bench_function("draw_rectangle", |b| {
        let mut bridge = Bridge::new(Recorder::new(), MarshalConfig::default());
        b.iter(|| {
            let reply = bridge.call(Function::DrawRectangle, black_box(&rect));
            bridge.graphics_mut().take_calls();
            reply
        })
    });

    let text = ["Congrats! You created your first window!", "190", "200", "20", "#C8C8C8FF"].map(HostArg::from);
    group.bench_function("draw_text", |b| {
        let mut bridge = Bridge::new(Recorder::new(), MarshalConfig::default());
        b.iter(|| {
            let reply = bridge.call(Function::DrawText, black_box(&text));
            bridge.graphics_mut().take_calls();
            reply
        })
    });

    group.finish();
}

criterion_group!(benches, bench_conversions, bench_entry_points);
criterion_main!(benches);
