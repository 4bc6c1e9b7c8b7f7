use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use idle_sweep::{DiagonalSweep, FrameBuffer, ThemeKind};
use idle_sweep_test_scenes::seeded_state;

const DRAWABLE_SIZES: [(u32, u32); 3] = [(320, 240), (800, 600), (1920, 1080)];

fn bench_idle_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("idle_sweep_frame");
    for (width, height) in DRAWABLE_SIZES {
        let mut state = seeded_state(42, ThemeKind::Dark);
        let mut frame = FrameBuffer::new(width, height).expect("frame allocation");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    state.advance(black_box(0.016));
                    state.render(&mut frame);
                    black_box(frame.pixels()[0])
                })
            },
        );
    }
    group.finish();
}

fn bench_diagonal_sweep(c: &mut Criterion) {
    let mut sweep = DiagonalSweep::new();
    let mut frame = FrameBuffer::new(800, 600).expect("frame allocation");
    c.bench_function("diagonal_sweep_800x600", |b| {
        b.iter(|| {
            sweep.advance();
            sweep.render(&mut frame);
            black_box(frame.pixels()[0])
        })
    });
}

criterion_group!(benches, bench_idle_sweep, bench_diagonal_sweep);
criterion_main!(benches);
