// rust/engine/benches/fill_grid_bench.rs
#![forbid(unsafe_code)]

/**
 * Grid filler micro-benchmarks.
 *
 * Focus:
 * - Pure simulation (`simulate`) on the built-in scenario and a larger grid
 * - Headless playback (`Animator` onto `RecordingSurface`)
 */
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use fill_grid_engine::{simulate, Animator, ColumnRule, FillConfig, Pacing, RecordingSurface};

fn bench_simulate(c: &mut Criterion) {
    c.bench_function("engine.simulate.scenario", |b| {
        let cfg = FillConfig::scenario();
        b.iter(|| black_box(simulate(cfg.clone(), ColumnRule::uniform(57))))
    });

    c.bench_function("engine.simulate.64x64_fill_clean", |b| {
        let cfg = FillConfig::new(3000)
            .x_blocks(64)
            .y_blocks(64)
            .fill_empties(true)
            .clean_figure(true);
        b.iter(|| black_box(simulate(cfg.clone(), ColumnRule::uniform(7))))
    });
}

fn bench_playback(c: &mut Criterion) {
    c.bench_function("render.play.recording_surface", |b| {
        b.iter_batched(
            || simulate(FillConfig::scenario(), ColumnRule::uniform(99)).ok(),
            |sim| {
                let mut surface = RecordingSurface::new();
                if let Some(sim) = sim {
                    let _ = Animator::new(Pacing::instant()).play(&sim, &mut surface);
                }
                black_box(surface.block_count())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(fill_grid_benches, bench_simulate, bench_playback);
criterion_main!(fill_grid_benches);
