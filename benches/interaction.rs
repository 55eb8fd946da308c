//! Benchmarks for layout lookups and interaction dispatch.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridview::layout::{Axis, AxisTrack};
use gridview::GridView;

/// Binary-search coordinate lookup across track sizes.
fn bench_index_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_at");
    for count in [1_000u32, 100_000, 1_000_000] {
        let track = AxisTrack::new(Axis::Row, count, 24.0);
        let extent = track.total_extent();
        group.bench_with_input(BenchmarkId::from_parameter(count), &track, |b, track| {
            let mut offset = 0.0f32;
            b.iter(|| {
                offset = (offset + 12_345.67) % extent;
                black_box(track.index_at(black_box(offset)))
            });
        });
    }
    group.finish();
}

/// Visible-range computation for a scrolled viewport.
fn bench_visible_range(c: &mut Criterion) {
    let mut grid = GridView::new_test(100_001, 1_001, 24.0, 80.0, 48.0);
    grid.resize(1920.0, 1080.0);
    grid.scroll_by(30_000.0, 1_000_000.0);
    let state = grid.state();

    c.bench_function("visible_range_100k_rows", |b| {
        b.iter(|| {
            black_box(state.viewport.visible_rows(&state.data.rows));
            black_box(state.viewport.visible_cols(&state.data.cols));
        })
    });
}

/// Full pointer-down dispatch through the handler chain.
fn bench_pointer_dispatch(c: &mut Criterion) {
    let mut grid = GridView::new_test(10_001, 101, 24.0, 80.0, 48.0);
    grid.resize(1920.0, 1080.0);

    c.bench_function("pointer_click_cycle", |b| {
        let mut x = 100.0f32;
        b.iter(|| {
            x = 100.0 + (x + 37.0) % 1_500.0;
            grid.pointer_down(black_box(x), 500.0, false, false);
            grid.pointer_move(black_box(x + 40.0), 520.0);
            grid.pointer_up(black_box(x + 40.0), 520.0);
        })
    });
}

/// Drag-selection statistics over a populated region.
fn bench_selection_stats(c: &mut Criterion) {
    let mut grid = GridView::new_test(1_001, 101, 24.0, 80.0, 48.0);
    grid.resize(1920.0, 1080.0);
    for row in 1..=200u32 {
        for col in 1..=20u32 {
            grid.set_cell(row, col, &format!("{}", row * col));
        }
    }
    grid.pointer_down(100.0, 50.0, false, false);
    grid.pointer_move(1_600.0, 1_000.0);
    grid.pointer_up(1_600.0, 1_000.0);

    c.bench_function("selection_stats_200x20", |b| {
        b.iter(|| black_box(grid.selection_stats()))
    });
}

criterion_group!(
    benches,
    bench_index_at,
    bench_visible_range,
    bench_pointer_dispatch,
    bench_selection_stats
);
criterion_main!(benches);
