//! Layout engine micro-benchmarks
//!
//! Measures full pipeline runs and incremental re-runs over stacks, grids and
//! freeform groups of increasing size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use figura::prelude::*;

fn new_board() -> Artboard {
    Artboard::new(
        ArtboardConfig::fixed(2000.0, 2000.0),
        Box::new(EstimatingMeasurer::default()),
    )
    .expect("Failed to create artboard")
}

/// A vertical stack of horizontal rows, each holding a label and a swatch.
fn build_stacked_rows(board: &mut Artboard, rows: usize) -> Vec<ElementId> {
    let root = board.root();
    let column = board
        .add_stack(root, StackSpec::vertical().spacing(4.0))
        .expect("Failed to add stack");
    (0..rows)
        .map(|i| {
            let row = board
                .add_stack(column, StackSpec::horizontal().spacing(8.0).align(Alignment::Center))
                .expect("Failed to add row");
            board.add_rect(row, 16.0, 16.0).expect("Failed to add rect");
            board
                .add_text(row, TextSpec::new(format!("Row {}", i)))
                .expect("Failed to add text")
        })
        .collect()
}

fn benchmark_stack_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_stack_full_run");

    for rows in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |b, &rows| {
            b.iter(|| {
                let mut board = new_board();
                build_stacked_rows(&mut board, rows);
                board.run().expect("Failed to run layout")
            });
        });
    }

    group.finish();
}

fn benchmark_stack_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_stack_incremental");

    for rows in [10, 100, 1000] {
        let mut board = new_board();
        let labels = build_stacked_rows(&mut board, rows);
        board.run().expect("Failed to run layout");
        let target = labels[labels.len() / 2];

        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |b, _| {
            let mut toggle = false;
            b.iter(|| {
                toggle = !toggle;
                let text = if toggle { "Changed" } else { "Row" };
                board
                    .tree_mut()
                    .set_text(target, text)
                    .expect("Failed to set text");
                board.run().expect("Failed to run layout")
            });
        });
    }

    group.finish();
}

fn benchmark_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_grid");

    for cells in [16, 256, 2048] {
        group.bench_with_input(BenchmarkId::new("cells", cells), &cells, |b, &cells| {
            b.iter(|| {
                let mut board = new_board();
                let root = board.root();
                let grid = board
                    .add_grid(root, GridSpec::new(16).gaps(2.0, 2.0))
                    .expect("Failed to add grid");
                for i in 0..cells {
                    let side = 8.0 + (i % 5) as f32;
                    board.add_rect(grid, side, side).expect("Failed to add rect");
                }
                board.run().expect("Failed to run layout")
            });
        });
    }

    group.finish();
}

fn benchmark_freeform_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_freeform");

    for children in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("children", children),
            &children,
            |b, &children| {
                b.iter(|| {
                    let mut board = new_board();
                    let root = board.root();
                    let scatter = board
                        .add_group(root, GroupSpec::auto())
                        .expect("Failed to add group");
                    for i in 0..children {
                        let id = board.add_circle(scatter, 3.0).expect("Failed to add circle");
                        let offset = (i as f32 * 7.0) % 300.0 - 150.0;
                        board
                            .position(id, PositionSpec::by(offset, -offset))
                            .expect("Failed to position");
                    }
                    board.run().expect("Failed to run layout")
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_stack_full_run,
    benchmark_stack_incremental,
    benchmark_grid,
    benchmark_freeform_normalization
);
criterion_main!(benches);
