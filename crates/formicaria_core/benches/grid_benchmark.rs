//! Benchmark for grid access under the per-chunk sharding scheme.
//!
//! Run with: cargo bench --package formicaria_core --bench grid_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use formicaria_core::{Block, BlockGrid, WorldConfig};

fn benchmark_get(c: &mut Criterion) {
    let grid = BlockGrid::new(&WorldConfig::default()).unwrap();

    c.bench_function("grid_get", |b| {
        let mut i = 0i32;
        b.iter(|| {
            i = i.wrapping_add(17);
            let x = i.rem_euclid(grid.width());
            let y = i.rem_euclid(grid.height());
            let z = i.rem_euclid(grid.depth());
            black_box(grid.get(black_box(x), black_box(y), black_box(z)))
        });
    });
}

fn benchmark_set(c: &mut Criterion) {
    let grid = BlockGrid::new(&WorldConfig::default()).unwrap();

    c.bench_function("grid_set", |b| {
        let mut i = 0i32;
        b.iter(|| {
            i = i.wrapping_add(17);
            let x = i.rem_euclid(grid.width());
            let y = i.rem_euclid(grid.height());
            let z = i.rem_euclid(grid.depth());
            black_box(grid.set(x, y, z, Block::Stone)).unwrap();
        });
    });
}

fn benchmark_count_by_kind(c: &mut Criterion) {
    let config = WorldConfig::default();
    let grid = BlockGrid::new(&config).unwrap();
    for x in 0..grid.width() {
        grid.set(x, 1, 1, Block::Nest).unwrap();
    }

    let mut group = c.benchmark_group("count_by_kind");
    group.throughput(Throughput::Elements(config.cell_count() as u64));
    group.sample_size(20);

    group.bench_function("full_grid_nest_count", |b| {
        b.iter(|| black_box(grid.count_by_kind(black_box(Block::Nest))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_get,
    benchmark_set,
    benchmark_count_by_kind
);
criterion_main!(benches);
