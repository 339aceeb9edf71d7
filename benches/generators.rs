use criterion::{criterion_group, criterion_main, Criterion};
use mazer::{
    generators::{self, GenerationStrategy},
    grid::Grid,
    units::{ColumnsCount, RowsCount},
};

fn carve(rows: usize, columns: usize, strategy: GenerationStrategy, seed: u64) -> Grid {
    let mut g = Grid::new(RowsCount(rows), ColumnsCount(columns)).unwrap();
    generators::generate_maze(&mut g, strategy, &mut generators::seeded_rng(seed)).unwrap();
    g
}

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    c.bench_function("recursive_backtracker_maze_32", |b| {
        b.iter(|| carve(32, 32, GenerationStrategy::RecursiveBacktracker, 42))
    });
}

fn bench_kruskal_maze_32(c: &mut Criterion) {
    c.bench_function("kruskal_maze_32", |b| {
        b.iter(|| carve(32, 32, GenerationStrategy::Kruskal, 42))
    });
}

fn bench_recursive_backtracker_maze_128(c: &mut Criterion) {
    c.bench_function("recursive_backtracker_maze_128", |b| {
        b.iter(|| carve(128, 128, GenerationStrategy::RecursiveBacktracker, 42))
    });
}

fn bench_kruskal_maze_128(c: &mut Criterion) {
    c.bench_function("kruskal_maze_128", |b| {
        b.iter(|| carve(128, 128, GenerationStrategy::Kruskal, 42))
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_kruskal_maze_32,
    bench_recursive_backtracker_maze_128,
    bench_kruskal_maze_128
);
criterion_main!(benches);
