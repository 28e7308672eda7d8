//! Shortest-distance benchmarks across common graph topologies.
//!
//! Run with: cargo bench --bench shortest_path_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wayline::Graph;

/// Chain graph N0 - N1 - ... - Nk; worst case for path length scaling.
fn chain_graph(length: usize) -> Graph {
    let mut graph = Graph::new();
    for i in 0..length {
        graph.add_node(format!("N{i}")).expect("add node");
    }
    for i in 1..length {
        graph
            .add_link(&format!("N{}", i - 1), &format!("N{i}"), 1.0, true)
            .expect("add link");
    }
    graph
}

/// Square grid with 4-way connectivity; path finding in 2D spaces.
fn grid_graph(size: usize) -> Graph {
    let name = |row: usize, col: usize| format!("G{row}_{col}");
    let mut graph = Graph::new();
    for row in 0..size {
        for col in 0..size {
            graph.add_node(name(row, col)).expect("add node");
        }
    }
    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                graph
                    .add_link(&name(row, col), &name(row, col + 1), 1.0, true)
                    .expect("add link");
            }
            if row + 1 < size {
                graph
                    .add_link(&name(row, col), &name(row + 1, col), 1.0, true)
                    .expect("add link");
            }
        }
    }
    graph
}

/// Central hub with many spokes; hub-centric queries.
fn star_graph(spokes: usize) -> Graph {
    let mut graph = Graph::new();
    graph.add_node("hub").expect("add node");
    for i in 0..spokes {
        let spoke = format!("S{i}");
        graph.add_node(&spoke).expect("add node");
        graph.add_link("hub", &spoke, 1.0, true).expect("add link");
    }
    graph
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    for length in [10usize, 50, 100] {
        let graph = chain_graph(length);
        let last = format!("N{}", length - 1);
        group.bench_with_input(BenchmarkId::from_parameter(length), &graph, |b, graph| {
            b.iter(|| {
                graph
                    .shortest_distance(black_box("N0"), black_box(&last))
                    .expect("query")
            });
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for size in [4usize, 8, 12] {
        let graph = grid_graph(size);
        let corner = format!("G{}_{}", size - 1, size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| {
                graph
                    .shortest_distance(black_box("G0_0"), black_box(&corner))
                    .expect("query")
            });
        });
    }
    group.finish();
}

fn bench_star(c: &mut Criterion) {
    let mut group = c.benchmark_group("star");
    for spokes in [50usize, 200] {
        let graph = star_graph(spokes);
        group.bench_with_input(BenchmarkId::from_parameter(spokes), &graph, |b, graph| {
            b.iter(|| {
                graph
                    .shortest_distance(black_box("S0"), black_box("S1"))
                    .expect("query")
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain, bench_grid, bench_star);
criterion_main!(benches);
