use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decrease_key_sssp::graph::generators::{grid, random_digraph};
use decrease_key_sssp::graph::VertexId;
use decrease_key_sssp::{BinaryHeapDijkstra, FibonacciDijkstra, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_backends(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut group = c.benchmark_group("dijkstra");

    // Four arcs per vertex on average
    for &size in &[1_000usize, 10_000] {
        let graph = random_digraph(size, size * 4, 1..100, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("fibonacci/random", size), &graph, |b, graph| {
            b.iter(|| FibonacciDijkstra::new().compute_shortest_paths(graph, black_box(VertexId(0))))
        });
        group.bench_with_input(BenchmarkId::new("binary/random", size), &graph, |b, graph| {
            b.iter(|| BinaryHeapDijkstra::new().compute_shortest_paths(graph, black_box(VertexId(0))))
        });
    }

    let graph = grid(100, 100).unwrap();
    group.bench_function("fibonacci/grid", |b| {
        b.iter(|| FibonacciDijkstra::new().compute_shortest_paths(&graph, black_box(VertexId(0))))
    });
    group.bench_function("binary/grid", |b| {
        b.iter(|| BinaryHeapDijkstra::new().compute_shortest_paths(&graph, black_box(VertexId(0))))
    });

    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
