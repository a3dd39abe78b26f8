//! 图操作基准测试

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use undigraph::{EdgeId, UndirectedGraph, VertexId};

/// 构建环形图
fn ring(n: i64) -> UndirectedGraph<i64, EdgeId, i64> {
    let mut graph = UndirectedGraph::with_capacity(n as usize, n as usize);
    for id in 0..n {
        graph.insert_vertex(VertexId::new(id), id);
    }
    for id in 0..n {
        let _ = graph.insert_edge(VertexId::new(id), VertexId::new((id + 1) % n), id);
    }
    graph
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in [100i64, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("ring", n), &n, |b, &n| {
            b.iter(|| black_box(ring(n)))
        });
    }
    group.finish();
}

fn bench_delete_vertex(c: &mut Criterion) {
    c.bench_function("delete_all_vertices_1000", |b| {
        b.iter_batched(
            || ring(1_000),
            |mut graph| {
                for id in 0..1_000 {
                    graph.delete_vertex(VertexId::new(id));
                }
                black_box(graph.n_edges())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_neighbors(c: &mut Criterion) {
    let graph = ring(10_000);
    c.bench_function("neighbors_10000", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for id in graph.vertex_ids() {
                total += graph.neighbors(id).map(|n| n.count()).unwrap_or(0);
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_insert, bench_delete_vertex, bench_neighbors);
criterion_main!(benches);
