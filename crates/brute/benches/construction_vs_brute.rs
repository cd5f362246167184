use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use zdd_brute::brute_force_stpath_count;
use zdd_core::construct::{build, Limits};
use zdd_reduce::count;
use zdd_testgen::{random_stpath_fixture, Fixture, GraphParams};

/// Compare frontier-based pseudo-ZDD construction against brute-force edge
/// subset enumeration, across a range of graph sizes.
fn bench_construction_vs_brute(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction_vs_brute");

    for num_vertices in [4u32, 6, 8, 10] {
        let fixture = random_stpath_fixture(
            GraphParams {
                id: 0,
                num_vertices,
                edge_density: 0.5,
            },
            false,
        );
        let Fixture::StPath {
            graph,
            predicate,
            endpoints,
            hamilton,
            ..
        } = fixture
        else {
            unreachable!("random_stpath_fixture always returns Fixture::StPath");
        };
        let order = graph.default_order();

        group.bench_function(format!("engine_n{num_vertices}"), |b| {
            b.iter(|| {
                let zdd = build(black_box(&graph), black_box(&predicate), black_box(&order), &Limits::default())
                    .expect("construction succeeds");
                black_box(count(&zdd));
            });
        });

        if graph.num_edges() <= 20 {
            group.bench_function(format!("brute_n{num_vertices}"), |b| {
                b.iter(|| {
                    black_box(brute_force_stpath_count(
                        black_box(&graph),
                        black_box(endpoints),
                        black_box(hamilton),
                    ));
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_construction_vs_brute);
criterion_main!(benches);
