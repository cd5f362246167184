use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use zdd_core::graph::{Edge, Graph, VertexId};
use zdd_core::predicate::fgeneral::{FGeneral, FGeneralParams, Topology};
use zdd_core::predicate::set_cover::SetCover;
use zdd_core::predicate::set_partition::SetPartition;
use zdd_core::predicate::stpath::StPath;

/// Parameters identifying one generated fixture, carried alongside it so a
/// failing property test can be reported back with the seed that produced
/// it. `id` is fed to [`StdRng::seed_from_u64`] and drives every random
/// choice made while building the fixture, so two calls with the same
/// `GraphParams` always produce the same graph and predicate.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphParams {
    pub id: u64,
    pub num_vertices: u32,
    pub edge_density: f64,
}

/// A generated graph paired with a predicate built to fit it.
///
/// Each variant also carries the raw construction parameters (endpoints,
/// `FGeneralParams`, ...) alongside the opaque `zdd_core` predicate object,
/// since the latter's fields are private by design -- callers that need to
/// re-derive membership independently (`zdd_brute`'s cross-checks) need
/// the former.
pub enum Fixture {
    StPath {
        params: GraphParams,
        graph: Graph,
        predicate: StPath,
        endpoints: Option<(VertexId, VertexId)>,
        hamilton: bool,
    },
    FGeneral {
        params: GraphParams,
        graph: Graph,
        predicate: FGeneral,
        fgeneral_params: FGeneralParams,
    },
    SetPartition {
        params: GraphParams,
        graph: Graph,
        predicate: SetPartition,
    },
    SetCover {
        params: GraphParams,
        graph: Graph,
        predicate: SetCover,
    },
}

/// Generate a random simple graph on `num_vertices` vertices (`1..=num_vertices`),
/// including each of the `C(num_vertices, 2)` possible edges independently
/// with probability `edge_density`, from a fresh `StdRng` seeded with `seed`.
///
/// # Panics
///
/// Panics if `num_vertices < 2`.
#[must_use]
pub fn generate_random_graph(num_vertices: u32, edge_density: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_graph_with(&mut rng, num_vertices, edge_density)
}

/// As [`generate_random_graph`], but drawing from a caller-supplied RNG so
/// several draws in a row (graph, then endpoints, then topology, ...) can
/// share one seed and stay reproducible together.
///
/// # Panics
///
/// Panics if `num_vertices < 2`.
fn generate_random_graph_with(rng: &mut StdRng, num_vertices: u32, edge_density: f64) -> Graph {
    assert!(num_vertices >= 2, "a graph needs at least two vertices");
    let mut edges = Vec::new();
    for u in 1..=num_vertices {
        for v in (u + 1)..=num_vertices {
            if rng.random::<f64>() < edge_density {
                edges.push(Edge::Pair(VertexId(u), VertexId(v)));
            }
        }
    }
    Graph::new(num_vertices, edges).expect("generated edges are always in range")
}

/// Generate `num_hyperedges` random hyperedges over `1..=num_vertices`, each
/// drawing a size uniformly from `2..=max_arity` and its members uniformly
/// without replacement, from `rng`.
fn generate_random_hyperedges(rng: &mut StdRng, num_vertices: u32, num_hyperedges: u32, max_arity: u32) -> Vec<Edge> {
    let arity_range = Uniform::new_inclusive(2, max_arity.max(2)).expect("2 <= max_arity.max(2)");
    (0..num_hyperedges)
        .map(|_| {
            let arity = arity_range.sample(rng).min(num_vertices);
            let mut members: Vec<u32> = (1..=num_vertices).collect();
            let mut chosen = Vec::with_capacity(arity as usize);
            for _ in 0..arity {
                let pick = Uniform::new(0, members.len()).expect("members is non-empty").sample(rng);
                chosen.push(VertexId(members.remove(pick)));
            }
            if chosen.len() == 2 {
                Edge::Pair(chosen[0], chosen[1])
            } else {
                Edge::Hyper(chosen)
            }
        })
        .collect()
}

/// A random graph plus an s-t path (or Hamiltonian path/cycle) predicate
/// over two of its vertices.
///
/// # Panics
///
/// Panics if the generated graph has fewer than two vertices, or if
/// [`StPath::new`] rejects the chosen endpoints (it never should, since
/// they are always two distinct in-range vertices).
#[must_use]
pub fn random_stpath_fixture(params: GraphParams, hamilton: bool) -> Fixture {
    let mut rng = StdRng::seed_from_u64(params.id);
    let graph = generate_random_graph_with(&mut rng, params.num_vertices, params.edge_density);
    let pick_range = Uniform::new(1, params.num_vertices + 1).expect("num_vertices >= 2");
    let s = pick_range.sample(&mut rng);
    let t = loop {
        let candidate = pick_range.sample(&mut rng);
        if candidate != s {
            break candidate;
        }
    };
    let endpoints = if hamilton && rng.random::<bool>() {
        None
    } else {
        Some((VertexId(s), VertexId(t)))
    };
    let predicate =
        StPath::new(params.num_vertices, endpoints, hamilton).expect("two distinct in-range endpoints");
    Fixture::StPath {
        params,
        graph,
        predicate,
        endpoints,
        hamilton,
    }
}

/// A random graph plus a degree-constrained predicate with every vertex
/// allowed degree `1` or `2` and a random cycle topology, suitable for
/// exercising spanning-forest-shaped solution families.
///
/// # Panics
///
/// Panics if [`FGeneral::new`] rejects the generated parameters (it never
/// should, since `degrees` always has exactly `num_vertices + 1` entries).
#[must_use]
pub fn random_fgeneral_fixture(params: GraphParams) -> Fixture {
    let mut rng = StdRng::seed_from_u64(params.id);
    let graph = generate_random_graph_with(&mut rng, params.num_vertices, params.edge_density);
    let topology = if rng.random::<bool>() {
        Topology::CycleOk
    } else {
        Topology::CycleForbidden
    };
    let mut degrees = vec![Vec::new(); params.num_vertices as usize + 1];
    for slot in degrees.iter_mut().skip(1) {
        *slot = vec![1, 2];
    }
    let fgeneral_params = FGeneralParams {
        degrees,
        same_component: Vec::new(),
        different_component: Vec::new(),
        component_counts: Vec::new(),
        component_sizes: Vec::new(),
        topology,
    };
    let predicate = FGeneral::new(params.num_vertices, fgeneral_params.clone())
        .expect("degrees sized to num_vertices + 1");
    Fixture::FGeneral {
        params,
        graph,
        predicate,
        fgeneral_params,
    }
}

/// A random hypergraph plus a set-partition predicate over it.
#[must_use]
pub fn random_setpartition_fixture(params: GraphParams) -> Fixture {
    let mut rng = StdRng::seed_from_u64(params.id);
    let num_hyperedges = (params.num_vertices as f64 * params.edge_density).ceil() as u32;
    let edges = generate_random_hyperedges(&mut rng, params.num_vertices, num_hyperedges.max(1), params.num_vertices);
    let graph = Graph::new(params.num_vertices, edges).expect("hyperedges are always in range");
    let predicate = SetPartition::new(params.num_vertices);
    Fixture::SetPartition { params, graph, predicate }
}

/// A random hypergraph plus a set-cover predicate over it.
#[must_use]
pub fn random_setcover_fixture(params: GraphParams) -> Fixture {
    let mut rng = StdRng::seed_from_u64(params.id);
    let num_hyperedges = (params.num_vertices as f64 * params.edge_density).ceil() as u32;
    let edges = generate_random_hyperedges(&mut rng, params.num_vertices, num_hyperedges.max(1), params.num_vertices);
    let graph = Graph::new(params.num_vertices, edges).expect("hyperedges are always in range");
    let predicate = SetCover::new(params.num_vertices);
    Fixture::SetCover { params, graph, predicate }
}

/// Generate `n_fixtures` independent s-t path fixtures in parallel, each
/// over a random graph of `num_vertices` vertices at `edge_density`.
#[must_use]
pub fn generate_mult_fixtures(n_fixtures: u64, num_vertices: u32, edge_density: f64, hamilton: bool) -> Vec<Fixture> {
    (0..n_fixtures)
        .into_par_iter()
        .map(|id| {
            random_stpath_fixture(
                GraphParams {
                    id,
                    num_vertices,
                    edge_density,
                },
                hamilton,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_graph_respects_vertex_count() {
        let graph = generate_random_graph(6, 0.5, 1);
        assert_eq!(graph.num_vertices(), 6);
    }

    #[test]
    fn same_seed_reproduces_the_same_graph() {
        let a = generate_random_graph(8, 0.5, 42);
        let b = generate_random_graph(8, 0.5, 42);
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn stpath_fixture_uses_distinct_endpoints() {
        let fixture = random_stpath_fixture(
            GraphParams {
                id: 0,
                num_vertices: 5,
                edge_density: 0.6,
            },
            false,
        );
        match fixture {
            Fixture::StPath { graph, .. } => assert_eq!(graph.num_vertices(), 5),
            _ => panic!("expected an StPath fixture"),
        }
    }

    #[test]
    fn stpath_fixture_is_reproducible_from_its_id() {
        let params = GraphParams {
            id: 7,
            num_vertices: 6,
            edge_density: 0.5,
        };
        let Fixture::StPath { graph: a, endpoints: ea, .. } = random_stpath_fixture(params, false) else {
            panic!("expected an StPath fixture");
        };
        let Fixture::StPath { graph: b, endpoints: eb, .. } = random_stpath_fixture(params, false) else {
            panic!("expected an StPath fixture");
        };
        assert_eq!(a.edges(), b.edges());
        assert_eq!(ea, eb);
    }

    #[test]
    fn generate_mult_fixtures_produces_requested_count() {
        let fixtures = generate_mult_fixtures(8, 5, 0.4, false);
        assert_eq!(fixtures.len(), 8);
    }
}
