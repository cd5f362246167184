//! Concrete worked examples with hand-verified solution counts, one per
//! predicate family.

mod common;

use common::{count, k4, ladder_2x3, square_cycle, triangle};
use zdd_core::construct::{build, Limits};
use zdd_core::graph::{Edge, Graph, VertexId};
use zdd_core::predicate::fgeneral::{FGeneral, FGeneralParams, Topology};
use zdd_core::predicate::set_cover::SetCover;
use zdd_core::predicate::set_partition::SetPartition;
use zdd_core::predicate::stpath::StPath;

/// A triangle has exactly two simple paths between any two vertices: the
/// direct edge, and the two-edge detour through the third vertex.
#[test]
fn triangle_st_path_count() {
    let graph = triangle();
    let order = graph.default_order();
    let predicate = StPath::new(3, Some((VertexId(1), VertexId(2))), false).unwrap();
    let zdd = build(&graph, &predicate, &order, &Limits::default()).unwrap();
    assert_eq!(count(&zdd), 2);
}

/// Every vertex of the 2x3 ladder except the four corners is forced into
/// the perimeter cycle by its own degree, so the ladder has exactly one
/// Hamiltonian cycle -- the middle rungs can never be part of it.
#[test]
fn ladder_2x3_hamiltonian_cycle_count() {
    let graph = ladder_2x3();
    let order = graph.default_order();
    let predicate = StPath::new(6, None, true).unwrap();
    let zdd = build(&graph, &predicate, &order, &Limits::default()).unwrap();
    assert_eq!(count(&zdd), 1);
}

/// A 4-cycle has exactly two simple paths between opposite (non-adjacent)
/// vertices: one in each direction around the cycle.
#[test]
fn square_cycle_diagonal_path_count() {
    let graph = square_cycle();
    let order = graph.default_order();
    let predicate = StPath::new(4, Some((VertexId(1), VertexId(4))), false).unwrap();
    let zdd = build(&graph, &predicate, &order, &Limits::default()).unwrap();
    assert_eq!(count(&zdd), 2);
}

/// Cayley's formula: `K4` has `4^(4-2) = 16` spanning trees.
#[test]
fn k4_spanning_tree_count() {
    let graph = k4();
    let order = graph.default_order();
    let params = FGeneralParams {
        degrees: vec![Vec::new(); 5],
        same_component: Vec::new(),
        different_component: Vec::new(),
        component_counts: vec![1],
        component_sizes: Vec::new(),
        topology: Topology::CycleForbidden,
    };
    let predicate = FGeneral::new(4, params).unwrap();
    let zdd = build(&graph, &predicate, &order, &Limits::default()).unwrap();
    assert_eq!(count(&zdd), 16);
}

/// Two hyperedges sharing vertex 1 can never both be chosen (set partition
/// forbids re-covering), and neither alone covers vertex 2 or 3, so no
/// subset is a valid partition.
#[test]
fn overlapping_hyperedges_have_no_set_partition() {
    let graph = Graph::new(
        3,
        vec![
            Edge::Hyper(vec![VertexId(1), VertexId(2)]),
            Edge::Hyper(vec![VertexId(1), VertexId(3)]),
        ],
    )
    .unwrap();
    let order = graph.default_order();
    let predicate = SetPartition::new(3);
    let zdd = build(&graph, &predicate, &order, &Limits::default()).unwrap();
    assert_eq!(count(&zdd), 0);
}

/// Vertices 1 and 3 are each coverable only by the hyperedge naming them
/// plus the middle one; vertex 2 is coverable by either end hyperedge or
/// the middle one. Five edge subsets cover `{1,2,3}` (re-covering is
/// permitted for set cover, unlike set partition above): the middle
/// hyperedge alone, either end hyperedge together with the other, or all
/// three together with either end hyperedge doubled up.
#[test]
fn overlapping_hyperedges_set_cover_count() {
    let graph = Graph::new(
        3,
        vec![
            Edge::Hyper(vec![VertexId(1), VertexId(2)]),
            Edge::Hyper(vec![VertexId(2), VertexId(3)]),
            Edge::Hyper(vec![VertexId(1), VertexId(2), VertexId(3)]),
        ],
    )
    .unwrap();
    let order = graph.default_order();
    let predicate = SetCover::new(3);
    let zdd = build(&graph, &predicate, &order, &Limits::default()).unwrap();
    assert_eq!(count(&zdd), 5);
}
