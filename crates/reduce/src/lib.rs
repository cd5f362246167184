//! Solution counting and structural reduction over [`zdd_core::PseudoZdd`].
//!
//! Neither operation is part of `zdd_core` itself (its diagrams are
//! unreduced traces, by design): both work bottom-up over
//! [`PseudoZdd::nodes`], relying on the invariant that a node's children
//! always carry a strictly larger [`NodeId`] than the node itself, so a
//! single descending pass over node ids has every child already resolved
//! by the time its parent is visited.

use hashbrown::HashMap;

use zdd_core::node::{Child, NodeId, PseudoZdd, ZddNode};

/// Count the edge subsets accepted by `zdd`, i.e. the number of root-to-`One`
/// paths through the diagram.
///
/// Uses `u128` because the solution count of an `n`-edge diagram can be as
/// large as `2^n`, which overflows `u64` well within realistic edge counts.
#[must_use]
pub fn count(zdd: &PseudoZdd) -> u128 {
    let mut counts = vec![0u128; zdd.num_nodes()];
    for id in (0..zdd.num_nodes()).rev() {
        let node = zdd.node(NodeId(id as u32));
        counts[id] = child_count(node.lo, &counts) + child_count(node.hi, &counts);
    }
    child_count(zdd.root(), &counts)
}

fn child_count(child: Child, counts: &[u128]) -> u128 {
    match child {
        Child::Zero => 0,
        Child::One => 1,
        Child::Node(id) => counts[id.0 as usize],
    }
}

/// Reduce `zdd` to its canonical form under the two standard ZDD rules:
///
/// - **Elimination**: a node whose `1`-edge (`hi`) leads to the `0`
///   terminal is redundant (including it can never distinguish a solution
///   from excluding it) and is replaced by its `lo` child everywhere it was
///   referenced.
/// - **Sharing**: two nodes at the same level with identical `(lo, hi)`
///   children represent the same family of suffixes and are merged into
///   one.
///
/// The result has the same solution count as `zdd` but is not necessarily
/// smaller: per-level interning during construction already merges nodes
/// with identical *predicate* state, which is a finer equivalence than
/// `(level, lo, hi)` structural equality, so most of the sharing this
/// function could find is already there. What it adds is elimination, and
/// cross-branch structural merges construction's mate-keyed interning
/// cannot see.
#[must_use]
pub fn reduce(zdd: &PseudoZdd) -> PseudoZdd {
    let n = zdd.num_nodes();
    if n == 0 {
        return zdd.clone();
    }

    let mut remap: Vec<Child> = vec![Child::Zero; n];
    let mut dedup: HashMap<(u32, Child, Child), usize> = HashMap::new();
    let mut rev_nodes: Vec<ZddNode> = Vec::new();

    for old_id in (0..n).rev() {
        let node = zdd.node(NodeId(old_id as u32));
        let lo = resolve(node.lo, &remap);
        let hi = resolve(node.hi, &remap);

        remap[old_id] = if hi == Child::Zero {
            lo
        } else {
            let key = (node.level, lo, hi);
            let push_index = *dedup.entry(key).or_insert_with(|| {
                rev_nodes.push(ZddNode { level: node.level, lo, hi });
                rev_nodes.len() - 1
            });
            Child::Node(NodeId(push_index as u32))
        };
    }

    let total = rev_nodes.len();
    let renumber = |child: Child| match child {
        Child::Node(NodeId(push_index)) => Child::Node(NodeId((total - 1 - push_index as usize) as u32)),
        other => other,
    };

    let nodes: Vec<ZddNode> = rev_nodes
        .into_iter()
        .rev()
        .map(|node| ZddNode {
            level: node.level,
            lo: renumber(node.lo),
            hi: renumber(node.hi),
        })
        .collect();
    let root = renumber(resolve(zdd.root(), &remap));

    PseudoZdd::from_parts(nodes, root)
}

fn resolve(child: Child, remap: &[Child]) -> Child {
    match child {
        Child::Node(id) => remap[id.0 as usize],
        terminal => terminal,
    }
}

#[cfg(test)]
mod tests {
    use zdd_core::construct::{build, Limits};
    use zdd_core::graph::{Edge, Graph, VertexId};
    use zdd_core::predicate::stpath::StPath;

    use super::*;

    fn triangle() -> Graph {
        Graph::new(
            3,
            vec![
                Edge::Pair(VertexId(1), VertexId(2)),
                Edge::Pair(VertexId(2), VertexId(3)),
                Edge::Pair(VertexId(1), VertexId(3)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn counts_both_st_paths_in_a_triangle() {
        let graph = triangle();
        let order = graph.default_order();
        let predicate = StPath::new(3, Some((VertexId(1), VertexId(2))), false).unwrap();
        let zdd = build(&graph, &predicate, &order, &Limits::default()).unwrap();
        assert_eq!(count(&zdd), 2);
    }

    #[test]
    fn reduction_preserves_solution_count() {
        let graph = triangle();
        let order = graph.default_order();
        let predicate = StPath::new(3, Some((VertexId(1), VertexId(2))), false).unwrap();
        let zdd = build(&graph, &predicate, &order, &Limits::default()).unwrap();
        let reduced = reduce(&zdd);
        assert_eq!(count(&zdd), count(&reduced));
        assert!(reduced.num_nodes() <= zdd.num_nodes());
    }

    #[test]
    fn reduction_is_idempotent() {
        let graph = triangle();
        let order = graph.default_order();
        let predicate = StPath::new(3, Some((VertexId(1), VertexId(2))), false).unwrap();
        let zdd = build(&graph, &predicate, &order, &Limits::default()).unwrap();
        let once = reduce(&zdd);
        let twice = reduce(&once);
        assert_eq!(once.num_nodes(), twice.num_nodes());
    }

    #[test]
    fn empty_order_reduces_to_empty() {
        let graph = triangle();
        let predicate = StPath::new(3, Some((VertexId(1), VertexId(2))), false).unwrap();
        let zdd = build(&graph, &predicate, &[], &Limits::default()).unwrap();
        let reduced = reduce(&zdd);
        assert_eq!(reduced.num_nodes(), 0);
    }
}
