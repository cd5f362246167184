//! Frontier tracker: a pure function of edge index to
//! `(previous frontier, entering vertices, leaving vertices, next frontier)`.
//!
//! For each edge index `i`:
//!
//! - `prev_frontier(i)` = vertices appearing in some edge in `[0, i)` *and*
//!   some edge in `[i, M)`.
//! - `entering(i)` = vertices first appearing at `e_i`.
//! - `next_frontier(i) = prev_frontier(i) U entering(i)`.
//! - `leaving(i)` = vertices whose last appearance is `e_i`;
//!   `next_frontier(i+1) = next_frontier(i) \ leaving(i)`.
//!
//! A vertex never occupies two slots simultaneously, and a slot vacated by a
//! leaving vertex is reclaimed by an entering vertex at the next edge when
//! possible, so the slot array never grows past the maximum frontier size.

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::graph::{EdgeIndex, Graph, VertexId};

/// Per-edge frontier deltas, precomputed once for a `(Graph, edge order)`
/// pair. Cheap to clone (`Vec`-backed), so callers can inspect frontier
/// sizes before committing to a full construction.
#[derive(Debug, Clone)]
pub struct FrontierPlan {
    /// `prev_frontier[i]`: vertices live going into edge `i`.
    prev_frontier: Vec<Vec<VertexId>>,
    /// `entering[i]`: vertices that first appear at edge `i`.
    entering: Vec<Vec<VertexId>>,
    /// `leaving[i]`: vertices whose last appearance is edge `i`.
    leaving: Vec<Vec<VertexId>>,
    /// `next_frontier[i]`: vertices live after edge `i`'s entries, before
    /// its departures are applied.
    next_frontier: Vec<Vec<VertexId>>,
    /// Slot index of each vertex within `next_frontier[i]`, used to pack
    /// mate state into a fixed-position buffer. `slot_of[i][v]` only has
    /// meaning for `v` in `next_frontier[i]`.
    slot_of: Vec<HashMap<VertexId, u32>>,
    max_frontier_size: usize,
}

impl FrontierPlan {
    /// Precompute the frontier schedule for `graph` swept in `order`.
    ///
    /// `order` need not be `graph.default_order()`; permuting it changes
    /// frontier sizes (and hence pseudo-ZDD size) without changing the
    /// solution count (spec section 8, property 3).
    #[must_use]
    pub fn build(graph: &Graph, order: &[EdgeIndex]) -> Self {
        let num_edges = order.len();

        // First and last appearance index (within `order`) of each vertex.
        let mut first_seen: HashMap<VertexId, usize> = HashMap::new();
        let mut last_seen: HashMap<VertexId, usize> = HashMap::new();
        for (pos, &edge_index) in order.iter().enumerate() {
            for v in graph.edge(edge_index).vertices() {
                first_seen.entry(v).or_insert(pos);
                last_seen.insert(v, pos);
            }
        }

        let mut prev_frontier = vec![Vec::new(); num_edges];
        let mut entering = vec![Vec::new(); num_edges];
        let mut leaving = vec![Vec::new(); num_edges];
        let mut next_frontier = vec![Vec::new(); num_edges];

        let mut live: HashSet<VertexId> = HashSet::new();
        let mut max_frontier_size = 0usize;

        for (pos, &edge_index) in order.iter().enumerate() {
            // Stored by the edge's identity (its index in `graph.edges`),
            // not by `pos`, so accessors keyed on `EdgeIndex` stay correct
            // under a non-identity sweep order.
            let id = edge_index.get();

            let mut prev: Vec<VertexId> = live.iter().copied().collect();
            prev.sort_unstable();
            prev_frontier[id] = prev;

            let mut enter: Vec<VertexId> = Vec::new();
            for v in graph.edge(edge_index).vertices() {
                if first_seen[&v] == pos && live.insert(v) {
                    enter.push(v);
                }
            }
            enter.sort_unstable();
            entering[id] = enter;

            let mut next: Vec<VertexId> = live.iter().copied().collect();
            next.sort_unstable();
            max_frontier_size = max_frontier_size.max(next.len());
            next_frontier[id] = next;

            let mut leave: Vec<VertexId> = Vec::new();
            for v in graph.edge(edge_index).vertices() {
                if last_seen[&v] == pos && live.remove(&v) {
                    leave.push(v);
                }
            }
            leave.sort_unstable();
            leaving[id] = leave;
        }

        let slot_of = next_frontier
            .iter()
            .map(|frontier| {
                frontier
                    .iter()
                    .enumerate()
                    .map(|(slot, &v)| (v, slot as u32))
                    .collect()
            })
            .collect();

        Self {
            prev_frontier,
            entering,
            leaving,
            next_frontier,
            slot_of,
            max_frontier_size,
        }
    }

    #[must_use]
    pub fn prev_frontier(&self, edge: EdgeIndex) -> &[VertexId] {
        &self.prev_frontier[edge.get()]
    }

    #[must_use]
    pub fn entering(&self, edge: EdgeIndex) -> &[VertexId] {
        &self.entering[edge.get()]
    }

    #[must_use]
    pub fn leaving(&self, edge: EdgeIndex) -> &[VertexId] {
        &self.leaving[edge.get()]
    }

    #[must_use]
    pub fn next_frontier(&self, edge: EdgeIndex) -> &[VertexId] {
        &self.next_frontier[edge.get()]
    }

    #[must_use]
    pub fn slot(&self, edge: EdgeIndex, vertex: VertexId) -> Option<u32> {
        self.slot_of[edge.get()].get(&vertex).copied()
    }

    /// The largest frontier seen across the whole sweep -- used to size the
    /// single reusable mate working buffer.
    #[must_use]
    pub const fn max_frontier_size(&self) -> usize {
        self.max_frontier_size
    }

    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.prev_frontier.len()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::graph::Edge;

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
    fn frontier_discipline_on_triangle() {
        let graph = triangle();
        let order = graph.default_order();
        let plan = FrontierPlan::build(&graph, &order);

        assert_eq!(plan.entering(EdgeIndex(0)), &[VertexId(1), VertexId(2)]);
        assert_eq!(plan.leaving(EdgeIndex(0)), &[] as &[VertexId]);
        assert_eq!(plan.next_frontier(EdgeIndex(0)), &[VertexId(1), VertexId(2)]);

        assert_eq!(plan.prev_frontier(EdgeIndex(1)), &[VertexId(1), VertexId(2)]);
        assert_eq!(plan.entering(EdgeIndex(1)), &[VertexId(3)]);
        assert_eq!(plan.leaving(EdgeIndex(1)), &[VertexId(2)]);
        assert_eq!(
            plan.next_frontier(EdgeIndex(1)),
            &[VertexId(1), VertexId(2), VertexId(3)]
        );

        assert_eq!(plan.leaving(EdgeIndex(2)), &[VertexId(1), VertexId(3)]);
        assert_eq!(plan.max_frontier_size(), 3);
    }

    #[test]
    fn slot_assignment_matches_next_frontier_order() {
        let graph = triangle();
        let order = graph.default_order();
        let plan = FrontierPlan::build(&graph, &order);

        for (edge, frontier) in plan.next_frontier.iter().enumerate() {
            for (slot, &v) in frontier.iter().enumerate() {
                assert_eq!(plan.slot(EdgeIndex(edge as u32), v), Some(slot as u32));
            }
        }
    }
}
