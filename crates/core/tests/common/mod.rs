//! Graph fixtures and an engine-independent brute-force counter, shared by
//! the scenario and property test files.

use zdd_core::graph::{Edge, Graph, VertexId};
use zdd_core::node::{Child, NodeId, PseudoZdd};

pub fn triangle() -> Graph {
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

/// The 4-cycle `1-2-4-3-1`.
pub fn square_cycle() -> Graph {
    Graph::new(
        4,
        vec![
            Edge::Pair(VertexId(1), VertexId(2)),
            Edge::Pair(VertexId(2), VertexId(4)),
            Edge::Pair(VertexId(4), VertexId(3)),
            Edge::Pair(VertexId(3), VertexId(1)),
        ],
    )
    .unwrap()
}

/// The 2x3 ladder graph: two rows of 3, rungs between columns.
///
/// Vertices `1,2,3` are the top row, `4,5,6` the bottom row, in column
/// order.
pub fn ladder_2x3() -> Graph {
    Graph::new(
        6,
        vec![
            Edge::Pair(VertexId(1), VertexId(2)),
            Edge::Pair(VertexId(2), VertexId(3)),
            Edge::Pair(VertexId(4), VertexId(5)),
            Edge::Pair(VertexId(5), VertexId(6)),
            Edge::Pair(VertexId(1), VertexId(4)),
            Edge::Pair(VertexId(2), VertexId(5)),
            Edge::Pair(VertexId(3), VertexId(6)),
        ],
    )
    .unwrap()
}

pub fn k4() -> Graph {
    let mut edges = Vec::new();
    for i in 1..=4u32 {
        for j in (i + 1)..=4u32 {
            edges.push(Edge::Pair(VertexId(i), VertexId(j)));
        }
    }
    Graph::new(4, edges).unwrap()
}

pub fn k5() -> Graph {
    let mut edges = Vec::new();
    for i in 1..=5u32 {
        for j in (i + 1)..=5u32 {
            edges.push(Edge::Pair(VertexId(i), VertexId(j)));
        }
    }
    Graph::new(5, edges).unwrap()
}

/// Count root-to-`One` paths through `zdd`. A second, smaller copy of
/// `zdd_reduce::count`'s logic, kept local so these tests don't pull in a
/// dev-dependency on a crate that itself depends on `zdd_core`.
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

struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
        }
    }

    fn find(&mut self, x: u32) -> u32 {
        if self.parent[x as usize] != x {
            self.parent[x as usize] = self.find(self.parent[x as usize]);
        }
        self.parent[x as usize]
    }

    fn union(&mut self, a: u32, b: u32) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra as usize] = rb;
        }
    }
}

/// Enumerate every edge subset of `graph` and count those forming a simple
/// path from `s` to `t` (or, if `hamilton`, a Hamiltonian path/cycle):
/// degree 1 at each distinguished endpoint (2 if `hamilton` with no
/// endpoints, i.e. a cycle), degree 2 elsewhere, and a single connected
/// component touching every vertex the subset uses.
///
/// Independent of [`zdd_core::predicate::Predicate`]: this re-derives
/// membership from plain degree/connectivity reasoning rather than
/// replaying the frontier algorithm, so it is a genuine cross-check.
pub fn brute_force_stpath(graph: &Graph, endpoints: Option<(VertexId, VertexId)>, hamilton: bool) -> u128 {
    let n = graph.num_vertices() as usize;
    let edges: Vec<(u32, u32)> = graph
        .edges()
        .iter()
        .map(|e| e.as_pair().expect("brute_force_stpath only supports plain edges"))
        .map(|(a, b)| (a.get(), b.get()))
        .collect();
    let m = edges.len();
    assert!(m <= 20, "brute force is exponential in edge count");

    let mut total = 0u128;
    for mask in 0u64..(1u64 << m) {
        let mut degree = vec![0u32; n + 1];
        let mut chosen = Vec::new();
        for (i, &(a, b)) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                degree[a as usize] += 1;
                degree[b as usize] += 1;
                chosen.push((a, b));
            }
        }
        if chosen.is_empty() {
            continue;
        }

        let touched: Vec<u32> = (1..=n as u32).filter(|&v| degree[v as usize] > 0).collect();
        let mut uf = UnionFind::new(n + 1);
        for &(a, b) in &chosen {
            uf.union(a, b);
        }
        let root = uf.find(touched[0]);
        if !touched.iter().all(|&v| uf.find(v) == root) {
            continue;
        }

        let degree_ok = match endpoints {
            Some((s, t)) => (1..=n as u32).all(|v| {
                if v == s.get() || v == t.get() {
                    degree[v as usize] == 1
                } else if hamilton {
                    degree[v as usize] == 2
                } else {
                    degree[v as usize] == 0 || degree[v as usize] == 2
                }
            }),
            None => (1..=n as u32).all(|v| degree[v as usize] == 2),
        };
        if !degree_ok {
            continue;
        }

        if hamilton && touched.len() != n {
            continue;
        }

        total += 1;
    }
    total
}
