//! Independent brute-force reference checkers for `zdd_core`'s predicates.
//!
//! Each function here re-derives predicate membership directly from plain
//! graph/set reasoning (degrees, connected components, set algebra) with
//! no dependency on `zdd_core::predicate` or the frontier machinery, so
//! that a `zdd_core::construct::build` + `zdd_reduce::count` result can be
//! cross-checked against a second, independently-written implementation.
//!
//! Enumerates all `2^m` edge subsets, so only practical for `m` up to
//! roughly two dozen edges.

use std::collections::HashMap;

use zdd_core::graph::{Edge, Graph, VertexId};
use zdd_core::predicate::fgeneral::{FGeneralParams, Topology};

const MAX_BRUTE_EDGES: u32 = 24;

fn plain_edges(graph: &Graph) -> Vec<(u32, u32)> {
    graph
        .edges()
        .iter()
        .map(|edge| edge.as_pair().expect("brute-force st-path/fgeneral checks only support plain edges"))
        .map(|(a, b)| (a.get(), b.get()))
        .collect()
}

fn subsets(num_edges: u32) -> impl Iterator<Item = u64> {
    debug_assert!(num_edges <= MAX_BRUTE_EDGES, "refusing to enumerate 2^{num_edges} subsets");
    0..(1u64 << num_edges)
}

struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new(n: u32) -> Self {
        Self {
            parent: (0..=n).collect(),
        }
    }

    fn find(&mut self, v: u32) -> u32 {
        if self.parent[v as usize] != v {
            self.parent[v as usize] = self.find(self.parent[v as usize]);
        }
        self.parent[v as usize]
    }

    fn union(&mut self, a: u32, b: u32) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra as usize] = rb;
        }
    }
}

/// Count edge subsets forming a simple s-t path (`endpoints = Some((s, t))`,
/// `hamilton = false`), an s-t Hamiltonian path (`hamilton = true`), or a
/// Hamiltonian cycle (`endpoints = None`, `hamilton = true`).
///
/// # Panics
///
/// Panics if `graph` has any hyperedge, or more than [`MAX_BRUTE_EDGES`]
/// edges.
#[must_use]
pub fn brute_force_stpath_count(graph: &Graph, endpoints: Option<(VertexId, VertexId)>, hamilton: bool) -> u128 {
    let n = graph.num_vertices();
    let edges = plain_edges(graph);
    let mut total = 0u128;

    for mask in subsets(edges.len() as u32) {
        let selected: Vec<(u32, u32)> = (0..edges.len())
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| edges[i])
            .collect();
        if is_valid_stpath(n, &selected, endpoints, hamilton) {
            total += 1;
        }
    }
    total
}

fn is_valid_stpath(n: u32, selected: &[(u32, u32)], endpoints: Option<(VertexId, VertexId)>, hamilton: bool) -> bool {
    let mut deg = vec![0u32; n as usize + 1];
    let mut adj: Vec<Vec<u32>> = vec![Vec::new(); n as usize + 1];
    for &(a, b) in selected {
        deg[a as usize] += 1;
        deg[b as usize] += 1;
        adj[a as usize].push(b);
        adj[b as usize].push(a);
    }
    if deg.iter().any(|&d| d > 2) {
        return false;
    }

    let (s, t) = match endpoints {
        Some((s, t)) => (Some(s.get()), Some(t.get())),
        None => (None, None),
    };

    for v in 1..=n {
        let required_degree_two = hamilton && Some(v) != s && Some(v) != t;
        let is_endpoint = Some(v) == s || Some(v) == t;
        if is_endpoint {
            if deg[v as usize] != 1 {
                return false;
            }
        } else if required_degree_two {
            if deg[v as usize] != 2 {
                return false;
            }
        } else if deg[v as usize] != 0 && deg[v as usize] != 2 {
            return false;
        }
    }

    // Degree constraints alone allow an s-t path plus a disjoint extra
    // cycle elsewhere; reject that by requiring a single connected
    // component among touched vertices.
    let touched: Vec<u32> = (1..=n).filter(|&v| deg[v as usize] > 0).collect();
    if touched.is_empty() {
        return selected.is_empty() && s.is_none() && n == 0;
    }
    let mut seen = vec![false; n as usize + 1];
    let mut stack = vec![touched[0]];
    seen[touched[0] as usize] = true;
    let mut component_size = 0u32;
    while let Some(v) = stack.pop() {
        component_size += 1;
        for &w in &adj[v as usize] {
            if !seen[w as usize] {
                seen[w as usize] = true;
                stack.push(w);
            }
        }
    }
    touched.iter().all(|&v| seen[v as usize]) && component_size == touched.len() as u32
}

/// Count edge subsets satisfying a degree/component predicate: every
/// vertex's degree lies in its allowed list (empty list = unconstrained),
/// every `same_component`/`different_component` pair is (dis)connected as
/// required, every completed component's size and the total component
/// count lie in their allowed lists, and (if `topology` forbids cycles)
/// the subgraph is a forest.
///
/// # Panics
///
/// Panics if `graph` has any hyperedge, or more than [`MAX_BRUTE_EDGES`]
/// edges.
#[must_use]
pub fn brute_force_fgeneral_count(graph: &Graph, params: &FGeneralParams) -> u128 {
    let n = graph.num_vertices();
    let edges = plain_edges(graph);
    let mut total = 0u128;

    for mask in subsets(edges.len() as u32) {
        let selected: Vec<(u32, u32)> = (0..edges.len())
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| edges[i])
            .collect();
        if is_valid_fgeneral(n, &selected, params) {
            total += 1;
        }
    }
    total
}

fn is_valid_fgeneral(n: u32, selected: &[(u32, u32)], params: &FGeneralParams) -> bool {
    let mut deg = vec![0u32; n as usize + 1];
    let mut uf = UnionFind::new(n);
    for &(a, b) in selected {
        deg[a as usize] += 1;
        deg[b as usize] += 1;
        uf.union(a, b);
    }

    for v in 1..=n {
        let allowed = &params.degrees[v as usize];
        if !allowed.is_empty() && !allowed.contains(&deg[v as usize]) {
            return false;
        }
    }

    for &(a, b) in &params.same_component {
        if uf.find(a.get()) != uf.find(b.get()) {
            return false;
        }
    }
    for &(a, b) in &params.different_component {
        if uf.find(a.get()) == uf.find(b.get()) {
            return false;
        }
    }

    let mut component_sizes: HashMap<u32, u32> = HashMap::new();
    for v in 1..=n {
        *component_sizes.entry(uf.find(v)).or_default() += 1;
    }
    if !params.component_sizes.is_empty() && component_sizes.values().any(|size| !params.component_sizes.contains(size)) {
        return false;
    }
    if !params.component_counts.is_empty() && !params.component_counts.contains(&(component_sizes.len() as u32)) {
        return false;
    }

    if matches!(params.topology, Topology::CycleForbidden) {
        let num_edges = selected.len() as u32;
        let num_components = component_sizes.len() as u32;
        if num_edges != n.saturating_sub(num_components) {
            return false;
        }
    }

    true
}

fn hyperedge_members(edge: &Edge) -> Vec<u32> {
    edge.vertices().iter().map(VertexId::get).collect()
}

/// Count hyperedge subsets whose members exactly partition `1..=num_vertices`
/// (pairwise disjoint, union is everything).
#[must_use]
pub fn brute_force_setpartition_count(graph: &Graph) -> u128 {
    let n = graph.num_vertices();
    let edges: Vec<Vec<u32>> = graph.edges().iter().map(hyperedge_members).collect();
    let mut total = 0u128;

    for mask in subsets(edges.len() as u32) {
        let mut covered = vec![false; n as usize + 1];
        let mut disjoint = true;
        for (i, members) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            for &v in members {
                if covered[v as usize] {
                    disjoint = false;
                }
                covered[v as usize] = true;
            }
        }
        if disjoint && (1..=n).all(|v| covered[v as usize]) {
            total += 1;
        }
    }
    total
}

/// Count hyperedge subsets whose members' union is all of `1..=num_vertices`
/// (overlaps permitted).
#[must_use]
pub fn brute_force_setcover_count(graph: &Graph) -> u128 {
    let n = graph.num_vertices();
    let edges: Vec<Vec<u32>> = graph.edges().iter().map(hyperedge_members).collect();
    let mut total = 0u128;

    for mask in subsets(edges.len() as u32) {
        let mut covered = vec![false; n as usize + 1];
        for (i, members) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                for &v in members {
                    covered[v as usize] = true;
                }
            }
        }
        if (1..=n).all(|v| covered[v as usize]) {
            total += 1;
        }
    }
    total
}
