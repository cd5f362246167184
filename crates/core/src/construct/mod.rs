//! Construction driver: level-by-level breadth-first expansion of ZDD
//! nodes (spec section 4.3).
//!
//! Single-threaded by default: children are always derived in `(Exclude,
//! Include)` order, and within a level, live nodes are visited in ascending
//! [`NodeId`] order, so node ids and interning are a total function of
//! `(graph, order, predicate)` alone. The `parallel` feature shards the
//! per-mate, per-branch hook evaluation (`pre_check`/`update`/`post_check`/
//! `canonicalize`/`pack`) across a `rayon` thread pool -- that part touches
//! no shared state, so it parallelizes cleanly. The result is collected
//! back in the original live-node order (an `IndexedParallelIterator`
//! guarantee), and the single remaining shared-state step -- committing
//! packed keys to the level's [`InternTable`] and assigning node ids --
//! still runs single-threaded over that order, so node ids stay a pure
//! function of the inputs regardless of how the parallel map was
//! scheduled.

pub mod intern;

use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub use intern::InternTable;

use crate::error::Error;
use crate::frontier::FrontierPlan;
use crate::graph::{EdgeIndex, Graph};
use crate::node::{Child, NodeId, PseudoZdd, ZddNode};
use crate::predicate::{Branch, Decision, EdgeCtx, PackedKey, Predicate};

/// Resource limits enforced mid-construction. Predicate hooks never raise
/// errors themselves (spec section 7); only the driver does, and only for
/// these two reasons.
#[derive(Debug, Clone, Copy, Default)]
pub struct Limits {
    /// Abort construction once the interning table would hold more than
    /// this many total nodes. `None` means unbounded.
    pub max_interned_nodes: Option<u64>,
}

/// Build the pseudo-ZDD for `predicate` over `graph`, sweeping edges in
/// `order`.
///
/// `order` need not be `graph.default_order()`; any permutation of
/// `0..graph.num_edges()` changes frontier size (and pseudo-ZDD size)
/// without changing the solution count.
///
/// `P: Sync` and `P::Mate: Send + Sync` are required unconditionally (not
/// just under the `parallel` feature) since a Cargo feature can't change a
/// generic function's trait bounds; every predicate in this crate is a
/// plain, flat data type that satisfies them for free.
///
/// # Errors
///
/// Returns [`Error::ResourceExhausted`] if `limits.max_interned_nodes` is
/// exceeded.
pub fn build<P>(graph: &Graph, predicate: &P, order: &[EdgeIndex], limits: &Limits) -> Result<PseudoZdd, Error>
where
    P: Predicate + Sync,
    P::Mate: Send + Sync,
{
    if order.is_empty() {
        return Ok(PseudoZdd {
            nodes: Vec::new(),
            root: Child::Zero,
        });
    }

    let plan = FrontierPlan::build(graph, order);
    let num_edges = order.len();
    let num_vertices = graph.num_vertices() as usize;

    let mut nodes: Vec<ZddNode> = Vec::new();
    let mut live: Vec<P::Mate> = vec![predicate.empty_mate()];
    let mut touched = 0usize;

    for (pos, &edge_index) in order.iter().enumerate() {
        let edge = graph.edge(edge_index);
        let is_last_edge = pos + 1 == num_edges;
        touched += plan.entering(edge_index).len();
        let unprocessed_vertices_remain = touched < num_vertices;

        let ctx = EdgeCtx {
            plan: &plan,
            edge_index,
            edge,
            is_last_edge,
            unprocessed_vertices_remain,
        };

        let next_level_base = nodes.len() as u32 + live.len() as u32;
        let mut intern = InternTable::new(next_level_base);
        let mut next_live: Vec<P::Mate> = Vec::new();

        let outcomes = compute_branch_outcomes(predicate, &live, &ctx);
        let mut resolved: Vec<(Child, Child)> = Vec::with_capacity(live.len());
        for (exclude, include) in outcomes {
            let lo = commit(exclude, &mut intern, &mut next_live, limits, edge_index)?;
            let hi = commit(include, &mut intern, &mut next_live, limits, edge_index)?;
            resolved.push((lo, hi));
        }

        for (lo, hi) in resolved {
            nodes.push(ZddNode {
                level: edge_index.get() as u32,
                lo,
                hi,
            });
        }

        tracing::debug!(
            level = edge_index.get(),
            live_nodes = live.len(),
            interned = next_live.len(),
            "completed level"
        );

        live = next_live;
    }

    Ok(PseudoZdd {
        nodes,
        root: Child::Node(NodeId(0)),
    })
}

/// What a single branch (exclude or include) resolves to, before node
/// interning: either a terminal directly, or a canonicalized, packed mate
/// still waiting to be assigned (or matched to) a node id.
enum BranchOutcome<M> {
    Terminal(Child),
    Interior(PackedKey, M),
}

/// Evaluate both branches of every live mate at this level. Touches no
/// shared state -- each mate's `(exclude, include)` outcome depends only on
/// itself and `ctx` -- so under the `parallel` feature this runs as a
/// `rayon` map across `live`; the default build runs the same closure
/// serially. Either way the result vector is indexed identically to `live`.
fn compute_branch_outcomes<P>(
    predicate: &P,
    live: &[P::Mate],
    ctx: &EdgeCtx<'_>,
) -> Vec<(BranchOutcome<P::Mate>, BranchOutcome<P::Mate>)>
where
    P: Predicate + Sync,
    P::Mate: Send + Sync,
{
    let per_mate = |mate: &P::Mate| {
        let mut entered = mate.clone();
        predicate.enter(&mut entered, ctx);
        let exclude = compute_branch(predicate, &entered, ctx, Branch::Exclude);
        let include = compute_branch(predicate, &entered, ctx, Branch::Include);
        (exclude, include)
    };

    #[cfg(feature = "parallel")]
    {
        live.par_iter().map(per_mate).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        live.iter().map(per_mate).collect()
    }
}

/// Run `pre_check`/`update`/`post_check`/`canonicalize`/`pack` for one
/// branch of one mate.
fn compute_branch<P: Predicate>(predicate: &P, entered: &P::Mate, ctx: &EdgeCtx<'_>, branch: Branch) -> BranchOutcome<P::Mate> {
    let mut working = entered.clone();

    match predicate.pre_check(&working, ctx, branch) {
        Decision::Zero => return BranchOutcome::Terminal(Child::Zero),
        Decision::One => return BranchOutcome::Terminal(Child::One),
        Decision::Live => {}
    }

    predicate.update(&mut working, ctx, branch);

    match predicate.post_check(&working, ctx) {
        Decision::Zero => return BranchOutcome::Terminal(Child::Zero),
        Decision::One => return BranchOutcome::Terminal(Child::One),
        Decision::Live => {}
    }

    predicate.canonicalize(&mut working, ctx);
    let key = predicate.pack(&working, ctx);
    BranchOutcome::Interior(key, working)
}

/// Resolve a branch outcome to a [`Child`], committing a fresh packed key
/// to `intern` (and its mate to `next_live`) the first time it's seen this
/// level. The only step of level expansion that touches shared state, so it
/// stays single-threaded regardless of the `parallel` feature.
fn commit<M>(
    outcome: BranchOutcome<M>,
    intern: &mut InternTable,
    next_live: &mut Vec<M>,
    limits: &Limits,
    edge_index: EdgeIndex,
) -> Result<Child, Error> {
    match outcome {
        BranchOutcome::Terminal(child) => Ok(child),
        BranchOutcome::Interior(key, mate) => {
            let (id, fresh) = intern.get_or_claim(key);
            if fresh {
                if let Some(max) = limits.max_interned_nodes {
                    if intern.len() as u64 > max {
                        return Err(Error::ResourceExhausted { limit: max });
                    }
                }
                next_live.push(mate);
                tracing::trace!(level = edge_index.get(), "interned new node");
            } else {
                tracing::trace!(level = edge_index.get(), "reused interned node");
            }
            Ok(Child::Node(id))
        }
    }
}
