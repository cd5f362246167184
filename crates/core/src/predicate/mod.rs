//! Mate state contract: the three-hook predicate interface that
//! specializes the engine to a graph-family constraint (spec section 4.2).
//!
//! Predicates are a tagged variant -- a plain enum dispatching to one of a
//! fixed catalog of implementations -- rather than a trait object, so the
//! construction driver in [`crate::construct`] is generic over `P: Predicate`
//! and pays no virtual-dispatch cost per edge.

pub mod fgeneral;
pub mod pack;
pub mod set_cover;
pub mod set_partition;
pub mod stpath;

pub use pack::PackedKey;

use crate::frontier::FrontierPlan;
use crate::graph::{Edge, EdgeIndex, VertexId};

/// Result of a pre-check or post-check: `Live` defers the decision, `Zero`
/// routes the branch to the 0-terminal, `One` routes it to the 1-terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Live,
    Zero,
    One,
}

/// Which child of a ZDD node is being derived: exclude (0) or include (1)
/// the current edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Exclude,
    Include,
}

impl Branch {
    #[must_use]
    pub const fn is_include(self) -> bool {
        matches!(self, Self::Include)
    }
}

/// Everything a predicate hook needs about the current edge besides the
/// mate itself: the edge, its frontier deltas, and two global flags that
/// only a few predicates consult (last-edge, unprocessed-vertex-remains).
pub struct EdgeCtx<'a> {
    pub plan: &'a FrontierPlan,
    pub edge_index: EdgeIndex,
    pub edge: &'a Edge,
    pub is_last_edge: bool,
    /// `true` while some vertex of the graph has not yet entered the
    /// frontier for the first time. Consulted by Hamiltonian-mode
    /// predicates, which must reject a cycle that closes before every
    /// vertex has been touched.
    pub unprocessed_vertices_remain: bool,
}

impl<'a> EdgeCtx<'a> {
    #[must_use]
    pub fn prev_frontier(&self) -> &'a [VertexId] {
        self.plan.prev_frontier(self.edge_index)
    }

    #[must_use]
    pub fn entering(&self) -> &'a [VertexId] {
        self.plan.entering(self.edge_index)
    }

    #[must_use]
    pub fn leaving(&self) -> &'a [VertexId] {
        self.plan.leaving(self.edge_index)
    }

    #[must_use]
    pub fn next_frontier(&self) -> &'a [VertexId] {
        self.plan.next_frontier(self.edge_index)
    }
}

/// The mate-state contract: three pure hooks plus pack/unpack-by-construction.
///
/// `Mate` is cloned once per live node per level (never per predicate call);
/// the driver reuses one working buffer per branch. Implementations should
/// keep `Mate` a flat, `Clone`-cheap struct of fixed-size vertex-indexed
/// arrays -- see [`stpath::StPath`] for the simplest example.
pub trait Predicate {
    type Mate: Clone;

    /// A fresh mate with every vertex slot at its "not yet touched" value.
    fn empty_mate(&self) -> Self::Mate;

    /// Initialize the slots of vertices entering the frontier at this edge.
    /// Called once per live node per level, before either branch is tried.
    fn enter(&self, mate: &mut Self::Mate, ctx: &EdgeCtx<'_>);

    /// Evaluated before `update`. Rejects (`Zero`) partials that violate the
    /// predicate irrecoverably, accepts (`One`) partials already complete
    /// with no remaining obligations, or defers (`Live`).
    fn pre_check(&self, mate: &Self::Mate, ctx: &EdgeCtx<'_>, branch: Branch) -> Decision;

    /// Incorporate the edge into the mate for `branch`. A no-op for
    /// `Branch::Exclude` in most predicates, though some adjust counters
    /// even on exclusion.
    fn update(&self, mate: &mut Self::Mate, ctx: &EdgeCtx<'_>, branch: Branch);

    /// Evaluated after `update`, using `ctx.leaving()`. Any vertex leaving
    /// the frontier must have locally satisfied its obligations.
    fn post_check(&self, mate: &Self::Mate, ctx: &EdgeCtx<'_>) -> Decision;

    /// Canonicalize a surviving mate: shift out leaving vertices and
    /// renumber labels so that equivalent partial states pack to an
    /// identical key. Called only when both pre-check and post-check
    /// returned `Live`.
    fn canonicalize(&self, mate: &mut Self::Mate, ctx: &EdgeCtx<'_>);

    /// Serialize a canonicalized mate to its interning key.
    fn pack(&self, mate: &Self::Mate, ctx: &EdgeCtx<'_>) -> PackedKey;
}
