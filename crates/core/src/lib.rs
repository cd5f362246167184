//! Frontier-based ZDD construction engine.
//!
//! `zdd_core` builds a **pseudo-ZDD** -- an unreduced, frontier-based
//! decision-diagram trace -- that represents the family of edge subsets of a
//! graph (or hypergraph) satisfying a structural predicate: being an *s-t*
//! path, a Hamiltonian path/cycle, a spanning forest with a fixed component
//! count, a set partition, a set cover, or similar graph-family constraints.
//!
//! # Algorithm
//!
//! Given a fixed edge order, the engine sweeps edges one at a time. At each
//! edge it maintains a compact "mate" summary of the partial solution,
//! restricted to the *frontier* -- the vertices touched by both processed
//! and unprocessed edges. For every live ZDD node and both branches (exclude
//! / include the edge), a predicate decides whether the branch is dead
//! (terminal 0), already satisfied (terminal 1), or should continue as a
//! new interior node. Equivalent partial states are canonicalized to the
//! same packed key and share a node, which is what keeps the diagram
//! compact.
//!
//! ```text
//! graph + edge order + predicate
//!     -> frontier::FrontierPlan (precomputed once)
//!     -> construct::build() sweeps edges level by level
//!         -> predicate::Predicate::{pre_check, update, post_check, pack}
//!         -> construct::intern dedups by packed key
//!     -> node::PseudoZdd (unreduced)
//! ```
//!
//! # Entry point
//!
//! [`construct::build`] is the main entry point. It takes a [`graph::Graph`],
//! an edge order, and any [`predicate::Predicate`] implementation, and
//! returns a [`node::PseudoZdd`] or a [`error::Error`].
//!
//! Reduction to canonical form and solution counting are **not** part of
//! this crate -- they are external collaborators (see `zdd_reduce`).
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` on [`node::PseudoZdd`]
//!   and related types.
//! - **`parallel`** -- shards each level's per-mate, per-branch hook
//!   evaluation across a `rayon` thread pool. Node-id assignment stays
//!   deterministic because the intern table is still committed by a
//!   single-threaded pass afterward, in the parallel map's (order-preserving)
//!   output order (see [`construct`] for details).
//!
//! This crate is `no_std` compatible (requires `alloc`). Graph file I/O and
//! the text DSL parser live in the separate `zdd_parser` crate.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod construct;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod predicate;

pub use construct::build;
pub use error::Error;
pub use graph::Graph;
pub use node::PseudoZdd;
