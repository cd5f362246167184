//! Set cover predicate: choose a subset of hyperedges so that every vertex
//! is covered by at least one chosen hyperedge. Re-covering an
//! already-covered vertex is permitted, unlike [`super::set_partition::SetPartition`].

use super::set_partition::{canonicalize, empty_mate, enter, pack, post_check, update, SetMate};
use super::{Branch, Decision, EdgeCtx, PackedKey, Predicate};

pub struct SetCover {
    num_vertices: u32,
}

impl SetCover {
    #[must_use]
    pub const fn new(num_vertices: u32) -> Self {
        Self { num_vertices }
    }
}

impl Predicate for SetCover {
    type Mate = SetMate;

    fn empty_mate(&self) -> Self::Mate {
        empty_mate(self.num_vertices)
    }

    fn enter(&self, mate: &mut Self::Mate, ctx: &EdgeCtx<'_>) {
        enter(mate, ctx);
    }

    fn pre_check(&self, _mate: &Self::Mate, _ctx: &EdgeCtx<'_>, _branch: Branch) -> Decision {
        // Unlike SetPartition, re-covering an already-covered vertex is
        // always allowed, so nothing can be decided before update.
        Decision::Live
    }

    fn update(&self, mate: &mut Self::Mate, ctx: &EdgeCtx<'_>, branch: Branch) {
        update(mate, ctx, branch);
    }

    fn post_check(&self, mate: &Self::Mate, ctx: &EdgeCtx<'_>) -> Decision {
        post_check(mate, ctx)
    }

    fn canonicalize(&self, mate: &mut Self::Mate, ctx: &EdgeCtx<'_>) {
        canonicalize(mate, ctx);
    }

    fn pack(&self, mate: &Self::Mate, ctx: &EdgeCtx<'_>) -> PackedKey {
        pack(mate, ctx)
    }
}
