//! Set partition predicate: choose a subset of hyperedges so that every
//! vertex is covered by exactly one chosen hyperedge.
//!
//! [`super::set_cover::SetCover`] shares this module's mate layout and
//! `update`/`post_check`/`canonicalize`/`pack` behavior, composing rather
//! than inheriting (the original expresses the same relationship as a
//! subclass that overrides only `CheckTerminalPre`).

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;

use super::{Branch, Decision, EdgeCtx, PackedKey, Predicate};
use crate::graph::VertexId;

/// `block[v] = 0` iff `v` has not yet been covered by any chosen
/// hyperedge, otherwise `block[v]` is the id of the block containing `v`.
#[derive(Debug, Clone)]
pub struct SetMate {
    pub(super) block: Vec<u32>,
    pub(super) next_label: u32,
}

pub(super) fn idx(v: VertexId) -> usize {
    v.get() as usize
}

pub(super) fn empty_mate(num_vertices: u32) -> SetMate {
    SetMate {
        block: vec![0; num_vertices as usize + 1],
        next_label: 0,
    }
}

pub(super) fn enter(mate: &mut SetMate, ctx: &EdgeCtx<'_>) {
    for &v in ctx.entering() {
        mate.block[idx(v)] = 0;
    }
}

pub(super) fn update(mate: &mut SetMate, ctx: &EdgeCtx<'_>, branch: Branch) {
    if branch == Branch::Exclude {
        return;
    }
    let vertices = ctx.edge.vertices();

    let mut existing: Vec<u32> = Vec::new();
    for &v in &vertices {
        let b = mate.block[idx(v)];
        if b != 0 && !existing.contains(&b) {
            existing.push(b);
        }
    }
    let label = match existing.iter().copied().min() {
        Some(min) => min,
        None => {
            mate.next_label += 1;
            mate.next_label
        }
    };
    for &old in &existing {
        if old == label {
            continue;
        }
        for &w in ctx.next_frontier() {
            if mate.block[idx(w)] == old {
                mate.block[idx(w)] = label;
            }
        }
    }
    for &v in &vertices {
        mate.block[idx(v)] = label;
    }
}

pub(super) fn post_check(mate: &SetMate, ctx: &EdgeCtx<'_>) -> Decision {
    for &v in ctx.leaving() {
        if mate.block[idx(v)] == 0 {
            return Decision::Zero;
        }
    }
    if ctx.is_last_edge {
        Decision::One
    } else {
        Decision::Live
    }
}

pub(super) fn canonicalize(_mate: &mut SetMate, _ctx: &EdgeCtx<'_>) {
    // Leaving vertices are already fully resolved (covered, block fixed) by
    // post_check; nothing to shift out beyond what packing's slot order
    // already excludes.
}

pub(super) fn pack(mate: &SetMate, ctx: &EdgeCtx<'_>) -> PackedKey {
    let mut relabel: HashMap<u32, u32> = HashMap::new();
    let mut key = PackedKey::new();
    for &v in ctx.next_frontier() {
        let raw = mate.block[idx(v)];
        if raw == 0 {
            key.push_u32(0);
            continue;
        }
        let next = relabel.len() as u32 + 1;
        let canonical = *relabel.entry(raw).or_insert(next);
        key.push_u32(canonical);
    }
    key
}

pub struct SetPartition {
    num_vertices: u32,
}

impl SetPartition {
    #[must_use]
    pub const fn new(num_vertices: u32) -> Self {
        Self { num_vertices }
    }
}

impl Predicate for SetPartition {
    type Mate = SetMate;

    fn empty_mate(&self) -> Self::Mate {
        empty_mate(self.num_vertices)
    }

    fn enter(&self, mate: &mut Self::Mate, ctx: &EdgeCtx<'_>) {
        enter(mate, ctx);
    }

    fn pre_check(&self, mate: &Self::Mate, ctx: &EdgeCtx<'_>, branch: Branch) -> Decision {
        if branch == Branch::Exclude {
            return Decision::Live;
        }
        for v in ctx.edge.vertices() {
            if mate.block[idx(v)] != 0 {
                return Decision::Zero;
            }
        }
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
