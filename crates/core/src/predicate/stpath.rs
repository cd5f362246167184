//! s-t path / Hamiltonian path / Hamiltonian cycle predicate.
//!
//! Grounded on `MateSTPath.cpp`. Path endpoints are "pre-connected": the
//! first of `{s, t}` to enter the frontier records a virtual mate of the
//! other endpoint, turning s-t path search into cycle search and letting
//! pre-check use a single "does this edge close a cycle" test.

use alloc::vec;
use alloc::vec::Vec;

use super::{Branch, Decision, EdgeCtx, PackedKey, Predicate};
use crate::error::Error;
use crate::graph::VertexId;

/// `hamilton = false, endpoints = Some((s, t))`: a simple path from `s` to
/// `t`. `hamilton = true, endpoints = Some((s, t))`: a Hamiltonian path from
/// `s` to `t`. `hamilton = true, endpoints = None`: a Hamiltonian cycle (no
/// distinguished endpoints).
#[derive(Debug, Clone)]
pub struct StPath {
    num_vertices: u32,
    endpoints: Option<(VertexId, VertexId)>,
    hamilton: bool,
}

impl StPath {
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameters`] if `endpoints` names a vertex
    /// outside `1..=num_vertices`, names the same vertex twice, or is `None`
    /// while `hamilton` is `false` (plain s-t path search always needs two
    /// distinguished endpoints).
    pub fn new(
        num_vertices: u32,
        endpoints: Option<(VertexId, VertexId)>,
        hamilton: bool,
    ) -> Result<Self, Error> {
        match endpoints {
            Some((s, t)) => {
                if s == t || s.is_none() || t.is_none() || s.get() > num_vertices || t.get() > num_vertices {
                    return Err(Error::InvalidParameters(
                        "st_path endpoints must be two distinct vertices in range".into(),
                    ));
                }
            }
            None if !hamilton => {
                return Err(Error::InvalidParameters(
                    "st_path requires endpoints unless searching for a Hamiltonian cycle".into(),
                ));
            }
            None => {}
        }
        Ok(Self {
            num_vertices,
            endpoints,
            hamilton,
        })
    }
}

/// `mate[v] = 0` (internal, in-degree 2), `mate[v] = v` (isolated), or
/// `mate[v] = w` (path segment endpoint partnered with `w`). Indexed
/// directly by [`VertexId::get`]; index `0` is unused filler.
#[derive(Debug, Clone)]
pub struct StPathMate {
    mate: Vec<VertexId>,
}

fn idx(v: VertexId) -> usize {
    v.get() as usize
}

impl Predicate for StPath {
    type Mate = StPathMate;

    fn empty_mate(&self) -> Self::Mate {
        StPathMate {
            mate: vec![VertexId::NONE; self.num_vertices as usize + 1],
        }
    }

    fn enter(&self, mate: &mut Self::Mate, ctx: &EdgeCtx<'_>) {
        for &v in ctx.entering() {
            if let Some((s, t)) = self.endpoints {
                if v == s {
                    mate.mate[idx(v)] = t;
                    for &p in ctx.prev_frontier() {
                        if mate.mate[idx(p)] == s {
                            mate.mate[idx(v)] = p;
                            break;
                        }
                    }
                    continue;
                } else if v == t {
                    mate.mate[idx(v)] = s;
                    for &p in ctx.prev_frontier() {
                        if mate.mate[idx(p)] == t {
                            mate.mate[idx(v)] = p;
                            break;
                        }
                    }
                    continue;
                }
            }
            mate.mate[idx(v)] = v;
        }
    }

    fn pre_check(&self, mate: &Self::Mate, ctx: &EdgeCtx<'_>, branch: Branch) -> Decision {
        if branch == Branch::Exclude {
            return Decision::Live;
        }
        let Some((x, y)) = ctx.edge.as_pair() else {
            unreachable!("st_path only applies to plain-edge graphs");
        };

        if mate.mate[idx(x)].is_none() || mate.mate[idx(y)].is_none() {
            return Decision::Zero;
        }
        if mate.mate[idx(x)] == y {
            for &v in ctx.next_frontier() {
                if v == x || v == y {
                    continue;
                }
                let ok = if self.hamilton {
                    mate.mate[idx(v)].is_none()
                } else {
                    mate.mate[idx(v)].is_none() || mate.mate[idx(v)] == v
                };
                if !ok {
                    return Decision::Zero;
                }
            }
            if self.hamilton && ctx.unprocessed_vertices_remain {
                return Decision::Zero;
            }
            return Decision::One;
        }
        Decision::Live
    }

    fn update(&self, mate: &mut Self::Mate, ctx: &EdgeCtx<'_>, branch: Branch) {
        if branch == Branch::Exclude {
            return;
        }
        let Some((x, y)) = ctx.edge.as_pair() else {
            unreachable!("st_path only applies to plain-edge graphs");
        };
        let sm = mate.mate[idx(x)];
        let dm = mate.mate[idx(y)];
        // Order matters when x == sm or y == dm.
        mate.mate[idx(x)] = VertexId::NONE;
        mate.mate[idx(y)] = VertexId::NONE;
        mate.mate[idx(sm)] = dm;
        mate.mate[idx(dm)] = sm;
    }

    fn post_check(&self, mate: &Self::Mate, ctx: &EdgeCtx<'_>) -> Decision {
        for &v in ctx.leaving() {
            let ok = if self.hamilton {
                mate.mate[idx(v)].is_none()
            } else {
                mate.mate[idx(v)].is_none() || mate.mate[idx(v)] == v
            };
            if !ok {
                return Decision::Zero;
            }
        }
        if ctx.is_last_edge {
            Decision::Zero
        } else {
            Decision::Live
        }
    }

    fn canonicalize(&self, mate: &mut Self::Mate, ctx: &EdgeCtx<'_>) {
        for &v in ctx.leaving() {
            mate.mate[idx(v)] = VertexId::NONE;
        }
    }

    fn pack(&self, mate: &Self::Mate, ctx: &EdgeCtx<'_>) -> PackedKey {
        let mut key = PackedKey::new();
        for &v in ctx.next_frontier() {
            key.push_u32(mate.mate[idx(v)].get());
        }
        key
    }
}
