use alloc::vec::Vec;

/// A 1-based vertex identifier. `0` is reserved for "no vertex" (an isolated
/// mate slot, an unused endpoint, etc.) and is never a valid member of
/// [`Graph::edges`](super::Graph::edges).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

impl VertexId {
    /// The reserved "no vertex" sentinel.
    pub const NONE: Self = Self(0);

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Index of an edge within [`Graph::edges`](super::Graph::edges), i.e. its
/// position in the fixed edge order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(pub u32);

impl EdgeIndex {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

/// An edge, either a plain pair or a hyperedge over an arbitrary vertex set.
///
/// Plain graphs use [`Edge::Pair`]; hypergraph predicates (set partition,
/// set cover) use [`Edge::Hyper`].
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edge {
    Pair(VertexId, VertexId),
    Hyper(Vec<VertexId>),
}

impl Edge {
    /// Every distinct vertex this edge touches, in no particular order.
    #[must_use]
    pub fn vertices(&self) -> Vec<VertexId> {
        match self {
            Self::Pair(a, b) => {
                if a == b {
                    alloc::vec![*a]
                } else {
                    alloc::vec![*a, *b]
                }
            }
            Self::Hyper(vs) => {
                let mut out: Vec<VertexId> = Vec::new();
                for &v in vs {
                    if !out.contains(&v) {
                        out.push(v);
                    }
                }
                out
            }
        }
    }

    /// Two distinct endpoints for a plain edge. `None` for hyperedges or a
    /// self-loop.
    #[must_use]
    pub const fn as_pair(&self) -> Option<(VertexId, VertexId)> {
        match self {
            Self::Pair(a, b) => Some((*a, *b)),
            Self::Hyper(_) => None,
        }
    }
}
