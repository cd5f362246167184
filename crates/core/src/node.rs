//! The pseudo-ZDD output type: an interior-node DAG plus the two terminal
//! sentinels, produced by [`crate::construct::build`].

use alloc::vec::Vec;

/// Index of an interior node within [`PseudoZdd::nodes`].
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

/// A ZDD edge target: one of the two terminal sentinels, or an interior
/// node at the next level.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child {
    Zero,
    One,
    Node(NodeId),
}

/// An interior node: the edge index it branches on, and its two children.
/// Nodes are immutable once both children are linked; the pseudo-ZDD is
/// unreduced (no equivalent-subtree sharing beyond what per-level
/// interning already gave it for free).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZddNode {
    pub level: u32,
    pub lo: Child,
    pub hi: Child,
}

/// The full interior-node DAG produced by one construction run, plus the
/// root. `nodes` is ordered by level (non-decreasing `level` field),
/// matching the order levels were promoted during construction.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoZdd {
    pub(crate) nodes: Vec<ZddNode>,
    pub(crate) root: Child,
}

impl PseudoZdd {
    /// Build a pseudo-ZDD from an already-assembled node list and root,
    /// for collaborators (e.g. `zdd_reduce`) that construct one outside
    /// [`crate::construct::build`].
    #[must_use]
    pub const fn from_parts(nodes: Vec<ZddNode>, root: Child) -> Self {
        Self { nodes, root }
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &ZddNode {
        &self.nodes[id.0 as usize]
    }

    #[must_use]
    pub fn nodes(&self) -> &[ZddNode] {
        &self.nodes
    }

    #[must_use]
    pub const fn root(&self) -> Child {
        self.root
    }

    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
}
