use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Index of a node in the automaton's node arena. Node 0 is always the root.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(pub(crate) u32);

/// The root node, representing the empty prefix.
pub const ROOT: NodeId = NodeId(0);

impl NodeId {
    #[inline]
    pub(crate) fn from_usize(index: usize) -> Self {
        Self(index.try_into().expect("automaton exceeds u32::MAX nodes"))
    }

    /// Returns the arena index of this node.
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }

    /// Indicates whether this is the root node.
    #[inline]
    pub fn is_root(self) -> bool {
        self == ROOT
    }
}

impl Debug for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "NodeId({})", self.0)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
