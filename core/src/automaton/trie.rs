use {
    super::node::{NodeId, ROOT},
    bitvec::prelude::*,
    log::debug,
};

/// The goto function: a prefix tree over the mapped keys, stored as a flat table of `alphabet_size` successor
/// slots per node.
///
/// After [Trie::build] returns, every successor slot of the root is filled; slots that had no child point back
/// to the root. All other nodes keep `None` for symbols without a child.
#[derive(Clone, Debug)]
pub(crate) struct Trie {
    alphabet_size: usize,

    /// `successors[node * alphabet_size + symbol]`.
    successors: Vec<Option<NodeId>>,

    /// The root is its own parent.
    parents: Vec<NodeId>,

    /// Symbol on the edge from the parent; `None` for the root.
    incoming: Vec<Option<usize>>,

    depths: Vec<u32>,

    /// Key indices ending at each node. The failure pass extends these with inherited outputs.
    outputs: Vec<Vec<usize>>,

    /// Node at which each key ends, indexed by key.
    end_nodes: Vec<NodeId>,

    /// Nodes without trie children. Computed once all keys are inserted.
    leaves: BitVec,
}

impl Trie {
    /// Inserts `keys` (already mapped onto `0..alphabet_size`) into a new trie.
    pub(crate) fn build(alphabet_size: usize, keys: &[Vec<usize>]) -> Self {
        let capacity = keys.iter().map(Vec::len).sum::<usize>() + 1;
        let mut trie = Self {
            alphabet_size,
            successors: Vec::with_capacity(capacity * alphabet_size),
            parents: Vec::with_capacity(capacity),
            incoming: Vec::with_capacity(capacity),
            depths: Vec::with_capacity(capacity),
            outputs: Vec::with_capacity(capacity),
            end_nodes: Vec::with_capacity(keys.len()),
            leaves: BitVec::new(),
        };

        trie.push_node(ROOT, None);

        for (index, key) in keys.iter().enumerate() {
            trie.insert(index, key);
        }

        let leaves: BitVec = (0..trie.len()).map(|n| trie.children(NodeId::from_usize(n)).next().is_none()).collect();
        trie.leaves = leaves;

        // The root swallows every symbol it has no edge for.
        for slot in &mut trie.successors[..alphabet_size] {
            slot.get_or_insert(ROOT);
        }

        debug!("Built trie with {} nodes for {} keys over {alphabet_size} symbols", trie.len(), keys.len());
        trie
    }

    fn push_node(&mut self, parent: NodeId, symbol: Option<usize>) -> NodeId {
        let node = NodeId::from_usize(self.parents.len());
        let depth = if symbol.is_some() {
            self.depths[parent.usize()] + 1
        } else {
            0
        };

        self.successors.resize(self.successors.len() + self.alphabet_size, None);
        self.parents.push(parent);
        self.incoming.push(symbol);
        self.depths.push(depth);
        self.outputs.push(Vec::new());
        node
    }

    fn insert(&mut self, index: usize, key: &[usize]) {
        let mut node = ROOT;

        for &symbol in key {
            node = match self.successor(node, symbol) {
                Some(child) => child,
                None => {
                    let child = self.push_node(node, Some(symbol));
                    self.successors[node.usize() * self.alphabet_size + symbol] = Some(child);
                    child
                }
            };
        }

        // An empty key would otherwise be reported at every position of a text.
        if !key.is_empty() {
            self.outputs[node.usize()].push(index);
        }

        self.end_nodes.push(node);
    }

    #[inline]
    pub(crate) fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns the successor slot of `node` for `symbol`, including the root's self-loops.
    #[inline]
    pub(crate) fn successor(&self, node: NodeId, symbol: usize) -> Option<NodeId> {
        self.successors[node.usize() * self.alphabet_size + symbol]
    }

    /// Returns the trie child of `node` for `symbol`, ignoring the root's self-loops.
    #[inline]
    pub(crate) fn child(&self, node: NodeId, symbol: usize) -> Option<NodeId> {
        self.successor(node, symbol).filter(|child| !child.is_root())
    }

    /// Iterates over the `(symbol, child)` pairs of `node` in symbol order.
    pub(crate) fn children(&self, node: NodeId) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        let start = node.usize() * self.alphabet_size;
        self.successors[start..start + self.alphabet_size]
            .iter()
            .enumerate()
            .filter_map(|(symbol, child)| child.filter(|child| !child.is_root()).map(|child| (symbol, child)))
    }

    #[inline]
    pub(crate) fn parent(&self, node: NodeId) -> NodeId {
        self.parents[node.usize()]
    }

    #[inline]
    pub(crate) fn incoming(&self, node: NodeId) -> Option<usize> {
        self.incoming[node.usize()]
    }

    #[inline]
    pub(crate) fn depth(&self, node: NodeId) -> usize {
        self.depths[node.usize()] as usize
    }

    #[inline]
    pub(crate) fn outputs(&self, node: NodeId) -> &[usize] {
        &self.outputs[node.usize()]
    }

    /// Appends the outputs of `from` to those of `to`.
    pub(crate) fn inherit_outputs(&mut self, to: NodeId, from: NodeId) {
        let (to, from) = (to.usize(), from.usize());

        // Node ids follow insertion order, so a failure target may have been created after the node.
        if from < to {
            let (head, tail) = self.outputs.split_at_mut(to);
            tail[0].extend_from_slice(&head[from]);
        } else if to < from {
            let (head, tail) = self.outputs.split_at_mut(from);
            head[to].extend_from_slice(&tail[0]);
        }
    }

    #[inline]
    pub(crate) fn end_node(&self, key: usize) -> NodeId {
        self.end_nodes[key]
    }

    #[inline]
    pub(crate) fn is_leaf(&self, node: NodeId) -> bool {
        self.leaves[node.usize()]
    }
}
