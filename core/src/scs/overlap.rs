use {
    crate::automaton::{AhoCorasick, NodeId, ROOT},
    log::{debug, trace},
};

/// The reduced overlap graph, layered over an automaton without modifying it.
///
/// For a key `i` represented by node `s` and any key `j`, the longest overlap of `i` onto `j` has length
/// `depth(t)`, where `t` is the first node on the failure chain of `s` that `j` passes through. The graph
/// therefore only needs, per node, the keys passing through it, and per key, the node it ends at.
#[derive(Clone, Debug)]
pub struct OverlapGraph {
    /// Keys whose trie path passes through each node, in key order.
    supported_keys: Vec<Vec<usize>>,

    /// End node of each key in the reduced graph, or the root if the key was eliminated.
    representing: Vec<NodeId>,

    /// All nodes, deepest first; the root is last.
    reverse_bfs: Vec<NodeId>,
}

impl OverlapGraph {
    /// Computes supported keys and the reverse breadth-first order, and reduces the key set.
    ///
    /// A key is eliminated if it is a substring of another key:
    /// * its end node has trie children (it is a proper prefix of a longer key),
    /// * its end node is the failure target of another node (it is a proper suffix of a longer prefix), or
    /// * it is identical to an earlier key.
    ///
    /// Empty keys are always eliminated.
    pub fn build(automaton: &AhoCorasick) -> Self {
        let node_count = automaton.node_count();
        let key_count = automaton.keys().len();

        let mut supported_keys = vec![Vec::new(); node_count];
        let mut representing = vec![ROOT; key_count];
        // The first key ending at each node, whether or not it stays in the reduced graph.
        let mut represented: Vec<Option<usize>> = vec![None; node_count];

        for key in 0..key_count {
            let end = automaton.end_node(key);

            let mut node = end;
            loop {
                supported_keys[node.usize()].push(key);
                if node.is_root() {
                    break;
                }
                node = automaton.parent(node);
            }

            if end.is_root() {
                continue;
            }

            if let Some(first) = represented[end.usize()] {
                trace!("Eliminating key {key}: duplicate of key {first}");
                continue;
            }

            represented[end.usize()] = Some(key);

            if automaton.is_leaf(end) {
                representing[key] = end;
            } else {
                trace!("Eliminating key {key}: prefix of a longer key");
            }
        }

        let mut reverse_bfs = Vec::with_capacity(node_count);
        for node in automaton.bfs() {
            if !node.is_root() {
                if let Some(key) = represented[automaton.fail(node).usize()] {
                    if !representing[key].is_root() {
                        trace!("Eliminating key {key}: suffix of the prefix spelled by node {node}");
                        representing[key] = ROOT;
                    }
                }
            }
            reverse_bfs.push(node);
        }
        reverse_bfs.reverse();

        let kept = representing.iter().filter(|node| !node.is_root()).count();
        debug!("Reduced overlap graph keeps {kept} of {key_count} keys");

        Self {
            supported_keys,
            representing,
            reverse_bfs,
        }
    }

    /// Returns the keys whose trie path passes through `node`, i.e. the keys having the string spelled by `node`
    /// as a prefix.
    #[inline]
    pub fn supported_keys(&self, node: NodeId) -> &[usize] {
        &self.supported_keys[node.usize()]
    }

    /// Returns the node representing the end of `key`, or the root if `key` was eliminated.
    #[inline]
    pub fn representing_node(&self, key: usize) -> NodeId {
        self.representing[key]
    }

    /// Indicates whether `key` was removed from the reduced graph.
    #[inline]
    pub fn is_eliminated(&self, key: usize) -> bool {
        self.representing[key].is_root()
    }

    /// Iterates over the keys that remain in the reduced graph.
    pub fn reduced_keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.representing.iter().enumerate().filter(|(_, node)| !node.is_root()).map(|(key, _)| key)
    }

    /// Returns every node of the automaton in reverse breadth-first order: deepest first, the root last.
    #[inline]
    pub fn reverse_bfs(&self) -> &[NodeId] {
        &self.reverse_bfs
    }
}
