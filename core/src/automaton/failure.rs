use {
    super::{
        node::{NodeId, ROOT},
        trie::Trie,
    },
    log::debug,
    std::collections::VecDeque,
};

/// Computes the failure link of every node and merges each node's failure outputs into its own.
///
/// Nodes are visited breadth-first, so the failure link of a node's parent (and every node on that failure
/// chain) is resolved before the node itself. The root is its own failure target.
pub(crate) fn compute_failure(trie: &mut Trie) -> Vec<NodeId> {
    let mut fail = vec![ROOT; trie.len()];
    let mut queue: VecDeque<NodeId> = trie.children(ROOT).map(|(_, child)| child).collect();

    while let Some(parent) = queue.pop_front() {
        for symbol in 0..trie.alphabet_size() {
            let Some(child) = trie.child(parent, symbol) else {
                continue;
            };

            queue.push_back(child);

            // Terminates: the root has a successor for every symbol.
            let mut state = fail[parent.usize()];
            let target = loop {
                if let Some(next) = trie.successor(state, symbol) {
                    break next;
                }
                state = fail[state.usize()];
            };

            debug_assert!(trie.depth(target) < trie.depth(child));
            fail[child.usize()] = target;
            trie.inherit_outputs(child, target);
        }
    }

    debug!("Computed failure links for {} nodes", fail.len());
    fail
}
