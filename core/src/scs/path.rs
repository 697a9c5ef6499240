use {
    super::overlap::OverlapGraph,
    crate::automaton::AhoCorasick,
    bitvec::prelude::*,
    log::{debug, trace},
    std::collections::VecDeque,
};

/// A chosen overlap: the last `overlap` symbols of key `source` are the first `overlap` symbols of key `dest`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OverlapEdge {
    /// Index of the key on the left.
    pub source: usize,

    /// Index of the key on the right.
    pub dest: usize,

    /// Length of the overlap, in symbols.
    pub overlap: usize,
}

/// A set of vertex-disjoint paths through the reduced overlap graph, chosen greedily by descending overlap.
#[derive(Clone, Debug)]
pub struct HamiltonPath {
    /// Edges in the order they were chosen.
    edges: Vec<OverlapEdge>,

    /// Keys that already have an incoming edge, or are not part of the reduced graph.
    forbidden: BitVec,

    /// First key of the fragment containing each key. Only kept current for fragment ends.
    first: Vec<usize>,

    /// Last key of the fragment containing each key. Only kept current for fragment starts.
    last: Vec<usize>,
}

impl HamiltonPath {
    /// Chooses overlap edges by following all failure chains at once, deepest node first.
    ///
    /// Each key of the reduced graph starts as a candidate at the failure target of its end node. At a node `n`,
    /// every candidate overlaps by `depth(n)` with every key passing through `n`; a candidate is paired with the
    /// first such key that has no incoming edge yet and does not start the candidate's own fragment. Candidates
    /// left over at `n` move on to the failure target of `n`.
    pub fn build(automaton: &AhoCorasick, graph: &OverlapGraph) -> Self {
        let key_count = automaton.keys().len();

        let mut candidates: Vec<VecDeque<usize>> = vec![VecDeque::new(); automaton.node_count()];
        let mut forbidden = bitvec![0; key_count];
        let mut first: Vec<usize> = (0..key_count).collect();
        let mut last: Vec<usize> = (0..key_count).collect();
        let mut edges = Vec::new();

        for key in 0..key_count {
            let node = graph.representing_node(key);
            if node.is_root() {
                forbidden.set(key, true);
            } else {
                candidates[automaton.fail(node).usize()].push_back(key);
            }
        }

        for &node in graph.reverse_bfs() {
            if node.is_root() {
                continue;
            }

            let mut queue = std::mem::take(&mut candidates[node.usize()]);
            if queue.is_empty() {
                continue;
            }

            for &dest in graph.supported_keys(node) {
                if forbidden[dest] {
                    continue;
                }

                let Some(&front) = queue.front() else {
                    break;
                };

                // Joining a fragment's end to its own start would close a cycle. The front candidate is
                // dropped from consideration for this key only; it stays queued.
                let source = if first[front] == dest {
                    match queue.remove(1) {
                        Some(second) => second,
                        None => continue,
                    }
                } else {
                    queue.pop_front();
                    front
                };

                let edge = OverlapEdge {
                    source,
                    dest,
                    overlap: automaton.depth(node),
                };
                trace!("Chose {edge:?} at node {node}");
                edges.push(edge);
                forbidden.set(dest, true);

                let head = first[source];
                let tail = last[dest];
                first[tail] = head;
                last[head] = tail;
            }

            candidates[automaton.fail(node).usize()].extend(queue);
        }

        debug!(
            "Chose {} overlap edges with a total overlap of {}",
            edges.len(),
            edges.iter().map(|edge| edge.overlap).sum::<usize>()
        );

        Self {
            edges,
            forbidden,
            first,
            last,
        }
    }

    /// Returns the chosen edges in selection order. Overlaps never increase along this order.
    #[inline]
    pub fn edges(&self) -> &[OverlapEdge] {
        &self.edges
    }

    /// Returns the sum of all chosen overlaps.
    pub fn total_overlap(&self) -> usize {
        self.edges.iter().map(|edge| edge.overlap).sum()
    }

    /// Indicates whether `key` has an incoming edge or is not part of the reduced graph.
    #[inline]
    pub fn is_forbidden(&self, key: usize) -> bool {
        self.forbidden[key]
    }

    /// Iterates over the keys that start a fragment: keys of the reduced graph without an incoming edge.
    pub fn heads(&self) -> impl Iterator<Item = usize> + '_ {
        self.forbidden.iter_zeros()
    }

    /// Returns the last key of the fragment started by `head`.
    ///
    /// # Panics
    /// Panics if `head` does not start a fragment.
    pub fn fragment_end(&self, head: usize) -> usize {
        assert!(!self.forbidden[head], "key {head} does not start a fragment");
        self.last[head]
    }

    /// Returns the first key of the fragment ended by `tail`. Only meaningful if `tail` has no outgoing edge.
    #[inline]
    pub fn fragment_start(&self, tail: usize) -> usize {
        self.first[tail]
    }
}
