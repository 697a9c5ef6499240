use {
    super::{
        node::{NodeId, ROOT},
        trie::Trie,
    },
    log::debug,
    std::collections::VecDeque,
};

/// Extends the goto function into a total transition table, `alphabet_size` entries per node.
///
/// A missing trie edge falls back to the transition of the node's failure target. Failure targets are
/// shallower, so with breadth-first processing their rows are always complete by the time they are read.
pub(crate) fn complete_transitions(trie: &Trie, fail: &[NodeId]) -> Vec<NodeId> {
    let k = trie.alphabet_size();
    let mut transitions: Vec<Option<NodeId>> = vec![None; trie.len() * k];
    let mut queue = VecDeque::new();

    for symbol in 0..k {
        let next = trie.successor(ROOT, symbol);
        transitions[symbol] = next;
        if let Some(child) = next.filter(|child| !child.is_root()) {
            queue.push_back(child);
        }
    }

    while let Some(node) = queue.pop_front() {
        let row = node.usize() * k;
        let fallback = fail[node.usize()].usize() * k;

        for symbol in 0..k {
            transitions[row + symbol] = match trie.child(node, symbol) {
                Some(child) => {
                    queue.push_back(child);
                    Some(child)
                }
                None => transitions[fallback + symbol],
            };
        }
    }

    debug!("Completed transition table with {} entries", transitions.len());
    transitions.into_iter().map(|t| t.expect("transition table is not total")).collect()
}

#[cfg(test)]
mod tests {
    use {
        super::complete_transitions,
        crate::{
            alphabet::{Alphabet, LOWERCASE},
            automaton::{
                failure::compute_failure,
                node::{NodeId, ROOT},
                trie::Trie,
            },
        },
        pretty_assertions::assert_eq,
        test_log::test,
    };

    #[test]
    fn test_transitions() {
        let alphabet = Alphabet::from_symbols("abc".chars()).unwrap();
        let mapped: Vec<Vec<usize>> = ["abc", "bca"].iter().map(|k| alphabet.map_str(k).unwrap()).collect();
        let mut trie = Trie::build(alphabet.len(), &mapped);
        let fail = compute_failure(&mut trie);
        let transitions = complete_transitions(&trie, &fail);
        assert_eq!(transitions.len(), trie.len() * 3);

        let step = |node: NodeId, c: char| transitions[node.usize() * 3 + alphabet.map(c).unwrap()];

        let a = step(ROOT, 'a');
        let ab = step(a, 'b');
        let abc = step(ab, 'c');
        assert_eq!(step(ROOT, 'c'), ROOT);
        assert_eq!(step(a, 'a'), a);
        assert_eq!(step(a, 'c'), ROOT);
        // "abc" continues as "bc" + "a"
        let bca = step(abc, 'a');
        assert_eq!(trie.depth(bca), 3);
        assert_eq!(trie.outputs(bca), &[1]);
        assert_eq!(step(ab, 'b'), step(ROOT, 'b'));
    }

    #[test]
    fn test_empty_alphabet() {
        let mut trie = Trie::build(0, &[]);
        let fail = compute_failure(&mut trie);
        assert!(complete_transitions(&trie, &fail).is_empty());
        assert_eq!(fail, vec![ROOT]);
    }

    #[test]
    fn test_lowercase_total() {
        let mapped: Vec<Vec<usize>> = ["zebra", "bra"].iter().map(|k| LOWERCASE.map_str(k).unwrap()).collect();
        let mut trie = Trie::build(LOWERCASE.len(), &mapped);
        let fail = compute_failure(&mut trie);
        assert_eq!(complete_transitions(&trie, &fail).len(), trie.len() * 26);
    }
}
