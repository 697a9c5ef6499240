//! The Aho-Corasick automaton: trie, failure function and total transition table.
//!
//! Construction runs in three strictly ordered stages, each consuming the result of the previous one:
//! the trie, failure links with output merging, and the total transition table.
//! Once built, an [AhoCorasick] is immutable and may be shared between threads.
use {
    crate::{Alphabet, AlphabetError},
    log::debug,
};

mod dfa;
mod failure;
mod node;
mod trie;

pub use node::{NodeId, ROOT};
use trie::Trie;

/// A multi-pattern string-matching automaton over a fixed set of keys.
#[derive(Clone, Debug)]
pub struct AhoCorasick {
    keys: Vec<String>,
    alphabet: Alphabet,
    trie: Trie,
    fail: Vec<NodeId>,

    /// `transitions[node * alphabet.len() + symbol]`; defined for every entry.
    transitions: Vec<NodeId>,
}

impl AhoCorasick {
    /// Builds an automaton for `keys` over an explicit alphabet.
    ///
    /// # Errors
    /// Returns [AlphabetError::UnmappedSymbol] if a key contains a symbol outside of `alphabet`.
    pub fn new<I, S>(keys: I, alphabet: &Alphabet) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(keys.into_iter().map(Into::into).collect(), alphabet.clone())
    }

    /// Builds an automaton for `keys` over the alphabet of symbols occurring in them.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let alphabet = Alphabet::from_keys(&keys);
        Self::build(keys, alphabet).expect("derived alphabet does not cover the keys")
    }

    fn build(keys: Vec<String>, alphabet: Alphabet) -> Result<Self, AlphabetError> {
        let mapped = keys.iter().map(|key| alphabet.map_str(key)).collect::<Result<Vec<_>, _>>()?;

        let mut trie = Trie::build(alphabet.len(), &mapped);
        let fail = failure::compute_failure(&mut trie);
        let transitions = dfa::complete_transitions(&trie, &fail);

        debug!("Built automaton with {} nodes for {} keys", trie.len(), keys.len());

        Ok(Self {
            keys,
            alphabet,
            trie,
            fail,
            transitions,
        })
    }

    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Returns the node reached by reading `c` in `node`.
    ///
    /// # Errors
    /// Returns [AlphabetError::UnmappedSymbol] if `c` is not part of the alphabet.
    #[inline]
    pub fn step(&self, node: NodeId, c: char) -> Result<NodeId, AlphabetError> {
        Ok(self.step_index(node, self.alphabet.map(c)?))
    }

    /// Returns the node reached by reading the symbol with index `symbol` in `node`.
    ///
    /// # Panics
    /// Panics if `symbol` is not below the alphabet size.
    #[inline]
    pub fn step_index(&self, node: NodeId, symbol: usize) -> NodeId {
        assert!(symbol < self.alphabet.len(), "symbol index {symbol} outside of alphabet");
        self.transitions[node.usize() * self.alphabet.len() + symbol]
    }

    /// Returns the keys matched when the scan is at `node`, i.e. the keys that are suffixes of the string
    /// spelled by `node`.
    pub fn outputs_at(&self, node: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.trie.outputs(node).iter().map(|&key| self.keys[key].as_str())
    }

    /// Returns the indices of the keys matched at `node`. A duplicated key is listed once per occurrence.
    #[inline]
    pub fn output_indices(&self, node: NodeId) -> &[usize] {
        self.trie.outputs(node)
    }

    /// Returns the failure target of `node`. The root fails to itself.
    #[inline]
    pub fn fail(&self, node: NodeId) -> NodeId {
        self.fail[node.usize()]
    }

    /// Returns the length of the string spelled by `node`.
    #[inline]
    pub fn depth(&self, node: NodeId) -> usize {
        self.trie.depth(node)
    }

    /// Returns the trie parent of `node`. The root is its own parent.
    #[inline]
    pub fn parent(&self, node: NodeId) -> NodeId {
        self.trie.parent(node)
    }

    /// Returns the symbol on the trie edge into `node`, or `None` for the root.
    #[inline]
    pub fn incoming_symbol(&self, node: NodeId) -> Option<char> {
        self.trie.incoming(node).map(|symbol| self.alphabet.symbol(symbol))
    }

    /// Returns the trie successor of `node` for `c`. Symbols the root has no edge for lead back to the root.
    pub fn successor(&self, node: NodeId, c: char) -> Result<Option<NodeId>, AlphabetError> {
        Ok(self.trie.successor(node, self.alphabet.map(c)?))
    }

    /// Iterates over the trie children of `node` as `(symbol, child)` pairs in alphabet order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.trie.children(node).map(|(symbol, child)| (self.alphabet.symbol(symbol), child))
    }

    /// Follows trie edges from the root along `prefix`. Returns `None` if no key starts with `prefix`.
    pub fn walk(&self, prefix: &str) -> Result<Option<NodeId>, AlphabetError> {
        let mut node = ROOT;
        for c in prefix.chars() {
            match self.trie.child(node, self.alphabet.map(c)?) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }

    /// Indicates whether `node` has no trie children.
    #[inline]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.trie.is_leaf(node)
    }

    /// Returns the node at which key `key` ends.
    #[inline]
    pub fn end_node(&self, key: usize) -> NodeId {
        self.trie.end_node(key)
    }

    /// Returns the number of nodes, including the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.trie.len()
    }

    /// Iterates over all nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.trie.len()).map(NodeId::from_usize)
    }

    /// Iterates over all nodes in breadth-first order of the trie, starting with the root.
    pub fn bfs(&self) -> Bfs<'_> {
        let mut queue = Vec::with_capacity(self.trie.len());
        queue.push(ROOT);
        Bfs {
            trie: &self.trie,
            queue,
            current: 0,
        }
    }

    /// Returns the keys, in insertion order.
    #[inline]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the key with index `key`.
    #[inline]
    pub fn key(&self, key: usize) -> &str {
        &self.keys[key]
    }

    /// Returns the length of key `key` in symbols.
    #[inline]
    pub fn key_len(&self, key: usize) -> usize {
        self.trie.depth(self.trie.end_node(key))
    }

    /// Returns the alphabet the automaton was built over.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

/// Breadth-first iterator over the trie. See [AhoCorasick::bfs].
#[derive(Debug)]
pub struct Bfs<'a> {
    trie: &'a Trie,
    queue: Vec<NodeId>,
    current: usize,
}

impl<'a> Iterator for Bfs<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = *self.queue.get(self.current)?;
        self.queue.extend(self.trie.children(node).map(|(_, child)| child));
        self.current += 1;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{AhoCorasick, ROOT},
        crate::{alphabet::LOWERCASE, Alphabet, AlphabetError},
        pretty_assertions::assert_eq,
        std::collections::HashSet,
        test_log::test,
    };

    fn scan<'a>(automaton: &'a AhoCorasick, text: &str) -> HashSet<&'a str> {
        let mut node = automaton.root();
        let mut found = HashSet::new();
        for c in text.chars() {
            node = automaton.step(node, c).unwrap();
            found.extend(automaton.outputs_at(node));
        }
        found
    }

    #[test]
    fn test_pattern_match() {
        let automaton = AhoCorasick::new(["hello", "world", "is", "leiwand"], &LOWERCASE).unwrap();
        assert_eq!(scan(&automaton, "sjkldfhelloalksdjis"), HashSet::from(["hello", "is"]));
    }

    #[test]
    fn test_transitions_are_total() {
        let automaton = AhoCorasick::from_keys(["DD", "B99", "aac", "caDcD", "acaB", "D9"]);
        let k = automaton.alphabet().len();
        assert_eq!(k, 5);
        for node in automaton.nodes() {
            for symbol in 0..k {
                assert!(automaton.step_index(node, symbol).usize() < automaton.node_count());
            }
        }
        assert_eq!(scan(&automaton, "caDcDD99"), HashSet::from(["caDcD", "DD", "D9"]));
    }

    #[test]
    fn test_failure_chains_terminate() {
        let automaton = AhoCorasick::from_keys(["abab", "babb", "abba", "bbbb", "aabab", "b"]);
        assert_eq!(automaton.fail(ROOT), ROOT);
        for node in automaton.nodes() {
            let mut current = node;
            for _ in 0..automaton.depth(node) {
                current = automaton.fail(current);
            }
            assert_eq!(current, ROOT, "failure chain of {node} does not reach the root");
        }
    }

    #[test]
    fn test_queries() {
        let automaton = AhoCorasick::new(["he", "she", "his", "hers"], &LOWERCASE).unwrap();
        let she = automaton.walk("she").unwrap().unwrap();
        let he = automaton.walk("he").unwrap().unwrap();

        assert_eq!(automaton.fail(she), he);
        assert_eq!(automaton.depth(she), 3);
        assert_eq!(automaton.incoming_symbol(she), Some('e'));
        assert_eq!(automaton.incoming_symbol(ROOT), None);
        assert_eq!(automaton.parent(she), automaton.walk("sh").unwrap().unwrap());
        assert_eq!(automaton.outputs_at(she).collect::<Vec<_>>(), vec!["she", "he"]);
        assert_eq!(automaton.end_node(1), she);
        assert_eq!(automaton.key_len(3), 4);
        assert!(automaton.is_leaf(she));
        assert!(!automaton.is_leaf(he));
        assert_eq!(automaton.walk("sx").unwrap(), None);
        assert_eq!(automaton.successor(ROOT, 'x').unwrap(), Some(ROOT));
        assert_eq!(automaton.successor(she, 'x').unwrap(), None);
        assert_eq!(automaton.children(ROOT).map(|(c, _)| c).collect::<String>(), "hs");
    }

    #[test]
    fn test_bfs_order() {
        let automaton = AhoCorasick::new(["he", "she", "his", "hers"], &LOWERCASE).unwrap();
        let depths: Vec<usize> = automaton.bfs().map(|node| automaton.depth(node)).collect();
        assert_eq!(depths.len(), automaton.node_count());
        assert_eq!(depths[0], 0);
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_unmapped_symbol() {
        let alphabet = Alphabet::from_symbols("ab".chars()).unwrap();
        assert_eq!(AhoCorasick::new(["abc"], &alphabet).unwrap_err(), AlphabetError::UnmappedSymbol('c'));

        let automaton = AhoCorasick::new(["ab"], &alphabet).unwrap();
        assert_eq!(automaton.step(ROOT, 'z'), Err(AlphabetError::UnmappedSymbol('z')));
    }

    #[test]
    fn test_empty_key_set() {
        let automaton = AhoCorasick::new(Vec::<String>::new(), &LOWERCASE).unwrap();
        assert_eq!(automaton.node_count(), 1);
        assert!(scan(&automaton, "anything").is_empty());
        assert_eq!(automaton.step(ROOT, 'q'), Ok(ROOT));

        let automaton = AhoCorasick::from_keys(Vec::<String>::new());
        assert_eq!(automaton.node_count(), 1);
        assert!(automaton.alphabet().is_empty());
    }

    #[test]
    fn test_automaton_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AhoCorasick>();
    }
}
