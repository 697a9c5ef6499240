//! Approximate shortest common superstrings.
//!
//! Implements Ukkonen's linear-time version of the greedy heuristic (E. Ukkonen, "A linear-time algorithm for
//! finding approximate shortest common superstrings", Algorithmica 5, 1990). The pairwise overlaps of the keys are
//! read off the failure links of an Aho-Corasick automaton: processing the nodes deepest first grants the longest
//! available overlap before any shorter one. The result always contains every key, but is not necessarily the
//! shortest such string.
//!
//! ```
//! use scs_core::scs::ScsFinder;
//!
//! let finder = ScsFinder::from_keys(["aki", "ele", "kiki", "kira", "lea"]);
//! let superstring = finder.superstring();
//! assert!(["aki", "ele", "kiki", "kira", "lea"].iter().all(|key| superstring.contains(key)));
//! ```
use {
    crate::{automaton::AhoCorasick, Alphabet, AlphabetError},
    log::debug,
};

mod assemble;
mod overlap;
mod path;

pub use {
    overlap::OverlapGraph,
    path::{HamiltonPath, OverlapEdge},
};

/// Builds an approximate shortest common superstring of `keys` over `alphabet`.
///
/// # Errors
/// Returns [AlphabetError::UnmappedSymbol] if a key contains a symbol outside of `alphabet`.
pub fn build_approximate_scs<I, S>(keys: I, alphabet: &Alphabet) -> Result<String, AlphabetError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Ok(ScsFinder::new(keys, alphabet)?.superstring())
}

/// Builds an approximate shortest common superstring of `keys` over the symbols occurring in them.
pub fn build_approximate_scs_from_keys<I, S>(keys: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ScsFinder::from_keys(keys).superstring()
}

/// The automaton, reduced overlap graph and greedy path for one set of keys.
#[derive(Clone, Debug)]
pub struct ScsFinder {
    automaton: AhoCorasick,
    graph: OverlapGraph,
    path: HamiltonPath,
}

impl ScsFinder {
    /// Runs the heuristic for `keys` over an explicit alphabet.
    ///
    /// # Errors
    /// Returns [AlphabetError::UnmappedSymbol] if a key contains a symbol outside of `alphabet`.
    pub fn new<I, S>(keys: I, alphabet: &Alphabet) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_automaton(AhoCorasick::new(keys, alphabet)?))
    }

    /// Runs the heuristic for `keys` over the symbols occurring in them.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_automaton(AhoCorasick::from_keys(keys))
    }

    /// Runs the heuristic on the keys of an existing automaton.
    pub fn from_automaton(automaton: AhoCorasick) -> Self {
        let graph = OverlapGraph::build(&automaton);
        let path = HamiltonPath::build(&automaton, &graph);

        Self {
            automaton,
            graph,
            path,
        }
    }

    /// Returns a string containing every key as a contiguous substring.
    pub fn superstring(&self) -> String {
        let superstring = assemble::assemble(self.automaton.keys(), &self.path);
        let stats = self.stats();
        debug!(
            "Superstring of {} keys has length {} (total key length {}, compression factor {:.3})",
            stats.key_count,
            stats.superstring_length,
            stats.total_key_length,
            stats.compression_factor()
        );
        superstring
    }

    /// Returns the chosen overlap edges in selection order.
    #[inline]
    pub fn edges(&self) -> &[OverlapEdge] {
        self.path.edges()
    }

    /// Returns the number of symbols saved by overlapping keys.
    #[inline]
    pub fn total_overlap(&self) -> usize {
        self.path.total_overlap()
    }

    /// Returns the underlying automaton.
    #[inline]
    pub fn automaton(&self) -> &AhoCorasick {
        &self.automaton
    }

    /// Returns the reduced overlap graph.
    #[inline]
    pub fn overlap_graph(&self) -> &OverlapGraph {
        &self.graph
    }

    /// Returns the greedily chosen path fragments.
    #[inline]
    pub fn hamilton_path(&self) -> &HamiltonPath {
        &self.path
    }

    /// Returns size statistics of the superstring, computed without assembling it.
    pub fn stats(&self) -> ScsStats {
        let key_count = self.automaton.keys().len();
        let total_key_length = (0..key_count).map(|key| self.automaton.key_len(key)).sum();
        let reduced_length: usize = self.graph.reduced_keys().map(|key| self.automaton.key_len(key)).sum();

        ScsStats {
            key_count,
            total_key_length,
            superstring_length: reduced_length - self.total_overlap(),
        }
    }
}

/// Size statistics of a superstring. All lengths are in symbols.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScsStats {
    /// Number of keys, including eliminated and duplicate keys.
    pub key_count: usize,

    /// Sum of the lengths of all keys.
    pub total_key_length: usize,

    /// Length of the superstring.
    pub superstring_length: usize,
}

impl ScsStats {
    /// Returns `total_key_length / superstring_length`, or 1 if the superstring is empty.
    pub fn compression_factor(&self) -> f64 {
        if self.superstring_length == 0 {
            1.0
        } else {
            self.total_key_length as f64 / self.superstring_length as f64
        }
    }

    /// Returns the fraction of the total key length saved, `(total_key_length - superstring_length) /
    /// total_key_length`, or 0 if there are no symbols.
    pub fn points(&self) -> f64 {
        if self.total_key_length == 0 {
            0.0
        } else {
            (self.total_key_length - self.superstring_length) as f64 / self.total_key_length as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{build_approximate_scs, build_approximate_scs_from_keys, ScsFinder, ScsStats},
        crate::{alphabet::LOWERCASE, Alphabet, AlphabetError},
        pretty_assertions::assert_eq,
        test_log::test,
    };

    #[test]
    fn test_known_superstring() {
        let keys = ["aki", "ele", "kiki", "kira", "lea"];
        let scs = build_approximate_scs(keys, &LOWERCASE).unwrap();
        assert!(["eleakirakiki", "eleakikira"].contains(&scs.as_str()), "unexpected superstring {scs}");
    }

    #[test]
    fn test_stats() {
        let finder = ScsFinder::new(["aki", "ele", "kiki", "kira", "lea"], &LOWERCASE).unwrap();
        let stats = finder.stats();
        assert_eq!(
            stats,
            ScsStats {
                key_count: 5,
                total_key_length: 17,
                superstring_length: 10,
            }
        );
        assert_eq!(finder.superstring().len(), stats.superstring_length);
        assert!((stats.points() - 7.0 / 17.0).abs() < 1e-12);
        assert!((stats.compression_factor() - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_substrings_are_dropped() {
        let finder = ScsFinder::new(["her", "she", "herself", "sherman"], &LOWERCASE).unwrap();
        let scs = finder.superstring();
        for key in ["her", "she", "herself", "sherman"] {
            assert!(scs.contains(key));
        }
        assert_eq!(scs.len(), "herself".len() + "sherman".len() - finder.total_overlap());
    }

    #[test]
    fn test_empty_keys() {
        assert_eq!(build_approximate_scs(Vec::<String>::new(), &LOWERCASE).unwrap(), "");
        assert_eq!(build_approximate_scs_from_keys(["", ""]), "");

        let stats = ScsFinder::from_keys(Vec::<String>::new()).stats();
        assert_eq!(stats.compression_factor(), 1.0);
        assert_eq!(stats.points(), 0.0);
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(build_approximate_scs_from_keys(["ab", "ab", "ab"]), "ab");
    }

    #[test]
    fn test_unmapped_symbol() {
        let alphabet = Alphabet::from_symbols("ab".chars()).unwrap();
        assert_eq!(build_approximate_scs(["abc"], &alphabet), Err(AlphabetError::UnmappedSymbol('c')));
    }
}
