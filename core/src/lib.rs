//! Aho-Corasick pattern matching and approximate shortest common superstrings.
//!
//! The [automaton] module builds the Aho-Corasick automaton for a set of keys over an [Alphabet]; [matcher] uses it
//! to find every occurrence of the keys in a text. The [scs] module layers Ukkonen's greedy overlap heuristic on the
//! same automaton to build a short string containing every key.

#![warn(clippy::all)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]

mod error;

pub mod alphabet;
pub mod automaton;
pub mod matcher;
pub mod random;
pub mod scs;

pub use {
    alphabet::{Alphabet, LOWERCASE},
    automaton::{AhoCorasick, NodeId},
    error::*,
    matcher::{KeywordMatcher, Match, Scanner},
    scs::{build_approximate_scs, build_approximate_scs_from_keys, ScsFinder, ScsStats},
};
