//! Dictionary matching: reporting every occurrence of a set of keywords in a text.
use {
    crate::{
        automaton::{AhoCorasick, NodeId, ROOT},
        Alphabet, AlphabetError, BoxResult,
    },
    log::debug,
    std::{collections::HashSet, path::Path},
    tokio::{
        fs::File,
        io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    },
};

/// An occurrence of a key in a text. Positions are inclusive and counted in symbols.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match<'a> {
    /// The matched key.
    pub key: &'a str,

    /// Position of the first symbol of the occurrence.
    pub start: usize,

    /// Position of the last symbol of the occurrence.
    pub end: usize,
}

/// Finds all occurrences of a fixed set of keys in texts.
#[derive(Clone, Debug)]
pub struct KeywordMatcher {
    automaton: AhoCorasick,
}

impl KeywordMatcher {
    /// Creates a matcher for `keys` over an explicit alphabet. Texts must only contain symbols of `alphabet`.
    ///
    /// # Errors
    /// Returns [AlphabetError::UnmappedSymbol] if a key contains a symbol outside of `alphabet`.
    pub fn new<I, S>(keys: I, alphabet: &Alphabet) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            automaton: AhoCorasick::new(keys, alphabet)?,
        })
    }

    /// Creates a matcher for `keys` over the symbols occurring in them.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            automaton: AhoCorasick::from_keys(keys),
        }
    }

    /// Returns the underlying automaton.
    #[inline]
    pub fn automaton(&self) -> &AhoCorasick {
        &self.automaton
    }

    /// Starts a new scan at position 0.
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner {
            automaton: &self.automaton,
            node: ROOT,
            position: 0,
        }
    }

    /// Returns every occurrence of every key in `text`, ordered by end position.
    ///
    /// # Errors
    /// Returns [AlphabetError::UnmappedSymbol] at the first symbol of `text` outside of the alphabet.
    pub fn match_text(&self, text: &str) -> Result<Vec<Match<'_>>, AlphabetError> {
        let mut scanner = self.scanner();
        let mut matches = Vec::new();
        for c in text.chars() {
            matches.extend(scanner.feed(c)?);
        }
        Ok(matches)
    }

    /// Returns the keys that occur at least once in `text`.
    ///
    /// # Errors
    /// Returns [AlphabetError::UnmappedSymbol] at the first symbol of `text` outside of the alphabet.
    pub fn matched_keys(&self, text: &str) -> Result<HashSet<&str>, AlphabetError> {
        let mut node = ROOT;
        let mut found = HashSet::new();
        for c in text.chars() {
            node = self.automaton.step(node, c)?;
            found.extend(self.automaton.outputs_at(node));
        }
        Ok(found)
    }

    /// Scans a stream line by line. Positions continue across lines; line terminators are part of the text and
    /// must be symbols of the alphabet.
    pub async fn match_reader<R: AsyncBufRead + Unpin>(&self, reader: &mut R) -> BoxResult<Vec<Match<'_>>> {
        let mut scanner = self.scanner();
        let mut matches = Vec::new();
        let mut line = String::new();

        loop {
            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                break;
            }

            for c in line.chars() {
                matches.extend(scanner.feed(c)?);
            }
        }

        debug!("Found {} matches in {} symbols", matches.len(), scanner.position());
        Ok(matches)
    }

    /// Scans the contents of the file at `path`. See [KeywordMatcher::match_reader].
    pub async fn match_file<P: AsRef<Path>>(&self, path: P) -> BoxResult<Vec<Match<'_>>> {
        let mut reader = BufReader::new(File::open(path).await?);
        self.match_reader(&mut reader).await
    }
}

/// A resumable scan over a text fed one symbol at a time.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    automaton: &'a AhoCorasick,
    node: NodeId,
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Reads the next symbol of the text and returns the occurrences ending at it.
    ///
    /// # Errors
    /// Returns [AlphabetError::UnmappedSymbol] if `c` is not part of the alphabet. The scan state is left
    /// unchanged.
    pub fn feed(&mut self, c: char) -> Result<impl Iterator<Item = Match<'a>> + 'a, AlphabetError> {
        let automaton = self.automaton;
        self.node = automaton.step(self.node, c)?;

        let end = self.position;
        self.position += 1;

        Ok(automaton.output_indices(self.node).iter().map(move |&key| Match {
            key: automaton.key(key),
            start: end + 1 - automaton.key_len(key),
            end,
        }))
    }

    /// Returns the number of symbols read so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current automaton state.
    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Restarts the scan at position 0.
    pub fn reset(&mut self) {
        self.node = ROOT;
        self.position = 0;
    }
}
