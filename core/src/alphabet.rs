//! Mapping of input symbols onto a dense index range `0..K`.
use {
    crate::AlphabetError,
    bitvec::prelude::*,
    once_cell::sync::Lazy,
    std::{
        collections::HashMap,
        fmt::{Debug, Formatter, Result as FmtResult},
        sync::Arc,
    },
};

/// A function mapping a symbol onto its alphabet index.
pub type SymbolMapper = Arc<dyn Fn(char) -> Option<usize> + Send + Sync>;

/// The lowercase ASCII letters `a..=z`, mapped by `c - 'a'`.
pub static LOWERCASE: Lazy<Alphabet> = Lazy::new(|| Alphabet {
    symbols: ('a'..='z').collect(),
    mapping: Mapping::Function(Arc::new(|c: char| c.is_ascii_lowercase().then(|| c as usize - 'a' as usize))),
});

#[derive(Clone)]
enum Mapping {
    Table(HashMap<char, usize>),
    Function(SymbolMapper),
}

/// A bijection between a set of symbols and the indices `0..len()`.
///
/// The alphabet determines the width of every node in the automaton, so it should be kept as small as the keys
/// and texts allow.
#[derive(Clone)]
pub struct Alphabet {
    /// Symbols in index order.
    symbols: Vec<char>,
    mapping: Mapping,
}

impl Alphabet {
    /// Creates an alphabet from an explicit list of symbols. Each symbol is mapped to its position in the list.
    ///
    /// # Errors
    /// Returns [AlphabetError::DuplicateSymbol] if a symbol is listed more than once.
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let mut table = HashMap::new();
        let mut ordered = Vec::new();

        for c in symbols {
            if table.insert(c, ordered.len()).is_some() {
                return Err(AlphabetError::DuplicateSymbol(c));
            }
            ordered.push(c);
        }

        Ok(Self {
            symbols: ordered,
            mapping: Mapping::Table(table),
        })
    }

    /// Creates an alphabet of `size` symbols from a mapping function and the enumeration of its symbols.
    ///
    /// The mapping must send every enumerated symbol to a distinct index below `size`. Symbols that are not
    /// enumerated are never part of the alphabet, whatever the mapping returns for them. The enumeration order
    /// does not need to match the index order.
    ///
    /// # Errors
    /// Returns [AlphabetError::SizeMismatch] if `size` differs from the number of enumerated symbols,
    /// [AlphabetError::InvalidMapping] if a symbol is mapped out of range, and [AlphabetError::DuplicateIndex] if
    /// two symbols share an index.
    pub fn from_fn<F>(size: usize, mapper: F, symbols: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError>
    where
        F: Fn(char) -> Option<usize> + Send + Sync + 'static,
    {
        let enumerated: Vec<char> = symbols.into_iter().collect();
        if enumerated.len() != size {
            return Err(AlphabetError::SizeMismatch(size, enumerated.len()));
        }

        let mut ordered = vec!['\0'; size];
        let mut seen = bitvec![0; size];

        for c in enumerated {
            let index = match mapper(c) {
                Some(index) if index < size => index,
                other => return Err(AlphabetError::InvalidMapping(c, other)),
            };

            if seen[index] {
                return Err(AlphabetError::DuplicateIndex(index));
            }

            seen.set(index, true);
            ordered[index] = c;
        }

        Ok(Self {
            symbols: ordered,
            mapping: Mapping::Function(Arc::new(mapper)),
        })
    }

    /// Derives an alphabet from the distinct symbols occurring in `keys`, indexed by order of first occurrence.
    pub fn from_keys<S: AsRef<str>>(keys: impl IntoIterator<Item = S>) -> Self {
        let mut table = HashMap::new();
        let mut symbols = Vec::new();

        for key in keys {
            for c in key.as_ref().chars() {
                table.entry(c).or_insert_with(|| {
                    symbols.push(c);
                    symbols.len() - 1
                });
            }
        }

        Self {
            symbols,
            mapping: Mapping::Table(table),
        }
    }

    /// Returns the index of `c`.
    ///
    /// # Errors
    /// Returns [AlphabetError::UnmappedSymbol] if `c` is not part of the alphabet.
    pub fn map(&self, c: char) -> Result<usize, AlphabetError> {
        let index = match &self.mapping {
            Mapping::Table(table) => table.get(&c).copied(),
            Mapping::Function(mapper) => mapper(c).filter(|&index| self.symbols.get(index) == Some(&c)),
        };

        index.ok_or(AlphabetError::UnmappedSymbol(c))
    }

    /// Maps every symbol of `s`.
    pub fn map_str(&self, s: &str) -> Result<Vec<usize>, AlphabetError> {
        s.chars().map(|c| self.map(c)).collect()
    }

    /// Indicates whether `c` is part of the alphabet.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.map(c).is_ok()
    }

    /// Returns the symbol with the given index.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Returns the symbols of the alphabet in index order.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the number of symbols (`K`).
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Indicates whether the alphabet has no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Debug for Alphabet {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "Alphabet({:?})", self.symbols)
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}
