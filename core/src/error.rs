use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Errors that can occur while mapping symbols onto an alphabet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AlphabetError {
    /// A symbol outside the alphabet was encountered.
    UnmappedSymbol(char),

    /// An explicit alphabet lists the same symbol more than once.
    DuplicateSymbol(char),

    /// A mapping function sends an enumerated symbol outside of `0..size`, or to nothing.
    InvalidMapping(char, Option<usize> /* index */),

    /// A mapping function sends two enumerated symbols to the same index.
    DuplicateIndex(usize),

    /// The declared alphabet size does not match the number of enumerated symbols.
    SizeMismatch(usize /* declared */, usize /* enumerated */),
}

impl Display for AlphabetError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::UnmappedSymbol(c) => write!(f, "Symbol {c:?} is not part of the alphabet"),
            Self::DuplicateSymbol(c) => write!(f, "Symbol {c:?} appears more than once in the alphabet"),
            Self::InvalidMapping(c, Some(index)) => {
                write!(f, "Symbol {c:?} is mapped to index {index}, which is outside of the alphabet")
            }
            Self::InvalidMapping(c, None) => write!(f, "Symbol {c:?} is enumerated but not mapped to any index"),
            Self::DuplicateIndex(index) => write!(f, "More than one symbol is mapped to index {index}"),
            Self::SizeMismatch(declared, enumerated) => {
                write!(f, "Alphabet size mismatch: declared {declared}, but {enumerated} symbols were enumerated")
            }
        }
    }
}

impl Error for AlphabetError {}

/// A type alias for any kind of error. The error is boxed and must be `Send`, `Sync`, and `'static`.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A type alias for a `Result` with a [BoxError].
pub type BoxResult<T> = Result<T, BoxError>;

#[cfg(test)]
mod tests {
    use {super::AlphabetError, pretty_assertions::assert_eq, test_log::test};

    #[test]
    fn test_display() {
        assert_eq!(AlphabetError::UnmappedSymbol('x').to_string(), "Symbol 'x' is not part of the alphabet");
        assert_eq!(
            AlphabetError::InvalidMapping('q', Some(40)).to_string(),
            "Symbol 'q' is mapped to index 40, which is outside of the alphabet"
        );
        assert_eq!(
            AlphabetError::SizeMismatch(3, 2).to_string(),
            "Alphabet size mismatch: declared 3, but 2 symbols were enumerated"
        );
    }
}
