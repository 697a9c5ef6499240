//! Random key sets, for benchmarks and property tests.
use {crate::Alphabet, rand::Rng};

/// Generates keys of random length made of uniformly chosen symbols of an alphabet.
#[derive(Clone, Debug)]
pub struct RandomKeys {
    symbols: Vec<char>,
    min_len: usize,
    max_len: usize,
}

impl RandomKeys {
    /// Creates a generator for keys of `min_len..=max_len` symbols.
    ///
    /// # Panics
    /// Panics if `min_len > max_len`, or if `alphabet` is empty and `max_len > 0`.
    pub fn new(alphabet: &Alphabet, min_len: usize, max_len: usize) -> Self {
        assert!(min_len <= max_len, "minimum key length {min_len} exceeds maximum {max_len}");
        assert!(max_len == 0 || !alphabet.is_empty(), "cannot generate non-empty keys over an empty alphabet");

        Self {
            symbols: alphabet.symbols().to_vec(),
            min_len,
            max_len,
        }
    }

    /// Generates one key.
    pub fn key<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let len = rng.gen_range(self.min_len..=self.max_len);
        (0..len).map(|_| self.symbols[rng.gen_range(0..self.symbols.len())]).collect()
    }

    /// Generates `count` keys. Keys may repeat.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<String> {
        (0..count).map(|_| self.key(rng)).collect()
    }
}
