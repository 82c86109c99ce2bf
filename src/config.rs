//! Puzzle parameters and search switches.

use crate::error::ConfigError;

/// Widest alphabet a `u32` fingerprint over lowercase ASCII can hold.
pub const MAX_ALPHABET_LEN: usize = 26;

/// The four numbers that define a puzzle instance.
///
/// Together they fix the pruning bound `T - (A - M*L)`, so they are checked
/// once up front instead of trusting signed arithmetic later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// A: letters `'a'..'a' + A` are recognised.
    pub alphabet_len: usize,
    /// L: every candidate word has exactly this many distinct letters.
    pub word_len: usize,
    /// M: words per combination.
    pub combination_size: usize,
    /// T: rarest letters used to order and prune the search.
    pub target_count: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            alphabet_len: 26,
            word_len: 5,
            combination_size: 5,
            target_count: 4,
        }
    }
}

impl PuzzleConfig {
    pub fn new(
        alphabet_len: usize,
        word_len: usize,
        combination_size: usize,
        target_count: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            alphabet_len,
            word_len,
            combination_size,
            target_count,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet_len == 0 || self.alphabet_len > MAX_ALPHABET_LEN {
            return Err(ConfigError::AlphabetLength(self.alphabet_len));
        }
        if self.word_len == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.combination_size < 2 {
            return Err(ConfigError::CombinationSize(self.combination_size));
        }
        let needed = self.letters_used();
        if needed > self.alphabet_len {
            return Err(ConfigError::AlphabetTooSmall {
                combination_size: self.combination_size,
                word_len: self.word_len,
                needed,
                alphabet_len: self.alphabet_len,
            });
        }
        if self.target_count > self.alphabet_len {
            return Err(ConfigError::TargetCount {
                target_count: self.target_count,
                alphabet_len: self.alphabet_len,
            });
        }
        Ok(())
    }

    /// Distinct letters covered by a complete combination (M*L).
    pub fn letters_used(&self) -> usize {
        self.word_len.saturating_mul(self.combination_size)
    }

    /// Letters a complete combination leaves unused (A - M*L).
    pub fn spare_letters(&self) -> usize {
        self.alphabet_len.saturating_sub(self.letters_used())
    }

    /// Fewest target letters any complete combination must cover.
    ///
    /// At most `spare_letters()` letters go unused, so at least
    /// `T - spare_letters()` of the targets appear in every solution.
    /// Zero means the bound never prunes.
    pub fn required_minimum(&self) -> usize {
        self.target_count.saturating_sub(self.spare_letters())
    }
}

/// How the search is run. Neither switch changes the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop scanning a candidate pool at the first zero-score word when the
    /// prefix cannot otherwise reach `required_minimum`.
    pub prune: bool,
    /// Build graph rows and explore start words on the rayon pool.
    pub parallel: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            prune: true,
            parallel: true,
        }
    }
}

impl SearchOptions {
    /// Single-threaded, incremental, with pruning: the reference behaviour.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn exhaustive(self) -> Self {
        Self {
            prune: false,
            ..self
        }
    }
}
