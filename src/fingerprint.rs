//! One bit per letter as bitset.

use std::fmt;
use std::ops::{BitAnd, BitOr};

use crate::config::PuzzleConfig;

/// The set of letters a word contains, bit `c - 'a'` per letter.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(u32);

impl Fingerprint {
    pub const EMPTY: Fingerprint = Fingerprint(0);

    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Fingerprint of a candidate word, or `None` if it does not qualify.
    ///
    /// A word qualifies when it is exactly `word_len` bytes, every byte is a
    /// letter inside the configured alphabet, and no letter repeats (the
    /// population count equals the length).
    pub fn of_word(word: &str, config: &PuzzleConfig) -> Option<Self> {
        if word.len() != config.word_len {
            return None;
        }
        let mut mask = 0u32;
        for c in word.bytes() {
            let letter_idx = letter_index(c, config.alphabet_len)?;
            mask |= 1 << letter_idx;
        }
        let fingerprint = Self(mask);
        (fingerprint.len() == config.word_len).then_some(fingerprint)
    }

    /// Fingerprint of an arbitrary set of letter indices.
    pub fn of_letters(letters: impl IntoIterator<Item = usize>) -> Self {
        letters
            .into_iter()
            .fold(Self::EMPTY, |acc, idx| Self(acc.0 | (1 << idx)))
    }

    /// Number of letters in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if no letter is shared.
    pub fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    pub fn contains(self, letter_idx: usize) -> bool {
        self.0 & (1 << letter_idx) != 0
    }

    /// Letter indices in ascending order.
    pub fn letters(self) -> impl Iterator<Item = usize> {
        (0..32).filter(move |&idx| self.contains(idx))
    }
}

impl BitAnd for Fingerprint {
    type Output = Fingerprint;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Fingerprint {
    type Output = Fingerprint;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b} {self}", self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for idx in self.letters() {
            write!(f, "{}", (b'a' + idx as u8) as char)?;
        }
        Ok(())
    }
}

fn letter_index(c: u8, alphabet_len: usize) -> Option<usize> {
    let idx = c.checked_sub(b'a')? as usize;
    (idx < alphabet_len).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bits() {
        let config = PuzzleConfig::default();
        assert_eq!(Fingerprint::of_word("abcde", &config), Some(Fingerprint(0b11111)));
        assert_eq!(
            Fingerprint::of_word("azhkg", &config),
            Some(Fingerprint(0b10_0000_0000_0000_0100_1100_0001))
        );
    }

    #[test]
    fn test_rejects_repeated_letters() {
        let config = PuzzleConfig::default();
        assert_eq!(Fingerprint::of_word("hello", &config), None);
        let bingo = Fingerprint::of_word("bingo", &config).unwrap();
        assert_eq!(bingo.len(), 5);
        assert_eq!(bingo.to_string(), "bgino");
    }

    #[test]
    fn test_rejects_wrong_length_and_foreign_letters() {
        let config = PuzzleConfig::default();
        assert_eq!(Fingerprint::of_word("abcd", &config), None);
        assert_eq!(Fingerprint::of_word("abcdef", &config), None);
        assert_eq!(Fingerprint::of_word("Abcde", &config), None);
        assert_eq!(Fingerprint::of_word("ab-de", &config), None);
        assert_eq!(Fingerprint::of_word("ábcd", &config), None);

        let small = PuzzleConfig::new(10, 2, 2, 2).unwrap();
        assert!(Fingerprint::of_word("ij", &small).is_some());
        assert_eq!(Fingerprint::of_word("ik", &small), None);
    }

    #[test]
    fn test_set_operations() {
        let ab = Fingerprint::of_letters([0, 1]);
        let cd = Fingerprint::of_letters([2, 3]);
        let ac = Fingerprint::of_letters([0, 2]);
        assert!(ab.is_disjoint(cd));
        assert!(!ab.is_disjoint(ac));
        assert_eq!((ab | cd).len(), 4);
        assert_eq!(ab & ac, Fingerprint::of_letters([0]));
        assert_eq!((ab | cd).letters().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert!(Fingerprint::EMPTY.is_empty());
    }
}
