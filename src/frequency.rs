//! Letter frequency counting and target-letter selection.

use itertools::Itertools;

use crate::fingerprint::Fingerprint;

/// Occurrence count per letter over every accepted word.
///
/// Every letter of the alphabet starts at zero so that letters no word uses
/// still take part in the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: Vec<u64>,
}

impl LetterFrequency {
    pub fn new(alphabet_len: usize) -> Self {
        Self {
            counts: vec![0; alphabet_len],
        }
    }

    /// Count each letter of an accepted word once.
    pub fn record(&mut self, fingerprint: Fingerprint) {
        for idx in fingerprint.letters() {
            if let Some(count) = self.counts.get_mut(idx) {
                *count += 1;
            }
        }
    }

    pub fn count(&self, letter_idx: usize) -> u64 {
        self.counts.get(letter_idx).copied().unwrap_or(0)
    }

    /// Letter indices from rarest to most common. Equal counts keep
    /// alphabetical order.
    pub fn ascending(&self) -> Vec<usize> {
        self.counts
            .iter()
            .enumerate()
            .sorted_by_key(|(_idx, count)| **count)
            .map(|(idx, _count)| idx)
            .collect()
    }

    /// Bitmask of the `target_count` rarest letters.
    pub fn target_set(&self, target_count: usize) -> Fingerprint {
        Fingerprint::of_letters(self.ascending().into_iter().take(target_count))
    }
}
