//! The candidate word list: filtering, target scoring and search ordering.

use std::cmp::Reverse;
use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::PuzzleConfig;
use crate::fingerprint::Fingerprint;
use crate::frequency::LetterFrequency;

/// A dictionary word admitted to the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWord {
    pub text: String,
    pub fingerprint: Fingerprint,
    /// Letters of `fingerprint` that fall in the pool's target set.
    pub target_score: usize,
    /// Other spellings with the same fingerprint, only filled in after
    /// [`WordPool::collapse_anagrams`].
    pub anagrams: Vec<String>,
}

impl CandidateWord {
    /// Every spelling this candidate stands for, `text` first.
    pub fn spellings(&self) -> impl Iterator<Item = &str> + Clone {
        std::iter::once(self.text.as_str()).chain(self.anagrams.iter().map(String::as_str))
    }
}

/// Accepted words sorted by descending target score.
///
/// Built once, then only read. Everything downstream refers to words by
/// their index in this list.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<CandidateWord>,
    target_set: Fingerprint,
    frequency: LetterFrequency,
}

impl WordPool {
    /// Filter, fingerprint, rank and order a raw word list.
    ///
    /// Lines are trimmed; anything that is not exactly `word_len` distinct
    /// letters of the alphabet is dropped. Ties in target score keep input
    /// order.
    pub fn build<I, S>(lines: I, config: &PuzzleConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequency = LetterFrequency::new(config.alphabet_len);
        let mut words = Vec::new();
        let mut rejected = 0usize;

        for line in lines {
            let w = line.as_ref().trim();
            match Fingerprint::of_word(w, config) {
                Some(fingerprint) => {
                    frequency.record(fingerprint);
                    words.push(CandidateWord {
                        text: w.to_owned(),
                        fingerprint,
                        target_score: 0,
                        anagrams: Vec::new(),
                    });
                }
                None => rejected += 1,
            }
        }

        let target_set = frequency.target_set(config.target_count);
        for word in &mut words {
            word.target_score = (word.fingerprint & target_set).len();
        }
        words.sort_by_key(|w| Reverse(w.target_score));

        info!(
            accepted = words.len(),
            rejected,
            targets = %target_set,
            "built word pool"
        );

        Self {
            words,
            target_set,
            frequency,
        }
    }

    /// Merge words sharing a fingerprint into a single candidate.
    ///
    /// The first spelling seen stays as `text`, the rest move into
    /// `anagrams`. Target set and ordering are unchanged.
    pub fn collapse_anagrams(self) -> Self {
        let before = self.words.len();
        let mut slot_of: HashMap<Fingerprint, usize> = HashMap::with_capacity(before);
        let mut words: Vec<CandidateWord> = Vec::with_capacity(before);

        for word in self.words {
            match slot_of.get(&word.fingerprint) {
                Some(&slot) => {
                    let kept = &mut words[slot];
                    kept.anagrams.push(word.text);
                    kept.anagrams.extend(word.anagrams);
                }
                None => {
                    slot_of.insert(word.fingerprint, words.len());
                    words.push(word);
                }
            }
        }

        debug!(before, after = words.len(), "collapsed anagrams");

        Self {
            words,
            target_set: self.target_set,
            frequency: self.frequency,
        }
    }

    pub fn words(&self) -> &[CandidateWord] {
        &self.words
    }

    pub fn get(&self, idx: usize) -> Option<&CandidateWord> {
        self.words.get(idx)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn target_set(&self) -> Fingerprint {
        self.target_set
    }

    pub fn frequency(&self) -> &LetterFrequency {
        &self.frequency
    }
}

impl std::ops::Index<usize> for WordPool {
    type Output = CandidateWord;

    fn index(&self, idx: usize) -> &CandidateWord {
        &self.words[idx]
    }
}
