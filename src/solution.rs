//! Completed combinations and their translation back into words.

use itertools::Itertools;

use crate::fingerprint::Fingerprint;
use crate::pool::WordPool;

/// Pool indices of one solution, strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination(Vec<usize>);

impl Combination {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Union of the member fingerprints.
    pub fn letters(&self, pool: &WordPool) -> Fingerprint {
        self.0
            .iter()
            .fold(Fingerprint::EMPTY, |acc, &idx| acc | pool[idx].fingerprint)
    }

    /// The member words' primary spellings.
    pub fn words<'a>(&self, pool: &'a WordPool) -> Vec<&'a str> {
        self.0.iter().map(|&idx| pool[idx].text.as_str()).collect()
    }
}

/// Every combination a search produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solutions {
    combinations: Vec<Combination>,
}

impl Solutions {
    pub fn new(combinations: Vec<Combination>) -> Self {
        Self { combinations }
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Combination> {
        self.combinations.iter()
    }

    /// Ordered by index tuple, so runs can be compared directly.
    pub fn sorted(mut self) -> Self {
        self.combinations.sort_unstable();
        self
    }

    /// One row of words per combination.
    pub fn rows<'a>(&'a self, pool: &'a WordPool) -> impl Iterator<Item = Vec<&'a str>> + 'a {
        self.combinations.iter().map(move |c| c.words(pool))
    }

    /// One row per combination and per choice of anagram spellings.
    ///
    /// Only differs from [`Solutions::rows`] for a pool built with
    /// [`WordPool::collapse_anagrams`].
    pub fn expanded_rows<'a>(&'a self, pool: &'a WordPool) -> impl Iterator<Item = Vec<&'a str>> + 'a {
        self.combinations.iter().flat_map(move |c| {
            c.indices()
                .iter()
                .map(move |&idx| pool[idx].spellings())
                .multi_cartesian_product()
        })
    }
}

impl IntoIterator for Solutions {
    type Item = Combination;
    type IntoIter = std::vec::IntoIter<Combination>;

    fn into_iter(self) -> Self::IntoIter {
        self.combinations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a Combination;
    type IntoIter = std::slice::Iter<'a, Combination>;

    fn into_iter(self) -> Self::IntoIter {
        self.combinations.iter()
    }
}

/// A result line: the words joined by comma and space.
pub fn render_line(words: &[&str]) -> String {
    words.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PuzzleConfig;

    #[test]
    fn test_rows_and_letters() {
        let config = PuzzleConfig::new(10, 2, 2, 2).unwrap();
        let pool = WordPool::build(["ab", "cd"], &config);
        let solutions = Solutions::new(vec![Combination::new(vec![0, 1])]);
        let rows: Vec<_> = solutions.rows(&pool).collect();
        assert_eq!(rows.len(), 1);
        let mut row = rows[0].clone();
        row.sort_unstable();
        assert_eq!(row, ["ab", "cd"]);
        assert_eq!(solutions.iter().next().unwrap().letters(&pool).len(), 4);
        assert_eq!(render_line(&["ab", "cd"]), "ab, cd");
    }

    #[test]
    fn test_expanded_rows_cover_every_spelling() {
        let config = PuzzleConfig::new(10, 2, 2, 2).unwrap();
        let pool = WordPool::build(["ab", "ba", "cd", "dc"], &config).collapse_anagrams();
        assert_eq!(pool.len(), 2);
        let solutions = Solutions::new(vec![Combination::new(vec![0, 1])]);
        assert_eq!(solutions.rows(&pool).count(), 1);
        let expanded: Vec<_> = solutions.expanded_rows(&pool).collect();
        assert_eq!(expanded.len(), 4);
        assert!(expanded.iter().all(|row| row.len() == 2));
    }

    #[test]
    fn test_sorted() {
        let solutions = Solutions::new(vec![
            Combination::new(vec![2, 3]),
            Combination::new(vec![0, 4]),
            Combination::new(vec![0, 1]),
        ])
        .sorted();
        let first: Vec<_> = solutions.iter().map(|c| c.indices()[1]).collect();
        assert_eq!(first, [1, 4, 3]);
    }
}
