//! Letter-disjointness graph over the word pool.
//!
//! Row `i` lists the indices `k > i` whose fingerprint shares no letter with
//! word `i`, in ascending order. Only looking forward means every
//! combination is reachable from exactly one start word, with its indices
//! ascending.

use rayon::prelude::*;

use crate::pool::WordPool;

#[derive(Debug, Clone, Default)]
pub struct CompatibilityGraph {
    rows: Vec<Vec<usize>>,
}

impl CompatibilityGraph {
    /// A graph with `len` rows, none computed yet.
    pub fn with_rows(len: usize) -> Self {
        Self {
            rows: vec![Vec::new(); len],
        }
    }

    /// Every row at once, on the rayon pool.
    pub fn build_parallel(pool: &WordPool) -> Self {
        let rows = (0..pool.len())
            .into_par_iter()
            .map(|i| forward_neighbors(pool, i))
            .collect();
        Self { rows }
    }

    /// Every row, lowest-scoring word first.
    pub fn build(pool: &WordPool) -> Self {
        let mut graph = Self::with_rows(pool.len());
        for i in (0..pool.len()).rev() {
            graph.fill_row(pool, i);
        }
        graph
    }

    /// Compute row `i` in place and return it.
    pub fn fill_row(&mut self, pool: &WordPool, i: usize) -> &[usize] {
        self.rows[i] = forward_neighbors(pool, i);
        &self.rows[i]
    }

    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.rows[i]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

fn forward_neighbors(pool: &WordPool, i: usize) -> Vec<usize> {
    let words = pool.words();
    let mask = words[i].fingerprint;
    words
        .iter()
        .enumerate()
        .skip(i + 1)
        .filter(|(_k, w)| w.fingerprint.is_disjoint(mask))
        .map(|(k, _w)| k)
        .collect()
}
