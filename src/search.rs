//! Depth-first combination search over the compatibility graph.
//!
//! Starting from a word's neighbor row, each step picks a candidate and
//! narrows the pool to the words compatible with the whole prefix by
//! intersecting sorted rows. Because the pool is ordered by descending
//! target score, a prefix short of target letters can stop at the first
//! candidate that carries none.

use std::sync::atomic::{AtomicU64, Ordering};

use itertools::{EitherOrBoth, Itertools};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{PuzzleConfig, SearchOptions};
use crate::graph::CompatibilityGraph;
use crate::pool::WordPool;
use crate::solution::{Combination, Solutions};

/// Work counters for one search. Informational only.
#[derive(Debug, Default)]
pub struct SearchStats {
    comparisons: AtomicU64,
}

impl SearchStats {
    /// Neighbor-row intersections performed.
    pub fn comparisons(&self) -> u64 {
        self.comparisons.load(Ordering::Relaxed)
    }

    fn count_comparison(&self) {
        self.comparisons.fetch_add(1, Ordering::Relaxed);
    }
}

/// Find every combination in `pool`.
pub fn solve(
    pool: &WordPool,
    config: &PuzzleConfig,
    options: SearchOptions,
) -> (Solutions, SearchStats) {
    let stats = SearchStats::default();
    let search = Search {
        pool,
        combination_size: config.combination_size,
        required_minimum: if options.prune {
            config.required_minimum()
        } else {
            0
        },
        stats: &stats,
    };

    let combinations = if options.parallel {
        let graph = CompatibilityGraph::build_parallel(pool);
        debug!(edges = graph.edge_count(), "built compatibility graph");
        (0..pool.len())
            .into_par_iter()
            .rev()
            .flat_map_iter(|i| search.starting_at(&graph, i))
            .collect::<Vec<_>>()
    } else {
        // Rows are filled lowest score first; a start word only reads rows
        // of later words, which are already complete.
        let mut graph = CompatibilityGraph::with_rows(pool.len());
        let mut combinations = Vec::new();
        for i in (0..pool.len()).rev() {
            graph.fill_row(pool, i);
            combinations.extend(search.starting_at(&graph, i));
        }
        debug!(edges = graph.edge_count(), "built compatibility graph");
        combinations
    };

    let solutions = Solutions::new(combinations);
    info!(
        combinations = solutions.len(),
        comparisons = stats.comparisons(),
        "search finished"
    );
    (solutions, stats)
}

struct Search<'a> {
    pool: &'a WordPool,
    combination_size: usize,
    required_minimum: usize,
    stats: &'a SearchStats,
}

impl Search<'_> {
    /// All combinations whose lowest index is `start`.
    fn starting_at(&self, graph: &CompatibilityGraph, start: usize) -> Vec<Combination> {
        let mut found = Vec::new();
        let neighbors = graph.neighbors(start);
        if neighbors.is_empty() {
            return found;
        }
        let mut prefix = Vec::with_capacity(self.combination_size);
        prefix.push(start);
        self.extend(
            graph,
            neighbors,
            &mut prefix,
            self.pool[start].target_score,
            &mut found,
        );
        found
    }

    fn extend(
        &self,
        graph: &CompatibilityGraph,
        candidates: &[usize],
        prefix: &mut Vec<usize>,
        covered: usize,
        found: &mut Vec<Combination>,
    ) {
        let needs_more_targets = covered < self.required_minimum;

        for &w in candidates {
            let score = self.pool[w].target_score;
            if needs_more_targets && score == 0 {
                // Every later candidate scores zero as well.
                break;
            }

            if prefix.len() + 1 == self.combination_size {
                let mut indices = prefix.clone();
                indices.push(w);
                found.push(Combination::new(indices));
                continue;
            }

            self.stats.count_comparison();
            let next = intersect_sorted(candidates, graph.neighbors(w));
            if next.is_empty() {
                continue;
            }

            prefix.push(w);
            self.extend(graph, &next, prefix, covered + score, found);
            prefix.pop();
        }
    }
}

/// Merge-style intersection of two ascending index lists.
pub fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    a.iter()
        .merge_join_by(b.iter(), |x, y| x.cmp(y))
        .filter_map(|pair| match pair {
            EitherOrBoth::Both(&idx, _) => Some(idx),
            _ => None,
        })
        .collect()
}
