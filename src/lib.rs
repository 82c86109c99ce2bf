//! Finds every combination of equal-length words that share no letters.
//!
//! The pipeline is: fingerprint each word as a letter bitmask, rank letters
//! by how rarely they occur, order the words so rare-letter carriers come
//! first, build an index-based compatibility graph, and extend combinations
//! depth-first by intersecting neighbor rows.
//!
//! ```no_run
//! use five_clique::{PuzzleConfig, SearchOptions, WordPool};
//!
//! let config = PuzzleConfig::default();
//! let words = five_clique::wordlist::read_word_list("words_alpha.txt")?;
//! let pool = WordPool::build(words, &config);
//! let (solutions, stats) = five_clique::search::solve(&pool, &config, SearchOptions::default());
//! for line in solutions.rows(&pool) {
//!     println!("{}", line.join(", "));
//! }
//! println!("comparisons: {}", stats.comparisons());
//! # Ok::<(), five_clique::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod frequency;
pub mod graph;
pub mod pool;
pub mod search;
pub mod solution;
pub mod wordlist;

pub use config::{PuzzleConfig, SearchOptions};
pub use error::{ConfigError, Error, Result};
pub use fingerprint::Fingerprint;
pub use pool::{CandidateWord, WordPool};
pub use solution::{Combination, Solutions};
