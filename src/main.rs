use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use five_clique::solution::render_line;
use five_clique::{search, wordlist, PuzzleConfig, SearchOptions, WordPool};
use itertools::Itertools;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "five_clique")]
#[command(about = "Find sets of words that share no letters")]
struct Args {
    /// Word list, one word per line.
    #[arg(long, default_value = "words/words_alpha.txt")]
    words: PathBuf,

    /// Directory for the result file, created if absent.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    #[arg(long, default_value = "output.csv")]
    output_file: String,

    /// Letters per word.
    #[arg(long, default_value_t = 5)]
    word_len: usize,

    /// Letters 'a'.. considered part of the alphabet.
    #[arg(long, default_value_t = 26)]
    alphabet_len: usize,

    /// Words per combination.
    #[arg(long, default_value_t = 5)]
    combination_size: usize,

    /// Number of rarest letters used to order and prune the search.
    #[arg(long, default_value_t = 4)]
    target_count: usize,

    /// Run on a single thread.
    #[arg(long)]
    sequential: bool,

    /// Search exhaustively without the rare-letter cutoff.
    #[arg(long)]
    no_prune: bool,

    /// Search each letter set once and list every anagram spelling.
    #[arg(long)]
    collapse_anagrams: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = PuzzleConfig::new(
        args.alphabet_len,
        args.word_len,
        args.combination_size,
        args.target_count,
    )?;
    let options = SearchOptions {
        prune: !args.no_prune,
        parallel: !args.sequential,
    };

    let all_words = wordlist::read_word_list(&args.words)?;
    let mut pool = WordPool::build(all_words, &config);
    if args.collapse_anagrams {
        pool = pool.collapse_anagrams();
    }

    let (solutions, stats) = search::solve(&pool, &config, options);
    info!("comparisons: {}", stats.comparisons());

    let lines = if args.collapse_anagrams {
        solutions.expanded_rows(&pool).map(|row| render_line(&row)).collect_vec()
    } else {
        solutions.rows(&pool).map(|row| render_line(&row)).collect_vec()
    };
    let path = wordlist::write_lines(&args.output_dir, &args.output_file, &lines)
        .context("could not save results")?;
    info!(lines = lines.len(), path = %path.display(), "wrote results");
    Ok(())
}
