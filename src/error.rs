//! Error types for the word-clique search.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid puzzle parameters, detected before any word is read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Letters are `'a'..` and fingerprints are 32 bits wide.
    #[error("alphabet length must be between 1 and 26, got {0}")]
    AlphabetLength(usize),

    #[error("word length must be at least 1")]
    ZeroWordLength,

    #[error("combination size must be at least 2, got {0}")]
    CombinationSize(usize),

    /// The combination cannot fit in the alphabet without reusing a letter.
    #[error("{combination_size} words of {word_len} letters need {needed} letters, alphabet has {alphabet_len}")]
    AlphabetTooSmall {
        combination_size: usize,
        word_len: usize,
        needed: usize,
        alphabet_len: usize,
    },

    #[error("target count {target_count} exceeds alphabet length {alphabet_len}")]
    TargetCount {
        target_count: usize,
        alphabet_len: usize,
    },
}

/// Errors surfaced to the caller of the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The word list could not be opened or read.
    #[error("failed to read word list {path:?}: {source}")]
    ReadWordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output directory {path:?}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write results to {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = ConfigError::AlphabetTooSmall {
            combination_size: 6,
            word_len: 5,
            needed: 30,
            alphabet_len: 26,
        };
        assert_eq!(
            err.to_string(),
            "6 words of 5 letters need 30 letters, alphabet has 26"
        );

        let err = Error::ReadWordList {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read word list \"missing.txt\": not found"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::ZeroWordLength.into();
        assert!(matches!(err, Error::Config(ConfigError::ZeroWordLength)));
    }
}
