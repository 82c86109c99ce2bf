//! Reading the dictionary and writing result lines.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// One entry per line. Bytes that are not UTF-8 are replaced, so such
/// lines simply fail fingerprinting later.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
        .collect()
}

pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let read_err = |source: io::Error| Error::ReadWordList {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    let words = read_words(BufReader::new(file)).map_err(read_err)?;
    debug!(path = %path.display(), lines = words.len(), "read word list");
    Ok(words)
}

/// Write one line per row to `dir/file_name`, creating `dir` if needed.
/// Returns the path written.
pub fn write_lines<I, S>(dir: impl AsRef<Path>, file_name: &str, lines: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| Error::CreateOutputDir {
        path: dir.to_owned(),
        source,
    })?;

    let path = dir.join(file_name);
    let write_err = |source: io::Error| Error::WriteOutput {
        path: path.clone(),
        source,
    };
    let mut out = BufWriter::new(File::create(&path).map_err(write_err)?);
    for line in lines {
        writeln!(out, "{}", line.as_ref()).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_words_keeps_raw_lines() {
        let input = b"bingo\nhello\r\n\xffxyz\nlast".as_slice();
        let words = read_words(input).unwrap();
        assert_eq!(words.len(), 4);
        assert_eq!(words[0], "bingo");
        assert_eq!(words[1], "hello\r");
        assert_eq!(words[3], "last");
    }

    #[test]
    fn test_missing_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_word_list(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, Error::ReadWordList { .. }));
    }

    #[test]
    fn test_write_lines_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested").join("output");
        let path = write_lines(&out_dir, "output.csv", ["ab, cd", "ef, gh"]).unwrap();
        assert_eq!(path, out_dir.join("output.csv"));
        assert_eq!(fs::read_to_string(path).unwrap(), "ab, cd\nef, gh\n");
    }
}
