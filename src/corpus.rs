use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LindexError, Result};

/// Ordered collection of text lines loaded from a source file.
///
/// Line numbers are zero-based and stable for the lifetime of the corpus.
/// The corpus is immutable after load; the index and the strategies only
/// ever read it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineCorpus {
    lines: Vec<String>,
}

impl LineCorpus {
    /// Create a corpus from an already-loaded line sequence.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Load a corpus from a plain-text file, one record per line.
    ///
    /// Every line is kept, including empty ones. Failures (missing file,
    /// permissions, read faults) surface as `CorpusLoad` naming the path;
    /// a partially-read file never produces a partial corpus.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LindexError::CorpusLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| LindexError::CorpusLoad {
                path: path.to_path_buf(),
                source,
            })?;
            lines.push(line);
        }

        Ok(Self { lines })
    }

    /// Get the line at a zero-based line number.
    pub fn line(&self, lineno: u32) -> Option<&str> {
        self.lines.get(lineno as usize).map(String::as_str)
    }

    /// Number of lines in the corpus.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over lines in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
