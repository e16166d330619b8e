//! Interactive menu session
//!
//! The loop is generic over its input and output handles so tests can
//! drive a whole session from in-memory buffers instead of a console.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::corpus::LineCorpus;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::Searcher;

/// One interactive session over a loaded corpus and its index.
pub struct Session<'a, R, W> {
    corpus: &'a LineCorpus,
    index: &'a InvertedIndex,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(corpus: &'a LineCorpus, index: &'a InvertedIndex, input: R, output: W) -> Self {
        Self {
            corpus,
            index,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// Every user-input problem (unknown menu option, unknown strategy
    /// name) is reported and the loop continues; only I/O failures on
    /// the handles propagate.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "=== Menu ===")?;
            writeln!(self.output, "1. Search lines")?;
            writeln!(self.output, "2. List all lines")?;
            writeln!(self.output, "0. Exit")?;

            let Some(choice) = self.read_line()? else {
                return Ok(());
            };
            match choice.trim() {
                "0" => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(());
                }
                "1" => self.search()?,
                "2" => self.list_all()?,
                _ => writeln!(self.output, "Incorrect option! Try again.")?,
            }
        }
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.output, "Select a matching strategy: ALL, ANY, NONE")?;
        let Some(name) = self.read_line()? else {
            return Ok(());
        };

        // Reject the strategy before ever prompting for a query; a bad
        // name must not leave a previous strategy in effect.
        let searcher = match Searcher::from_name(name.trim()) {
            Ok(searcher) => searcher,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };

        writeln!(self.output, "Enter a search query.")?;
        let Some(query) = self.read_line()? else {
            return Ok(());
        };

        let matches = searcher.search(self.index, &query);
        debug!(
            "query executed: strategy={} matches={}",
            searcher.strategy_name(),
            matches.len()
        );

        if matches.is_empty() {
            writeln!(self.output, "No matching lines.")?;
            return Ok(());
        }
        for lineno in matches.iter() {
            if let Some(line) = self.corpus.line(lineno) {
                writeln!(self.output, "{line}")?;
            }
        }
        Ok(())
    }

    fn list_all(&mut self) -> Result<()> {
        writeln!(self.output, "=== All lines ===")?;
        for line in self.corpus.iter() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Read one line, flushing pending prompts first. `None` means end
    /// of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}
