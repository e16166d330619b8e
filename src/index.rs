use std::collections::{HashMap, HashSet};

use roaring::RoaringBitmap;

use crate::corpus::LineCorpus;

/// Word-to-line inverted index, built once over a corpus and never
/// mutated afterwards.
///
/// Keys are the distinct whitespace-split tokens of the corpus. A word's
/// bitmap holds every line whose raw text contains the word as a
/// substring, not just lines where it appears as a standalone token:
/// "cat" is recorded against a line containing "cats". Surprising, but
/// it is the observable behavior this tool is defined by; do not tighten
/// it to exact token matching.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvertedIndex {
    postings: HashMap<String, RoaringBitmap>,
    total_lines: u32,
}

impl InvertedIndex {
    /// Build the index over every line of the corpus.
    ///
    /// Empty lines contribute no tokens but still count toward the
    /// corpus range. An empty corpus yields an empty index.
    pub fn build(corpus: &LineCorpus) -> Self {
        let vocabulary: HashSet<&str> = corpus.iter().flat_map(str::split_whitespace).collect();

        let mut postings = HashMap::with_capacity(vocabulary.len());
        for word in vocabulary {
            let mut lines = RoaringBitmap::new();
            for (lineno, line) in corpus.iter().enumerate() {
                if line.contains(word) {
                    lines.insert(lineno as u32);
                }
            }
            // The origin line contains its own token, so the bitmap is
            // never empty.
            postings.insert(word.to_string(), lines);
        }

        Self {
            postings,
            total_lines: corpus.len() as u32,
        }
    }

    /// Get the posting bitmap for a term, if the term was ever indexed.
    pub fn postings(&self, term: &str) -> Option<&RoaringBitmap> {
        self.postings.get(term)
    }

    /// Whether the term appears in the index vocabulary.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Iterate over the indexed vocabulary.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of lines in the corpus the index was built from.
    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    /// Bitmap covering the full corpus range `[0, total_lines)`.
    pub fn all_lines(&self) -> RoaringBitmap {
        let mut all = RoaringBitmap::new();
        all.insert_range(0..self.total_lines);
        all
    }
}
