//! NONE strategy - no query term may match

use roaring::RoaringBitmap;

use crate::index::InvertedIndex;
use crate::query::strategy::SearchStrategy;

/// Matches lines containing none of the query terms.
///
/// Defined as the complement of the ANY result over the full corpus
/// range `[0, total_lines)`, so lines carrying no tokens at all (blank
/// lines) are still reported. An empty query matches every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoneStrategy;

impl SearchStrategy for NoneStrategy {
    fn search(&self, index: &InvertedIndex, query: &str) -> RoaringBitmap {
        let mut result = index.all_lines();
        result -= super::term_union(index, query); // Difference
        result
    }

    fn name(&self) -> &'static str {
        "NONE"
    }

    fn clone_box(&self) -> Box<dyn SearchStrategy> {
        Box::new(self.clone())
    }
}
