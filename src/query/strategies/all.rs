//! ALL strategy - every query term must match

use roaring::RoaringBitmap;

use crate::index::InvertedIndex;
use crate::query::strategy::SearchStrategy;

/// Matches lines containing every query term.
///
/// Evaluation intersects the terms' posting sets and short-circuits once
/// the accumulator is empty. A term absent from the index resolves to
/// the empty set, so one unknown term empties the whole result. An empty
/// query yields the empty set.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllStrategy;

impl SearchStrategy for AllStrategy {
    fn search(&self, index: &InvertedIndex, query: &str) -> RoaringBitmap {
        let mut result: Option<RoaringBitmap> = None;

        for term in query.split_whitespace() {
            let matches = index.postings(term).cloned().unwrap_or_default();
            result = Some(match result {
                Some(acc) => acc & matches, // Intersection
                None => matches,
            });

            // Early exit once nothing can match
            if let Some(ref acc) = result {
                if acc.is_empty() {
                    return RoaringBitmap::new();
                }
            }
        }

        result.unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "ALL"
    }

    fn clone_box(&self) -> Box<dyn SearchStrategy> {
        Box::new(self.clone())
    }
}
