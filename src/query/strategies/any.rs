//! ANY strategy - at least one query term must match

use roaring::RoaringBitmap;

use crate::index::InvertedIndex;
use crate::query::strategy::SearchStrategy;

/// Matches lines containing at least one query term.
///
/// The result is the union of the terms' posting sets; absent terms
/// contribute nothing. An empty query yields the empty set.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyStrategy;

impl SearchStrategy for AnyStrategy {
    fn search(&self, index: &InvertedIndex, query: &str) -> RoaringBitmap {
        super::term_union(index, query)
    }

    fn name(&self) -> &'static str {
        "ANY"
    }

    fn clone_box(&self) -> Box<dyn SearchStrategy> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineCorpus;

    fn sample_index() -> InvertedIndex {
        let corpus = LineCorpus::from_lines(vec![
            "the cat sat".to_string(),
            "the dog ran".to_string(),
            "cats and dogs".to_string(),
        ]);
        InvertedIndex::build(&corpus)
    }

    #[test]
    fn test_any_unions() {
        let index = sample_index();
        // "cat" substring-matches "cats" on line 2, so all three lines match.
        let result: Vec<u32> = AnyStrategy.search(&index, "the cat").iter().collect();
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[test]
    fn test_any_ignores_absent_terms() {
        let index = sample_index();
        let result: Vec<u32> = AnyStrategy.search(&index, "dog xyz").iter().collect();
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_any_empty_query() {
        let index = sample_index();
        assert!(AnyStrategy.search(&index, "").is_empty());
    }

    #[test]
    fn test_any_term_order_irrelevant() {
        let index = sample_index();
        assert_eq!(
            AnyStrategy.search(&index, "cat dog"),
            AnyStrategy.search(&index, "dog cat")
        );
    }
}
