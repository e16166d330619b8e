//! Concrete matching strategy implementations
//!
//! One file per strategy, each implementing the `SearchStrategy` trait.

mod all;
mod any;
mod none;

pub use all::AllStrategy;
pub use any::AnyStrategy;
pub use none::NoneStrategy;

use roaring::RoaringBitmap;

use crate::index::InvertedIndex;

/// Union of the posting bitmaps of every query term.
///
/// Absent terms contribute nothing; an empty query yields an empty set.
/// ANY uses this directly, NONE complements it.
fn term_union(index: &InvertedIndex, query: &str) -> RoaringBitmap {
    let mut union = RoaringBitmap::new();
    for term in query.split_whitespace() {
        if let Some(postings) = index.postings(term) {
            union |= postings;
        }
    }
    union
}
