//! Query evaluation: matching strategies over the inverted index.
//!
//! A query string is split on whitespace into terms; the selected
//! strategy decides how the terms' posting sets combine:
//! - `ALL`: intersection (every term must match a line)
//! - `ANY`: union (at least one term must match)
//! - `NONE`: complement of the union over the full corpus range

pub mod strategies;
pub mod strategy;

pub use strategies::{AllStrategy, AnyStrategy, NoneStrategy};
pub use strategy::{SearchStrategy, Searcher};
