//! The strategy seam: one capability, "evaluate a query against an index".

use std::fmt::Debug;

use roaring::RoaringBitmap;

use crate::error::{LindexError, Result};
use crate::index::InvertedIndex;
use crate::query::strategies::{AllStrategy, AnyStrategy, NoneStrategy};

/// Core trait for query matching strategies
///
/// Strategies are stateless: the result is a pure function of the index
/// and the query string. Terms absent from the index resolve to the
/// empty set and never fault.
pub trait SearchStrategy: Send + Sync + Debug {
    /// Evaluate the query and return matching line numbers as a bitmap.
    fn search(&self, index: &InvertedIndex, query: &str) -> RoaringBitmap;

    /// Strategy name as selected at the prompt ("ALL", "ANY", "NONE").
    fn name(&self) -> &'static str;

    /// Clone this strategy into a boxed trait object.
    fn clone_box(&self) -> Box<dyn SearchStrategy>;
}

impl Clone for Box<dyn SearchStrategy> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Dispatcher holding the strategy selected for the current query.
///
/// A `Searcher` always holds a valid strategy: parsing the strategy name
/// fails up front with `UnknownStrategy`, so there is no representable
/// "no strategy selected yet" state for a search to trip over.
#[derive(Clone, Debug)]
pub struct Searcher {
    strategy: Box<dyn SearchStrategy>,
}

impl Searcher {
    /// Create a searcher from a concrete strategy.
    pub fn new(strategy: impl SearchStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Parse a strategy name. Names are exact and case-sensitive.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "ALL" => Ok(Self::new(AllStrategy)),
            "ANY" => Ok(Self::new(AnyStrategy)),
            "NONE" => Ok(Self::new(NoneStrategy)),
            other => Err(LindexError::UnknownStrategy(other.to_string())),
        }
    }

    /// Forward the query to the held strategy.
    pub fn search(&self, index: &InvertedIndex, query: &str) -> RoaringBitmap {
        self.strategy.search(index, query)
    }

    /// Name of the held strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}
