pub mod corpus;
pub mod error;
pub mod index;
pub mod query;
pub mod repl;

pub use corpus::LineCorpus;
pub use error::{LindexError, Result};
pub use index::InvertedIndex;
pub use query::{AllStrategy, AnyStrategy, NoneStrategy, SearchStrategy, Searcher};
pub use repl::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
