//! Content index module
//!
//! Discovers blog posts and concepts on disk and builds the JSON listings
//! served under `/api/`.

pub mod endpoint;
pub mod indexer;

pub use endpoint::{build_index_json, ContentKind, IndexEnvelope};
pub use indexer::scan;
