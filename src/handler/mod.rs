//! Request handler module
//!
//! Routes requests to the content index API or to static file serving.

pub mod router;
pub mod static_files;

// Re-export main entry points
pub use router::{dispatch, handle_request};
