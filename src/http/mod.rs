//! HTTP protocol layer module
//!
//! Response builders, content types and cache suppression, decoupled from
//! routing and from the filesystem.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use cache::apply_no_cache;
pub use response::{
    build_404_response, build_501_response, build_file_response, build_json_error_response,
    build_redirect_response, json_response, HttpResponse,
};
