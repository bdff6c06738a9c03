//! Local development server for the portfolio site.
//!
//! Serves the site from disk with pretty-URL rewriting and caching disabled,
//! and lists blog posts and concepts under `/api/`.

pub mod config;
pub mod css_split;
pub mod error;
pub mod handler;
pub mod http;
pub mod index;
pub mod logger;
pub mod resolver;
pub mod server;
