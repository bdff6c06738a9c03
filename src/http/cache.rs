//! Cache suppression
//!
//! A development server must never let the browser hold on to stale
//! assets, so every response leaves with the same header pair.

use hyper::header::{HeaderValue, CACHE_CONTROL, EXPIRES};
use hyper::Response;

pub const NO_CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate, max-age=0";
pub const NO_CACHE_EXPIRES: &str = "0";

/// Stamp the no-cache headers onto a finished response, replacing any
/// cache headers set earlier
pub fn apply_no_cache<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE_CONTROL));
    headers.insert(EXPIRES, HeaderValue::from_static(NO_CACHE_EXPIRES));
    response
}
