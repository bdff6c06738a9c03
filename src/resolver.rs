//! Request path rewriting
//!
//! Maps pretty URLs onto files: `/blog/` serves `/blog/index.html` and
//! `/about` serves `/about.html` when no `about` entry exists. The
//! existence check is passed in so the policy can be exercised without a disk.

/// Appended to directory requests
pub const INDEX_FILE: &str = "index.html";

/// Fallback extension for extension-less requests
pub const HTML_EXTENSION: &str = ".html";

/// Compute the path to hand to static file serving.
///
/// `file_exists` receives request-style paths (leading `/`) and should
/// answer relative to the serving root.
pub fn resolve<F>(request_path: &str, file_exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    if request_path.ends_with('/') {
        return format!("{request_path}{INDEX_FILE}");
    }

    if has_extension(request_path) || file_exists(request_path) {
        return request_path.to_string();
    }

    let candidate = format!("{request_path}{HTML_EXTENSION}");
    if file_exists(&candidate) {
        candidate
    } else {
        request_path.to_string()
    }
}

/// Whether the last path segment contains a `.`
fn has_extension(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}
