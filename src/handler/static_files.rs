//! Static file serving module
//!
//! Maps an already-resolved request path onto the site root and serves the
//! file it names. Directory requests without a trailing slash are redirected,
//! directories with one get their index file, everything else missing is 404.

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tokio::fs;

use crate::config::Site;
use crate::http::{self, mime, HttpResponse};
use crate::logger;

/// Index files tried, in order, for a directory request
pub const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// What the static layer needs to know about a request
#[derive(Debug, Clone, Copy)]
pub struct StaticRequest<'a> {
    /// Path after resolution, still percent-encoded
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub is_head: bool,
}

/// Serve `req.path` from the site root
pub async fn serve(req: StaticRequest<'_>, site: &Site) -> HttpResponse {
    let file_path = site.fs_path(req.path);

    let Ok(meta) = fs::metadata(&file_path).await else {
        return http::build_404_response(req.is_head);
    };

    if meta.is_dir() {
        if !req.path.ends_with('/') {
            let location = match req.query {
                Some(q) => format!("{}/?{q}", req.path),
                None => format!("{}/", req.path),
            };
            return http::build_redirect_response(&location);
        }
        for index in INDEX_FILES {
            let candidate = file_path.join(index);
            if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
                return serve_file(&candidate, site, req.is_head).await;
            }
        }
        return http::build_404_response(req.is_head);
    }

    // A file addressed like a directory does not exist
    if req.path.ends_with('/') {
        return http::build_404_response(req.is_head);
    }

    serve_file(&file_path, site, req.is_head).await
}

async fn serve_file(file_path: &Path, site: &Site, is_head: bool) -> HttpResponse {
    // Symlinks may point anywhere; only serve what really lives under the root
    let Ok(canonical) = fs::canonicalize(file_path).await else {
        return http::build_404_response(is_head);
    };
    if !canonical.starts_with(site.root()) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            file_path.display(),
            canonical.display()
        ));
        return http::build_404_response(is_head);
    }

    let content = match fs::read(&canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                canonical.display()
            ));
            return http::build_404_response(is_head);
        }
    };

    let last_modified = fs::metadata(&canonical)
        .await
        .ok()
        .and_then(|m| m.modified().ok())
        .map(http_date);
    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    http::build_file_response(content, content_type, last_modified.as_deref(), is_head)
}

/// RFC 7231 IMF-fixdate
fn http_date(time: SystemTime) -> String {
    let time: DateTime<Utc> = time.into();
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
