//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: the two index routes, then path
//! resolution and static files. Every response leaves with no-cache headers.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use hyper::body::Body;
use hyper::{Method, Request, StatusCode};

use crate::config::Site;
use crate::handler::static_files::{self, StaticRequest};
use crate::http::{self, HttpResponse};
use crate::index::{self, ContentKind};
use crate::logger::{self, AccessLogEntry};
use crate::resolver;

/// Outcome of routing, kept for the access log
struct Routed {
    response: HttpResponse,
    resolved_path: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B: Body>(
    req: Request<B>,
    site: Arc<Site>,
    peer_addr: SocketAddr,
) -> Result<HttpResponse, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let path = req.uri().path();
    let query = req.uri().query();

    let routed = route(method, path, query, &site).await;
    let response = http::apply_no_cache(routed.response);

    if site.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            req.uri().to_string(),
        );
        entry.resolved_path = routed.resolved_path.filter(|p| p != path);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = body_bytes(method, &response);
        entry.referer = header_string(&req, "referer");
        entry.user_agent = header_string(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &site.access_log_format);
    }

    Ok(response)
}

/// Bytes actually sent; HEAD carries a length but no body
fn body_bytes(method: &Method, response: &HttpResponse) -> usize {
    if *method == Method::HEAD {
        return 0;
    }
    response
        .headers()
        .get("Content-Length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

/// Route a request by method and path, no-cache headers included
pub async fn dispatch(
    method: &Method,
    path: &str,
    query: Option<&str>,
    site: &Site,
) -> HttpResponse {
    http::apply_no_cache(route(method, path, query, site).await.response)
}

async fn route(method: &Method, path: &str, query: Option<&str>, site: &Site) -> Routed {
    match *method {
        Method::GET => {
            if let Some(kind) = ContentKind::from_route(path) {
                return Routed {
                    response: serve_index(kind, site).await,
                    resolved_path: None,
                };
            }

            let resolved = resolver::resolve(path, |p| site.path_exists(p));
            let req = StaticRequest {
                path: &resolved,
                query,
                is_head: false,
            };
            let response = static_files::serve(req, site).await;
            Routed {
                response,
                resolved_path: Some(resolved),
            }
        }
        // HEAD gets plain static serving: no rewriting, no API routes
        Method::HEAD => {
            let req = StaticRequest {
                path,
                query,
                is_head: true,
            };
            Routed {
                response: static_files::serve(req, site).await,
                resolved_path: None,
            }
        }
        _ => {
            logger::log_warning(&format!("Unsupported method: {method} {path}"));
            Routed {
                response: http::build_501_response(method.as_str()),
                resolved_path: None,
            }
        }
    }
}

/// Scan off the async thread; a scan that dies takes the 500 path
async fn serve_index(kind: ContentKind, site: &Site) -> HttpResponse {
    let site = site.clone();
    match tokio::task::spawn_blocking(move || index::build_index_json(kind, &site)).await {
        Ok(envelope) => http::json_response(StatusCode::OK, &envelope),
        Err(e) => {
            logger::log_error(&format!("Index scan for {kind} failed: {e}"));
            http::build_json_error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::{BodyExt, Empty};
    use hyper::body::Bytes;
    use hyper::header::{CACHE_CONTROL, EXPIRES};
    use std::fs;

    fn fixture() -> (tempfile::TempDir, Arc<Site>) {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        fs::write(root.join("index.html"), "home").unwrap();
        fs::write(root.join("about.html"), "about").unwrap();
        fs::create_dir_all(root.join("blog/hello")).unwrap();
        fs::write(root.join("blog/hello/data.json"), "{}").unwrap();
        fs::write(root.join("blog/index.html"), "blog home").unwrap();
        (tmp, Arc::new(Site::new(root)))
    }

    async fn body_string(resp: HttpResponse) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn assert_no_cache(resp: &HttpResponse) {
        assert_eq!(
            resp.headers()[CACHE_CONTROL],
            "no-store, no-cache, must-revalidate, max-age=0"
        );
        assert_eq!(resp.headers()[EXPIRES], "0");
    }

    #[tokio::test]
    async fn test_blog_index_route() {
        let (_tmp, site) = fixture();
        let resp = dispatch(&Method::GET, "/api/blog-index", None, &site).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_no_cache(&resp);
        assert_eq!(body_string(resp).await, r#"{"posts":["blog/hello/data.json"]}"#);
    }

    #[tokio::test]
    async fn test_concepts_index_without_dir() {
        let (_tmp, site) = fixture();
        let resp = dispatch(&Method::GET, "/api/concepts-index", None, &site).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, r#"{"concepts":[]}"#);
    }

    #[tokio::test]
    async fn test_pretty_url_resolves_to_html() {
        let (_tmp, site) = fixture();
        let resp = dispatch(&Method::GET, "/about", None, &site).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_no_cache(&resp);
        assert_eq!(body_string(resp).await, "about");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (_tmp, site) = fixture();
        let resp = dispatch(&Method::GET, "/", None, &site).await;
        assert_eq!(body_string(resp).await, "home");
    }

    #[tokio::test]
    async fn test_not_found_still_no_cache() {
        let (_tmp, site) = fixture();
        let resp = dispatch(&Method::GET, "/missing", None, &site).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_no_cache(&resp);
    }

    #[tokio::test]
    async fn test_head_skips_rewriting() {
        let (_tmp, site) = fixture();
        let resp = dispatch(&Method::HEAD, "/about", None, &site).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = dispatch(&Method::HEAD, "/about.html", None, &site).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Length"], "5");
        assert_no_cache(&resp);
        assert!(body_string(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_head_logs_no_body_bytes() {
        let (_tmp, site) = fixture();
        let head = dispatch(&Method::HEAD, "/about.html", None, &site).await;
        assert_eq!(body_bytes(&Method::HEAD, &head), 0);

        let get = dispatch(&Method::GET, "/about.html", None, &site).await;
        assert_eq!(body_bytes(&Method::GET, &get), 5);
    }

    #[tokio::test]
    async fn test_other_methods_not_implemented() {
        let (_tmp, site) = fixture();
        let resp = dispatch(&Method::POST, "/api/blog-index", None, &site).await;
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
        assert_no_cache(&resp);
    }

    #[tokio::test]
    async fn test_handle_request_uses_path_not_query() {
        let (_tmp, site) = fixture();
        let req = Request::builder()
            .uri("/api/blog-index?fresh=1")
            .body(Empty::<Bytes>::new())
            .unwrap();
        let resp = handle_request(req, site, "127.0.0.1:50000".parse().unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_no_cache(&resp);
    }
}
