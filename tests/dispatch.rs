//! End-to-end routing over a realistic site tree.

use std::fs;
use std::path::Path;

use http_body_util::BodyExt;
use hyper::header::{CACHE_CONTROL, EXPIRES};
use hyper::{Method, StatusCode};
use portfolio_devserver::config::Site;
use portfolio_devserver::handler::dispatch;
use portfolio_devserver::http::HttpResponse;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn portfolio() -> (TempDir, Site) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    write(&root, "index.html", "<h1>home</h1>");
    write(&root, "portfolio.html", "<h1>portfolio</h1>");
    write(&root, "assets/css/style.css", "body {}");
    write(&root, "blog/index.html", "<h1>blog</h1>");
    write(&root, "blog/post.html", "<h1>post page</h1>");
    write(&root, "blog/2024-rust/data.json", r#"{"title":"Rust"}"#);
    write(&root, "blog/2023-intro/data.json", r#"{"title":"Intro"}"#);
    write(&root, "blog/.drafts/data.json", "{}");
    fs::create_dir_all(root.join("blog/images")).unwrap();
    write(&root, "concepts/index.html", "<h1>concepts</h1>");
    write(&root, "concepts/solar/data.json", "{}");
    (tmp, Site::new(root))
}

async fn get(site: &Site, path: &str) -> HttpResponse {
    dispatch(&Method::GET, path, None, site).await
}

async fn body(resp: HttpResponse) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn blog_index_lists_marked_directories_in_order() {
    let (_tmp, site) = portfolio();
    let resp = get(&site, "/api/blog-index").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["Content-Type"], "application/json");

    let json: serde_json::Value = serde_json::from_str(&body(resp).await).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "posts": ["blog/2023-intro/data.json", "blog/2024-rust/data.json"]
        })
    );
}

#[tokio::test]
async fn concepts_index_uses_its_own_envelope() {
    let (_tmp, site) = portfolio();
    let resp = get(&site, "/api/concepts-index").await;
    let json: serde_json::Value = serde_json::from_str(&body(resp).await).unwrap();
    assert_eq!(json, serde_json::json!({"concepts": ["concepts/solar/data.json"]}));
}

#[tokio::test]
async fn index_tracks_filesystem_changes() {
    let (_tmp, site) = portfolio();
    write(site.root(), "concepts/lunar/data.json", "{}");
    let json: serde_json::Value =
        serde_json::from_str(&body(get(&site, "/api/concepts-index").await).await).unwrap();
    assert_eq!(json["concepts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn pretty_urls_resolve() {
    let (_tmp, site) = portfolio();
    assert_eq!(body(get(&site, "/portfolio").await).await, "<h1>portfolio</h1>");
    assert_eq!(body(get(&site, "/blog/post").await).await, "<h1>post page</h1>");
    assert_eq!(body(get(&site, "/blog/").await).await, "<h1>blog</h1>");
}

#[tokio::test]
async fn directory_without_slash_redirects() {
    let (_tmp, site) = portfolio();
    let resp = get(&site, "/concepts").await;
    assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(resp.headers()["Location"], "/concepts/");
}

#[tokio::test]
async fn directory_without_index_is_not_found() {
    let (_tmp, site) = portfolio();
    let resp = get(&site, "/blog/images/").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn traversal_stays_inside_root() {
    let (_tmp, site) = portfolio();
    let resp = get(&site, "/../../../../etc/passwd").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_response_disables_caching() {
    let (_tmp, site) = portfolio();
    let mut responses = Vec::new();
    for path in [
        "/",
        "/api/blog-index",
        "/api/concepts-index",
        "/assets/css/style.css",
        "/nope",
        "/concepts",
    ] {
        responses.push(get(&site, path).await);
    }
    responses.push(dispatch(&Method::HEAD, "/index.html", None, &site).await);
    responses.push(dispatch(&Method::DELETE, "/index.html", None, &site).await);

    for resp in &responses {
        assert_eq!(
            resp.headers()[CACHE_CONTROL],
            "no-store, no-cache, must-revalidate, max-age=0"
        );
        assert_eq!(resp.headers()[EXPIRES], "0");
    }
}
