//! Index envelopes for the two content kinds.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::indexer;
use crate::config::Site;

/// Content kinds exposed by the index API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Blog,
    Concepts,
}

impl ContentKind {
    /// Prefix used in item paths, relative to the site root
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Concepts => "concepts",
        }
    }

    /// API route serving this kind's index
    pub const fn route(self) -> &'static str {
        match self {
            Self::Blog => "/api/blog-index",
            Self::Concepts => "/api/concepts-index",
        }
    }

    pub fn from_route(path: &str) -> Option<Self> {
        [Self::Blog, Self::Concepts]
            .into_iter()
            .find(|kind| kind.route() == path)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" => Ok(Self::Blog),
            "concepts" => Ok(Self::Concepts),
            other => Err(format!(
                "unknown content kind '{other}' (expected 'blog' or 'concepts')"
            )),
        }
    }
}

/// `{"posts": [...]}` or `{"concepts": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IndexEnvelope {
    #[serde(rename = "posts")]
    Posts(Vec<String>),
    #[serde(rename = "concepts")]
    Concepts(Vec<String>),
}

impl IndexEnvelope {
    pub fn items(&self) -> &[String] {
        match self {
            Self::Posts(items) | Self::Concepts(items) => items,
        }
    }
}

/// Scan the content root for `kind` and wrap the result
pub fn build_index_json(kind: ContentKind, site: &Site) -> IndexEnvelope {
    match kind {
        ContentKind::Blog => IndexEnvelope::Posts(indexer::scan(site.blog_dir(), kind.prefix())),
        ContentKind::Concepts => {
            IndexEnvelope::Concepts(indexer::scan(site.concepts_dir(), kind.prefix()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_blog_envelope() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = tmp.path().join("blog");
        for (name, marker) in [("a", true), ("b", false), (".hidden", true)] {
            fs::create_dir_all(blog.join(name)).unwrap();
            if marker {
                fs::write(blog.join(name).join("data.json"), "{}").unwrap();
            }
        }

        let site = Site::new(tmp.path());
        let envelope = build_index_json(ContentKind::Blog, &site);
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            serde_json::json!({"posts": ["blog/a/data.json"]})
        );
    }

    #[test]
    fn test_concepts_envelope_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::new(tmp.path());
        let envelope = build_index_json(ContentKind::Concepts, &site);
        assert!(envelope.items().is_empty());
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"concepts":[]}"#
        );
    }

    #[test]
    fn test_routes() {
        assert_eq!(
            ContentKind::from_route("/api/blog-index"),
            Some(ContentKind::Blog)
        );
        assert_eq!(
            ContentKind::from_route("/api/concepts-index"),
            Some(ContentKind::Concepts)
        );
        assert_eq!(ContentKind::from_route("/api/blog-index/"), None);
        assert_eq!(ContentKind::from_route("/api"), None);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("blog".parse::<ContentKind>(), Ok(ContentKind::Blog));
        assert_eq!("concepts".parse::<ContentKind>(), Ok(ContentKind::Concepts));
        assert!("posts".parse::<ContentKind>().is_err());
    }
}
