// Site state module
// Immutable per-process view of the serving root, shared by every request

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

use super::types::Config;
use crate::error::ServerError;

/// Resolved site layout
#[derive(Debug, Clone)]
pub struct Site {
    root: PathBuf,
    blog_dir: PathBuf,
    concepts_dir: PathBuf,
    pub access_log: bool,
    pub access_log_format: String,
}

impl Site {
    /// Canonicalise the configured root once at startup
    pub fn from_config(config: &Config) -> Result<Self, ServerError> {
        let root = Path::new(&config.site.root)
            .canonicalize()
            .map_err(|source| ServerError::SiteRoot {
                path: config.site.root.clone(),
                source,
            })?;
        if !root.is_dir() {
            return Err(ServerError::SiteRoot {
                path: config.site.root.clone(),
                source: std::io::Error::other("not a directory"),
            });
        }

        let mut site = Self::new(root);
        site.blog_dir = site.root.join(&config.site.blog_dir);
        site.concepts_dir = site.root.join(&config.site.concepts_dir);
        site.access_log = config.logging.access_log;
        site.access_log_format.clone_from(&config.logging.access_log_format);
        Ok(site)
    }

    /// Site with the default layout under `root`, access logging off
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            blog_dir: root.join("blog"),
            concepts_dir: root.join("concepts"),
            root,
            access_log: false,
            access_log_format: "common".to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn blog_dir(&self) -> &Path {
        &self.blog_dir
    }

    pub fn concepts_dir(&self) -> &Path {
        &self.concepts_dir
    }

    /// Existence probe for a request path, rooted at the site root.
    ///
    /// Reports directories as existing too, so `/blog` is left alone
    /// when a `blog/` directory exists and `blog.html` does too.
    pub fn path_exists(&self, request_path: &str) -> bool {
        self.fs_path(request_path).exists()
    }

    /// Map a URL path onto the filesystem under the root.
    ///
    /// The path is percent-decoded and empty, `.` and `..` segments are
    /// dropped, so the result never climbs above the root lexically.
    pub fn fs_path(&self, url_path: &str) -> PathBuf {
        let decoded = percent_decode_str(url_path).decode_utf8_lossy();
        decoded
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }
}
