// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Listening address
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the site lives on disk
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Serving root; every request path is resolved beneath it
    pub root: String,
    /// Blog content directory, relative to `root`
    #[serde(default = "default_blog_dir")]
    pub blog_dir: String,
    /// Concepts content directory, relative to `root`
    #[serde(default = "default_concepts_dir")]
    pub concepts_dir: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_blog_dir() -> String {
    "blog".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_concepts_dir() -> String {
    "concepts".to_string()
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (common, combined or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "common".to_string()
}

/// Connection handling
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Seconds before an idle or slow connection is dropped
    pub connection_timeout: u64,
}
