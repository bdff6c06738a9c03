// Configuration module entry point
// Loads configuration from file, environment and command-line overrides

mod site;
mod types;

use std::net::SocketAddr;

pub use site::Site;
pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig, SiteConfig};

use crate::error::ServerError;

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "devserver";

/// Environment variable prefix, e.g. `DEVSERVER_SERVER__PORT=9000`
const ENV_PREFIX: &str = "DEVSERVER";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// The file is optional; defaults cover every field
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("site.root", ".")?
            .set_default("site.blog_dir", "blog")?
            .set_default("site.concepts_dir", "concepts")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    /// Apply command-line overrides on top of the loaded values
    #[must_use]
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        root: Option<String>,
    ) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(root) = root {
            self.site.root = root;
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e: std::net::AddrParseError| ServerError::InvalidAddress {
                addr,
                reason: e.to_string(),
            })
    }
}
