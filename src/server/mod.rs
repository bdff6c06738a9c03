// Server module entry
// Listener setup, accept loop, per-connection serving and shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the file is mounted under another name
#[path = "loop.rs"]
pub mod server_loop;

use std::sync::Arc;

use tokio::sync::Notify;

pub use listener::create_reusable_listener;
pub use server_loop::start_server_loop;

use crate::config::{Config, Site};
use crate::error::ServerError;
use crate::logger;

/// Bind, serve until Ctrl+C / SIGTERM, then return.
///
/// Runs on the current thread; connections are interleaved as local tasks.
pub async fn run(config: Config, site: Site) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let listener =
        create_reusable_listener(addr).map_err(|source| ServerError::Bind { addr, source })?;

    logger::log_server_start(&addr, site.root(), &config);

    let shutdown = Arc::new(Notify::new());
    signal::start_signal_handler(Arc::clone(&shutdown));

    let local = tokio::task::LocalSet::new();
    local
        .run_until(start_server_loop(
            listener,
            Arc::new(site),
            config.performance,
            shutdown,
        ))
        .await;

    logger::log_server_stopped();
    Ok(())
}
