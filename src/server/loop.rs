// Server loop module
// Accepts connections until shutdown is requested

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::handle_connection;
use crate::config::{PerformanceConfig, Site};
use crate::logger;

/// Accept connections until `shutdown` fires.
///
/// Must run inside a `LocalSet`; connections are served by local tasks.
pub async fn start_server_loop(
    listener: TcpListener,
    site: Arc<Site>,
    performance: PerformanceConfig,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, Arc::clone(&site), &performance);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                break;
            }
        }
    }
}
