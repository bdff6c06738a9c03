// Connection handling module
// Serves one accepted TCP connection with hyper's HTTP/1 machinery

use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::{PerformanceConfig, Site};
use crate::handler;
use crate::logger;

/// Serve a single connection in a local task.
///
/// The connection is dropped once `connection_timeout` elapses, whether it
/// is idle between keep-alive requests or stuck mid-request.
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    site: Arc<Site>,
    performance: &PerformanceConfig,
) {
    let keep_alive = performance.keep_alive;
    let timeout_duration = Duration::from_secs(performance.connection_timeout);

    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&site), peer_addr)),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }
    });
}
