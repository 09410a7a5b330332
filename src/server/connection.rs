// Connection handling module
// Serves one accepted TCP connection in its own task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Spawn a task serving HTTP/1.1 on `stream` until the peer closes it.
///
/// Requests on the same keep-alive connection are answered in order; separate
/// connections run concurrently. Errors end only this connection and are
/// reported only when `AppState::log_errors` is set.
pub fn accept_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    let state = Arc::clone(state);
    let log_errors = state.log_errors;

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            handler::handle_request(req, Arc::clone(&state), peer_addr)
        });

        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
            if log_errors {
                logger::log_connection_error(&err);
            }
        }
    });
}
