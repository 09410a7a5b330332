// Server loop module
// Accepts connections until shutdown is requested

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections on `listener` and hand each to its own task.
///
/// Returns once `shutdown` is notified. Accept errors never stop the loop;
/// they and the shutdown line are logged only when `AppState::log_errors` is
/// set. Connections already spawned are not waited for.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) if state.log_errors => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                    Err(_) => {}
                }
            }

            () = shutdown.notified() => {
                if state.log_errors {
                    logger::log_shutdown();
                }
                break;
            }
        }
    }
}
