//! Logger module
//!
//! Provides logging utilities for the file server:
//! - Startup and shutdown lines
//! - Optional access log with several formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::{AccessLogEntry, LogFormat};

use crate::config::{Config, LoggingConfig};
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(
        config.access_log_file.as_deref(),
        config.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Startup line, emitted once after the listener is bound
pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info(&format!("Server running on port {}", addr.port()));
    write_info(&format!("  - Listening on: http://{addr}"));
    write_info(&format!("  - Serving files from: {}", config.server.root.display()));
    if config.server.confine_to_root {
        write_info("  - Requests confined to root directory");
    }
    if let Some(workers) = config.server.workers {
        write_info(&format!("  - Worker threads: {workers}"));
    }
    if config.logging.access_log {
        write_info(&format!(
            "  - Access log: {} ({})",
            config.logging.access_log_file.as_deref().unwrap_or("stdout"),
            config.logging.access_log_format
        ));
    }
}

pub fn log_shutdown() {
    write_info("Shutdown signal received, no longer accepting connections");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_access(entry: &AccessLogEntry, format: &LogFormat) {
    write_info(&entry.format(format));
}
