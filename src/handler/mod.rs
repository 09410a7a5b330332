//! Request handler module
//!
//! Resolves each request onto the base directory and answers with the file
//! contents or one of two fixed error pages.

pub mod error;
pub mod resolve;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use error::ServeError;
pub use router::handle_request;
