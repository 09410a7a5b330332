//! HTTP protocol layer module
//!
//! Response construction, kept apart from path resolution and file I/O.

pub mod response;

pub use response::{build_error_response, build_file_response};
