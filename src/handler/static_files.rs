//! Static file serving module
//!
//! Reads the resolved target and turns the outcome into a response.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use crate::config::AppState;
use crate::handler::error::ServeError;
use crate::handler::resolve::Target;
use crate::http::{self, response::INDEX_CONTENT_TYPE};
use crate::logger;

/// Serve a resolved target
pub async fn serve(target: &Target, state: &AppState) -> Response<Full<Bytes>> {
    match load(target, state.confined_root.as_deref()).await {
        Ok(data) => {
            let content_type = target.is_index().then_some(INDEX_CONTENT_TYPE);
            http::build_file_response(data, content_type)
        }
        Err(err) => http::build_error_response(err),
    }
}

/// Read the full contents of `target`.
///
/// With `confined_root` set, a general target whose canonical path is outside
/// that directory is reported as unreadable.
pub async fn load(target: &Target, confined_root: Option<&Path>) -> Result<Bytes, ServeError> {
    let err = if target.is_index() {
        ServeError::IndexUnreadable
    } else {
        ServeError::FileUnreadable
    };

    if let (Target::File(path), Some(root)) = (target, confined_root) {
        let canonical = fs::canonicalize(path).await.map_err(|_| err)?;
        if !canonical.starts_with(root) {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                path.display(),
                canonical.display()
            ));
            return Err(err);
        }
    }

    fs::read(target.path()).await.map(Bytes::from).map_err(|_| err)
}
