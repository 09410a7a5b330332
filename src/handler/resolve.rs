//! Request target resolution
//!
//! Maps the raw request target onto the base directory. The target is used
//! verbatim: no percent-decoding, no normalization, and `..` segments are
//! left for the filesystem to resolve.

use std::path::{Path, PathBuf};

/// File served for `/` and `/index.html`
pub const INDEX_FILE: &str = "index.html";

/// Resolved request target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The fixed index page
    Index(PathBuf),
    /// Any other file under the base directory
    File(PathBuf),
}

impl Target {
    /// Resolve `request_target` (path plus optional query) against `root`
    pub fn resolve(root: &Path, request_target: &str) -> Self {
        if request_target == "/" || request_target == "/index.html" {
            return Self::Index(root.join(INDEX_FILE));
        }

        // Joining an absolute path would replace `root` entirely
        Self::File(root.join(request_target.trim_start_matches('/')))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Index(path) | Self::File(path) => path,
        }
    }

    pub const fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}
