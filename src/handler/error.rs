//! Request error kinds
//!
//! Every read failure collapses into one of two outcomes, chosen by which
//! branch the request resolved to. The underlying `io::Error` is discarded.

use hyper::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeError {
    /// `index.html` could not be read (500)
    IndexUnreadable,
    /// Any other requested file could not be read (404)
    FileUnreadable,
}

impl ServeError {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::IndexUnreadable => StatusCode::INTERNAL_SERVER_ERROR,
            Self::FileUnreadable => StatusCode::NOT_FOUND,
        }
    }

    /// Fixed response body
    pub const fn message(self) -> &'static str {
        match self {
            Self::IndexUnreadable => "Internal Server Error",
            Self::FileUnreadable => "File Not Found",
        }
    }
}

impl std::fmt::Display for ServeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status().as_u16(), self.message())
    }
}

impl std::error::Error for ServeError {}
