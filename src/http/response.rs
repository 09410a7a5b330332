//! HTTP response building module
//!
//! Builders for the handful of responses the file server ever sends.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::handler::ServeError;

/// Content type sent with the index page
pub const INDEX_CONTENT_TYPE: &str = "text/html";

/// Content type sent with error bodies
pub const ERROR_CONTENT_TYPE: &str = "text/plain";

/// Build 200 OK response carrying file bytes.
///
/// `content_type` is `None` for everything except the index page; no
/// `Content-Type` header is sent in that case.
pub fn build_file_response(data: Bytes, content_type: Option<&str>) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }

    builder.body(Full::new(data)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build the fixed plain-text response for a failed read
pub fn build_error_response(err: ServeError) -> Response<Full<Bytes>> {
    let status = err.status();
    Response::builder()
        .status(status)
        .header("Content-Type", ERROR_CONTENT_TYPE)
        .body(Full::new(Bytes::from_static(err.message().as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            let mut response = Response::new(Full::new(Bytes::from_static(err.message().as_bytes())));
            *response.status_mut() = status;
            response
        })
}

fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_file_response_without_content_type() {
        let response = build_file_response(Bytes::from_static(b"body{}"), None);
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("content-type").is_none());
        assert_eq!(body_bytes(response).await, "body{}");
    }

    #[tokio::test]
    async fn test_file_response_with_content_type() {
        let response = build_file_response(Bytes::from_static(b"<h1>Hi</h1>"), Some(INDEX_CONTENT_TYPE));
        assert_eq!(response.headers()["content-type"], "text/html");
        assert_eq!(body_bytes(response).await, "<h1>Hi</h1>");
    }

    #[tokio::test]
    async fn test_error_responses() {
        let response = build_error_response(ServeError::IndexUnreadable);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["content-type"], "text/plain");
        assert_eq!(body_bytes(response).await, "Internal Server Error");

        let response = build_error_response(ServeError::FileUnreadable);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["content-type"], "text/plain");
        assert_eq!(body_bytes(response).await, "File Not Found");
    }
}
