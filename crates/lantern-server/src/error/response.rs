//! Error response implementation.

use super::types::RenderError;
use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        let detail = self.detail();

        if self.is_server_error() {
            error!(error = %detail, code = self.error_code(), "Error rendering template");
        } else {
            warn!(error = %detail, code = self.error_code(), "Rejected template request");
        }

        let status = self.status_code();

        // Don't expose template internals in production
        let body = if self.is_client_error() || cfg!(debug_assertions) {
            detail
        } else {
            "An internal error occurred".to_string()
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_not_found_response() {
        let response = RenderError::NotFound("missing.page.html".into()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Template not found: missing.page.html");
    }

    #[tokio::test]
    async fn test_server_error_response() {
        let err = RenderError::Io {
            path: "templates/base.layout.html".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let detail = err.detail();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        if cfg!(debug_assertions) {
            assert_eq!(body, detail);
            assert!(body.ends_with(": denied"));
        } else {
            assert_eq!(body, "An internal error occurred");
        }
    }
}
