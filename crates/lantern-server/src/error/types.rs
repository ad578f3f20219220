//! Render error types.

use axum::http::StatusCode;
use std::error::Error as _;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Everything that can go wrong between a page name and rendered HTML.
#[derive(Debug, Error)]
pub enum RenderError {
    // 400 Bad Request
    #[error("Invalid template name: {0:?}")]
    InvalidName(String),

    #[error("Invalid template data: {0}")]
    InvalidData(String),

    // 404 Not Found
    #[error("Template not found: {0}")]
    NotFound(String),

    // 500 Internal Server Error
    #[error("Failed to read template file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build template {name}")]
    Build {
        name: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to execute template {name}")]
    Execute {
        name: String,
        #[source]
        source: tera::Error,
    },
}

impl RenderError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidName(_) | Self::InvalidData(_) => StatusCode::BAD_REQUEST,

            Self::NotFound(_) => StatusCode::NOT_FOUND,

            Self::Io { .. } | Self::Build { .. } | Self::Execute { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code for client handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "invalid_template_name",
            Self::InvalidData(_) => "invalid_template_data",
            Self::NotFound(_) => "template_not_found",
            Self::Io { .. } => "template_io_error",
            Self::Build { .. } => "template_build_error",
            Self::Execute { .. } => "template_execute_error",
        }
    }

    /// Check if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Check if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// The error message followed by every source in its chain.
    ///
    /// Tera keeps the useful part (line, column, offending variable) in
    /// the source chain, so the top-level message alone is rarely enough.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            detail.push_str(": ");
            detail.push_str(&err.to_string());
            source = err.source();
        }
        detail
    }
}
