//! Error types for the book API boundary.

use thiserror::Error;

use crate::books::{ErrorInfo, ErrorKind};

/// A failed API request.
///
/// `Display` yields only the message so it can be shown to the user as is.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server could not be reached or the connection broke.
    #[error("{message}")]
    Transport { message: String },

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The requested resource does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// The response body was not the expected JSON.
    #[error("{message}")]
    Decode { message: String },

    /// The request URL could not be built from the configured base URL.
    #[error("{message}")]
    InvalidUrl { message: String },
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport {
            message: message.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport { message }
            | ApiError::Http { message, .. }
            | ApiError::NotFound { message }
            | ApiError::Decode { message }
            | ApiError::InvalidUrl { message } => message,
        }
    }

    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport { .. } => ErrorKind::Transport,
            ApiError::Http { .. } => ErrorKind::Http,
            ApiError::NotFound { .. } => ErrorKind::NotFound,
            ApiError::Decode { .. } => ErrorKind::Decode,
            ApiError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
        }
    }
}

impl From<&ApiError> for ErrorInfo {
    fn from(err: &ApiError) -> Self {
        ErrorInfo {
            kind: err.kind(),
            message: err.message().to_string(),
            status: err.status(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Decode {
                message: err.to_string(),
            };
        }
        if err.is_timeout() {
            return ApiError::Transport {
                message: "Request timed out".to_string(),
            };
        }
        if let Some(status) = err.status() {
            return ApiError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }
        ApiError::Transport {
            message: err.to_string(),
        }
    }
}
