//! Common error types for the GCD services.
//!
//! The compute core is total and never fails; everything here belongs to
//! the boundary between the HTTP gateway and the compute service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which path operand failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::A => f.write_str("A"),
            Operand::B => f.write_str("B"),
        }
    }
}

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid parameter {0}")]
    InvalidParameter(Operand),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("GCD service unavailable: {0}")]
    Unavailable(String),

    #[error("GCD service timed out: {0}")]
    Timeout(String),

    #[error("GCD service error: {0}")]
    Upstream(String),
}

impl AppError {
    /// HTTP status code the gateway answers with.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::InvalidParameter(_) | AppError::InvalidArgument(_) => 400,
            AppError::Upstream(_) => 502,
            AppError::Unavailable(_) => 503,
            AppError::Timeout(_) => 504,
        }
    }

    /// Error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidParameter(_) => "INVALID_PARAMETER",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::Unavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::Timeout(_) => "UPSTREAM_TIMEOUT",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
        }
    }

    /// True for errors caused by the caller rather than the system.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Error response for API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response with only a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    /// Attach an error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self::new(err.to_string()).with_code(err.code())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
