//! Typed error handling for salesboard
//!
//! Callers get a structured error they can match on instead of a generic
//! `anyhow::Error`. Each category knows its HTTP status and a stable error
//! code, and the top-level [`DashError`] renders itself as a JSON body.
//!
//! # Error Categories
//!
//! - [`QueryError`]: invalid query arguments (page size, sort field, dates)
//! - [`ImportError`]: rejected dataset imports
//! - [`ConfigError`]: configuration parsing and validation
//! - [`DashError::InvalidBody`]: a JSON body that could not be read at all
//!
//! An empty result set is never an error; it is a valid zero-row page.
//!
//! # Example
//!
//! ```rust,ignore
//! match engine.query(&filter, &sort, &PageSpec::new(1, 0)).await {
//!     Err(DashError::Query(QueryError::InvalidPageSize { size, .. })) => {
//!         eprintln!("page size {} rejected", size);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//!     Ok(page) => println!("{} rows", page.data.len()),
//! }
//! ```

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for salesboard
#[derive(Debug, Error)]
pub enum DashError {
    /// Invalid query arguments
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Rejected dataset import
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Body missing, not JSON, or not shaped like the expected payload
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DashError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashError::Query(_) => StatusCode::BAD_REQUEST,
            DashError::Import(_) => StatusCode::BAD_REQUEST,
            DashError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            DashError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DashError::Query(e) => e.error_code(),
            DashError::Import(e) => e.error_code(),
            DashError::InvalidBody(_) => "INVALID_BODY",
            DashError::Config(_) => "CONFIG_ERROR",
            DashError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DashError::Query(QueryError::UnknownSortField { field }) => Some(serde_json::json!({
                "field": field,
                "allowed": crate::core::sort::SortField::ALL
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>(),
            })),
            DashError::Query(QueryError::PageSizeTooLarge { size, max }) => {
                Some(serde_json::json!({ "size": size, "max": max }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for DashError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        } else {
            tracing::warn!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Invalid arguments to a query
///
/// Reported synchronously to the caller, never silently defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Zero or negative page size
    #[error("Invalid page size {size}: must be at least 1")]
    InvalidPageSize { size: i64 },

    /// Page size above the configured maximum
    #[error("Page size {size} exceeds the maximum of {max}")]
    PageSizeTooLarge { size: usize, max: usize },

    /// Page numbers start at 1
    #[error("Invalid page {page}: pages start at 1")]
    InvalidPage { page: i64 },

    #[error("Unknown sort field '{field}'")]
    UnknownSortField { field: String },

    #[error("Unknown sort direction '{direction}': expected 'asc' or 'desc'")]
    UnknownSortDirection { direction: String },

    #[error("Invalid date '{value}' for '{param}': expected YYYY-MM-DD")]
    InvalidDate { param: String, value: String },

    #[error("Invalid number '{value}' for '{param}'")]
    InvalidNumber { param: String, value: String },
}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidPageSize { .. } => "INVALID_PAGE_SIZE",
            QueryError::PageSizeTooLarge { .. } => "PAGE_SIZE_TOO_LARGE",
            QueryError::InvalidPage { .. } => "INVALID_PAGE",
            QueryError::UnknownSortField { .. } => "UNKNOWN_SORT_FIELD",
            QueryError::UnknownSortDirection { .. } => "UNKNOWN_SORT_DIRECTION",
            QueryError::InvalidDate { .. } => "INVALID_DATE",
            QueryError::InvalidNumber { .. } => "INVALID_NUMBER",
        }
    }
}

// =============================================================================
// Import Errors
// =============================================================================

/// Errors raised while accepting a dataset import
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    /// The payload carried no transactions
    #[error("Request body must contain transaction data")]
    EmptyPayload,
}

impl ImportError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ImportError::EmptyPayload => "EMPTY_IMPORT",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        DashError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for DashError {
    fn from(err: serde_yaml::Error) -> Self {
        DashError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<JsonRejection> for DashError {
    fn from(rejection: JsonRejection) -> Self {
        DashError::InvalidBody(rejection.body_text())
    }
}

impl From<anyhow::Error> for DashError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<DashError>() {
            Ok(dash) => dash,
            Err(other) => DashError::Internal(other.to_string()),
        }
    }
}

/// A specialized Result type for salesboard operations
pub type DashResult<T> = Result<T, DashError>;
