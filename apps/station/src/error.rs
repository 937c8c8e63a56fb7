//! # Station Error Types
//!
//! Errors raised by the station itself, and the serializable [`ApiError`]
//! every command returns.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in PackCheck                              │
//! │                                                                         │
//! │  Rendering surface               Station                                │
//! │  ─────────────────               ───────                                │
//! │                                                                         │
//! │  place_item("Phone Case", 20, 20)                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Rule broken? ──── CoreError::OutOfBounds ──────┐               │  │
//! │  │         │                                       │               │  │
//! │  │         ▼                                       ▼               │  │
//! │  │  File failed? ──── StationError::FileWrite ── ApiError ────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "OUT_OF_BOUNDS",                                             │
//! │    "message": "Position (20, 20) is outside the package boundary" }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No error is fatal. The session is left as it was before the failed action.

use std::path::PathBuf;

use packcheck_core::CoreError;
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Station Error
// =============================================================================

/// Result type alias for station operations.
pub type StationResult<T> = Result<T, StationError>;

/// Failures that originate outside the core: files, config, scenarios.
#[derive(Debug, Error)]
pub enum StationError {
    /// A verification rule was broken.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing a report (or config) to disk failed.
    #[error("Failed to write {path}: {cause}")]
    FileWriteFailure { path: PathBuf, cause: String },

    /// Reading or parsing the config file failed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A scenario file could not be read or replayed.
    #[error("Scenario failed: {0}")]
    Scenario(String),

    /// Report serialization failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl StationError {
    pub fn file_write(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        StationError::FileWriteFailure {
            path: path.into(),
            cause: cause.to_string(),
        }
    }
}

impl From<toml::de::Error> for StationError {
    fn from(err: toml::de::Error) -> Self {
        StationError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StationError {
    fn from(err: serde_json::Error) -> Self {
        StationError::Serialization(err.to_string())
    }
}

// =============================================================================
// API Error
// =============================================================================

/// Error returned from station commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "ORDER_NOT_CONFIRMED",
///   "message": "Please confirm an order first"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses. One per user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidQuantity,
    EmptyOrder,
    EmptyPackage,
    OrderNotConfirmed,
    OrderAlreadyConfirmed,
    OrderLocked,
    ScanInProgress,
    ScanNotActive,
    OutOfBounds,
    UnknownProduct,
    NoItemSelected,
    NoReportAvailable,
    ValidationError,
    FileWriteFailure,
    ConfigError,
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            CoreError::EmptyOrder => ErrorCode::EmptyOrder,
            CoreError::EmptyPackage => ErrorCode::EmptyPackage,
            CoreError::OrderNotConfirmed => ErrorCode::OrderNotConfirmed,
            CoreError::OrderAlreadyConfirmed => ErrorCode::OrderAlreadyConfirmed,
            CoreError::OrderLocked => ErrorCode::OrderLocked,
            CoreError::ScanInProgress => ErrorCode::ScanInProgress,
            CoreError::ScanNotActive => ErrorCode::ScanNotActive,
            CoreError::OutOfBounds { .. } => ErrorCode::OutOfBounds,
            CoreError::UnknownProduct(_) => ErrorCode::UnknownProduct,
            CoreError::NoItemSelected => ErrorCode::NoItemSelected,
            CoreError::NoReportAvailable => ErrorCode::NoReportAvailable,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts station errors to API errors.
impl From<StationError> for ApiError {
    fn from(err: StationError) -> Self {
        match err {
            StationError::Core(e) => ApiError::from(e),
            StationError::FileWriteFailure { path, cause } => {
                tracing::error!(path = %path.display(), %cause, "File write failed");
                ApiError::new(
                    ErrorCode::FileWriteFailure,
                    format!("An error occurred while saving the file: {}", cause),
                )
            }
            StationError::ConfigLoadFailed(_) | StationError::InvalidConfig(_) => {
                ApiError::new(ErrorCode::ConfigError, err.to_string())
            }
            StationError::Scenario(_) | StationError::Serialization(_) => {
                ApiError::internal(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_codes() {
        let err = ApiError::from(CoreError::OrderNotConfirmed);
        assert_eq!(err.code, ErrorCode::OrderNotConfirmed);

        let err = ApiError::from(CoreError::OutOfBounds { x: 20.0, y: 20.0 });
        assert_eq!(err.code, ErrorCode::OutOfBounds);
        assert!(err.message.contains("outside the package boundary"));
    }

    #[test]
    fn test_station_error_unwraps_core() {
        let err = ApiError::from(StationError::Core(CoreError::EmptyOrder));
        assert_eq!(err.code, ErrorCode::EmptyOrder);
    }

    #[test]
    fn test_file_write_failure() {
        let err = ApiError::from(StationError::file_write("/nope/report.json", "denied"));
        assert_eq!(err.code, ErrorCode::FileWriteFailure);
        assert!(err.message.contains("denied"));
    }

    #[test]
    fn test_serializes_screaming_code() {
        let json = serde_json::to_string(&ApiError::from(CoreError::EmptyPackage)).unwrap();
        assert!(json.contains("\"code\":\"EMPTY_PACKAGE\""));
    }
}
