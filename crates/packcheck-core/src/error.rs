//! # Error Types
//!
//! Domain-specific error types for packcheck-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  packcheck-core errors (this file)                                     │
//! │  ├── CoreError        - Workflow rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  station errors (app crate)                                            │
//! │  ├── StationError     - Config, export and scenario failures           │
//! │  └── ApiError         - What the UI adapter sees (serialized)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StationError → ApiError → UI      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant maps to one user-visible notification. None of them are
//! fatal: the session is left exactly as it was before the failed action.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Workflow errors raised by the verification core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Quantity entered for a cart line is not a positive integer.
    #[error("Invalid quantity '{input}': please enter a positive whole number")]
    InvalidQuantity { input: String },

    /// Order confirmation attempted with an empty cart.
    #[error("Cannot confirm an empty order")]
    EmptyOrder,

    /// Scan attempted with nothing placed in the package.
    #[error("Add items to the package before scanning")]
    EmptyPackage,

    /// Placement or scanning attempted before the order was confirmed.
    #[error("The order must be confirmed first")]
    OrderNotConfirmed,

    /// Confirmation attempted on an order that is already confirmed.
    #[error("The order is already confirmed; reset to start a new one")]
    OrderAlreadyConfirmed,

    /// Cart mutation attempted on a confirmed (frozen) order.
    #[error("The order is confirmed and can no longer be edited")]
    OrderLocked,

    /// Placement or a second scan attempted while a scan session is active.
    #[error("A scan is in progress")]
    ScanInProgress,

    /// Finalize attempted without an active scan session.
    #[error("No scan is in progress")]
    ScanNotActive,

    /// Placement point lies outside the package boundary.
    ///
    /// ## User Workflow
    /// ```text
    /// Click canvas at (720, 300)
    ///      │
    ///      ▼
    /// Bounds (50,50)-(700,650): 720 > 700
    ///      │
    ///      ▼
    /// OutOfBounds { x: 720.0, y: 300.0 }
    ///      │
    ///      ▼
    /// UI shows: "Please click inside the package boundary"
    /// ```
    #[error("Position ({x}, {y}) is outside the package boundary")]
    OutOfBounds { x: f64, y: f64 },

    /// Product name is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Placement requested with no pending product selection.
    #[error("Select an item to add first")]
    NoItemSelected,

    /// Report requested before any verification was finalized.
    #[error("No verification data available")]
    NoReportAvailable,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalog entries and settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format or shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
