//! # Error Types
//!
//! Domain-specific error types for orderdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  orderdesk-core errors (this file)                                     │
//! │  ├── CoreError        - What every public operation returns            │
//! │  │   ├── InvalidArgument   (wraps ValidationError)                     │
//! │  │   ├── LimitExceeded     (item cap reached, expected outcome)        │
//! │  │   ├── IncompleteState   (build() without required fields)           │
//! │  │   └── AlreadyFinalized  (builder reused after build())              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  orderdesk-cli errors (separate crate)                                 │
//! │  └── SettingsError    - Settings file / environment failures           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## How Callers Should React
//! - `InvalidArgument` / `IncompleteState` / `AlreadyFinalized`: programming or
//!   input mistakes. Fail fast and fix the call.
//! - `LimitExceeded`: a business outcome. Branch on it; the builder is still
//!   usable and keeps every item added so far.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced by the order assembly core.
///
/// Every variant is returned directly to the immediate caller. Nothing here is
/// retried or recovered internally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// The caller supplied a structurally invalid value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// The order already holds as many items as the shared configuration allows.
    ///
    /// ## When This Occurs
    /// ```text
    /// max_items_per_order = 2
    ///
    /// add_item(A, 1)  → ok   (1 of 2)
    /// add_item(A, 5)  → ok   (2 of 2, same product still counts)
    /// add_item(B, 1)  → LimitExceeded { max: 2 }
    /// ```
    #[error("Maximum number of items ({max}) per order exceeded")]
    LimitExceeded { max: usize },

    /// `build()` was called before every required field was supplied.
    #[error("Order is incomplete: {reason}")]
    IncompleteState { reason: String },

    /// The builder already produced its order.
    #[error("Order {order_id} was already built")]
    AlreadyFinalized { order_id: String },
}

impl CoreError {
    /// Creates an `IncompleteState` error.
    pub fn incomplete(reason: impl Into<String>) -> Self {
        CoreError::IncompleteState {
            reason: reason.into(),
        }
    }

    /// Returns true for business outcomes callers are expected to branch on.
    pub fn is_business_rule(&self) -> bool {
        matches!(self, CoreError::LimitExceeded { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a value doesn't meet requirements. They are raised
/// at the point of the offending call, before any state changes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., email without '@', malformed amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not one of the recognized tags.
    #[error("Unknown {field}: {value}")]
    Unrecognized { field: String, value: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
