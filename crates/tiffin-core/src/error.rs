//! # Error Types
//!
//! Domain-specific error types for tiffin-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tiffin-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Malformed trigger input                        │
//! │                                                                         │
//! │  tiffin-widget errors (app)                                            │
//! │  └── WidgetError      - What the page sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError / CoreError → WidgetError → Page                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations themselves never fail: an unknown id is a no-op. Errors
//! only arise while turning raw trigger data into typed input, or while
//! building the QR service URL.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The QR rendering service base URL cannot be used.
    ///
    /// ## When This Occurs
    /// - Configured URL does not parse
    /// - Scheme is not http/https
    #[error("Invalid QR service URL: {0}")]
    InvalidQrService(String),
}

impl From<url::ParseError> for CoreError {
    fn from(err: url::ParseError) -> Self {
        CoreError::InvalidQrService(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the trigger layer before anything reaches the cart, so a
/// malformed menu button never creates a bogus line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value is above the accepted maximum.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: String },

    /// Invalid format (e.g. a price that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
