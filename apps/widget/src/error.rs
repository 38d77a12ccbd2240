//! # Widget Error Type
//!
//! Unified error type for widget commands and setup.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Widget                             │
//! │                                                                         │
//! │  Page trigger (JSON)                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Decode? ─────── serde_json::Error ─────────┐                          │
//! │         │                                   │                          │
//! │         ▼                                   ▼                          │
//! │  Validate? ───── ValidationError ───────► WidgetError ──► debug log,   │
//! │         │                                                 trigger      │
//! │         ▼                                                 ignored      │
//! │  Cart operation (never fails)                                          │
//! │                                                                         │
//! │  Startup: toml / io / CoreError ────────► WidgetError ──► returned     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The error is `Serialize` so a page that wants to surface it gets both a
//! machine-readable `code` and a human-readable `message`.

use serde::Serialize;
use tiffin_core::{CoreError, ValidationError};

/// Error returned from widget commands and configuration loading.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price has invalid format: not a number"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for widget errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Trigger data failed validation
    ValidationError,

    /// Trigger payload could not be decoded
    InvalidTrigger,

    /// Configuration could not be read or is invalid
    ConfigError,
}

/// Convenience type alias for widget results.
pub type WidgetResult<T> = Result<T, WidgetError>;

impl WidgetError {
    /// Creates a new widget error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        WidgetError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        WidgetError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        WidgetError::new(ErrorCode::ConfigError, message)
    }
}

impl From<ValidationError> for WidgetError {
    fn from(err: ValidationError) -> Self {
        WidgetError::validation(err.to_string())
    }
}

/// Core errors only arise while building the storefront from config.
impl From<CoreError> for WidgetError {
    fn from(err: CoreError) -> Self {
        WidgetError::config(err.to_string())
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::new(ErrorCode::InvalidTrigger, format!("Invalid trigger: {}", err))
    }
}

impl From<toml::de::Error> for WidgetError {
    fn from(err: toml::de::Error) -> Self {
        WidgetError::config(format!("Invalid config file: {}", err))
    }
}

impl From<std::io::Error> for WidgetError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Config file read failed: {}", err);
        WidgetError::config(format!("Could not read config file: {}", err))
    }
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for WidgetError {}
