//! # Validation Module
//!
//! Turns raw trigger data from the ordering page into typed cart input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Page markup                                                  │
//! │  └── data-id / data-name / data-price on each menu button              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Trigger decoding (tiffin-widget)                             │
//! │  ├── JSON shape (serde)                                                │
//! │  └── THIS MODULE: id / name / price rules                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart                                                         │
//! │  └── Trusts its input, never fails                                     │
//! │                                                                         │
//! │  A trigger that fails here is dropped; the cart never sees it.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tiffin_core::validation::{validate_menu_item, RawPrice};
//!
//! let item = validate_menu_item("A", "Dosa", &RawPrice::Text("80".into())).unwrap();
//! assert_eq!(item.unit_price.minor(), 8000);
//!
//! assert!(validate_menu_item("", "Dosa", &RawPrice::Number(80.0)).is_err());
//! assert!(validate_menu_item("A", "Dosa", &RawPrice::Number(f64::NAN)).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::{Money, MINOR_PER_MAJOR};
use crate::types::MenuItem;
use crate::MAX_PRICE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted menu item id.
pub const MAX_ID_LEN: usize = 64;

/// Longest accepted menu item name.
pub const MAX_NAME_LEN: usize = 120;

// =============================================================================
// Raw Price
// =============================================================================

/// A price as it arrives from the page: either a JSON number or the text of a
/// `data-price` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a menu item id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_ID_LEN`] characters
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    validate_text("id", id, MAX_ID_LEN)
}

/// Validates a menu item display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, MAX_NAME_LEN)
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Price Validators
// =============================================================================

/// Converts a raw page price into [`Money`].
///
/// ## Rules
/// - Text must be a plain decimal with at most two fractional digits
/// - Numbers must be finite; they are rounded to the nearest paisa
/// - Negative prices are rejected (zero is allowed, e.g. free chutney)
/// - Prices above [`MAX_PRICE`] are rejected
///
/// ## Example
/// ```rust
/// use tiffin_core::validation::{parse_price, RawPrice};
///
/// assert_eq!(parse_price(&RawPrice::Number(120.5)).unwrap().minor(), 12050);
/// assert!(parse_price(&RawPrice::Text("abc".into())).is_err());
/// assert!(parse_price(&RawPrice::Number(-1.0)).is_err());
/// ```
pub fn parse_price(raw: &RawPrice) -> ValidationResult<Money> {
    let price = match raw {
        RawPrice::Text(text) => text.parse::<Money>().map_err(|err| match err {
            ValidationError::InvalidFormat { reason, .. } => ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason,
            },
            other => other,
        })?,
        RawPrice::Number(value) => money_from_number(*value)?,
    };

    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_PRICE.to_string(),
        });
    }

    Ok(price)
}

fn money_from_number(value: f64) -> ValidationResult<Money> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "not a finite number".to_string(),
        });
    }

    let minor = (value * MINOR_PER_MAJOR as f64).round();
    if minor.abs() > i64::MAX as f64 {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "amount too large".to_string(),
        });
    }

    Ok(Money::from_minor(minor as i64))
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates all fields of an add trigger and builds the [`MenuItem`].
///
/// Id and name are trimmed.
pub fn validate_menu_item(id: &str, name: &str, price: &RawPrice) -> ValidationResult<MenuItem> {
    validate_item_id(id)?;
    validate_item_name(name)?;
    let unit_price = parse_price(price)?;

    Ok(MenuItem::new(id.trim(), name.trim(), unit_price))
}

// =============================================================================
// Unit Tests
// =============================================================================
