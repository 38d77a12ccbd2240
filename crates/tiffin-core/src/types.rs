//! # Domain Types
//!
//! Core domain types used throughout the ordering cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │    LineItem     │   │   CartTotals    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  id             │   │  items_total    │       │
//! │  │  name           │   │  name (frozen)  │   │  grand_total    │       │
//! │  │  unit_price     │   │  unit_price     │   │  line_count     │       │
//! │  └─────────────────┘   │  quantity ≥ 1   │   │  total_quantity │       │
//! │   (add trigger input)  └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{DEFAULT_CURRENCY_CODE, DEFAULT_CURRENCY_SYMBOL};

// =============================================================================
// Currency
// =============================================================================

/// The single currency the page trades in.
///
/// `symbol` prefixes every displayed amount; `code` (ISO 4217) goes into the
/// payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub symbol: String,
    pub code: String,
}

impl Currency {
    /// Formats an amount with this currency's symbol, rounded to whole units.
    pub fn format(&self, amount: Money) -> String {
        amount.format_whole(&self.symbol)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency {
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// What an "add to cart" button carries.
///
/// Already validated by the time it reaches the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        MenuItem {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One distinct menu item in the cart.
///
/// ## Invariants
/// - `quantity >= 1`; a line that would drop to zero is removed instead
/// - `name` and `unit_price` are frozen when the line is first created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl LineItem {
    /// Starts a new line with quantity 1.
    pub fn from_menu_item(item: MenuItem) -> Self {
        LineItem {
            id: item.id,
            name: item.name,
            unit_price: item.unit_price,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Aggregates computed from the cart contents.
///
/// `grand_total` is kept as its own field even though it currently equals
/// `items_total`: no fee, tax or discount applies to orders placed here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub items_total: Money,
    pub grand_total: Money,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of all quantities (badge count).
    pub total_quantity: u32,
}
