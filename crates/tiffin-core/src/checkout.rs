//! # Checkout
//!
//! Builds the order summary shown in the confirmation dialog.
//!
//! ## Checkout Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐   checkout   ┌──────────────┐   confirm   ┌──────────┐   │
//! │  │ In Cart  │─────────────►│ OrderSummary │────────────►│  Placed  │   │
//! │  └──────────┘              │  (dialog)    │             │  Order   │   │
//! │       ▲                    └──────────────┘             └────┬─────┘   │
//! │       │                                                      │         │
//! │       └────────────────── cart cleared ◄─────────────────────┘         │
//! │                                                                         │
//! │  Empty cart: no summary is built and nothing happens.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::cart::Cart;
use crate::types::Currency;

/// Heading of the confirmation text.
pub const SUMMARY_HEADING: &str = "Order summary";

/// One ordered line as it appears in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} = {}", self.name, self.quantity, self.line_total)
    }
}

/// Snapshot of the cart at checkout, with amounts already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub items_total: String,
    pub grand_total: String,
}

impl OrderSummary {
    /// Summarises the cart, or `None` if there is nothing to order.
    ///
    /// ```rust
    /// use tiffin_core::checkout::OrderSummary;
    /// use tiffin_core::{Cart, Currency, MenuItem, Money};
    ///
    /// assert!(OrderSummary::from_cart(&Cart::new(), &Currency::default()).is_none());
    ///
    /// let mut cart = Cart::new();
    /// cart.add(MenuItem::new("A", "Dosa", Money::from_major(80)));
    /// cart.add(MenuItem::new("A", "Dosa", Money::from_major(80)));
    /// let summary = OrderSummary::from_cart(&cart, &Currency::default()).unwrap();
    /// assert_eq!(summary.lines[0].to_string(), "Dosa x 2 = ₹160");
    /// ```
    pub fn from_cart(cart: &Cart, currency: &Currency) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }

        let totals = cart.totals();
        let lines = cart
            .items()
            .iter()
            .map(|line| SummaryLine {
                name: line.name.clone(),
                quantity: line.quantity,
                line_total: currency.format(line.line_total()),
            })
            .collect();

        Some(OrderSummary {
            lines,
            items_total: currency.format(totals.items_total),
            grand_total: currency.format(totals.grand_total),
        })
    }

    /// The text block handed to the confirmation dialog.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", SUMMARY_HEADING)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "Items total: {}", self.items_total)?;
        write!(f, "Grand total: {}", self.grand_total)
    }
}

/// An order the user has confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    /// Reference for the kitchen ticket / payment note.
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub summary: OrderSummary,
}

impl PlacedOrder {
    pub fn new(id: Uuid, placed_at: DateTime<Utc>, summary: OrderSummary) -> Self {
        PlacedOrder {
            id,
            placed_at,
            summary,
        }
    }

    /// Short reference (first 8 hex digits of the id).
    pub fn reference(&self) -> String {
        self.id.simple().to_string().chars().take(8).collect()
    }
}
