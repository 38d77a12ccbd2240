//! # tiffin-core: Pure Cart Logic for the Tiffin Ordering Page
//!
//! This crate holds the cart state and everything derived from it, as plain
//! data and pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tiffin Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Ordering Page                                │   │
//! │  │   Menu buttons ──► Cart panel ──► Payment QR ──► Confirm dialog │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ triggers / views                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tiffin-widget                                │   │
//! │  │    add, increment, decrement, remove, clear, checkout          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tiffin-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │   │  money  │ │  cart   │ │  view   │ │ payment │ │ checkout │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic
//! - [`types`] - MenuItem, LineItem, CartTotals, Currency
//! - [`cart`] - The cart store
//! - [`view`] - Projection of the cart into the page view model
//! - [`payment`] - UPI payment request and QR service URL
//! - [`checkout`] - Order summary for the confirmation dialog
//! - [`validation`] - Trigger input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tiffin_core::{Cart, MenuItem, Money};
//!
//! let mut cart = Cart::new();
//! cart.add(MenuItem::new("A", "Dosa", Money::from_major(80)));
//! cart.add(MenuItem::new("B", "Vada", Money::from_major(120)));
//!
//! let totals = cart.totals();
//! assert_eq!(totals.items_total, Money::from_major(200));
//! assert_eq!(totals.grand_total, totals.items_total);
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod payment;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Symbol prefixed to every displayed amount.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// ISO 4217 code sent in payment requests.
pub const DEFAULT_CURRENCY_CODE: &str = "INR";

/// Highest unit price a menu button may carry (₹1,00,00,000).
///
/// ## Business Reason
/// A mistyped `data-price` should be rejected, not turned into a line.
/// Even at `u32::MAX` units a line at this price stays far below the
/// `Money` bounds.
pub const MAX_PRICE: Money = Money::from_major(10_000_000);
