//! # Cart View
//!
//! Projects the cart into what the ordering page displays.
//!
//! ## Page Layout
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  YOUR ORDER                                                    │
//! ├────────────────────────────────────────────────────────────────┤
//! │  Dosa           [-] 2 [+]     ₹80      ₹160       [Remove]     │  rows
//! │  Filter Coffee  [-] 1 [+]     ₹40      ₹40        [Remove]     │
//! ├────────────────────────────────────────────────────────────────┤
//! │  Items total                           ₹200                    │  items_total
//! │  Grand total                           ₹200                    │  grand_total
//! ├────────────────────────────────────────────────────────────────┤
//! │  ▓▓ QR ▓▓   Scan to pay ₹200                                   │  payment
//! ├────────────────────────────────────────────────────────────────┤
//! │  [Clear]                                      [Checkout]       │  *_enabled
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`render`] is a pure function; the widget calls it after every change and
//! hands the result to the display surface.

use serde::Serialize;
use ts_rs::TS;

use crate::cart::Cart;
use crate::payment::{Payee, PaymentRequest, QrService};
use crate::types::{Currency, LineItem};

/// Everything `render` needs besides the cart itself.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub currency: Currency,
    pub payee: Payee,
    /// Transaction note attached to every payment request.
    pub payment_note: String,
    pub qr: QrService,
}

/// One row in the cart table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineRow {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// Formatted unit price, e.g. `₹80`.
    pub unit_price: String,
    /// Formatted unit price × quantity, e.g. `₹160`.
    pub line_total: String,
}

/// The payment QR block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentView {
    /// Encoded payment request (UPI deep link).
    pub payload: String,
    /// Image URL for the QR rendering service.
    pub qr_image_url: String,
    /// Human-readable amount, e.g. `₹200`.
    pub amount_text: String,
}

/// Full cart view pushed to the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    pub rows: Vec<LineRow>,
    /// Show the "your cart is empty" indicator.
    pub is_empty: bool,
    pub items_total: String,
    pub grand_total: String,
    pub checkout_enabled: bool,
    pub clear_enabled: bool,
    pub payment: PaymentView,
}

/// Renders the current cart.
///
/// ```rust
/// use tiffin_core::payment::{Payee, QrService};
/// use tiffin_core::view::{render, Storefront};
/// use tiffin_core::{Cart, Currency, MenuItem, Money};
///
/// let storefront = Storefront {
///     currency: Currency::default(),
///     payee: Payee { id: "shop@upi".into(), name: "Shop".into() },
///     payment_note: "Food order".into(),
///     qr: QrService::new("https://api.qrserver.com/v1/create-qr-code/", 200).unwrap(),
/// };
///
/// let mut cart = Cart::new();
/// cart.add(MenuItem::new("A", "Dosa", Money::from_major(80)));
///
/// let view = render(&cart, &storefront);
/// assert_eq!(view.rows[0].line_total, "₹80");
/// assert_eq!(view.grand_total, "₹80");
/// assert!(view.checkout_enabled);
/// ```
pub fn render(cart: &Cart, storefront: &Storefront) -> CartView {
    let currency = &storefront.currency;
    let totals = cart.totals();
    let is_empty = cart.is_empty();

    let rows = cart
        .items()
        .iter()
        .map(|line| line_row(line, currency))
        .collect();

    let payload = PaymentRequest {
        payee: &storefront.payee,
        amount: totals.grand_total,
        currency_code: &currency.code,
        note: &storefront.payment_note,
    }
    .to_uri();

    CartView {
        rows,
        is_empty,
        items_total: currency.format(totals.items_total),
        grand_total: currency.format(totals.grand_total),
        checkout_enabled: !is_empty,
        clear_enabled: !is_empty,
        payment: PaymentView {
            qr_image_url: storefront.qr.image_url(&payload),
            payload,
            amount_text: currency.format(totals.grand_total),
        },
    }
}

fn line_row(line: &LineItem, currency: &Currency) -> LineRow {
    LineRow {
        id: line.id.clone(),
        name: line.name.clone(),
        quantity: line.quantity,
        unit_price: currency.format(line.unit_price),
        line_total: currency.format(line.line_total()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::MenuItem;

    fn storefront() -> Storefront {
        Storefront {
            currency: Currency::default(),
            payee: Payee {
                id: "tiffinhouse@upi".to_string(),
                name: "Tiffin House".to_string(),
            },
            payment_note: "Food order".to_string(),
            qr: QrService::new("https://api.qrserver.com/v1/create-qr-code/", 200).unwrap(),
        }
    }

    #[test]
    fn test_empty_cart_view() {
        let view = render(&Cart::new(), &storefront());

        assert!(view.is_empty);
        assert!(view.rows.is_empty());
        assert!(!view.checkout_enabled);
        assert!(!view.clear_enabled);
        assert_eq!(view.items_total, "₹0");
        assert_eq!(view.grand_total, "₹0");
        assert_eq!(view.payment.amount_text, "₹0");
        assert!(view.payment.payload.contains("am=0.00"));
    }

    #[test]
    fn test_rows_follow_cart_order() {
        let mut cart = Cart::new();
        cart.add(MenuItem::new("A", "Dosa", Money::from_major(80)));
        cart.add(MenuItem::new("B", "Vada", Money::from_major(120)));
        cart.add(MenuItem::new("A", "Dosa", Money::from_major(80)));

        let view = render(&cart, &storefront());

        assert!(!view.is_empty);
        assert!(view.checkout_enabled && view.clear_enabled);
        assert_eq!(
            view.rows,
            vec![
                LineRow {
                    id: "A".into(),
                    name: "Dosa".into(),
                    quantity: 2,
                    unit_price: "₹80".into(),
                    line_total: "₹160".into(),
                },
                LineRow {
                    id: "B".into(),
                    name: "Vada".into(),
                    quantity: 1,
                    unit_price: "₹120".into(),
                    line_total: "₹120".into(),
                },
            ]
        );
        assert_eq!(view.items_total, "₹280");
        assert_eq!(view.grand_total, "₹280");
    }

    #[test]
    fn test_payment_tracks_grand_total_with_paise() {
        let mut cart = Cart::new();
        cart.add(MenuItem::new("C", "Chai", Money::from_minor(1250)));
        cart.add(MenuItem::new("C", "Chai", Money::from_minor(1250)));
        cart.add(MenuItem::new("S", "Samosa", Money::from_minor(1525)));

        let view = render(&cart, &storefront());

        // 25.00 + 15.25 = 40.25
        assert!(view.payment.payload.contains("am=40.25"));
        assert_eq!(view.payment.amount_text, "₹40");
        assert_eq!(view.grand_total, "₹40");
        assert!(view.payment.qr_image_url.contains("size=200x200"));
    }

    #[test]
    fn test_render_extreme_cart() {
        let mut cart = Cart::new();
        cart.add(MenuItem::new("A", "Thali", crate::MAX_PRICE));
        cart.adjust_quantity("A", i64::MAX);

        let view = render(&cart, &storefront());

        assert_eq!(view.rows[0].quantity, u32::MAX);
        assert_eq!(view.rows[0].unit_price, "₹10000000");
        assert_eq!(view.rows[0].line_total, "₹42949672950000000");
        assert_eq!(view.grand_total, "₹42949672950000000");
        assert!(view.payment.payload.contains("am=42949672950000000.00"));

        cart.add(MenuItem::new("B", "Thali", crate::MAX_PRICE));
        cart.adjust_quantity("B", i64::MAX);
        cart.add(MenuItem::new("C", "Thali", crate::MAX_PRICE));
        cart.adjust_quantity("C", i64::MAX);

        let view = render(&cart, &storefront());
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.grand_total, "₹92233720368547758");
        assert!(view.payment.payload.contains("am=92233720368547758.07"));
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = render(&Cart::new(), &storefront());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["isEmpty"], true);
        assert_eq!(json["checkoutEnabled"], false);
        assert!(json["payment"]["qrImageUrl"].is_string());
    }
}
