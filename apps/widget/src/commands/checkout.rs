//! # Checkout Command
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User presses "Checkout"                                                │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  Cart empty? ── yes ──► nothing happens (button is disabled)           │
//! │                    │                                                    │
//! │                    no                                                   │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Order summary                                                 │    │
//! │  │  Dosa x 2 = ₹160                                               │    │
//! │  │  Filter Coffee x 1 = ₹40                                       │    │
//! │  │                                                                │    │
//! │  │  Items total: ₹200                                             │    │
//! │  │  Grand total: ₹200                                  [ OK ]     │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │  (blocks until acknowledged)                       │
//! │                    ▼                                                    │
//! │  Order treated as submitted ──► cart cleared ──► view re-rendered      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tiffin_core::checkout::{OrderSummary, PlacedOrder};
use tracing::{debug, info};
use uuid::Uuid;

use crate::state::CartState;
use crate::surface::{ConfirmationSurface, DisplaySurface};

/// Confirms and submits the current order.
///
/// ## Returns
/// - `None` if the cart is empty (no dialog, no state change)
/// - `Some(PlacedOrder)` once the dialog was acknowledged and the cart cleared
pub fn checkout<D, C>(cart: &mut CartState<D>, confirmation: &mut C) -> Option<PlacedOrder>
where
    D: DisplaySurface,
    C: ConfirmationSurface + ?Sized,
{
    debug!("checkout command");

    let currency = cart.storefront().currency.clone();
    let Some(summary) = cart.with_cart(|c| OrderSummary::from_cart(c, &currency)) else {
        debug!("Cart empty, checkout ignored");
        return None;
    };

    confirmation.confirm(&summary.text());

    let order = PlacedOrder::new(Uuid::new_v4(), Utc::now(), summary);
    cart.with_cart_mut(|c| c.clear());

    info!(
        order_id = %order.id,
        reference = %order.reference(),
        lines = order.summary.lines.len(),
        grand_total = %order.summary.grand_total,
        "Order placed"
    );

    Some(order)
}
