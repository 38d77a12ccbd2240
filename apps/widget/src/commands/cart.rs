//! # Cart Commands
//!
//! Handlers for the cart-editing triggers on the ordering page.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Confirm  │────►│  Placed  │       │
//! │  │  Cart    │     │          │     │  Dialog  │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                    checkout.rs            │
//! │       │           change_quantity                         │             │
//! │       │           remove_from_cart                        │             │
//! │       │                │                                  │             │
//! │       │                ▼                                  │             │
//! │       └──────────  clear_cart  ◄──────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every handler returns the view that was just pushed to the display.

use tiffin_core::validation::{validate_menu_item, RawPrice};
use tiffin_core::view::CartView;
use tracing::debug;

use crate::error::WidgetResult;
use crate::state::CartState;
use crate::surface::DisplaySurface;

/// Gets the current cart view without changing anything.
pub fn get_cart<D: DisplaySurface>(cart: &CartState<D>) -> CartView {
    debug!("get_cart command");
    cart.view()
}

/// Adds one unit of a menu item.
///
/// ## Behavior
/// - Id already in cart: quantity increases, name/price from the button are
///   ignored
/// - Id not in cart: added as a new line at quantity 1
///
/// ## Errors
/// A validation error if the button's id, name or price is malformed. The
/// cart is left untouched and nothing is rendered.
pub fn add_to_cart<D: DisplaySurface>(
    cart: &mut CartState<D>,
    id: &str,
    name: &str,
    price: &RawPrice,
) -> WidgetResult<CartView> {
    debug!(item_id = %id, "add_to_cart command");

    let item = validate_menu_item(id, name, price)?;
    cart.with_cart_mut(|c| c.add(item));

    Ok(cart.view())
}

/// Changes the quantity of a line by `delta` (the +/− buttons send ±1).
///
/// ## Behavior
/// - Id not in cart: no-op (still re-rendered)
/// - Quantity reaching 0 or below: line removed
pub fn change_quantity<D: DisplaySurface>(
    cart: &mut CartState<D>,
    id: &str,
    delta: i64,
) -> CartView {
    debug!(item_id = %id, delta, "change_quantity command");

    let changed = cart.with_cart_mut(|c| c.adjust_quantity(id, delta));
    if !changed {
        debug!(item_id = %id, "Quantity unchanged");
    }

    cart.view()
}

/// Removes a line from the cart. Removing an absent id is a no-op.
pub fn remove_from_cart<D: DisplaySurface>(cart: &mut CartState<D>, id: &str) -> CartView {
    debug!(item_id = %id, "remove_from_cart command");

    cart.with_cart_mut(|c| c.remove(id));
    cart.view()
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - User presses "Clear"
///
/// ## Returns
/// - `None` if the cart is empty: the clear action is disabled, so the
///   trigger is ignored without re-rendering
/// - `Some(view)` with the emptied cart otherwise
pub fn clear_cart<D: DisplaySurface>(cart: &mut CartState<D>) -> Option<CartView> {
    debug!("clear_cart command");

    if cart.with_cart(|c| c.is_empty()) {
        debug!("Cart already empty, clear ignored");
        return None;
    }

    cart.with_cart_mut(|c| c.clear());
    Some(cart.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::testing::cart_state as state;

    fn price(major: f64) -> RawPrice {
        RawPrice::Number(major)
    }

    #[test]
    fn test_add_same_item_twice() {
        let mut cart = state();

        add_to_cart(&mut cart, "A", "Dosa", &price(80.0)).unwrap();
        let view = add_to_cart(&mut cart, "A", "Dosa", &price(80.0)).unwrap();

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].quantity, 2);
        assert_eq!(view.rows[0].line_total, "₹160");
        assert_eq!(cart.display().views.last(), Some(&view));
    }

    #[test]
    fn test_two_items_total() {
        let mut cart = state();

        add_to_cart(&mut cart, "A", "Dosa", &price(80.0)).unwrap();
        let view = add_to_cart(&mut cart, "B", "Vada", &RawPrice::Text("120".into())).unwrap();

        assert_eq!(view.items_total, "₹200");
        assert_eq!(view.grand_total, "₹200");
        assert!(view.payment.payload.contains("am=200.00"));
    }

    #[test]
    fn test_malformed_add_is_rejected_without_render() {
        let mut cart = state();

        let err = add_to_cart(&mut cart, "A", "Dosa", &price(f64::NAN)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(add_to_cart(&mut cart, "", "Dosa", &price(80.0)).is_err());
        assert!(add_to_cart(&mut cart, "A", " ", &price(80.0)).is_err());

        assert_eq!(cart.display().views.len(), 1);
        assert!(cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_decrement_last_unit_empties_cart() {
        let mut cart = state();
        add_to_cart(&mut cart, "B", "Idli", &price(50.0)).unwrap();

        let view = change_quantity(&mut cart, "B", -1);

        assert!(view.is_empty);
        assert_eq!(view.items_total, "₹0");
        assert_eq!(view.grand_total, "₹0");
        assert!(!view.checkout_enabled);
    }

    #[test]
    fn test_increment_unknown_id_still_renders() {
        let mut cart = state();
        change_quantity(&mut cart, "nope", 1);
        assert_eq!(cart.display().views.len(), 2);
    }

    #[test]
    fn test_remove_twice() {
        let mut cart = state();
        add_to_cart(&mut cart, "A", "Dosa", &price(80.0)).unwrap();
        add_to_cart(&mut cart, "B", "Vada", &price(120.0)).unwrap();

        let first = remove_from_cart(&mut cart, "A");
        let second = remove_from_cart(&mut cart, "A");

        assert_eq!(first, second);
        assert_eq!(second.rows.len(), 1);
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = state();
        add_to_cart(&mut cart, "A", "Dosa", &price(80.0)).unwrap();

        let view = clear_cart(&mut cart).unwrap();
        assert!(view.is_empty);
        assert_eq!(cart.display().views.len(), 3);
    }

    #[test]
    fn test_clear_empty_cart_is_ignored() {
        let mut cart = state();

        assert!(clear_cart(&mut cart).is_none());
        assert!(cart.with_cart(|c| c.is_empty()));
        assert_eq!(cart.display().views.len(), 1);
    }

    #[test]
    fn test_get_cart_does_not_render() {
        let cart = state();
        let view = get_cart(&cart);
        assert!(view.is_empty);
        assert_eq!(cart.display().views.len(), 1);
    }
}
