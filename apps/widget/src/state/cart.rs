//! # Cart State
//!
//! Owns the cart and keeps the display surface in step with it.
//!
//! ## Ownership
//! The page runs one handler to completion before the next, so the cart is
//! owned outright and mutated through `&mut self`. No `Mutex` is involved.
//!
//! ## Render-After-Mutate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  CartState::new() ───────► render ──► display.show()   (₹0, empty)     │
//! │                                                                         │
//! │  with_cart_mut(|c| ..) ──► mutate ──► render ──► display.show()        │
//! │                                                                         │
//! │  with_cart(|c| ..) ──────► (read only, nothing shown)                  │
//! │                                                                         │
//! │  NOTE: every mutation re-renders, even one that turned out a no-op,    │
//! │        so the page can never show a stale total.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tiffin_core::view::{render, CartView, Storefront};
use tiffin_core::Cart;
use tracing::trace;

use crate::surface::DisplaySurface;

/// The widget's cart together with the surface that displays it.
#[derive(Debug)]
pub struct CartState<D> {
    cart: Cart,
    storefront: Storefront,
    display: D,
}

impl<D: DisplaySurface> CartState<D> {
    /// Creates an empty cart and shows its initial view.
    pub fn new(storefront: Storefront, display: D) -> Self {
        let mut state = CartState {
            cart: Cart::new(),
            storefront,
            display,
        };
        state.sync();
        state
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.cart)
    }

    /// Executes a function with write access to the cart, then re-renders.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(item));
    /// ```
    pub fn with_cart_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let result = f(&mut self.cart);
        self.sync();
        result
    }

    /// Renders the current cart without showing it.
    pub fn view(&self) -> CartView {
        render(&self.cart, &self.storefront)
    }

    /// Render context (currency, payee, QR service).
    pub fn storefront(&self) -> &Storefront {
        &self.storefront
    }

    /// The display surface.
    pub fn display(&self) -> &D {
        &self.display
    }

    fn sync(&mut self) {
        let view = self.view();
        trace!(
            lines = view.rows.len(),
            grand_total = %view.grand_total,
            "Pushing cart view"
        );
        self.display.show(&view);
    }
}
