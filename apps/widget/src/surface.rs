//! # Page Surfaces
//!
//! The two places the widget writes to. The page implements them; the
//! widget only calls them.
//!
//! ```text
//! ┌──────────────────────┐   show(&CartView)    ┌──────────────────────┐
//! │  CartState           │─────────────────────►│  DisplaySurface      │
//! │  (after every change)│                      │  cart panel + QR img │
//! └──────────────────────┘                      └──────────────────────┘
//!
//! ┌──────────────────────┐   confirm(text)      ┌──────────────────────┐
//! │  checkout command    │─────────────────────►│  ConfirmationSurface │
//! │                      │◄──── returns when ───│  blocking dialog     │
//! └──────────────────────┘     acknowledged     └──────────────────────┘
//! ```

use tiffin_core::view::CartView;

/// Receives a freshly rendered cart view.
pub trait DisplaySurface {
    fn show(&mut self, view: &CartView);
}

/// Shows the order summary and blocks until the user acknowledges it.
pub trait ConfirmationSurface {
    fn confirm(&mut self, text: &str);
}

impl<F> DisplaySurface for F
where
    F: FnMut(&CartView),
{
    fn show(&mut self, view: &CartView) {
        self(view)
    }
}
