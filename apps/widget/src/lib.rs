//! # Tiffin Widget Library
//!
//! The cart widget for the Tiffin ordering page: owns the cart, turns page
//! triggers into cart commands and keeps the page's cart panel up to date.
//!
//! ## Module Organization
//! ```text
//! tiffin_widget/
//! ├── lib.rs          ◄─── You are here (Widget setup & dispatch)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart + display surface
//! │   └── config.rs   ◄─── Configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Trigger decoding
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── checkout.rs ◄─── Checkout command
//! ├── surface.rs      ◄─── Display / confirmation traits
//! └── error.rs        ◄─── Widget error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Widget Startup                                    │
//! │                                                                         │
//! │  1. init_tracing()  ─── RUST_LOG or "info,tiffin=debug"                 │
//! │  2. WidgetConfig::load(path) ─── defaults → file → env → validate       │
//! │  3. Widget::new(&config, display, dialog)                               │
//! │       └── empty cart rendered once (₹0 payment QR)                      │
//! │  4. widget.handle_json(..) for every page trigger                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use tiffin_widget::surface::{ConfirmationSurface, DisplaySurface};
//! use tiffin_widget::view::CartView;
//! use tiffin_widget::{Outcome, Widget, WidgetConfig};
//!
//! struct Panel(Option<CartView>);
//! impl DisplaySurface for Panel {
//!     fn show(&mut self, view: &CartView) {
//!         self.0 = Some(view.clone());
//!     }
//! }
//!
//! struct Alert;
//! impl ConfirmationSurface for Alert {
//!     fn confirm(&mut self, _text: &str) {}
//! }
//!
//! let mut widget = Widget::new(&WidgetConfig::default(), Panel(None), Alert).unwrap();
//! widget.handle_json(r#"{"action":"add","id":"A","name":"Dosa","price":80}"#);
//! widget.handle_json(r#"{"action":"add","id":"A","name":"Dosa","price":80}"#);
//!
//! let shown = widget.display().0.as_ref().unwrap();
//! assert_eq!(shown.rows[0].line_total, "₹160");
//!
//! // Malformed triggers are ignored
//! assert!(widget.handle_json(r#"{"action":"add","id":"","name":"?","price":"x"}"#).is_none());
//!
//! assert!(matches!(
//!     widget.handle_json(r#"{"action":"checkout"}"#),
//!     Some(Outcome::OrderPlaced(_))
//! ));
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod surface;

#[cfg(test)]
mod testing;

pub use commands::Trigger;
pub use error::{ErrorCode, WidgetError, WidgetResult};
pub use state::{CartState, WidgetConfig};
pub use tiffin_core::view;

use tiffin_core::checkout::PlacedOrder;
use tiffin_core::view::CartView;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::{cart, checkout};
use surface::{ConfirmationSurface, DisplaySurface};

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,tiffin=debug";

/// What handling a trigger produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The cart view after the command (also pushed to the display).
    Updated(CartView),
    /// The trigger was a guarded no-op (clear or checkout on an empty cart).
    Ignored,
    /// Checkout was confirmed and the cart cleared.
    OrderPlaced(PlacedOrder),
}

/// The cart widget: cart state plus the confirmation dialog.
#[derive(Debug)]
pub struct Widget<D, C> {
    cart: CartState<D>,
    confirmation: C,
}

impl<D, C> Widget<D, C>
where
    D: DisplaySurface,
    C: ConfirmationSurface,
{
    /// Builds the widget and shows the initial empty cart.
    ///
    /// ## Errors
    /// A config error if the storefront (currency, payee, QR service) cannot
    /// be built from `config`.
    pub fn new(config: &WidgetConfig, display: D, confirmation: C) -> WidgetResult<Self> {
        let storefront = config.storefront()?;
        info!(
            shop = %config.shop.name,
            payee = %storefront.payee.id,
            currency = %storefront.currency.code,
            "Cart widget ready"
        );

        Ok(Widget {
            cart: CartState::new(storefront, display),
            confirmation,
        })
    }

    /// Runs one trigger.
    ///
    /// ## Errors
    /// A validation error if an add trigger carries a malformed id, name or
    /// price. Nothing is changed or rendered in that case.
    pub fn dispatch(&mut self, trigger: Trigger) -> WidgetResult<Outcome> {
        debug!(action = trigger.action(), "Dispatching trigger");

        let outcome = match trigger {
            Trigger::Add { id, name, price } => {
                Outcome::Updated(cart::add_to_cart(&mut self.cart, &id, &name, &price)?)
            }
            Trigger::Increment { id } => {
                Outcome::Updated(cart::change_quantity(&mut self.cart, &id, 1))
            }
            Trigger::Decrement { id } => {
                Outcome::Updated(cart::change_quantity(&mut self.cart, &id, -1))
            }
            Trigger::Remove { id } => Outcome::Updated(cart::remove_from_cart(&mut self.cart, &id)),
            Trigger::Clear => match cart::clear_cart(&mut self.cart) {
                Some(view) => Outcome::Updated(view),
                None => Outcome::Ignored,
            },
            Trigger::Checkout => match checkout::checkout(&mut self.cart, &mut self.confirmation) {
                Some(order) => Outcome::OrderPlaced(order),
                None => Outcome::Ignored,
            },
        };

        Ok(outcome)
    }

    /// Decodes and runs a JSON trigger, silently dropping malformed ones.
    ///
    /// Returns `None` when the trigger was dropped.
    pub fn handle_json(&mut self, raw: &str) -> Option<Outcome> {
        match Trigger::from_json(raw).and_then(|trigger| self.dispatch(trigger)) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                debug!(error = %err, "Ignoring malformed trigger");
                None
            }
        }
    }

    /// Current cart view.
    pub fn view(&self) -> CartView {
        cart::get_cart(&self.cart)
    }

    /// Cart state (read access).
    pub fn cart(&self) -> &CartState<D> {
        &self.cart
    }

    /// The display surface.
    pub fn display(&self) -> &D {
        self.cart.display()
    }

    /// The confirmation surface.
    pub fn confirmation(&self) -> &C {
        &self.confirmation
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=tiffin_widget=trace` - Also show each pushed view
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        debug!("Tracing subscriber already installed");
    }
}
