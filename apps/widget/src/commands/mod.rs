//! # Widget Commands
//!
//! Everything the ordering page can ask the widget to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Trigger decoding)
//! ├── cart.rs      ◄─── add / change quantity / remove / clear
//! └── checkout.rs  ◄─── Confirmation dialog + order placement
//! ```
//!
//! ## How Triggers Arrive
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Page                                                                   │
//! │  ────                                                                   │
//! │  <button data-id="A" data-name="Dosa" data-price="80">Add</button>      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  {"action":"add","id":"A","name":"Dosa","price":"80"}                   │
//! │         │                                                               │
//! │         ▼  Trigger::from_json                                           │
//! │  Widget::dispatch(Trigger::Add { .. })                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::add_to_cart(..) ──► display.show(view)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod checkout;

use serde::{Deserialize, Serialize};
use tiffin_core::validation::RawPrice;

use crate::error::WidgetResult;

/// A user action on the ordering page.
///
/// ## JSON Shape
/// ```json
/// {"action": "add", "id": "A", "name": "Dosa", "price": 80}
/// {"action": "increment", "id": "A"}
/// {"action": "decrement", "id": "A"}
/// {"action": "remove", "id": "A"}
/// {"action": "clear"}
/// {"action": "checkout"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Trigger {
    /// Menu "Add" button.
    Add {
        id: String,
        name: String,
        price: RawPrice,
    },
    /// Cart row "+" button.
    Increment { id: String },
    /// Cart row "−" button.
    Decrement { id: String },
    /// Cart row "Remove" button.
    Remove { id: String },
    /// "Clear cart" button.
    Clear,
    /// "Checkout" button.
    Checkout,
}

impl Trigger {
    /// Decodes a trigger from its JSON form.
    pub fn from_json(raw: &str) -> WidgetResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Short action name for logs.
    pub fn action(&self) -> &'static str {
        match self {
            Trigger::Add { .. } => "add",
            Trigger::Increment { .. } => "increment",
            Trigger::Decrement { .. } => "decrement",
            Trigger::Remove { .. } => "remove",
            Trigger::Clear => "clear",
            Trigger::Checkout => "checkout",
        }
    }
}
