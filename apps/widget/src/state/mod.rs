//! # Widget State
//!
//! ```text
//! state/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart + display surface, render-after-mutate
//! └── config.rs   ◄─── Shop, payee and QR settings
//! ```

mod cart;
mod config;

pub use cart::CartState;
pub use config::{PaymentSettings, QrSettings, ShopSettings, WidgetConfig, DEFAULT_QR_SERVICE_URL};
