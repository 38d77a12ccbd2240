//! # Widget Configuration
//!
//! Shop, payee and QR service settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TIFFIN_PAYEE_ID=tiffinhouse@upi                                    │
//! │                                                                         │
//! │  2. TOML Config File (path supplied by the host page)                  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [shop]
//! name = "Tiffin House"
//! currency_symbol = "₹"
//! currency_code = "INR"
//!
//! [payment]
//! payee_id = "tiffinhouse@upi"
//! payee_name = "Tiffin House"
//! note = "Food order"
//!
//! [qr]
//! service_url = "https://api.qrserver.com/v1/create-qr-code/"
//! size = 200
//! ```
//!
//! Configuration is read-only after startup, so no locking is needed.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tiffin_core::payment::{Payee, QrService};
use tiffin_core::view::Storefront;
use tiffin_core::{Currency, DEFAULT_CURRENCY_CODE, DEFAULT_CURRENCY_SYMBOL};
use tracing::{debug, info, warn};

use crate::error::{WidgetError, WidgetResult};

/// Default QR rendering service.
pub const DEFAULT_QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

// =============================================================================
// Sections
// =============================================================================

/// The restaurant and its currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSettings {
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// Symbol shown before every amount on the page.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// ISO 4217 code used in payment requests.
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
}

fn default_shop_name() -> String {
    "Tiffin House".to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_currency_code() -> String {
    DEFAULT_CURRENCY_CODE.to_string()
}

impl Default for ShopSettings {
    fn default() -> Self {
        ShopSettings {
            name: default_shop_name(),
            currency_symbol: default_currency_symbol(),
            currency_code: default_currency_code(),
        }
    }
}

/// Who receives payment and how the transaction is labelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSettings {
    /// Payee address (UPI VPA).
    #[serde(default = "default_payee_id")]
    pub payee_id: String,

    /// Payee display name. Falls back to the shop name when empty.
    #[serde(default)]
    pub payee_name: String,

    /// Transaction note.
    #[serde(default = "default_note")]
    pub note: String,
}

fn default_payee_id() -> String {
    "tiffinhouse@upi".to_string()
}

fn default_note() -> String {
    "Food order".to_string()
}

impl Default for PaymentSettings {
    fn default() -> Self {
        PaymentSettings {
            payee_id: default_payee_id(),
            payee_name: String::new(),
            note: default_note(),
        }
    }
}

/// QR rendering service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrSettings {
    #[serde(default = "default_qr_service_url")]
    pub service_url: String,

    /// Image edge length in pixels.
    #[serde(default = "default_qr_size")]
    pub size: u32,
}

fn default_qr_service_url() -> String {
    DEFAULT_QR_SERVICE_URL.to_string()
}

fn default_qr_size() -> u32 {
    200
}

impl Default for QrSettings {
    fn default() -> Self {
        QrSettings {
            service_url: default_qr_service_url(),
            size: default_qr_size(),
        }
    }
}

// =============================================================================
// Widget Config
// =============================================================================

/// Complete widget configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub shop: ShopSettings,

    #[serde(default)]
    pub payment: PaymentSettings,

    #[serde(default)]
    pub qr: QrSettings,
}

impl WidgetConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (if given and present)
    /// 3. Environment variables
    pub fn load(config_path: Option<&Path>) -> WidgetResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                info!(?path, "Loading widget config from file");
                let contents = std::fs::read_to_string(path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<&Path>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load widget config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml_str(contents: &str) -> WidgetResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> WidgetResult<()> {
        if self.payment.payee_id.trim().is_empty() {
            return Err(WidgetError::config("payment.payee_id must not be empty"));
        }

        if self.shop.currency_symbol.is_empty() {
            return Err(WidgetError::config("shop.currency_symbol must not be empty"));
        }

        let code = &self.shop.currency_code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WidgetError::config(format!(
                "shop.currency_code must be a 3-letter ISO 4217 code, got: {}",
                code
            )));
        }

        // Parses and checks scheme/size
        QrService::new(&self.qr.service_url, self.qr.size)?;

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("TIFFIN_SHOP_NAME") {
            self.shop.name = name;
        }

        if let Ok(payee_id) = std::env::var("TIFFIN_PAYEE_ID") {
            debug!(payee_id = %payee_id, "Overriding payee from environment");
            self.payment.payee_id = payee_id;
        }

        if let Ok(payee_name) = std::env::var("TIFFIN_PAYEE_NAME") {
            self.payment.payee_name = payee_name;
        }

        if let Ok(note) = std::env::var("TIFFIN_PAYMENT_NOTE") {
            self.payment.note = note;
        }

        if let Ok(url) = std::env::var("TIFFIN_QR_SERVICE_URL") {
            self.qr.service_url = url;
        }
    }

    /// Payee name as shown in the payer's app.
    pub fn payee_name(&self) -> &str {
        if self.payment.payee_name.trim().is_empty() {
            &self.shop.name
        } else {
            &self.payment.payee_name
        }
    }

    /// Builds the render context used for every cart view.
    pub fn storefront(&self) -> WidgetResult<Storefront> {
        Ok(Storefront {
            currency: Currency {
                symbol: self.shop.currency_symbol.clone(),
                code: self.shop.currency_code.clone(),
            },
            payee: Payee {
                id: self.payment.payee_id.clone(),
                name: self.payee_name().to_string(),
            },
            payment_note: self.payment.note.clone(),
            qr: QrService::new(&self.qr.service_url, self.qr.size)?,
        })
    }
}
