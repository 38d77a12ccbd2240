//! # Payment Request
//!
//! Builds the UPI payment request shown as a QR code under the cart.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  grand_total ──► PaymentRequest ──► upi://pay?pa=..&am=200.00&..       │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                       QrService::image_url(payload)                     │
//! │                                              │                          │
//! │                                              ▼                          │
//! │         https://api.qrserver.com/v1/create-qr-code/?size=..&data=..    │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                 <img src> on the page (fetched by the browser)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here talks to the network; the QR service is only addressed.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Who gets paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    /// Payment address (UPI VPA), e.g. `tiffinhouse@upi`.
    pub id: String,
    /// Name shown in the payer's app.
    pub name: String,
}

/// A request to pay a fixed amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest<'a> {
    pub payee: &'a Payee,
    pub amount: Money,
    pub currency_code: &'a str,
    pub note: &'a str,
}

impl PaymentRequest<'_> {
    /// Encodes the request as a UPI deep link.
    ///
    /// The amount always carries exactly two decimals.
    ///
    /// ```rust
    /// use tiffin_core::payment::{Payee, PaymentRequest};
    /// use tiffin_core::Money;
    ///
    /// let payee = Payee { id: "shop@upi".into(), name: "Tiffin House".into() };
    /// let request = PaymentRequest {
    ///     payee: &payee,
    ///     amount: Money::from_major(200),
    ///     currency_code: "INR",
    ///     note: "Food order",
    /// };
    /// assert_eq!(
    ///     request.to_uri(),
    ///     "upi://pay?pa=shop%40upi&pn=Tiffin%20House&am=200.00&cu=INR&tn=Food%20order"
    /// );
    /// ```
    pub fn to_uri(&self) -> String {
        format!(
            "upi://pay?pa={}&pn={}&am={}&cu={}&tn={}",
            urlencoding::encode(&self.payee.id),
            urlencoding::encode(&self.payee.name),
            self.amount,
            urlencoding::encode(self.currency_code),
            urlencoding::encode(self.note),
        )
    }
}

// =============================================================================
// QR Service
// =============================================================================

/// Address of the third-party service that turns a payload into a QR image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrService {
    base: Url,
    size: u32,
}

impl QrService {
    /// Validates the service URL.
    ///
    /// ## Errors
    /// `CoreError::InvalidQrService` if the URL does not parse, is not
    /// http(s), or `size` is zero.
    pub fn new(base_url: &str, size: u32) -> CoreResult<Self> {
        let base = Url::parse(base_url)?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(CoreError::InvalidQrService(format!(
                "expected http or https, got {}",
                base.scheme()
            )));
        }
        if size == 0 {
            return Err(CoreError::InvalidQrService(
                "image size must be greater than 0".to_string(),
            ));
        }

        Ok(QrService { base, size })
    }

    /// Image edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// URL of the QR image encoding `payload`.
    pub fn image_url(&self, payload: &str) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("size", &format!("{0}x{0}", self.size))
            .append_pair("data", payload);
        url.into()
    }
}
