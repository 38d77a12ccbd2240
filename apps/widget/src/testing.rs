//! Recording surfaces shared by the unit tests.

use tiffin_core::view::CartView;

use crate::state::{CartState, WidgetConfig};
use crate::surface::{ConfirmationSurface, DisplaySurface};

/// Display surface that keeps every view it was shown.
#[derive(Debug, Default)]
pub struct Recorder {
    pub views: Vec<CartView>,
}

impl DisplaySurface for Recorder {
    fn show(&mut self, view: &CartView) {
        self.views.push(view.clone());
    }
}

/// Confirmation dialog that is acknowledged immediately.
#[derive(Debug, Default)]
pub struct Dialog {
    pub shown: Vec<String>,
}

impl ConfirmationSurface for Dialog {
    fn confirm(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}

/// Empty cart on the default storefront.
pub fn cart_state() -> CartState<Recorder> {
    let storefront = WidgetConfig::default()
        .storefront()
        .expect("default config is valid");
    CartState::new(storefront, Recorder::default())
}
