//! Krystall Stars site - page interaction controller (WASM)
//!
//! Mobile menu, process tabs, reveal-on-scroll, header shrink, smooth
//! anchor scrolling and the inquiry form. State lives in [`state`] and is
//! testable natively; [`dom`] binds it to the page when built for wasm32.

pub mod config;
pub mod controller;
pub mod error;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::{LookupPolicy, PageConfig};
pub use controller::{Behaviour, InstallReport, PageController};
pub use error::{InquiryError, PageError};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let result = dom::when_ready(|| {
        let config = match dom::document() {
            Ok(doc) => dom::load_config(&doc),
            Err(err) => {
                tracing::error!(%err, "No document");
                return;
            }
        };
        if let Err(err) = PageController::new(config).install() {
            tracing::error!(%err, "Page interaction setup failed");
        }
    });

    if let Err(err) = result {
        tracing::error!(%err, "Could not schedule page setup");
    }
}
