// =============================================================================
// Campana Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod config;
pub mod consent;
pub mod content;
pub mod error;
pub mod i18n;
pub mod pages;
pub mod roi;
pub mod routing;
pub mod seo;
pub mod state;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::SiteConfig;
pub use error::SiteError;
pub use i18n::{Catalog, Locale, Translator};
pub use state::AppState;

// -----------------------------------------------------------------------------
// 3. WASM Entry Point
// -----------------------------------------------------------------------------

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Install logging, load the translations and mount the site.
pub fn start() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_env();
    // Ignore if a logger is already installed
    let _ = console_log::init_with_level(config.log_level());

    let catalog = match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Cannot start Campana Web: {e}");
            return;
        }
    };

    if config.is_development() {
        for (locale, key) in catalog.missing_keys() {
            log::warn!("Translation key {} missing from {}", key, locale.code());
        }
    }

    log::info!("Mounting {} ({})", config.site_name, config.base_url);
    leptos::mount::mount_to_body(move || view! { <App config=config catalog=catalog /> });
}

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    start();
}
