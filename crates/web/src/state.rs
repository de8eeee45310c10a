// =============================================================================
// Campana Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. App State
// 2. Preference Actions
// =============================================================================

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::consent::{BrowserConsentStore, ConsentChoice, ConsentStore};
use crate::error::SiteError;
use crate::i18n::{Catalog, Locale, Translator};
use crate::utils;

/// Local storage key of the theme preference.
pub const DARK_MODE_KEY: &str = "dark_mode";

// -----------------------------------------------------------------------------
// 1. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// Build-time site configuration.
    pub config: SiteConfig,

    /// Every locale's copy.
    pub catalog: Catalog,

    /// Whether the site is in dark mode.
    pub dark_mode: RwSignal<bool>,

    /// Stored cookie choice; `None` shows the banner.
    pub consent: RwSignal<Option<ConsentChoice>>,
}

impl AppState {
    /// Create the state, restoring preferences from local storage.
    pub fn new(config: SiteConfig, catalog: Catalog) -> Self {
        Self::with_preferences(config, catalog, load_dark_mode(), BrowserConsentStore.load())
    }

    /// Create the state from already-known preferences.
    pub fn with_preferences(
        config: SiteConfig,
        catalog: Catalog,
        dark_mode: bool,
        consent: Option<ConsentChoice>,
    ) -> Self {
        Self {
            config,
            catalog,
            dark_mode: RwSignal::new(dark_mode),
            consent: RwSignal::new(consent),
        }
    }

    pub fn translator(&self, locale: Locale) -> Translator {
        self.catalog.translator(locale)
    }
}

// -----------------------------------------------------------------------------
// 2. Preference Actions
// -----------------------------------------------------------------------------

impl AppState {
    /// Toggle dark mode and persist preference.
    pub fn toggle_dark_mode(&self) {
        let new_value = !self.dark_mode.get_untracked();
        self.dark_mode.set(new_value);
        let saved = utils::local_storage().and_then(|_| {
            LocalStorage::set(DARK_MODE_KEY, new_value).map_err(|e| SiteError::Storage(e.to_string()))
        });
        if let Err(e) = saved {
            log::warn!("Could not persist theme: {e}");
        }
    }

    /// Record the visitor's cookie choice; the banner hides even if storage fails.
    pub fn accept_cookies(&self, choice: ConsentChoice) {
        if let Err(e) = BrowserConsentStore.save(choice) {
            log::warn!("{e}");
        }
        log::debug!("Cookie consent: {choice}");
        self.consent.set(Some(choice));
    }
}

/// Stored theme preference; dark when nothing readable is stored.
fn load_dark_mode() -> bool {
    // gloo throws if storage is blocked, so check it first
    match utils::local_storage() {
        Ok(_) => LocalStorage::get(DARK_MODE_KEY).unwrap_or(true),
        Err(e) => {
            log::warn!("Theme preference unavailable: {e}");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_seed_signals() {
        let owner = Owner::new();
        owner.with(|| {
            let catalog = Catalog::embedded().unwrap();
            let state = AppState::with_preferences(SiteConfig::default(), catalog, false, None);
            assert!(!state.dark_mode.get_untracked());
            assert_eq!(state.consent.get_untracked(), None);
            assert_eq!(state.translator(Locale::Pl).locale(), Locale::Pl);
        });
    }
}
