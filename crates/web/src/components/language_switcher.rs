// =============================================================================
// Campana Web - Language Switcher
// =============================================================================

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::i18n::Locale;
use crate::routing;
use crate::utils;

/// Where switching from `current` to `target` leads; `None` for the active locale.
fn switch_target(pathname: &str, current: Locale, target: Locale) -> Option<String> {
    (target != current).then(|| routing::switch_locale(pathname, target))
}

/// PL / EN buttons; switching reloads the same page in the other locale.
#[component]
pub fn LanguageSwitcher(current: Locale, #[prop(into)] label: String) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="language-switcher" role="group" aria-label=label>
            {Locale::ALL
                .into_iter()
                .map(|locale| {
                    let active = locale == current;
                    let switch = move |_| {
                        if let Some(target) = switch_target(&pathname.get_untracked(), current, locale) {
                            log::debug!("Switching locale to {}: {}", locale.code(), target);
                            utils::navigate_to(&target);
                        }
                    };
                    view! {
                        <button
                            class="lang-btn"
                            class:active=active
                            aria-pressed=active.to_string()
                            aria-label=locale.native_name()
                            on:click=switch
                        >
                            {locale.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_target() {
        assert_eq!(
            switch_target("/en/pricing", Locale::En, Locale::Pl).as_deref(),
            Some("/pl/cennik")
        );
        assert_eq!(switch_target("/pl/o-nas", Locale::Pl, Locale::En).as_deref(), Some("/en/about"));
        assert_eq!(switch_target("/en/pricing", Locale::En, Locale::En), None);
    }
}
