// =============================================================================
// Campana Web - Cookie Consent Banner
// =============================================================================

use leptos::prelude::*;

use crate::consent::ConsentChoice;
use crate::i18n::Translator;
use crate::state::AppState;

/// Shown until the visitor picks an option; the choice is remembered.
#[component]
pub fn CookieBanner(t: Translator) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let consent = app_state.consent;

    let essential_state = app_state.clone();
    let accept_essential = move |_| essential_state.accept_cookies(ConsentChoice::Essential);
    let accept_all = move |_| app_state.accept_cookies(ConsentChoice::All);

    view! {
        <div
            class="cookie-banner"
            role="dialog"
            aria-live="polite"
            hidden=move || consent.get().is_some()
        >
            <p class="cookie-message">{t.t("cookie.message")}</p>
            <div class="cookie-actions">
                <button class="btn btn-secondary" on:click=accept_essential>
                    {t.t("cookie.essentialOnly")}
                </button>
                <button class="btn btn-primary" on:click=accept_all>
                    {t.t("cookie.acceptAll")}
                </button>
            </div>
        </div>
    }
}
