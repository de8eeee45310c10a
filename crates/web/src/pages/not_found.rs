// =============================================================================
// Campana Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;

use crate::i18n::Translator;
use crate::routing::Page;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage(t: Translator) -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>{t.t("notFound.h1")}</h1>
                <p>{t.t("notFound.text")}</p>
                <a href=t.href(Page::Home) class="btn btn-primary">
                    {t.t("notFound.home")}
                </a>
            </div>
        </div>
    }
}
