// =============================================================================
// Campana Web - Closing Call To Action
// =============================================================================

use leptos::prelude::*;

use crate::i18n::Translator;
use crate::routing::Page;

/// Trial / contact band shown at the bottom of most pages.
#[component]
pub fn CtaBlock(t: Translator) -> impl IntoView {
    view! {
        <section class="section cta-block">
            <div class="container cta-inner">
                <h2 class="cta-title">{t.t("home.cta.h2")}</h2>
                <p class="cta-sub">{t.t("home.cta.sub")}</p>
                <div class="cta-actions">
                    <a href=t.href(Page::Pricing) class="btn btn-primary">{t.t("home.cta.primary")}</a>
                    <a href=t.href(Page::Contact) class="btn btn-secondary">{t.t("home.cta.secondary")}</a>
                </div>
                <p class="cta-trust">{t.t("home.cta.trust")}</p>
            </div>
        </section>
    }
}
