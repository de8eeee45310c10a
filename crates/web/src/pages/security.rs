// =============================================================================
// Campana Web - Security Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{GroupGrid, Section};
use crate::content::ItemGroup;
use crate::i18n::Translator;
use crate::routing::Page;

/// How accounts and data are protected.
#[component]
pub fn SecurityPage(t: Translator) -> impl IntoView {
    let sections: Vec<ItemGroup> = t.raw("security.sections");

    view! {
        <section class="page-hero">
            <div class="container">
                <h1 class="page-title">{t.t("security.h1")}</h1>
                <p class="page-sub">{t.t("security.sub")}</p>
            </div>
        </section>

        <Section>
            <GroupGrid groups=sections />
        </Section>

        <Section muted=true class="text-center">
            <a href=t.href(Page::Pricing) class="btn btn-primary btn-lg">{t.t("security.cta")}</a>
        </Section>
    }
}
