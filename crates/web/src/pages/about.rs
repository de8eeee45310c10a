// =============================================================================
// Campana Web - About Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{CardGrid, Section};
use crate::content::Card;
use crate::i18n::Translator;
use crate::routing::Page;

/// About page.
#[component]
pub fn AboutPage(t: Translator) -> impl IntoView {
    let approaches: Vec<Card> = t.raw("about.approaches");
    let values: Vec<Card> = t.raw("about.values");

    view! {
        <section class="page-hero">
            <div class="container">
                <h1 class="page-title">{t.t("about.h1")}</h1>
                <p class="page-sub">{t.t("about.sub")}</p>
            </div>
        </section>

        <Section>
            <h2 class="section-title">{t.t("about.problemH2")}</h2>
            <p class="section-lead">{t.t("about.problemText")}</p>
        </Section>

        <Section muted=true>
            <h2 class="section-title">{t.t("about.approachH2")}</h2>
            <CardGrid cards=approaches />
        </Section>

        <Section>
            <h2 class="section-title">{t.t("about.teamH2")}</h2>
            <p class="section-lead">{t.t("about.teamDesc")}</p>
            <div class="team-grid">
                <div class="card team-card">
                    <div class="team-avatar" aria-hidden="true"></div>
                    <h3 class="card-title">{t.t("about.teamMember")}</h3>
                    <p class="card-desc">{t.t("about.teamRole")}</p>
                </div>
            </div>
        </Section>

        <Section muted=true>
            <h2 class="section-title">{t.t("about.valuesH2")}</h2>
            <CardGrid cards=values />
        </Section>

        <Section class="text-center">
            <a href=t.href(Page::Pricing) class="btn btn-primary btn-lg">{t.t("about.cta")}</a>
        </Section>
    }
}
