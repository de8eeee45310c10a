// =============================================================================
// Campana Web - Solutions Pages
// =============================================================================
// Agencies and businesses share the scenario layout; each page adds its own
// closing block.
// =============================================================================

use leptos::prelude::*;

use crate::components::{CardGrid, CheckList, CtaBlock, Section};
use crate::content::{Card, Scenario};
use crate::i18n::Translator;
use crate::routing::Page;

/// Before/after cards.
#[component]
pub fn ScenarioList(scenarios: Vec<Scenario>, t: Translator) -> impl IntoView {
    let before = t.t("common.before");
    let after = t.t("common.after");

    view! {
        <div class="scenario-list">
            {scenarios
                .into_iter()
                .map(|scenario| view! {
                    <div class="card scenario-card">
                        <h3 class="card-title">{scenario.title}</h3>
                        <div class="compare-grid">
                            <div class="compare-before">
                                <p class="compare-label">{before.clone()}</p>
                                <p>{scenario.before}</p>
                            </div>
                            <div class="compare-after">
                                <p class="compare-label">{after.clone()}</p>
                                <p>{scenario.after}</p>
                            </div>
                        </div>
                    </div>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Campana for agencies.
#[component]
pub fn ForAgenciesPage(t: Translator) -> impl IntoView {
    let scenarios: Vec<Scenario> = t.raw("forAgencies.scenarios");
    let benefits: Vec<Card> = t.raw("forAgencies.benefits");

    view! {
        <section class="page-hero">
            <div class="container">
                <h1 class="page-title">{t.t("forAgencies.h1")}</h1>
                <p class="page-sub">{t.t("forAgencies.sub")}</p>
            </div>
        </section>

        <Section>
            <p class="section-eyebrow">{t.t("forAgencies.scenarioLabel")}</p>
            <ScenarioList scenarios=scenarios t=t />
        </Section>

        <Section muted=true>
            <h2 class="section-title">{t.t("forAgencies.benefitsH2")}</h2>
            <CardGrid cards=benefits />
        </Section>

        <Section class="text-center">
            <h2 class="section-title">{t.t("forAgencies.roiH2")}</h2>
            <p class="section-lead">{t.t("forAgencies.roiText")}</p>
            <a href=t.href(Page::Pricing) class="btn btn-primary">{t.t("forAgencies.cta")}</a>
        </Section>

        <CtaBlock t=t />
    }
}

/// Campana for in-house teams.
#[component]
pub fn ForBusinessesPage(t: Translator) -> impl IntoView {
    let scenarios: Vec<Scenario> = t.raw("forBusinesses.scenarios");
    let benefits: Vec<Card> = t.raw("forBusinesses.benefits");

    view! {
        <section class="page-hero">
            <div class="container">
                <h1 class="page-title">{t.t("forBusinesses.h1")}</h1>
                <p class="page-sub">{t.t("forBusinesses.sub")}</p>
            </div>
        </section>

        <Section>
            <ScenarioList scenarios=scenarios t=t />
        </Section>

        <Section muted=true>
            <h2 class="section-title">{t.t("forBusinesses.benefitsH2")}</h2>
            <CardGrid cards=benefits />
        </Section>

        <Section class="text-center">
            <h2 class="section-title">{t.t("forBusinesses.protectionH2")}</h2>
            <CheckList items=t.list("forBusinesses.protectionItems") />
            <a href=t.href(Page::Pricing) class="btn btn-primary">{t.t("forBusinesses.cta")}</a>
        </Section>

        <CtaBlock t=t />
    }
}
