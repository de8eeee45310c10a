// =============================================================================
// Campana Web - How It Works Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{CardGrid, CtaBlock, GroupGrid, Section};
use crate::content::{Card, ItemGroup};
use crate::i18n::Translator;
use crate::routing::Page;

/// Step-by-step walkthrough of the product.
#[component]
pub fn HowItWorksPage(t: Translator) -> impl IntoView {
    let steps: Vec<ItemGroup> = t.raw("howItWorks.steps");
    let dashboard: Vec<Card> = t.raw("howItWorks.dashboardCards");
    let pillars: Vec<ItemGroup> = t.raw("howItWorks.pillars");

    view! {
        <section class="page-hero">
            <div class="container">
                <h1 class="page-title">{t.t("howItWorks.h1")}</h1>
                <p class="page-sub">{t.t("howItWorks.sub")}</p>
            </div>
        </section>

        <Section>
            <h2 class="section-title">{t.t("howItWorks.stepsH2")}</h2>
            <GroupGrid groups=steps label=t.t("common.stage") />
        </Section>

        <Section muted=true>
            <h2 class="section-title">{t.t("howItWorks.dashboardH2")}</h2>
            <CardGrid cards=dashboard />
        </Section>

        <Section>
            <h2 class="section-title">{t.t("howItWorks.aiH2")}</h2>
            <GroupGrid groups=pillars />
        </Section>

        <Section muted=true class="demo-section">
            <h2 class="section-title">{t.t("howItWorks.demoH2")}</h2>
            <div class="media-placeholder">{t.t("common.demoPlaceholder")}</div>
            <a href=t.href(Page::Pricing) class="btn btn-primary">{t.t("howItWorks.demoCta")}</a>
        </Section>

        <CtaBlock t=t />
    }
}
