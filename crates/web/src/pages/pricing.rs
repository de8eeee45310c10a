// =============================================================================
// Campana Web - Pricing Page
// =============================================================================
// Table of Contents:
// 1. Pricing Page
// 2. Tier Card
// =============================================================================

use leptos::prelude::*;

use crate::components::{CheckList, CtaBlock, JsonLd, RoiCalculator, Section};
use crate::content::pricing::PricingTier;
use crate::i18n::Translator;
use crate::routing::Page;
use crate::seo;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. Pricing Page
// -----------------------------------------------------------------------------

/// Plans, founding offer, trial terms and the ROI calculator.
#[component]
pub fn PricingPage(t: Translator) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let product = seo::product_json_ld(&app_state.config, &t.t("pricing.productDescription"));
    let tiers: Vec<PricingTier> = t.raw("pricing.tiers");
    let features = t.list("pricing.featuresList");

    view! {
        <section class="page-hero">
            <div class="container text-center">
                <h1 class="page-title">{t.t("pricing.h1")}</h1>
                <h2 class="page-sub-title">{t.t("pricing.philH2")}</h2>
                <p class="page-sub">{t.t("pricing.philDesc")}</p>
                <p class="accent-note">{t.t("pricing.annualDiscount")}</p>
            </div>
        </section>

        <Section>
            <div class="founding-banner">
                <span class="founding-badge">"✦ "{t.t("pricing.foundingBadge")}" ✦"</span>
                <p>{t.t("pricing.foundingDesc")}</p>
            </div>
        </Section>

        <Section>
            <div class="tier-grid">
                {tiers
                    .into_iter()
                    .map(|tier| view! { <TierCard tier=tier features=features.clone() t=t /> })
                    .collect::<Vec<_>>()}
            </div>
        </Section>

        <Section muted=true class="text-center">
            <h2 class="section-title">{t.t("pricing.trialH2")}</h2>
            <CheckList items=t.list("pricing.trialItems") class="trial-list" />
            <p class="section-text">{t.t("pricing.trialSolo")}</p>
            <p class="accent-note">{t.t("pricing.trialAgency")}</p>
            <a href=t.href(Page::Contact) class="btn btn-primary btn-lg">{t.t("pricing.trialCta")}</a>
        </Section>

        <Section>
            <RoiCalculator t=t />
        </Section>

        <CtaBlock t=t />
        <JsonLd value=product />
    }
}

// -----------------------------------------------------------------------------
// 2. Tier Card
// -----------------------------------------------------------------------------

/// One plan; the founding price replaces the list price when present.
#[component]
fn TierCard(tier: PricingTier, features: Vec<String>, t: Translator) -> impl IntoView {
    let PricingTier {
        name,
        price,
        founding_price,
        usd,
        best,
        accounts,
        seats,
        support,
        popular,
        contact,
        ..
    } = tier;

    let price_block = match founding_price {
        Some(founding) => view! {
            <span class="tier-price-old">{price}</span>
            <div>
                <span class="tier-price founding">{founding}</span>
                " "
                <span class="tier-unit">{t.t("pricing.priceUnit")}</span>
            </div>
            <p class="tier-founding-label">{t.t("pricing.foundingLabel")}</p>
        }
        .into_any(),
        None => view! {
            <span class="tier-price">{price}</span>
            <p class="tier-usd">{usd}</p>
        }
        .into_any(),
    };

    let cta_label = if contact { t.t("pricing.contactSales") } else { t.t("pricing.trialCta") };
    let cta_class = if popular { "btn btn-primary btn-block" } else { "btn btn-secondary btn-block" };

    view! {
        <div class="tier-card" class:popular=popular>
            {popular.then(|| view! { <div class="tier-popular">{t.t("pricing.mostPopular")}</div> })}
            <h3 class="tier-name">{name}</h3>
            <p class="tier-best">{best}</p>
            <div class="tier-pricing">{price_block}</div>
            <CheckList items=vec![accounts, seats] class="tier-limits" />
            <p class="tier-features-label">{t.t("pricing.allFeatures")}</p>
            <CheckList items=features class="tier-features" />
            <p class="tier-support">{t.t("pricing.prioritySupport")}": "{support}</p>
            <a href=t.href(Page::Contact) class=cta_class>{cta_label}</a>
        </div>
    }
}
