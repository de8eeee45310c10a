// =============================================================================
// Campana Web - Home Page
// =============================================================================
// Table of Contents:
// 1. Hero
// 2. Pain Point
// 3. Proof Badges
// 4. How It Works Preview
// =============================================================================

use leptos::prelude::*;

use crate::components::{CheckList, CtaBlock, Section};
use crate::i18n::Translator;
use crate::routing::Page;

const STEPS: [(&str, &str); 4] = [
    ("home.howItWorks.step1", "home.howItWorks.step1Desc"),
    ("home.howItWorks.step2", "home.howItWorks.step2Desc"),
    ("home.howItWorks.step3", "home.howItWorks.step3Desc"),
    ("home.howItWorks.step4", "home.howItWorks.step4Desc"),
];

const BADGES: [&str; 5] = [
    "home.proof.badge1",
    "home.proof.badge2",
    "home.proof.badge3",
    "home.proof.badge4",
    "home.proof.badge5",
];

/// Landing page.
#[component]
pub fn HomePage(t: Translator) -> impl IntoView {
    let bullets = vec![
        t.t("home.hero.bullet1"),
        t.t("home.hero.bullet2"),
        t.t("home.hero.bullet3"),
    ];

    view! {
        // ---------------------------------------------------------------------
        // 1. Hero
        // ---------------------------------------------------------------------
        <section class="hero">
            <div class="container hero-inner">
                <h1 class="hero-title">{t.t("home.hero.h1")}</h1>
                <p class="hero-sub">{t.t("home.hero.sub")}</p>
                <CheckList items=bullets class="hero-bullets" />
                <div class="hero-actions">
                    <a href=t.href(Page::Pricing) class="btn btn-primary btn-lg">{t.t("home.hero.cta")}</a>
                    <a href=t.href(Page::HowItWorks) class="btn btn-secondary btn-lg">
                        {t.t("home.hero.ctaSecondary")}
                    </a>
                </div>
                <p class="hero-note">{t.t("home.hero.noCreditCard")}</p>
            </div>
        </section>

        // ---------------------------------------------------------------------
        // 2. Pain Point
        // ---------------------------------------------------------------------
        <Section muted=true>
            <h2 class="section-title">{t.t("home.pain.h2")}</h2>
            <p class="section-lead">{t.t("home.pain.copy")}</p>
            <div class="compare-grid">
                <div class="card compare-card compare-before">
                    <h3 class="card-title">{t.t("home.pain.without")}</h3>
                    <p class="card-desc">{t.t("home.pain.withoutDesc")}</p>
                </div>
                <div class="card compare-card compare-after">
                    <h3 class="card-title">{t.t("home.pain.with")}</h3>
                    <p class="card-desc">{t.t("home.pain.withDesc")}</p>
                </div>
            </div>
            <a href=t.href(Page::HowItWorks) class="text-link">{t.t("home.pain.link")}" →"</a>
        </Section>

        // ---------------------------------------------------------------------
        // 3. Proof Badges
        // ---------------------------------------------------------------------
        <Section>
            <h2 class="section-title">{t.t("home.proof.h2")}</h2>
            <ul class="badge-row">
                {BADGES
                    .into_iter()
                    .map(|key| view! { <li class="badge">{t.t(key)}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <p class="section-note">{t.t("home.proof.earlyAccess")}</p>
            <div class="link-row">
                <a href=t.href(Page::ForAgencies) class="text-link">{t.t("home.proof.agencyLink")}" →"</a>
                <a href=t.href(Page::ForBusinesses) class="text-link">{t.t("home.proof.smeLink")}" →"</a>
            </div>
        </Section>

        // ---------------------------------------------------------------------
        // 4. How It Works Preview
        // ---------------------------------------------------------------------
        <Section muted=true>
            <h2 class="section-title">{t.t("home.howItWorks.h2")}</h2>
            <ol class="step-grid">
                {STEPS
                    .into_iter()
                    .enumerate()
                    .map(|(i, (title, desc))| view! {
                        <li class="card step-card">
                            <span class="card-number">{i + 1}</span>
                            <h3 class="card-title">{t.t(title)}</h3>
                            <p class="card-desc">{t.t(desc)}</p>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ol>
            <div class="link-row">
                <a href=t.href(Page::HowItWorks) class="text-link">{t.t("home.howItWorks.link1")}" →"</a>
                <a href=t.href(Page::Technology) class="text-link">{t.t("home.howItWorks.link2")}" →"</a>
            </div>
        </Section>

        <CtaBlock t=t />
    }
}
