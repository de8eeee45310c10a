// =============================================================================
// Campana Web - Technology Page
// =============================================================================
// Table of Contents:
// 1. Pillars and Dashboard
// 2. Thompson Sampling
// 3. Pipeline and Guardrails
// 4. Copywriting, Reasoning, Cross-Client Learning
// 5. Infrastructure
// =============================================================================

use leptos::prelude::*;

use crate::components::{CardGrid, CheckList, CtaBlock, GroupGrid, Section};
use crate::content::{Card, InfraRow, ItemGroup, ProblemSolution};
use crate::i18n::Translator;

/// Splits `"Label: text"` into its bold label and the rest.
fn split_label(item: &str) -> (Option<&str>, &str) {
    match item.split_once(": ") {
        Some((label, text)) => (Some(label), text),
        None => (None, item),
    }
}

/// Deep dive into the optimizer, guardrails and stack.
#[component]
pub fn TechnologyPage(t: Translator) -> impl IntoView {
    let pillars: Vec<Card> = t.raw("technology.pillars");
    let dashboard: Vec<Card> = t.raw("technology.dashboardFeatures");
    let why_matters: Vec<ProblemSolution> = t.raw("technology.whyMattersItems");
    let stages: Vec<Card> = t.raw("technology.stages");
    let layers: Vec<ItemGroup> = t.raw("technology.layers");
    let infra: Vec<InfraRow> = t.raw("technology.infraItems");
    let problem_label = t.t("common.problem");
    let solution_label = t.t("common.withCampana");

    view! {
        <section class="page-hero">
            <div class="container">
                <h1 class="page-title">{t.t("technology.h1")}</h1>
                <p class="page-sub">{t.t("technology.intro")}</p>
                <p class="page-sub">{t.t("technology.introSub")}</p>
            </div>
        </section>

        // 1. Pillars and Dashboard
        <Section>
            <h2 class="section-title">{t.t("technology.pillarsH2")}</h2>
            <CardGrid cards=pillars />
        </Section>
        <Section muted=true>
            <h2 class="section-title">{t.t("technology.dashboardH2")}</h2>
            <p class="section-lead">{t.t("technology.dashboardIntro")}</p>
            <CardGrid cards=dashboard />
        </Section>

        // 2. Thompson Sampling
        <Section>
            <h2 class="section-title">{t.t("technology.optimizationH2")}</h2>
            <p class="section-lead">{t.t("technology.optimizationIntro")}</p>
            <p class="section-text"><strong>{t.t("technology.optimizationWhat")}</strong></p>
            <CheckList items=t.list("technology.optimizationPoints") />
            <h3 class="subsection-title">{t.t("technology.whyMattersH3")}</h3>
            <div class="compare-grid">
                {why_matters
                    .into_iter()
                    .map(|item| view! {
                        <div class="card compare-card">
                            <p class="compare-before">
                                <strong>{problem_label.clone()}": "</strong>{item.problem}
                            </p>
                            <p class="compare-after">
                                <strong>{solution_label.clone()}": "</strong>{item.solution}
                            </p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Section>

        // 3. Pipeline and Guardrails
        <Section muted=true>
            <h2 class="section-title">{t.t("technology.pipelineH2")}</h2>
            <p class="section-lead">{t.t("technology.pipelineIntro")}</p>
            <CardGrid cards=stages numbered=true />
        </Section>
        <Section>
            <h2 class="section-title">{t.t("technology.guardrailsH2")}</h2>
            <p class="section-lead">{t.t("technology.guardrailsIntro")}</p>
            <GroupGrid groups=layers label=t.t("common.layer") />
        </Section>

        // 4. Copywriting, Reasoning, Cross-Client Learning
        <Section muted=true>
            <h2 class="section-title">{t.t("technology.copywritingH2")}</h2>
            <p class="section-lead">{t.t("technology.copywritingIntro")}</p>
            <div class="two-column">
                <div class="card">
                    <h3 class="card-title">{t.t("technology.aiCopyTitle")}</h3>
                    <CheckList items=t.list("technology.aiCopyItems") />
                </div>
                <div class="card">
                    <h3 class="card-title">{t.t("technology.strategyTitle")}</h3>
                    <CheckList items=t.list("technology.strategyItems") />
                </div>
            </div>
        </Section>
        <Section>
            <h2 class="section-title">{t.t("technology.reasoningH2")}</h2>
            <p class="section-lead">{t.t("technology.reasoningIntro")}</p>
            <ul class="label-list">
                {t.list("technology.reasoningItems")
                    .into_iter()
                    .map(|item| {
                        let (label, text) = split_label(&item);
                        let label = label.map(|l| format!("{l}: "));
                        let text = text.to_string();
                        view! { <li><strong>{label}</strong>{text}</li> }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <p class="section-note">{t.t("technology.reasoningClose")}</p>
        </Section>
        <Section muted=true>
            <h2 class="section-title">{t.t("technology.crossClientH2")}</h2>
            <p class="section-lead">{t.t("technology.crossClientIntro")}</p>
            <CheckList items=t.list("technology.crossClientItems") />
            <p class="section-note">{t.t("technology.crossClientClose")}</p>
        </Section>

        // 5. Infrastructure
        <Section>
            <h2 class="section-title">{t.t("technology.infraH2")}</h2>
            <p class="section-lead">{t.t("technology.infraIntro")}</p>
            <table class="infra-table">
                <thead>
                    <tr>
                        <th>{t.t("common.tableComponent")}</th>
                        <th>{t.t("common.tableTechnology")}</th>
                        <th>{t.t("common.tableWhy")}</th>
                    </tr>
                </thead>
                <tbody>
                    {infra
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td>{row.component}</td>
                                <td>{row.tech}</td>
                                <td>{row.why}</td>
                            </tr>
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
            <p class="section-note">{t.t("technology.infraClose")}</p>
        </Section>

        <CtaBlock t=t />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_label() {
        assert_eq!(split_label("Why: budget moved"), (Some("Why"), "budget moved"));
        assert_eq!(split_label("plain text"), (None, "plain text"));
    }
}
