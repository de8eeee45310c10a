// =============================================================================
// Campana Web - FAQ Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{CtaBlock, JsonLd, Section};
use crate::content::faq::{filter_by_category, FaqCategory, FaqItem};
use crate::i18n::Translator;
use crate::seo;

/// Category tabs over an accordion of questions.
#[component]
pub fn FaqPage(t: Translator) -> impl IntoView {
    let items: Vec<FaqItem> = t.raw("faq.questions");
    // Structured data lists every question, whatever tab is open
    let structured = seo::faq_json_ld(&items);
    let items = StoredValue::new(items);
    let active = RwSignal::new(FaqCategory::default());

    let tabs = FaqCategory::ALL
        .into_iter()
        .map(|category| {
            let label = t.t(category.label_key());
            view! {
                <button
                    type="button"
                    role="tab"
                    class="faq-tab"
                    class:active=move || active.get() == category
                    aria-selected=move || (active.get() == category).to_string()
                    on:click=move |_| active.set(category)
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="page-hero">
            <div class="container">
                <h1 class="page-title">{t.t("faq.h1")}</h1>
            </div>
        </section>

        <Section>
            <div class="faq-tabs" role="tablist">{tabs}</div>
            <div class="faq-list">
                {move || {
                    items
                        .with_value(|all| filter_by_category(all, active.get()))
                        .into_iter()
                        .map(|item| view! { <FaqEntry item=item /> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Section>

        <CtaBlock t=t />
        <JsonLd value=structured />
    }
}

/// Single accordion item; starts closed.
#[component]
fn FaqEntry(item: FaqItem) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="faq-item" class:open=move || open.get()>
            <button
                type="button"
                class="faq-question"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span>{item.q}</span>
                <span class="faq-chevron" aria-hidden="true">{move || if open.get() { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" hidden=move || !open.get()>
                <p>{item.a}</p>
            </div>
        </div>
    }
}
