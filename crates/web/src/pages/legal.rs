// =============================================================================
// Campana Web - Legal Pages
// =============================================================================

use leptos::prelude::*;

use crate::components::Section;
use crate::content::LegalSection;
use crate::i18n::Translator;

/// Privacy policy or terms of service, read from `namespace`.
#[component]
pub fn LegalPage(t: Translator, namespace: &'static str) -> impl IntoView {
    let sections: Vec<LegalSection> = t.raw(&format!("{namespace}.sections"));

    view! {
        <section class="page-hero">
            <div class="container narrow">
                <h1 class="page-title">{t.t(&format!("{namespace}.h1"))}</h1>
                <p class="section-note">{t.t(&format!("{namespace}.lastUpdated"))}</p>
            </div>
        </section>

        <Section class="legal">
            <div class="narrow">
                {sections
                    .into_iter()
                    .map(|section| view! {
                        <h2 class="legal-title">{section.title}</h2>
                        <p class="legal-text">{section.content}</p>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Section>
    }
}
