// =============================================================================
// Campana Web - Footer Component
// =============================================================================
// Global footer shown on all pages
// =============================================================================

use leptos::prelude::*;

use crate::i18n::Translator;
use crate::routing::Page;

/// Footer columns: title key, then `(label key, page)` links. Links
/// without a page are placeholders for sections that do not exist yet.
fn columns() -> [(&'static str, Vec<(&'static str, Option<Page>)>); 4] {
    [
        (
            "footer.product",
            vec![
                ("nav.howItWorks", Some(Page::HowItWorks)),
                ("nav.technology", Some(Page::Technology)),
                ("nav.pricing", Some(Page::Pricing)),
                ("footer.integrations", None),
                ("footer.roadmap", None),
                ("footer.changelog", None),
            ],
        ),
        (
            "footer.useCases",
            vec![
                ("nav.forAgencies", Some(Page::ForAgencies)),
                ("nav.forBusinesses", Some(Page::ForBusinesses)),
                ("footer.caseStudies", None),
            ],
        ),
        (
            "footer.resources",
            vec![
                ("nav.blog", Some(Page::Blog)),
                ("nav.faq", Some(Page::Faq)),
                ("footer.helpCenter", None),
                ("footer.apiDocs", None),
            ],
        ),
        (
            "footer.company",
            vec![
                ("nav.about", Some(Page::About)),
                ("nav.contact", Some(Page::Contact)),
                ("footer.careers", None),
                ("footer.privacyPolicy", Some(Page::Privacy)),
                ("footer.termsOfService", Some(Page::Terms)),
            ],
        ),
    ]
}

/// Site footer.
#[component]
pub fn Footer(t: Translator) -> impl IntoView {
    let columns = columns()
        .into_iter()
        .map(|(title_key, links)| {
            let links = links
                .into_iter()
                .map(|(key, page)| {
                    let href = page.map_or_else(|| "#".to_string(), |page| t.href(page));
                    view! { <a href=href class="footer-link">{t.t(key)}</a> }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="footer-link-col">
                    <h5 class="footer-col-title">{t.t(title_key)}</h5>
                    {links}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="site-footer">
            <div class="footer-main">
                // Brand Column
                <div class="footer-brand-col">
                    <a href=t.href(Page::Home) class="footer-logo">"Campana"</a>
                    <p class="footer-tagline">{t.t("footer.tagline")}</p>
                </div>

                // Links Columns
                <div class="footer-links-grid">
                    {columns}
                </div>
            </div>

            <div class="footer-divider"></div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">{t.t("footer.copyright")}</p>
                <div class="footer-social-row">
                    <a href="https://www.linkedin.com/company/campana-io" target="_blank" rel="noopener" class="social-link">"LinkedIn"</a>
                    <a href="https://twitter.com/campana_io" target="_blank" rel="noopener" class="social-link">"Twitter"</a>
                </div>
            </div>
        </footer>
    }
}
