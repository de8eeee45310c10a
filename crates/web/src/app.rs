// =============================================================================
// Campana Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. App Component
// 2. Site Shell (path resolution)
// 3. Page Dispatch
// =============================================================================

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::Layout;
use crate::config::SiteConfig;
use crate::i18n::{Catalog, Locale, Translator};
use crate::pages::{
    AboutPage, BlogPage, BlogPostPage, ContactPage, FaqPage, ForAgenciesPage, ForBusinessesPage,
    HomePage, HowItWorksPage, LegalPage, NotFoundPage, PricingPage, SecurityPage, TechnologyPage,
};
use crate::routing::{self, Page};
use crate::seo;
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 1. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App(config: SiteConfig, catalog: Catalog) -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new(config, catalog));

    view! {
        <Router>
            <Routes fallback=|| view! { <SiteShell /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/en" /> } />
                // Localized segments are resolved by the shell
                <Route path=path!("/*any") view=SiteShell />
            </Routes>
        </Router>
    }
}

// -----------------------------------------------------------------------------
// 2. Site Shell
// -----------------------------------------------------------------------------

/// Resolves the current pathname and renders the page inside the layout.
#[component]
fn SiteShell() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let location = use_location();

    move || {
        let pathname = location.pathname.get();
        render_path(&app_state, &pathname)
    }
}

fn render_path(app_state: &AppState, pathname: &str) -> AnyView {
    match routing::resolve(pathname) {
        Ok(route) => {
            log::debug!("Rendering {:?} [{}]", route.page, route.locale.code());
            let t = app_state.translator(route.locale);
            let meta = seo::page_meta(&app_state.config, &route, &t);
            let page = page_view(route.page, t);
            view! { <Layout t=t meta=meta>{page}</Layout> }.into_any()
        }
        Err(e) => {
            if e.is_not_found() {
                log::info!("{e}");
            } else {
                log::error!("Cannot resolve {pathname}: {e}");
            }
            let t = app_state.translator(fallback_locale(pathname));
            let meta = seo::not_found_meta(&app_state.config, &t);
            view! {
                <Layout t=t meta=meta>
                    <NotFoundPage t=t />
                </Layout>
            }
            .into_any()
        }
    }
}

/// Locale of the first path segment when it names one, else the default.
fn fallback_locale(pathname: &str) -> Locale {
    pathname
        .trim_start_matches('/')
        .split('/')
        .next()
        .and_then(Locale::from_code)
        .unwrap_or_default()
}

// -----------------------------------------------------------------------------
// 3. Page Dispatch
// -----------------------------------------------------------------------------

fn page_view(page: Page, t: Translator) -> AnyView {
    let namespace = page.namespace();
    match page {
        Page::Home => view! { <HomePage t=t /> }.into_any(),
        Page::HowItWorks => view! { <HowItWorksPage t=t /> }.into_any(),
        Page::Technology => view! { <TechnologyPage t=t /> }.into_any(),
        Page::Pricing => view! { <PricingPage t=t /> }.into_any(),
        Page::ForAgencies => view! { <ForAgenciesPage t=t /> }.into_any(),
        Page::ForBusinesses => view! { <ForBusinessesPage t=t /> }.into_any(),
        Page::Security => view! { <SecurityPage t=t /> }.into_any(),
        Page::Faq => view! { <FaqPage t=t /> }.into_any(),
        Page::Blog => view! { <BlogPage t=t /> }.into_any(),
        Page::BlogPost(slug) => view! { <BlogPostPage t=t slug=slug /> }.into_any(),
        Page::About => view! { <AboutPage t=t /> }.into_any(),
        Page::Contact => view! { <ContactPage t=t /> }.into_any(),
        Page::Privacy | Page::Terms => view! { <LegalPage t=t namespace=namespace /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_builds() {
        let owner = Owner::new();
        owner.with(|| {
            let catalog = Catalog::embedded().unwrap();
            provide_context(AppState::with_preferences(SiteConfig::default(), catalog, true, None));
            for locale in Locale::ALL {
                let t = catalog.translator(locale);
                for page in Page::STATIC {
                    let _view = page_view(page, t);
                }
                let _view = page_view(Page::BlogPost("fresh-news".into()), t);
                let _view = page_view(Page::BlogPost("not-a-sample".into()), t);
            }
        });
    }

    #[test]
    fn test_fallback_locale() {
        assert_eq!(fallback_locale("/pl/nie-ma"), Locale::Pl);
        assert_eq!(fallback_locale("/en/missing"), Locale::En);
        assert_eq!(fallback_locale("/de/pricing"), Locale::En);
        assert_eq!(fallback_locale(""), Locale::En);
    }
}
