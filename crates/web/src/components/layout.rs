// =============================================================================
// Campana Web - Layout Components
// =============================================================================

use leptos::prelude::*;

use crate::components::{CookieBanner, Footer, Header, PageHead};
use crate::i18n::Translator;
use crate::seo::PageMeta;
use crate::state::AppState;

/// Main application shell: head tags, header, page content, footer and the
/// cookie banner.
#[component]
pub fn Layout(t: Translator, meta: PageMeta, children: Children) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let dark_mode = app_state.dark_mode;

    view! {
        <PageHead meta=meta />
        <div class="layout" class:dark=move || dark_mode.get()>
            <Header t=t />
            <main id="main-content" class="layout-content">
                {children()}
            </main>
            <Footer t=t />
            <CookieBanner t=t />
        </div>
    }
}
