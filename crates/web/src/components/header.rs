// =============================================================================
// Campana Web - Site Header
// =============================================================================
// Desktop navigation with a solutions dropdown, language and theme controls.
// Mobile-responsive with hamburger menu and slide-out drawer.
// =============================================================================

use leptos::prelude::*;

use crate::components::{LanguageSwitcher, ThemeToggle};
use crate::i18n::Translator;
use crate::routing::Page;

/// `(page, label key)` of the drawer links, in display order.
const MOBILE_LINKS: [(Page, &str); 7] = [
    (Page::HowItWorks, "nav.howItWorks"),
    (Page::Technology, "nav.technology"),
    (Page::Pricing, "nav.pricing"),
    (Page::ForAgencies, "nav.forAgencies"),
    (Page::ForBusinesses, "nav.forBusinesses"),
    (Page::Blog, "nav.blog"),
    (Page::Faq, "nav.faq"),
];

/// Site header.
#[component]
pub fn Header(t: Translator) -> impl IntoView {
    // Mobile menu state
    let menu_open = RwSignal::new(false);
    let solutions_open = RwSignal::new(false);

    let close_all = move |_| {
        menu_open.set(false);
        solutions_open.set(false);
    };

    let mobile_links = MOBILE_LINKS
        .into_iter()
        .map(|(page, key)| {
            view! {
                <a href=t.href(page) class="mobile-nav-link" on:click=close_all>{t.t(key)}</a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header">
            <a href="#main-content" class="skip-link">{t.t("nav.skipToContent")}</a>

            <nav class="site-nav">
                // Logo (always visible)
                <a href=t.href(Page::Home) class="nav-logo" aria-label=t.t("nav.home")>"Campana"</a>

                // Desktop nav links (hidden on mobile)
                <div class="nav-links desktop-only">
                    <a href=t.href(Page::HowItWorks) class="nav-link">{t.t("nav.howItWorks")}</a>
                    <a href=t.href(Page::Technology) class="nav-link">{t.t("nav.technology")}</a>
                    <a href=t.href(Page::Pricing) class="nav-link">{t.t("nav.pricing")}</a>

                    // Solutions dropdown
                    <div class="nav-dropdown">
                        <button
                            class="nav-link nav-dropdown-trigger"
                            aria-haspopup="true"
                            aria-expanded=move || solutions_open.get().to_string()
                            on:click=move |_| solutions_open.update(|v| *v = !*v)
                        >
                            {t.t("nav.solutions")}
                            <span class=move || if solutions_open.get() { "chevron open" } else { "chevron" }>"▾"</span>
                        </button>
                        <div
                            class="nav-dropdown-menu"
                            class:open=move || solutions_open.get()
                            hidden=move || !solutions_open.get()
                        >
                            <a href=t.href(Page::ForAgencies) class="dropdown-item" on:click=close_all>
                                {t.t("nav.forAgencies")}
                            </a>
                            <a href=t.href(Page::ForBusinesses) class="dropdown-item" on:click=close_all>
                                {t.t("nav.forBusinesses")}
                            </a>
                        </div>
                    </div>

                    <a href=t.href(Page::Blog) class="nav-link">{t.t("nav.blog")}</a>
                </div>

                // Desktop right side (hidden on mobile)
                <div class="nav-right desktop-only">
                    <LanguageSwitcher current=t.locale() label=t.t("nav.language") />
                    <ThemeToggle label=t.t("nav.toggleTheme") />
                    <a href=t.href(Page::Contact) class="nav-link">{t.t("nav.login")}</a>
                    <a href=t.href(Page::Pricing) class="btn btn-primary nav-cta">{t.t("nav.startTrial")}</a>
                </div>

                // Hamburger button (mobile only)
                <button
                    class="hamburger-btn mobile-only"
                    aria-label=t.t("nav.toggleMenu")
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|v| *v = !*v)
                >
                    <span class=move || if menu_open.get() { "hamburger-line open line-1" } else { "hamburger-line line-1" }></span>
                    <span class=move || if menu_open.get() { "hamburger-line open line-2" } else { "hamburger-line line-2" }></span>
                    <span class=move || if menu_open.get() { "hamburger-line open line-3" } else { "hamburger-line line-3" }></span>
                </button>
            </nav>

            // Mobile backdrop (closes menu on tap)
            <div
                class=move || if menu_open.get() { "mobile-backdrop visible" } else { "mobile-backdrop" }
                on:click=move |_| menu_open.set(false)
            ></div>

            // Mobile drawer
            <div class=move || if menu_open.get() { "mobile-drawer open" } else { "mobile-drawer" }>
                <nav class="drawer-nav">
                    {mobile_links}
                </nav>
                <div class="drawer-footer">
                    <LanguageSwitcher current=t.locale() label=t.t("nav.language") />
                    <ThemeToggle label=t.t("nav.toggleTheme") />
                    <a href=t.href(Page::Contact) class="mobile-nav-link" on:click=close_all>{t.t("nav.login")}</a>
                    <a href=t.href(Page::Pricing) class="btn btn-primary" on:click=close_all>{t.t("nav.startTrial")}</a>
                </div>
            </div>
        </header>
    }
}
