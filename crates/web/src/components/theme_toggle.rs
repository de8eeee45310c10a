// =============================================================================
// Campana Web - Theme Toggle
// =============================================================================

use leptos::prelude::*;

use crate::state::AppState;

/// Light/dark switch; the choice survives reloads.
#[component]
pub fn ThemeToggle(#[prop(into)] label: String) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let dark_mode = app_state.dark_mode;

    let toggle_dark = move |_| {
        app_state.toggle_dark_mode();
    };

    view! {
        <button class="btn-icon theme-toggle" on:click=toggle_dark aria-label=label.clone() title=label>
            {move || if dark_mode.get() { "☀" } else { "☾" }}
        </button>
    }
}
