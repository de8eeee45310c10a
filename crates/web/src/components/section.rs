// =============================================================================
// Campana Web - Section Container
// =============================================================================

use leptos::prelude::*;

/// Full-width page band with a centered content column.
#[component]
pub fn Section(
    #[prop(optional, into)] class: String,
    /// Shaded background, used to alternate bands.
    #[prop(optional)]
    muted: bool,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "section".to_string()
    } else {
        format!("section {class}")
    };

    view! {
        <section class=class class:section-muted=muted>
            <div class="container">
                {children()}
            </div>
        </section>
    }
}
