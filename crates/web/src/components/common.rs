// =============================================================================
// Campana Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Check List
// 2. Card Grid
// 3. Group Grid
// 4. JSON-LD Script
// =============================================================================

use leptos::prelude::*;
use serde_json::Value;

use crate::content::{Card, ItemGroup};
use crate::seo;

// -----------------------------------------------------------------------------
// 1. Check List
// -----------------------------------------------------------------------------

/// Bulleted list with check marks.
#[component]
pub fn CheckList(
    items: Vec<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = if class.is_empty() { "check-list".to_string() } else { format!("check-list {class}") };

    view! {
        <ul class=class>
            {items
                .into_iter()
                .map(|item| view! {
                    <li class="check-item">
                        <span class="check-icon" aria-hidden="true">"✓"</span>
                        <span>{item}</span>
                    </li>
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

// -----------------------------------------------------------------------------
// 2. Card Grid
// -----------------------------------------------------------------------------

/// Grid of title + description cards.
#[component]
pub fn CardGrid(
    cards: Vec<Card>,
    /// Prefix each card with its 1-based position.
    #[prop(optional)]
    numbered: bool,
) -> impl IntoView {
    view! {
        <div class="card-grid">
            {cards
                .into_iter()
                .enumerate()
                .map(|(i, card)| view! {
                    <div class="card">
                        {numbered.then(|| view! { <span class="card-number">{i + 1}</span> })}
                        <h3 class="card-title">{card.title}</h3>
                        <p class="card-desc">{card.desc}</p>
                    </div>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Group Grid
// -----------------------------------------------------------------------------

/// Titled groups of bullet points, optionally labelled `"{label} {n}"`.
#[component]
pub fn GroupGrid(
    groups: Vec<ItemGroup>,
    #[prop(optional, into)] label: String,
) -> impl IntoView {
    view! {
        <div class="group-grid">
            {groups
                .into_iter()
                .enumerate()
                .map(|(i, group)| {
                    let badge = (!label.is_empty()).then(|| format!("{} {}", label, i + 1));
                    view! {
                        <div class="card group-card">
                            {badge.map(|badge| view! { <span class="group-label">{badge}</span> })}
                            <h3 class="card-title">{group.title}</h3>
                            <CheckList items=group.items />
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. JSON-LD Script
// -----------------------------------------------------------------------------

/// Inline schema.org structured data.
#[component]
pub fn JsonLd(value: Value) -> impl IntoView {
    view! {
        <script type="application/ld+json" inner_html=seo::script_body(&value)></script>
    }
}
