// =============================================================================
// Campana Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Text input field with label.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional, into)] name: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <div class="form-field">
            <label class="form-label">
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                type=input_type
                name=name
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |e| {
                    value.set(event_target_value(&e));
                }
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area.
#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional)] rows: u32,
) -> impl IntoView {
    let rows = if rows == 0 { 5 } else { rows };

    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <textarea
                class="form-textarea"
                rows=rows
                prop:value=move || value.get()
                on:input=move |e| {
                    value.set(event_target_value(&e));
                }
            />
        </div>
    }
}
