// =============================================================================
// Campana Web - Contact Page
// =============================================================================
// There is no backend: a valid form opens the visitor's mail client with a
// prefilled message.
// =============================================================================

use leptos::prelude::*;

use crate::components::{Section, TextArea, TextInput};
use crate::content::contact::{ContactKind, ContactProblem, ContactRequest, CONTACT_EMAIL};
use crate::i18n::Translator;
use crate::utils;

/// Contact form and demo booking panel.
#[component]
pub fn ContactPage(t: Translator) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let kind = RwSignal::new(ContactKind::default());
    let problem = RwSignal::new(None::<ContactProblem>);
    let sent = RwSignal::new(false);

    let on_submit = move |e: leptos::ev::SubmitEvent| {
        e.prevent_default();
        let request = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            company: company.get_untracked(),
            kind: kind.get_untracked(),
            message: message.get_untracked(),
        };
        match request.validate() {
            Ok(()) => {
                problem.set(None);
                sent.set(true);
                log::info!("Opening mail client for {} enquiry", request.kind.as_str());
                utils::navigate_to(&request.mailto());
            }
            Err(p) => {
                log::debug!("Contact form rejected: {p:?}");
                sent.set(false);
                problem.set(Some(p));
            }
        }
    };

    let mailto = format!("mailto:{CONTACT_EMAIL}");

    view! {
        <section class="page-hero">
            <div class="container">
                <h1 class="page-title">{t.t("contact.h1")}</h1>
                <p class="page-sub">{t.t("contact.sub")}</p>
            </div>
        </section>

        <Section>
            <div class="contact-grid">
                <form class="contact-form" novalidate=true on:submit=on_submit>
                    {move || problem.get().map(|p| view! {
                        <div class="form-error-banner" role="alert">{t.t(p.message_key())}</div>
                    })}

                    <TextInput label=t.t("contact.formName") value=name name="name" required=true />
                    <TextInput
                        label=t.t("contact.formEmail")
                        value=email
                        name="email"
                        input_type="email"
                        required=true
                    />
                    <TextInput label=t.t("contact.formCompany") value=company name="company" />

                    <div class="form-field">
                        <label class="form-label">{t.t("contact.formType")}</label>
                        <select
                            class="form-input"
                            on:change=move |e| {
                                let value = event_target_value(&e);
                                kind.set(if value == ContactKind::Business.as_str() {
                                    ContactKind::Business
                                } else {
                                    ContactKind::Agency
                                });
                            }
                        >
                            <option value=ContactKind::Agency.as_str()>{t.t("contact.formAgency")}</option>
                            <option value=ContactKind::Business.as_str()>{t.t("contact.formBusiness")}</option>
                        </select>
                    </div>

                    <TextArea label=t.t("contact.formMessage") value=message rows=5 />

                    <button type="submit" class="btn btn-primary btn-block">{t.t("contact.formSubmit")}</button>
                    <p class="form-success" hidden=move || !sent.get()>{t.t("contact.sent")}</p>
                </form>

                <aside class="contact-aside">
                    <div class="card">
                        <h2 class="card-title">{t.t("contact.demoH2")}</h2>
                        <p class="card-desc">{t.t("contact.demoDesc")}</p>
                        <div class="media-placeholder">{t.t("common.bookingPlaceholder")}</div>
                    </div>
                    <div class="card">
                        <a href=mailto class="text-link">{t.t("contact.email")}</a>
                        <p class="card-desc">{t.t("contact.responseTime")}</p>
                    </div>
                </aside>
            </div>
        </Section>
    }
}
