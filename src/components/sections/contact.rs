use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::AnimationKind;
use crate::components::animated::Animated;
use crate::components::section_heading::SectionHeading;
use crate::config::{CONTACT_SUBMIT_DELAY_MS, CONTACT_SUCCESS_RESET_MS};
use crate::contact::{error_for, ContactError, ContactField, ContactForm};
use crate::i18n::use_language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    Editing,
    Sending,
    Sent,
}

fn input_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    field: ContactField,
    label: AttrValue,
    placeholder: AttrValue,
    value: AttrValue,
    #[prop_or_default]
    multiline: bool,
    #[prop_or_default]
    input_type: Option<AttrValue>,
    error: Option<ContactError>,
    oninput: Callback<(ContactField, String)>,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                oninput.emit((field, value));
            }
        })
    };
    let invalid = props.error.is_some();

    html! {
        <label class={classes!("form-field", invalid.then_some("invalid"))}>
            <span class="form-label">{ props.label.clone() }</span>
            {
                if props.multiline {
                    html! {
                        <textarea
                            rows="5"
                            placeholder={props.placeholder.clone()}
                            value={props.value.clone()}
                            oninput={oninput}
                        />
                    }
                } else {
                    html! {
                        <input
                            type={props.input_type.clone().unwrap_or(AttrValue::Static("text"))}
                            placeholder={props.placeholder.clone()}
                            value={props.value.clone()}
                            oninput={oninput}
                        />
                    }
                }
            }
            {
                if let Some(error) = &props.error {
                    html! { <span class="form-error">{ error.to_string() }</span> }
                } else {
                    html! {}
                }
            }
        </label>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let lang = use_language();
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<ContactError>::new);
    let attempted = use_state_eq(|| false);
    let state = use_state_eq(|| SubmitState::Editing);

    let oninput = {
        let form = form.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            // Only nag once the user has tried to submit
            if *attempted {
                errors.set(next.validate().err().unwrap_or_default());
            }
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let attempted = attempted.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state != SubmitState::Editing {
                return;
            }
            attempted.set(true);
            if let Err(found) = form.validate() {
                info!("Contact form rejected with {} error(s)", found.len());
                errors.set(found);
                return;
            }
            errors.set(Vec::new());
            state.set(SubmitState::Sending);

            let payload = (*form).clone();
            let form = form.clone();
            let attempted = attempted.clone();
            let state = state.clone();
            spawn_local(async move {
                TimeoutFuture::new(CONTACT_SUBMIT_DELAY_MS).await;
                match serde_json::to_string(&payload) {
                    Ok(json) => info!("Contact form submitted: {}", json),
                    Err(err) => warn!("Failed to serialize contact form: {}", err),
                }
                form.set(ContactForm::default());
                attempted.set(false);
                state.set(SubmitState::Sent);

                TimeoutFuture::new(CONTACT_SUCCESS_RESET_MS).await;
                state.set(SubmitState::Editing);
            });
        })
    };

    let field = |field: ContactField, label: &'static str, placeholder: &'static str| {
        html! {
            <Field
                field={field}
                label={lang.t(label)}
                placeholder={lang.t(placeholder)}
                value={form.get(field).to_string()}
                multiline={field == ContactField::Message}
                input_type={(field == ContactField::Email).then_some(AttrValue::Static("email"))}
                error={error_for(&errors, field).cloned()}
                oninput={oninput.clone()}
            />
        }
    };

    let sending = *state == SubmitState::Sending;

    let body = if *state == SubmitState::Sent {
        html! {
            <div class="contact-success">
                <div class="success-icon">{"✓"}</div>
                <h3>{ lang.t("contact.success.title") }</h3>
                <p class="card-text">{ lang.t("contact.success.message") }</p>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" onsubmit={onsubmit} novalidate={true}>
                <div class="form-row">
                    { field(ContactField::Name, "contact.form.name", "contact.form.namePlaceholder") }
                    { field(ContactField::Email, "contact.form.email", "contact.form.emailPlaceholder") }
                </div>
                { field(ContactField::Subject, "contact.form.subject", "contact.form.subjectPlaceholder") }
                { field(ContactField::Message, "contact.form.message", "contact.form.messagePlaceholder") }
                <button type="submit" class="button button-primary" disabled={sending}>
                    {
                        if sending {
                            lang.t("contact.form.sending")
                        } else {
                            lang.t("contact.form.submit")
                        }
                    }
                </button>
            </form>
        }
    };

    let info_kind = if lang.is_rtl() {
        AnimationKind::SlideRight
    } else {
        AnimationKind::SlideLeft
    };

    html! {
        <section id="contact" class="section">
            <SectionHeading
                subtitle={lang.t("contact.subtitle")}
                title={lang.t("contact.title")}
                description={lang.t("contact.description")}
            />
            <div class="contact-grid">
                <Animated key="form" kind="fade-in" delay={0.3} class="contact-card card">
                    { body }
                </Animated>
                // Keyed on the language so a switch replays the slide from the mirrored side
                <Animated key={lang.language.code()} kind={info_kind} delay={0.4} class="contact-info">
                    <div class="info-item">
                        <span class="info-label">{"Email"}</span>
                        <a href="mailto:hello@lovabletech.com" class="link">{"hello@lovabletech.com"}</a>
                    </div>
                    <div class="info-item">
                        <span class="info-label">{"Phone"}</span>
                        <span dir="ltr">{"+1 (555) 123-4567"}</span>
                    </div>
                    <div class="info-item">
                        <span class="info-label">{"Office"}</span>
                        <span>{"123 Innovation Street, San Francisco, CA"}</span>
                    </div>
                </Animated>
            </div>
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 2.5rem;
                }
                @media (max-width: 900px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.25rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .form-label {
                    font-weight: 600;
                    font-size: 0.9rem;
                }
                .form-field input,
                .form-field textarea {
                    padding: 0.7rem 0.9rem;
                    border-radius: 0.6rem;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    color: inherit;
                    font: inherit;
                }
                .form-field.invalid input,
                .form-field.invalid textarea {
                    border-color: var(--danger);
                }
                .form-error {
                    color: var(--danger);
                    font-size: 0.85rem;
                }
                .contact-form button[disabled] {
                    opacity: 0.7;
                    cursor: wait;
                }
                .contact-success {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    padding: 2.5rem 0;
                }
                .success-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    color: var(--primary);
                    background: var(--primary-soft);
                    margin-bottom: 1rem;
                }
                .contact-info {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .info-item {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }
                .info-label {
                    font-weight: 600;
                    color: var(--muted);
                }
                "#}
            </style>
        </section>
    }
}
