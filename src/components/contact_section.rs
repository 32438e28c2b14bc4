//! Contact call-to-action and the EmailJS-backed form.
//!
//! The form signal is owned here. Submits always cancel the native form
//! navigation, then go through the shared controller so the in-flight guard
//! and reset/feedback policy apply.

use contact::{ContactField, ContactForm, ContactSettings, EmailJsConfig, PendingSubmission};
use leptos::prelude::*;

use crate::profile::{Profile, Section};
use crate::state::contact::{feedback_class, feedback_message, submit_disabled, submit_label};
use crate::util::clock::page_clock;

#[component]
pub fn ContactSection() -> impl IntoView {
    let profile = expect_context::<&'static Profile>();
    let settings = expect_context::<ContactSettings>();
    let form = RwSignal::new(ContactForm::new(settings.policy));
    let emailjs = StoredValue::new(settings.emailjs);

    let field_value = move |field: ContactField| form.with(|f| f.state().field(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        let Some(name) = target_input_name(&ev) else {
            return;
        };
        let value = event_target_value(&ev);
        form.update(|f| {
            f.update_named(&name, value);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // Runs before any early return so the page never navigates.
        ev.prevent_default();
        let clock = page_clock();
        match form.try_update(|f| f.begin_submit(&clock)) {
            Some(Ok(pending)) => dispatch(form, emailjs, pending),
            Some(Err(rejected)) => {
                #[cfg(feature = "csr")]
                log::debug!("contact submit ignored: {rejected}");
                #[cfg(not(feature = "csr"))]
                let _ = rejected;
            }
            None => {}
        }
    };

    let single_line_inputs = [ContactField::Name, ContactField::Email]
        .into_iter()
        .map(move |field| {
            let input_type = if field == ContactField::Email { "email" } else { "text" };
            view! {
                <div class="contact-form__field">
                    <label class="contact-form__label" for=field.input_name()>
                        {field.label()}
                    </label>
                    <input
                        id=field.input_name()
                        class="contact-form__input"
                        type=input_type
                        name=field.input_name()
                        placeholder=format!("Your {}", field.label())
                        prop:value=move || field_value(field)
                        on:input=on_input
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Contact.id() class="section">
            <div class="container contact">
                <div>
                    <h2 class="contact__headline">
                        "LET'S BUILD" <br/> <span class="accent">"TOMORROW."</span>
                    </h2>
                    <p class="contact__blurb">
                        "Available for AI/ML opportunities and full-stack development collaborations."
                    </p>
                    <div class="contact__channels">
                        <a href=profile.mailto() class="contact__channel">
                            <span class="contact__channel-icon">"@"</span>
                            <span>{profile.email}</span>
                        </a>
                        <a href=profile.tel() class="contact__channel">
                            <span class="contact__channel-icon">"#"</span>
                            <span>{profile.phone}</span>
                        </a>
                    </div>
                </div>

                <form class="contact-form" novalidate=true on:submit=on_submit>
                    {single_line_inputs}
                    <div class="contact-form__field">
                        <label class="contact-form__label" for=ContactField::Message.input_name()>
                            {ContactField::Message.label()}
                        </label>
                        <textarea
                            id=ContactField::Message.input_name()
                            class="contact-form__input contact-form__input--area"
                            rows="2"
                            name=ContactField::Message.input_name()
                            placeholder="Tell me about your vision"
                            prop:value=move || field_value(ContactField::Message)
                            on:input=on_input
                        ></textarea>
                    </div>
                    <button class="contact-form__submit" type="submit" disabled=move || form.with(submit_disabled)>
                        {move || form.with(submit_label)}
                    </button>
                    {move || {
                        form.with(|f| {
                            feedback_message(f)
                                .map(|msg| {
                                    view! {
                                        <p class=feedback_class(f.status()) role="status">
                                            {msg}
                                        </p>
                                    }
                                })
                        })
                    }}
                </form>
            </div>
        </section>
    }
}

/// The `name` attribute of the element that fired `ev`.
#[cfg(feature = "csr")]
fn target_input_name(ev: &leptos::ev::Event) -> Option<String> {
    use wasm_bindgen::JsCast;

    ev.target()?.dyn_into::<web_sys::Element>().ok()?.get_attribute("name")
}

#[cfg(not(feature = "csr"))]
fn target_input_name(_ev: &leptos::ev::Event) -> Option<String> {
    None
}

/// Send `pending` and record the outcome on `form`.
fn dispatch(form: RwSignal<ContactForm>, emailjs: StoredValue<EmailJsConfig>, pending: PendingSubmission) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let config = emailjs.get_value();
        let outcome = crate::net::emailjs::send_contact(&config, &pending.params).await;
        match &outcome {
            Ok(()) => log::info!("contact message delivered"),
            Err(err) => log::warn!("contact delivery failed: {err}"),
        }
        form.update(|f| {
            f.complete(pending.ticket, outcome);
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = emailjs;
        form.update(|f| {
            f.complete(pending.ticket, Err(contact::DeliveryError::Unavailable));
        });
    }
}
