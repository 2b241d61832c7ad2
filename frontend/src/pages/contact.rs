use gloo_timers::future::TimeoutFuture;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::thunder_border::ThunderBorder;
use crate::config::{CONTACT_SENDING_MS, CONTACT_SUCCESS_MS};
use crate::cursor::interactive::use_interactive_target;
use crate::layout::footer::SocialIcon;

pub const CONTACT_EMAIL: &str = "hello@elite8.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_ADDRESS: &str = "123 Design Street, Creative District";

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "your.email@example.com",
            FormField::Subject => "How can we help you?",
            FormField::Message => "Tell us about your project...",
        }
    }

    fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn with(&self, field: FormField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Name => next.name = value,
            FormField::Email => next.email = value,
            FormField::Subject => next.subject = value,
            FormField::Message => next.message = value,
        }
        next
    }

    /// Every field must be non-blank and the email must look like one.
    /// Reports the first problem in form order.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in FormField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(FormError::MissingField(field.label()));
            }
        }
        if !EMAIL.is_match(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

const MAIL_ICON: &str = "M21.75 6.75v10.5a2.25 2.25 0 01-2.25 2.25h-15a2.25 2.25 0 01-2.25-2.25V6.75m19.5 0A2.25 2.25 0 0019.5 4.5h-15a2.25 2.25 0 00-2.25 2.25m19.5 0v.243a2.25 2.25 0 01-1.07 1.916l-7.5 4.615a2.25 2.25 0 01-2.36 0L3.32 8.91a2.25 2.25 0 01-1.07-1.916V6.75";
const PHONE_ICON: &str = "M2.25 6.75c0 8.284 6.716 15 15 15h2.25a2.25 2.25 0 002.25-2.25v-1.372c0-.516-.351-.966-.852-1.091l-4.423-1.106c-.44-.11-.902.055-1.173.417l-.97 1.293c-.282.376-.769.542-1.21.38a12.035 12.035 0 01-7.143-7.143c-.162-.441.004-.928.38-1.21l1.293-.97c.363-.271.527-.734.417-1.173L6.963 3.102a1.125 1.125 0 00-1.091-.852H4.5A2.25 2.25 0 002.25 4.5v2.25z";
const PIN_ICON: [&str; 2] = [
    "M15 10.5a3 3 0 11-6 0 3 3 0 016 0z",
    "M19.5 10.5c0 7.142-7.5 11.25-7.5 11.25S4.5 17.642 4.5 10.5a7.5 7.5 0 1115 0z",
];
const CHECK_ICON: &str = "M9 12.75L11.25 15 15 9.75M21 12a9 9 0 11-18 0 9 9 0 0118 0z";

fn outline_icon(paths: &[&'static str], class: &'static str) -> Html {
    html! {
        <svg class={class} fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
            { for paths.iter().map(|d| html! {
                <path stroke-linecap="round" stroke-linejoin="round" d={*d} />
            }) }
        </svg>
    }
}

fn detail(title: &'static str, value: &'static str, icon: &[&'static str]) -> Html {
    html! {
        <div class="contact-detail">
            <div class="detail-icon">{ outline_icon(icon, "icon-sm") }</div>
            <div>
                <h3>{title}</h3>
                <p>{value}</p>
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(FormStatus::default);
    let error = use_state(|| None::<FormError>);
    let mounted = use_mut_ref(|| true);
    let submit_hover = use_interactive_target();

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    *mounted.borrow_mut() = false;
                }
            },
            (),
        );
    }

    let update = |field: FormField| {
        let form = form.clone();
        let error = error.clone();
        move |value: String| {
            form.set(form.with(field, value));
            error.set(None);
        }
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let error = error.clone();
        let mounted = mounted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status != FormStatus::Idle {
                return;
            }
            if let Err(err) = form.validate() {
                log::warn!("Contact form rejected: {}", err);
                error.set(Some(err));
                return;
            }

            // No backend: pretend to send, show the thank-you, then reset.
            status.set(FormStatus::Sending);
            let form = form.clone();
            let status = status.clone();
            let mounted = mounted.clone();
            spawn_local(async move {
                TimeoutFuture::new(CONTACT_SENDING_MS).await;
                if !*mounted.borrow() {
                    return;
                }
                status.set(FormStatus::Sent);
                log::info!("Contact form sent");

                TimeoutFuture::new(CONTACT_SUCCESS_MS).await;
                if !*mounted.borrow() {
                    return;
                }
                form.set(ContactForm::default());
                status.set(FormStatus::Idle);
            });
        })
    };

    let field_view = |field: FormField| -> Html {
        let update = update(field);
        let value = form.get(field).to_string();
        let control = if field == FormField::Message {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                update(input.value());
            });
            html! {
                <textarea
                    id={field.id()}
                    name={field.id()}
                    rows="5"
                    placeholder={field.placeholder()}
                    {value}
                    {oninput}
                />
            }
        } else {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                update(input.value());
            });
            let kind = if field == FormField::Email { "email" } else { "text" };
            html! {
                <input
                    type={kind}
                    id={field.id()}
                    name={field.id()}
                    placeholder={field.placeholder()}
                    {value}
                    {oninput}
                />
            }
        };

        html! {
            <div class="form-field">
                <label for={field.id()}>{field.label()}</label>
                { control }
            </div>
        }
    };

    let sending = *status == FormStatus::Sending;

    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-page section { position: relative; overflow: hidden; padding: 6rem 0; }
                    .contact-page .container { max-width: 1280px; margin: 0 auto; padding: 0 1rem; position: relative; z-index: 10; }
                    .contact-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at center, rgba(255, 255, 255, 0.1) 0, rgba(0, 0, 0, 0) 70%);
                    }
                    .contact-header { max-width: 48rem; margin: 0 auto; text-align: center; }
                    .contact-header h1 { font-size: 4.5rem; font-weight: 700; letter-spacing: -0.025em; margin-bottom: 1.5rem; }
                    .contact-header p { font-size: 1.25rem; color: #9ca3af; }
                    .text-gradient {
                        background: linear-gradient(to right, #a855f7, #3b82f6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; }
                    .contact-info h2 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .contact-info > p { color: #9ca3af; margin-bottom: 2rem; }
                    .contact-detail { display: flex; align-items: flex-start; gap: 1rem; margin-bottom: 1.5rem; }
                    .detail-icon {
                        flex-shrink: 0;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: rgba(124, 58, 237, 0.1);
                        color: #7c3aed;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-top: 0.25rem;
                    }
                    .icon-sm { width: 1.25rem; height: 1.25rem; }
                    .icon-lg { width: 2rem; height: 2rem; }
                    .contact-detail h3 { font-size: 1.125rem; font-weight: 500; margin-bottom: 0.25rem; }
                    .contact-detail p { color: #9ca3af; }
                    .follow { margin-top: 3rem; }
                    .follow h3 { font-size: 1.125rem; font-weight: 500; margin-bottom: 1rem; }
                    .follow .social-row { display: flex; gap: 1rem; }
                    .contact-form {
                        position: relative;
                        z-index: 10;
                        padding: 2rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(26, 26, 26, 0.5);
                        backdrop-filter: blur(4px);
                        display: grid;
                        gap: 1.5rem;
                    }
                    .form-field label { display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
                    .form-field input, .form-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border-radius: 0.375rem;
                        background: rgba(0, 0, 0, 0.3);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        font: inherit;
                    }
                    .form-field input:focus, .form-field textarea:focus { outline: none; box-shadow: 0 0 0 2px rgba(124, 58, 237, 0.5); }
                    .form-error { color: #f87171; font-size: 0.875rem; }
                    .submit-button {
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: #7c3aed;
                        color: #fff;
                        font-size: 1.125rem;
                        transition: background-color 0.3s;
                    }
                    .submit-button:hover { background: rgba(124, 58, 237, 0.9); }
                    .submit-button:disabled { opacity: 0.7; }
                    .spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        border: 3px solid rgba(255, 255, 255, 0.25);
                        border-top-color: #fff;
                        animation: spin 1s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    .form-success { text-align: center; padding: 2rem 0; }
                    .success-badge {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        background: rgba(124, 58, 237, 0.2);
                        color: #7c3aed;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .form-success h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }
                    .form-success p, .location-card p { color: #9ca3af; }
                    .location-band { background: #0a0a0a; }
                    .location-card {
                        height: 400px;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: linear-gradient(to bottom right, rgba(168, 85, 247, 0.05), rgba(59, 130, 246, 0.05), rgba(16, 185, 129, 0.05));
                    }
                    .location-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
                    @media (max-width: 767px) {
                        .contact-grid { grid-template-columns: 1fr; }
                        .contact-header h1 { font-size: 3rem; }
                    }
                "#}
            </style>

            <section>
                <div class="contact-glow"></div>
                <div class="container">
                    <div class="contact-header">
                        <h1>{"Get in "}<span class="text-gradient">{"Touch"}</span></h1>
                        <p>{"Have a project in mind? We'd love to hear from you. Let's create something amazing together."}</p>
                    </div>
                </div>
            </section>

            <section>
                <div class="container contact-grid">
                    <Reveal class="contact-info">
                        <h2>{"Contact Us"}</h2>
                        <p>{"Fill out the form and our team will get back to you within 24 hours."}</p>
                        { detail("Email", CONTACT_EMAIL, &[MAIL_ICON]) }
                        { detail("Phone", CONTACT_PHONE, &[PHONE_ICON]) }
                        { detail("Location", CONTACT_ADDRESS, &PIN_ICON) }
                        <div class="follow">
                            <h3>{"Follow Us"}</h3>
                            <div class="social-row">
                                <SocialIcon label="Instagram" icon="ri-instagram-fill" />
                                <SocialIcon label="Twitter" icon="ri-twitter-fill" />
                                <SocialIcon label="LinkedIn" icon="ri-linkedin-fill" />
                            </div>
                        </div>
                    </Reveal>

                    <Reveal>
                        <ThunderBorder color="#8a2be2" thickness={2} class="form-frame">
                            <form class="contact-form" {onsubmit}>
                                if *status == FormStatus::Sent {
                                    <div class="form-success">
                                        <div class="success-badge">{ outline_icon(&[CHECK_ICON], "icon-lg") }</div>
                                        <h3>{"Message Sent!"}</h3>
                                        <p>{"Thank you for contacting us. We'll get back to you soon."}</p>
                                    </div>
                                } else {
                                    { for FormField::ALL.into_iter().map(|field| field_view(field)) }
                                    if let Some(err) = &*error {
                                        <p class="form-error">{err.to_string()}</p>
                                    }
                                    <button
                                        type="submit"
                                        class="submit-button"
                                        disabled={sending}
                                        onmouseenter={submit_hover.onmouseenter}
                                        onmouseleave={submit_hover.onmouseleave}
                                    >
                                        if sending {
                                            <span class="spinner"></span>
                                            {"Sending..."}
                                        } else {
                                            {"Send Message"}
                                        }
                                    </button>
                                }
                            </form>
                        </ThunderBorder>
                    </Reveal>
                </div>
            </section>

            <section class="location-band">
                <div class="container">
                    <Reveal class="location-card">
                        <div>
                            <div class="success-badge">{ outline_icon(&PIN_ICON, "icon-lg") }</div>
                            <h3>{"Our Location"}</h3>
                            <p>{CONTACT_ADDRESS}</p>
                        </div>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "New site".into(),
            message: "We need a landing page.".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn first_blank_field_is_reported() {
        let form = ContactForm {
            subject: "   ".into(),
            message: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("Subject")));
        assert_eq!(
            ContactForm::default().validate(),
            Err(FormError::MissingField("Name"))
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "ada@", "ada@example", "a da@example.com", "@example.com"] {
            let form = filled().with(FormField::Email, email.to_string());
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{}", email);
        }
    }

    #[test]
    fn surrounding_whitespace_in_email_is_tolerated() {
        let form = filled().with(FormField::Email, "  ada@example.com ".to_string());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn with_replaces_only_the_named_field() {
        let form = filled().with(FormField::Subject, "Redesign".to_string());
        assert_eq!(form.subject, "Redesign");
        assert_eq!(form.name, "Ada");
        assert_eq!(form.get(FormField::Subject), "Redesign");
    }

    #[test]
    fn errors_read_naturally() {
        assert_eq!(FormError::MissingField("Email").to_string(), "Email is required");
    }
}
