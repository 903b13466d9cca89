//! Contact section.
//!
//! The form is acknowledged locally: submitting prevents the browser's
//! default navigation and flips [`ContactForm`] to `Submitted`. Nothing is
//! sent anywhere, and required fields are enforced by the host's native
//! form validation (`required`, `type="email"`).

use dioxus::prelude::*;
use ta_site_core::contact::CONFIRMATION;
use ta_site_core::content::Anchor;
use ta_site_core::{ContactField, ContactForm, Icon};

use crate::components::{
    Button, ButtonType, Card, CardContent, IconGlyph, Input, TextArea,
};
use crate::context::use_site_config;

/// Static acknowledgment shown in place of the form.
#[component]
pub fn Confirmation() -> Element {
    rsx! {
        div { class: "confirmation", role: "status",
            div { class: "confirmation__badge",
                IconGlyph { icon: Icon::Check }
            }
            div { class: "confirmation__text", "{CONFIRMATION}" }
        }
    }
}

/// Renders the form for `form`'s current phase.
///
/// Stateless: input changes and submits are reported through the handlers.
#[component]
pub fn ContactFormView(
    form: ContactForm,
    on_change: EventHandler<(ContactField, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    if form.is_submitted() {
        return rsx! { Confirmation {} };
    }

    let draft = form.draft().clone();
    let field_input = move |field: ContactField| {
        rsx! {
            Input {
                id: field.id().to_string(),
                label: field.label().to_string(),
                value: draft.get(field).to_string(),
                oninput: move |value| on_change.call((field, value)),
                placeholder: field.placeholder().to_string(),
                input_type: field.input_type().unwrap_or("text").to_string(),
                required: field.required(),
            }
        }
    };

    rsx! {
        form {
            class: "contact-form stack",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            {field_input(ContactField::Name)}
            div { class: "grid grid--2 grid--compact",
                {field_input(ContactField::Email)}
                {field_input(ContactField::Organization)}
            }
            TextArea {
                id: ContactField::Message.id().to_string(),
                label: ContactField::Message.label().to_string(),
                value: form.draft().message.clone(),
                oninput: move |value| on_change.call((ContactField::Message, value)),
                placeholder: ContactField::Message.placeholder().to_string(),
                rows: 5,
            }
            Button { button_type: ButtonType::Submit, class: "w-full", "Send" }
        }
    }
}

/// Contact copy plus the stateful form card.
#[component]
pub fn ContactSection() -> Element {
    let config = use_site_config();
    let mut form = use_signal(ContactForm::new);

    rsx! {
        section { id: Anchor::Contact.id(), class: "container section",
            div { class: "grid grid--2 grid--wide",
                div {
                    h2 { class: "section-title", "Let\u{2019}s talk" }
                    p { class: "section-lead",
                        "Tell us about your nonprofit and what you need. We\u{2019}ll reply with a simple plan and quote."
                    }
                    div { class: "contact-details text-sm stack",
                        div { class: "badge-line",
                            IconGlyph { icon: Icon::Mail }
                            " {config.email}"
                        }
                        div { class: "badge-line",
                            IconGlyph { icon: Icon::Phone }
                            " {config.phone}"
                        }
                    }
                }
                Card { class: "rounded-2xl",
                    CardContent { class: "pt-6",
                        ContactFormView {
                            form: form(),
                            on_change: move |(field, value): (ContactField, String)| {
                                form.write().set(field, value);
                            },
                            on_submit: move |_| {
                                form.write().submit();
                            },
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render;

    fn editing_app() -> Element {
        rsx! {
            ContactFormView {
                form: ContactForm::new(),
                on_change: move |_| {},
                on_submit: move |_| {},
            }
        }
    }

    fn submitted_app() -> Element {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Jane Doe");
        form.set(ContactField::Email, "jane@org.org");
        form.submit();
        rsx! {
            ContactFormView { form, on_change: move |_| {}, on_submit: move |_| {} }
        }
    }

    #[test]
    fn editing_shows_fields_without_confirmation() {
        let html = render(editing_app);
        for field in ContactField::ALL {
            assert!(html.contains(field.id()), "missing {}", field.id());
        }
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"type="submit""#));
        assert!(!html.contains("in touch shortly"));
    }

    #[test]
    fn submitted_replaces_fields_with_confirmation() {
        let html = render(submitted_app);
        assert!(html.contains("Thanks! We"));
        assert!(html.contains("in touch shortly."));
        assert!(!html.contains("<form"));
        assert!(!html.contains("<input"));
        assert!(!html.contains("<textarea"));
    }

    #[test]
    fn section_starts_in_editing_with_firm_details() {
        let html = render(ContactSection);
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains("<form"));
        assert!(html.contains("hello@ta-nonprofit.com"));
        assert!(html.contains("(555) 555-0199"));
    }
}
