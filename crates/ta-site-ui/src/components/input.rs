//! Input Field Components
//!
//! Labelled text input and textarea for the contact form.
//! Features:
//! - Rounded border, emerald focus ring
//! - Native `required` / `type` constraints, no custom validation

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used to associate the label
    pub id: String,
    /// Label text shown above the input
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the host must block submission while empty
    #[props(default = false)]
    pub required: bool,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "contact-email".to_string(),
///         label: "Email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         input_type: "email".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub label: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
}

/// Labelled multi-line input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render;

    #[test]
    fn required_email_input() {
        fn app() -> Element {
            rsx! {
                Input {
                    id: "contact-email".to_string(),
                    label: "Email".to_string(),
                    value: String::new(),
                    oninput: move |_| {},
                    placeholder: "name@org.org".to_string(),
                    input_type: "email".to_string(),
                    required: true,
                }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"for="contact-email""#));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("required"));
        assert!(html.contains(r#"placeholder="name@org.org""#));
    }

    #[test]
    fn textarea_has_rows_and_label() {
        fn app() -> Element {
            rsx! {
                TextArea {
                    id: "contact-message".to_string(),
                    label: "What do you need?".to_string(),
                    value: String::new(),
                    oninput: move |_| {},
                    rows: 5,
                }
            }
        }
        let html = render(app);
        assert!(html.contains("<textarea"));
        assert!(html.contains(r#"rows="5""#));
        assert!(html.contains("What do you need?"));
    }
}
