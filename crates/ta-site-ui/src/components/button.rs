//! Button Component
//!
//! Two visual variants and two kinds:
//! - Actionable: a real `<button>` (click handler, submit, reset)
//! - Navigational: a button-styled inline wrapper around an `<a href>`,
//!   used for calls to action that jump to an in-page anchor

use dioxus::prelude::*;
use ta_site_core::merge_classes;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled emerald button
    #[default]
    Default,
    /// Bordered, transparent background
    Outline,
}

impl ButtonVariant {
    /// Returns the CSS classes for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn btn-default",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

/// `type` attribute of an actionable button
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// What the button does when activated.
#[derive(Clone, PartialEq)]
pub enum ButtonKind {
    /// Rendered as `<button>`; the handler is optional (submit buttons rely
    /// on the enclosing form).
    Actionable(Option<EventHandler<()>>),
    /// Rendered as an inline wrapper holding a link to `href`.
    Navigational(String),
}

impl Default for ButtonKind {
    fn default() -> Self {
        ButtonKind::Actionable(None)
    }
}

impl ButtonKind {
    pub fn action(handler: EventHandler<()>) -> Self {
        ButtonKind::Actionable(Some(handler))
    }

    pub fn link(href: impl Into<String>) -> Self {
        ButtonKind::Navigational(href.into())
    }

    /// Outer element tag produced for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            ButtonKind::Actionable(_) => "button",
            ButtonKind::Navigational(_) => "span",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Actionable or navigational
    #[props(default)]
    pub kind: ButtonKind,
    /// Type attribute; ignored for navigational buttons
    #[props(default)]
    pub button_type: ButtonType,
    /// Whether the button is disabled; ignored for navigational buttons
    #[props(default = false)]
    pub disabled: bool,
    /// Accessible label when the content is not descriptive
    #[props(default)]
    pub aria_label: Option<String>,
    /// Additional CSS classes, appended after the variant classes
    #[props(default, into)]
    pub class: String,
    /// Button content (text, icons, etc.)
    pub children: Element,
}

/// Styled button following the design system
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         kind: ButtonKind::link("#contact"),
///         "Book a consult"
///     }
///
///     Button {
///         button_type: ButtonType::Submit,
///         class: "w-full",
///         "Send"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = merge_classes(props.variant.class(), Some(&props.class));

    match props.kind {
        ButtonKind::Actionable(onclick) => rsx! {
            button {
                class: "{full_class}",
                r#type: props.button_type.as_str(),
                disabled: props.disabled,
                "aria-label": props.aria_label,
                onclick: move |_| {
                    if let Some(handler) = onclick {
                        handler.call(());
                    }
                },
                {props.children}
            }
        },
        ButtonKind::Navigational(href) => rsx! {
            span { class: "{full_class}",
                a {
                    class: "btn-slot",
                    href: "{href}",
                    "aria-label": props.aria_label,
                    {props.children}
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Default.class(), "btn btn-default");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
        assert_ne!(ButtonVariant::Default.class(), ButtonVariant::Outline.class());
    }

    #[test]
    fn button_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonType::default().as_str(), "button");
        assert!(ButtonKind::default() == ButtonKind::Actionable(None));
    }

    #[test]
    fn kind_tags_differ() {
        assert_ne!(ButtonKind::default().tag(), ButtonKind::link("#pricing").tag());
    }

    #[test]
    fn rendered_tags_match_kind() {
        fn action_app() -> Element {
            rsx! { Button { kind: ButtonKind::action(EventHandler::new(|_| {})), "Send" } }
        }
        fn link_app() -> Element {
            rsx! { Button { kind: ButtonKind::link("#faq"), "FAQ" } }
        }

        let action = render(action_app);
        let link = render(link_app);
        let action_tag = ButtonKind::Actionable(None).tag();
        let link_tag = ButtonKind::link("#faq").tag();
        assert!(action.starts_with(&format!("<{} ", action_tag)));
        assert!(action.ends_with(&format!("</{}>", action_tag)));
        assert!(link.starts_with(&format!("<{} ", link_tag)));
        assert!(link.ends_with(&format!("</{}>", link_tag)));
    }

    #[test]
    fn renders_default_button() {
        fn app() -> Element {
            rsx! { Button { "Get started" } }
        }
        let html = render(app);
        assert!(html.starts_with(&format!("<{}", ButtonKind::default().tag())));
        assert!(html.contains(r#"class="btn btn-default""#));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains("Get started"));
    }

    #[test]
    fn outline_variant_changes_classes() {
        fn app() -> Element {
            rsx! { Button { variant: ButtonVariant::Outline, "See packages" } }
        }
        let html = render(app);
        assert!(html.contains(r#"class="btn btn-outline""#));
        assert!(!html.contains("btn-default"));
    }

    #[test]
    fn navigational_wraps_link() {
        fn app() -> Element {
            rsx! {
                Button { kind: ButtonKind::link("#contact"), class: "nav-cta", "Book a consult" }
            }
        }
        let html = render(app);
        assert!(html.starts_with(&format!("<{}", ButtonKind::link("#contact").tag())));
        assert!(!html.contains("<button"));
        assert!(html.contains(r#"class="btn btn-default nav-cta""#));
        assert!(html.contains(r##"href="#contact""##));
        assert!(html.contains("Book a consult"));
    }

    #[test]
    fn submit_type_and_extra_class() {
        fn app() -> Element {
            rsx! { Button { button_type: ButtonType::Submit, class: "w-full", "Send" } }
        }
        let html = render(app);
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(r#"class="btn btn-default w-full""#));
    }
}
