//! Card Components
//!
//! Container plus header, title and content regions. Purely structural:
//! each wrapper emits its base class with the caller's classes appended.

use dioxus::prelude::*;
use ta_site_core::merge_classes;

pub const CARD_CLASS: &str = "card";
pub const CARD_HEADER_CLASS: &str = "card-header";
pub const CARD_TITLE_CLASS: &str = "card-title";
pub const CARD_CONTENT_CLASS: &str = "card-content";

/// Rounded, bordered container
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         CardHeader { class: "pb-2",
///             CardTitle { class: "text-base", "Systems Setup" }
///         }
///         CardContent { "QuickBooks Online, controls, donor integrations." }
///     }
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes
    #[props(default, into)]
    class: String,
    children: Element,
) -> Element {
    let full_class = merge_classes(CARD_CLASS, Some(&class));
    rsx! {
        div { class: "{full_class}", {children} }
    }
}

/// Top region of a card
#[component]
pub fn CardHeader(
    #[props(default, into)]
    class: String,
    children: Element,
) -> Element {
    let full_class = merge_classes(CARD_HEADER_CLASS, Some(&class));
    rsx! {
        div { class: "{full_class}", {children} }
    }
}

/// Card heading
#[component]
pub fn CardTitle(
    #[props(default, into)]
    class: String,
    children: Element,
) -> Element {
    let full_class = merge_classes(CARD_TITLE_CLASS, Some(&class));
    rsx! {
        h3 { class: "{full_class}", {children} }
    }
}

/// Body region of a card
#[component]
pub fn CardContent(
    #[props(default, into)]
    class: String,
    children: Element,
) -> Element {
    let full_class = merge_classes(CARD_CONTENT_CLASS, Some(&class));
    rsx! {
        div { class: "{full_class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_util::render;

    #[test]
    fn card_without_override_has_only_base_class() {
        fn app() -> Element {
            rsx! { Card { "body" } }
        }
        assert_eq!(render(app), r#"<div class="card">body</div>"#);
    }

    #[test]
    fn card_override_is_appended() {
        fn app() -> Element {
            rsx! { Card { class: "rounded-2xl", "body" } }
        }
        assert_eq!(render(app), r#"<div class="card rounded-2xl">body</div>"#);
    }

    #[test]
    fn regions_keep_their_base_classes() {
        fn app() -> Element {
            rsx! {
                Card {
                    CardHeader { class: "pb-2",
                        CardTitle { "Tools we work with" }
                    }
                    CardContent { class: "text-sm", "QuickBooks Online" }
                }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"<div class="card-header pb-2">"#));
        assert!(html.contains(r#"<h3 class="card-title">Tools we work with</h3>"#));
        assert!(html.contains(r#"<div class="card-content text-sm">QuickBooks Online</div>"#));
    }
}
