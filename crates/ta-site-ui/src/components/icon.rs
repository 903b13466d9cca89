//! Glyph icons.
//!
//! Icons are decorative; every one is hidden from assistive tech and the
//! surrounding text carries the meaning.

use dioxus::prelude::*;
use ta_site_core::{merge_classes, Icon};

/// Character drawn for an icon.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Check => "\u{2713}",
        Icon::Mail => "\u{2709}",
        Icon::Phone => "\u{260E}",
        Icon::Shield => "\u{1F6E1}",
        Icon::Globe => "\u{1F310}",
        Icon::Building => "\u{1F3EB}",
        Icon::Calculator => "\u{1F9EE}",
        Icon::FileText => "\u{1F4C4}",
        Icon::Landmark => "\u{1F54C}",
        Icon::ArrowRight => "\u{2192}",
        Icon::Star => "\u{2605}",
        Icon::Sparkles => "\u{2728}",
    }
}

#[component]
pub fn IconGlyph(
    icon: Icon,
    #[props(default, into)]
    class: String,
) -> Element {
    let base = format!("icon icon-{}", icon.name());
    let full_class = merge_classes(&base, Some(&class));
    rsx! {
        span { class: "{full_class}", "aria-hidden": "true", {glyph(icon)} }
    }
}
