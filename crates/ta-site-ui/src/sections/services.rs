//! "What we do" features and the tools card.

use dioxus::prelude::*;
use ta_site_core::content::{Anchor, FeatureItem, FEATURES, TOOL_GROUPS};

use crate::components::{Card, CardContent, CardHeader, CardTitle, IconGlyph};

/// One feature: icon tile beside a title and description.
#[component]
pub fn FeatureRow(feature: &'static FeatureItem) -> Element {
    rsx! {
        div { class: "feature",
            div { class: "feature__icon",
                IconGlyph { icon: feature.icon }
            }
            div {
                div { class: "feature__title", "{feature.title}" }
                p { class: "feature__desc", "{feature.description}" }
            }
        }
    }
}

#[component]
pub fn ServicesSection() -> Element {
    rsx! {
        section { id: Anchor::Services.id(), class: "container section",
            div { class: "grid grid--2 grid--wide",
                div {
                    h2 { class: "section-title", "What we do" }
                    p { class: "section-lead",
                        "Focused, nonprofit-first accounting so your team can focus on mission."
                    }
                    div { class: "features",
                        for feature in FEATURES.iter() {
                            FeatureRow { key: "{feature.title}", feature }
                        }
                    }
                }
                Card { class: "rounded-2xl",
                    CardHeader {
                        CardTitle { class: "text-xl", "Tools we work with" }
                    }
                    CardContent { class: "tools text-sm",
                        for group in TOOL_GROUPS.iter() {
                            div { key: "{group.heading}", class: "tools__group",
                                div { class: "tools__heading", "{group.heading}" }
                                ul { class: "tools__list",
                                    for tool in group.tools.iter() {
                                        li { key: "{tool}", "{tool}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
