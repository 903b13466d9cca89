//! Frequently asked questions.

use dioxus::prelude::*;
use ta_site_core::content::{Anchor, FAQ};

use crate::components::{Card, CardContent};

#[component]
pub fn FaqSection() -> Element {
    rsx! {
        section { id: Anchor::Faq.id(), class: "container section",
            h2 { class: "section-title", "Frequently asked" }
            div { class: "grid grid--2 faq text-sm",
                for entry in FAQ.iter() {
                    Card { key: "{entry.question}", class: "rounded-2xl",
                        CardContent { class: "pt-6 stack",
                            div { class: "faq__question", "{entry.question}" }
                            p { "{entry.answer}" }
                        }
                    }
                }
            }
        }
    }
}
