//! Hero: headline, calls to action, trust badges and service highlights.

use dioxus::prelude::*;
use ta_site_core::content::{Anchor, SERVICE_HIGHLIGHTS};
use ta_site_core::Icon;

use crate::components::{
    Button, ButtonKind, ButtonVariant, Card, CardContent, CardHeader, CardTitle, IconGlyph,
};

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "container hero",
            div { class: "hero__grid",
                div {
                    h1 { class: "hero__title fade-up",
                        "Bookkeeping, Compilations & Tax for U.S. "
                        span { class: "accent", "Muslim, Arab & African" }
                        " Nonprofits"
                    }
                    p { class: "hero__lead",
                        "We specialize in faith-based and community organizations\u{2014}masajid, Islamic schools, relief & development NGOs, cultural centers, and youth programs. Clean books. Clear reports. Confident compliance."
                    }
                    div { class: "hero__actions",
                        Button { kind: ButtonKind::link(Anchor::Contact.href()),
                            "Start a conversation"
                            IconGlyph { icon: Icon::ArrowRight, class: "icon--trailing" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            kind: ButtonKind::link(Anchor::Pricing.href()),
                            "See packages"
                        }
                    }
                    div { class: "hero__badges",
                        div { class: "badge-line",
                            IconGlyph { icon: Icon::Shield }
                            " Led by a U.S. CPA"
                        }
                        div { class: "badge-line",
                            IconGlyph { icon: Icon::Globe }
                            " Remote nationwide"
                        }
                    }
                }
                div { class: "hero__highlights",
                    for highlight in SERVICE_HIGHLIGHTS.iter() {
                        Card { key: "{highlight.title}", class: "rounded-2xl",
                            CardHeader { class: "pb-2",
                                CardTitle { class: "text-base", "{highlight.title}" }
                            }
                            CardContent { class: "text-sm muted", "{highlight.description}" }
                        }
                    }
                }
            }
        }
    }
}
