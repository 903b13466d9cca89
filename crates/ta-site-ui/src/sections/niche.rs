//! "Who we serve" panels.

use dioxus::prelude::*;
use ta_site_core::content::{Anchor, NICHE_PANELS};
use ta_site_core::Icon;

use crate::components::{Card, CardContent, CardHeader, CardTitle, IconGlyph};

#[component]
pub fn NicheSection() -> Element {
    rsx! {
        section { id: Anchor::Niche.id(), class: "container section section--tight",
            div { class: "grid grid--3",
                for panel in NICHE_PANELS.iter() {
                    Card { key: "{panel.title}", class: "rounded-2xl",
                        CardHeader {
                            CardTitle { class: "title-with-icon",
                                IconGlyph { icon: panel.icon }
                                " {panel.title}"
                            }
                        }
                        CardContent { class: "text-sm stack",
                            for bullet in panel.bullets.iter() {
                                div { key: "{bullet}", class: "check-line",
                                    IconGlyph { icon: Icon::Check, class: "text-emerald" }
                                    " {bullet}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
