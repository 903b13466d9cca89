//! Sticky header: brand, section links and the consult call to action.

use dioxus::prelude::*;
use ta_site_core::content::{Anchor, NAV_LINKS};

use crate::components::{Button, ButtonKind};
use crate::context::use_site_config;

#[component]
pub fn SiteHeader() -> Element {
    let config = use_site_config();

    rsx! {
        header { class: "site-header",
            div { class: "container site-header__inner",
                div { class: "brand",
                    div { class: "brand__mark", "{config.firm_mark}" }
                    div { class: "brand__text",
                        div { class: "brand__name", "{config.firm_name}" }
                        div { class: "brand__subtitle", "{config.firm_subtitle}" }
                    }
                }
                nav { class: "site-nav", "aria-label": "Sections",
                    for link in NAV_LINKS.iter() {
                        a {
                            key: "{link.label}",
                            class: "site-nav__link",
                            href: link.anchor.href(),
                            "{link.label}"
                        }
                    }
                }
                Button {
                    kind: ButtonKind::link(Anchor::Contact.href()),
                    class: "site-header__cta",
                    "Book a consult"
                }
            }
        }
    }
}
