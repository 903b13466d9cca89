use dioxus::prelude::*;
use ta_site_core::content::FOOTER_LINKS;

use crate::context::use_site_config;

#[component]
pub fn SiteFooter() -> Element {
    let config = use_site_config();
    let year = config.year();
    let full_name = config.full_name();

    rsx! {
        footer { class: "site-footer",
            div { class: "container site-footer__inner",
                div { "\u{00A9} {year} {full_name}. All rights reserved." }
                div { class: "site-footer__links",
                    for link in FOOTER_LINKS.iter() {
                        a {
                            key: "{link.label}",
                            class: "site-nav__link",
                            href: link.anchor.href(),
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
