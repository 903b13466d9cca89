//! The whole page.

use dioxus::prelude::*;

use crate::sections::{
    ContactSection, FaqSection, Hero, NicheSection, PricingSection, ServicesSection, SiteFooter,
    SiteHeader, TestimonialsSection,
};

/// Single long-scrolling page.
///
/// Sections communicate only through in-page anchors; the contact form's
/// state stays inside [`ContactSection`].
#[component]
pub fn Site() -> Element {
    rsx! {
        div { class: "site",
            SiteHeader {}
            main {
                Hero {}
                NicheSection {}
                ServicesSection {}
                PricingSection {}
                TestimonialsSection {}
                FaqSection {}
                ContactSection {}
            }
            SiteFooter {}
        }
    }
}
