//! Testimonial cards.

use dioxus::prelude::*;
use ta_site_core::content::TESTIMONIALS;
use ta_site_core::Icon;

use crate::components::{Card, CardContent, IconGlyph};

#[component]
pub fn TestimonialsSection() -> Element {
    rsx! {
        section { class: "container section section--tight",
            div { class: "grid grid--3",
                for (i, testimonial) in TESTIMONIALS.iter().enumerate() {
                    Card { key: "{i}", class: "rounded-2xl",
                        CardContent { class: "pt-6",
                            div { class: "stars", "aria-label": testimonial.rating_label(),
                                for star in 0..testimonial.rating {
                                    IconGlyph { key: "{star}", icon: Icon::Star }
                                }
                            }
                            p { class: "quote", "{testimonial.quote}" }
                            div { class: "attribution", "{testimonial.attribution}" }
                        }
                    }
                }
            }
        }
    }
}
