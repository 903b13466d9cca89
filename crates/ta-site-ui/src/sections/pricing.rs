//! Pricing packages.

use dioxus::prelude::*;
use ta_site_core::content::{Anchor, PricingTier, PRICE_PERIOD, PRICING_NOTE, TIERS};
use ta_site_core::{join_classes, Icon};

use crate::components::{Button, Card, CardContent, CardHeader, CardTitle, IconGlyph};

/// A package card. The highlighted tier gets a ring and a badge.
#[component]
pub fn TierCard(tier: &'static PricingTier) -> Element {
    let class = join_classes([
        Some("tier-card rounded-2xl"),
        tier.highlighted.then_some("tier-card--highlighted"),
    ]);

    rsx! {
        Card { class,
            if tier.highlighted {
                div { class: "tier-card__badge", "Most Popular" }
            }
            CardHeader {
                CardTitle { class: "tier-card__title",
                    span { class: "tier-card__name", "{tier.name}" }
                    span { class: "tier-card__price",
                        "{tier.price}"
                        span { class: "tier-card__period", "{PRICE_PERIOD}" }
                    }
                }
                p { class: "tier-card__tagline", "{tier.tagline}" }
            }
            CardContent {
                ul { class: "tier-card__benefits",
                    for benefit in tier.benefits.iter() {
                        li { key: "{benefit}", class: "check-line",
                            IconGlyph { icon: Icon::Check, class: "text-emerald" }
                            " {benefit}"
                        }
                    }
                }
                Button { class: "tier-card__cta w-full", "Get started" }
            }
        }
    }
}

#[component]
pub fn PricingSection() -> Element {
    rsx! {
        section { id: Anchor::Pricing.id(), class: "container section",
            h2 { class: "section-title", "Simple packages" }
            p { class: "section-lead",
                "Transparent pricing for small and growing nonprofits. Custom quotes for larger orgs."
            }
            div { class: "grid grid--3 tiers",
                for tier in TIERS.iter() {
                    TierCard { key: "{tier.name}", tier }
                }
            }
            p { class: "fine-print", "{PRICING_NOTE}" }
        }
    }
}
