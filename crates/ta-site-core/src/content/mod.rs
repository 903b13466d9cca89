//! Literal page copy as typed static data.
//!
//! Every repeated structure on the page (nav links, service cards, niche
//! panels, features, tools, pricing tiers, testimonials, FAQ) is a `static`
//! slice here. The UI only iterates these; it never invents copy.

mod anchors;
mod faq;
mod icon;
mod pricing;
mod services;
mod testimonials;

pub use anchors::{Anchor, NavLink, FOOTER_LINKS, NAV_LINKS};
pub use faq::{FaqEntry, FAQ};
pub use icon::Icon;
pub use pricing::{find_tier, highlighted_tier, PricingTier, PRICE_PERIOD, PRICING_NOTE, TIERS};
pub use services::{
    FeatureItem, NichePanel, ServiceHighlight, ToolGroup, FEATURES, NICHE_PANELS,
    SERVICE_HIGHLIGHTS, TOOL_GROUPS,
};
pub use testimonials::{Testimonial, TESTIMONIALS};
