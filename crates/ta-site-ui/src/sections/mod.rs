//! Page sections, top to bottom.
//!
//! Sections read their copy from `ta_site_core::content` and the firm's
//! details from [`use_site_config`](crate::use_site_config). Only
//! [`ContactSection`] holds state.

mod contact;
mod faq;
mod footer;
mod header;
mod hero;
mod niche;
mod pricing;
mod services;
mod testimonials;

pub use contact::{Confirmation, ContactFormView, ContactSection};
pub use faq::FaqSection;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::Hero;
pub use niche::NicheSection;
pub use pricing::{PricingSection, TierCard};
pub use services::{FeatureRow, ServicesSection};
pub use testimonials::TestimonialsSection;
