//! Tawfik & Amro Site Core Library
//!
//! Everything the marketing page knows that is not markup: the literal copy
//! as typed static data, the in-page anchors, the contact form's local state
//! machine, site configuration, errors and logging setup.
//!
//! ## Overview
//!
//! The site is a single long-scrolling page for a nonprofit accounting
//! firm. Nothing is persisted and nothing is sent over the network; the
//! contact form only acknowledges a submission locally.
//!
//! ## Quick Start
//!
//! ```
//! use ta_site_core::content::{highlighted_tier, Anchor};
//! use ta_site_core::contact::{ContactForm, SubmitOutcome};
//!
//! let popular = highlighted_tier();
//! assert_eq!(popular.name, "Standard");
//! assert_eq!(Anchor::Contact.href(), "#contact");
//!
//! let mut form = ContactForm::new();
//! assert_eq!(form.submit(), SubmitOutcome::Acknowledged);
//! assert_eq!(form.submit(), SubmitOutcome::AlreadySubmitted);
//! ```

pub mod classes;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod logging;

// Re-exports
pub use classes::{join_classes, merge_classes};
pub use config::SiteConfig;
pub use contact::{ContactDraft, ContactField, ContactForm, ContactPhase, SubmitOutcome};
pub use content::{Anchor, Icon, PricingTier};
pub use error::{SiteError, SiteResult};
