//! Tawfik & Amro Site UI
//!
//! Dioxus components for the firm's single-page marketing site.
//!
//! ## Layers
//!
//! - [`components`]: presentational primitives (button, card family, form
//!   inputs, icons). Stateless.
//! - [`sections`]: one component per page section, fed by the static copy
//!   in `ta_site_core::content`.
//! - [`Site`]: the whole page, top to bottom.
//!
//! The only state on the page is the contact form's
//! [`ContactForm`](ta_site_core::ContactForm), owned by
//! [`sections::ContactSection`].
//!
//! ## Rendering
//!
//! The desktop app mounts [`Site`] directly. [`render_document`] produces a
//! standalone HTML file through `dioxus-ssr` for static hosting.

#![allow(non_snake_case)]

pub mod components;
pub mod context;
mod document;
pub mod sections;
mod site;
pub mod theme;

pub use context::{provide_site_config, use_site_config};
pub use document::{render_document, render_site};
pub use site::Site;
