//! Site configuration context.
//!
//! ## Usage
//!
//! ```ignore
//! // At the root (or via LaunchBuilder::with_context)
//! provide_site_config(config);
//!
//! // In any section
//! let config = use_site_config();
//! ```

use dioxus::prelude::*;
use ta_site_core::SiteConfig;

/// Make `config` available to every descendant component.
pub fn provide_site_config(config: SiteConfig) -> SiteConfig {
    use_context_provider(|| config)
}

/// Hook to read the site configuration.
///
/// Falls back to the built-in copy when no config was provided, so sections
/// render standalone in tests.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}
