//! Static HTML rendering via `dioxus-ssr`.
//!
//! The exported file carries the markup and the stylesheet only. Anchor
//! navigation and native form validation still work; the local
//! submit-acknowledgment needs the interactive app.

use dioxus::prelude::*;
use ta_site_core::SiteConfig;

use crate::site::Site;
use crate::theme::GLOBAL_STYLES;

/// Render the page body markup with `config` in context.
pub fn render_site(config: SiteConfig) -> String {
    let mut dom = VirtualDom::new(Site).with_root_context(config);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a complete standalone HTML document.
pub fn render_document(config: &SiteConfig) -> String {
    let title = escape_text(&config.full_name());
    let body = render_site(config.clone());
    tracing::debug!(bytes = body.len(), "Rendered site markup");

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>{GLOBAL_STYLES}</style>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    )
}

fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
