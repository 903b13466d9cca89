use dioxus::prelude::*;
use ta_site_ui::theme::GLOBAL_STYLES;
use ta_site_ui::Site;

/// Root application component.
///
/// Provides global styles and mounts the page. The site config is supplied
/// as root context by the launcher.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Site {}
    }
}
