//! Reusable UI primitives.
//!
//! Each primitive emits a fixed base class and appends whatever the caller
//! passes in `class`.

mod button;
mod card;
mod icon;
mod input;

pub use button::*;
pub use card::*;
pub use icon::*;
pub use input::*;

#[cfg(test)]
pub(crate) mod test_util {
    use dioxus::prelude::*;

    /// Render a root component to HTML.
    pub fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }
}
