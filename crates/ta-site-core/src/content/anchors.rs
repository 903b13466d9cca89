//! In-page anchor targets and the links that jump to them.
//!
//! Scrolling is left to the host's native fragment navigation; all the page
//! has to guarantee is that every `href` has a matching element `id`.

/// Sections reachable through `#fragment` links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Anchor {
    Niche,
    Services,
    Pricing,
    Faq,
    Contact,
}

impl Anchor {
    /// All anchors, in page order.
    pub const ALL: [Anchor; 5] = [
        Anchor::Niche,
        Anchor::Services,
        Anchor::Pricing,
        Anchor::Faq,
        Anchor::Contact,
    ];

    /// Element id of the target section.
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Niche => "niche",
            Anchor::Services => "services",
            Anchor::Pricing => "pricing",
            Anchor::Faq => "faq",
            Anchor::Contact => "contact",
        }
    }

    /// Fragment link pointing at the section.
    pub fn href(&self) -> &'static str {
        match self {
            Anchor::Niche => "#niche",
            Anchor::Services => "#services",
            Anchor::Pricing => "#pricing",
            Anchor::Faq => "#faq",
            Anchor::Contact => "#contact",
        }
    }
}

/// A text link to an in-page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: Anchor,
}

/// Header navigation.
pub static NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", anchor: Anchor::Services },
    NavLink { label: "Who we serve", anchor: Anchor::Niche },
    NavLink { label: "Packages", anchor: Anchor::Pricing },
    NavLink { label: "FAQ", anchor: Anchor::Faq },
    NavLink { label: "Contact", anchor: Anchor::Contact },
];

/// Footer shortcut links.
pub static FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Services", anchor: Anchor::Services },
    NavLink { label: "Packages", anchor: Anchor::Pricing },
    NavLink { label: "Contact", anchor: Anchor::Contact },
];
