//! Pricing packages.

/// A named monthly package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Display price without the `/mo` suffix, e.g. `"$495"`.
    pub price: &'static str,
    pub tagline: &'static str,
    /// Included benefits, in display order.
    pub benefits: &'static [&'static str],
    /// Visually emphasized ("Most Popular"). At most one tier sets this.
    pub highlighted: bool,
}

/// Suffix shown after every price.
pub const PRICE_PERIOD: &str = "/mo";

pub static TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Starter",
        price: "$495",
        tagline: "For brand-new or very small orgs (\u{2264} 2 bank/credit accounts).",
        benefits: &[
            "Monthly bookkeeping",
            "Bank/credit card recs",
            "Basic restricted funds",
            "Quarterly compilation",
            "Annual 990-N/990-EZ",
        ],
        highlighted: false,
    },
    PricingTier {
        name: "Standard",
        price: "$995",
        tagline: "For active centers & programs (up to 4 accounts).",
        benefits: &[
            "Monthly bookkeeping",
            "Donations & pledge tracking",
            "Classes/program reporting",
            "Monthly compilation + board pack",
            "Annual 990 or 990-EZ",
            "Audit prep (lite)",
        ],
        highlighted: true,
    },
    PricingTier {
        name: "Plus",
        price: "$1,695",
        tagline: "For multi-program or grant-funded orgs.",
        benefits: &[
            "Everything in Standard",
            "Grants & restricted schedules",
            "Project/location roll-ups",
            "State charity filings",
            "Audit liaison & workpapers",
        ],
        highlighted: false,
    },
];

/// Fine print under the tiers.
pub const PRICING_NOTE: &str =
    "*Pricing is illustrative; final quotes reflect volume, account count, and complexity.";

/// The emphasized tier.
pub fn highlighted_tier() -> &'static PricingTier {
    // TIERS is a literal with exactly one highlighted entry (see tests)
    TIERS
        .iter()
        .find(|tier| tier.highlighted)
        .unwrap_or(&TIERS[1])
}

/// Look a tier up by name, case-insensitively.
pub fn find_tier(name: &str) -> Option<&'static PricingTier> {
    TIERS
        .iter()
        .find(|tier| tier.name.eq_ignore_ascii_case(name.trim()))
}

impl PricingTier {
    /// Price with its period, as printed by the CLI.
    pub fn price_label(&self) -> String {
        format!("{}{}", self.price, PRICE_PERIOD)
    }
}
