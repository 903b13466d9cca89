//! Service copy: hero highlights, "who we serve" panels, features, tools.

use super::icon::Icon;

/// Small card shown beside the hero headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceHighlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// A community the firm specializes in, with three proof points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NichePanel {
    pub icon: Icon,
    pub title: &'static str,
    pub bullets: [&'static str; 3],
}

/// One entry of the "What we do" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureItem {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A column of the "Tools we work with" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolGroup {
    pub heading: &'static str,
    pub tools: &'static [&'static str],
}

pub static SERVICE_HIGHLIGHTS: &[ServiceHighlight] = &[
    ServiceHighlight {
        title: "Monthly Bookkeeping",
        description: "Bank/credit reconciliations, donor/restricted funds, classes/programs, grant tagging.",
    },
    ServiceHighlight {
        title: "Compilation Reports",
        description: "Board-ready statements, budget vs actuals, cash flow & program spend visuals.",
    },
    ServiceHighlight {
        title: "Tax & Compliance",
        description: "Form 990 (& variants), state filings, charitable registrations, audit prep & liaison.",
    },
    ServiceHighlight {
        title: "Systems Setup",
        description: "QuickBooks Online, controls, donor integrations, simple dashboards.",
    },
];

pub static NICHE_PANELS: &[NichePanel] = &[
    NichePanel {
        icon: Icon::Landmark,
        title: "Masajid & Islamic Centers",
        bullets: [
            "Friday collections, zakat & sadaqah tracking",
            "Ramadan campaign reporting",
            "Building funds & restricted projects",
        ],
    },
    NichePanel {
        icon: Icon::Building,
        title: "Schools & Youth Programs",
        bullets: [
            "Tuition & scholarships, donor sponsorships",
            "After-school & summer programs",
            "Grant budgets & reporting calendars",
        ],
    },
    NichePanel {
        icon: Icon::Globe,
        title: "Relief & Community NGOs",
        bullets: [
            "Program vs admin spend transparency",
            "Multi-currency donations & grants (US-based books)",
            "Audit-ready workpapers",
        ],
    },
];

pub static FEATURES: &[FeatureItem] = &[
    FeatureItem {
        icon: Icon::Calculator,
        title: "Bookkeeping",
        description: "Monthly/quarterly books, reconciliations, donor & restricted funds, class/program tracking.",
    },
    FeatureItem {
        icon: Icon::FileText,
        title: "Compilation Reporting",
        description: "Board-ready financials, budget vs actuals, roll-ups by program/location, simple dashboards.",
    },
    FeatureItem {
        icon: Icon::Shield,
        title: "Tax & Compliance",
        description: "Form 990/990-EZ/990-N, state charity filings, support letters, audit liaison & prep.",
    },
    FeatureItem {
        icon: Icon::Sparkles,
        title: "Systems & Controls",
        description: "QuickBooks Online setup, workflow cleanup, internal control basics for small nonprofits.",
    },
];

pub static TOOL_GROUPS: &[ToolGroup] = &[
    ToolGroup {
        heading: "Accounting",
        tools: &[
            "QuickBooks Online (core)",
            "Sage Intacct (by request)",
            "Netsuite/others (case-by-case)",
        ],
    },
    ToolGroup {
        heading: "Donations & Ops",
        tools: &[
            "Stripe/PayPal/Zelle imports",
            "Donorbox, Givebutter, Zeffy",
            "Gusto/ADP/Paylocity payroll",
        ],
    },
];
