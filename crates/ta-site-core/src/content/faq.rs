//! Frequently asked questions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Do you only work with Muslim, Arab, and African organizations?",
        answer: "These communities are our focus and experience\u{2014}but we serve U.S. nonprofits of many kinds. Everyone is welcome.",
    },
    FaqEntry {
        question: "Do you perform audits or reviews?",
        answer: "We do not perform assurance engagements. We provide bookkeeping, compilation reporting, tax filings, and audit-readiness support.",
    },
    FaqEntry {
        question: "Can you migrate our system to QuickBooks Online?",
        answer: "Yes\u{2014}chart of accounts, opening balances, classes/programs, and basic donor integrations. We also help set simple internal controls.",
    },
    FaqEntry {
        question: "Where are you located?",
        answer: "We are U.S.-based and support organizations nationwide via secure, remote workflows. On-site visits available for select projects.",
    },
];
