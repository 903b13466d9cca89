//! Social proof cards.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub attribution: &'static str,
    /// Stars out of five.
    pub rating: u8,
}

const QUOTE: &str =
    "\u{201C}Accurate, on-time financials and a painless 990. We finally feel audit-ready.\u{201D}";
const ATTRIBUTION: &str = "Executive Director, NYC Islamic Center";

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial { quote: QUOTE, attribution: ATTRIBUTION, rating: 5 },
    Testimonial { quote: QUOTE, attribution: ATTRIBUTION, rating: 5 },
    Testimonial { quote: QUOTE, attribution: ATTRIBUTION, rating: 5 },
];

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    /// Accessible description of the star row.
    pub fn rating_label(&self) -> String {
        format!("{} star rating", self.rating.min(Self::MAX_RATING))
    }
}
