//! Icon identifiers used by the page copy.

/// Named icon. The UI decides how each one is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Check,
    Mail,
    Phone,
    Shield,
    Globe,
    Building,
    Calculator,
    FileText,
    Landmark,
    ArrowRight,
    Star,
    Sparkles,
}

impl Icon {
    /// Stable kebab-case identifier, also used as a CSS modifier.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Check => "check",
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::Shield => "shield",
            Icon::Globe => "globe",
            Icon::Building => "building",
            Icon::Calculator => "calculator",
            Icon::FileText => "file-text",
            Icon::Landmark => "landmark",
            Icon::ArrowRight => "arrow-right",
            Icon::Star => "star",
            Icon::Sparkles => "sparkles",
        }
    }
}
