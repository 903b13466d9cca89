//! CSS class composition.
//!
//! Every primitive emits a fixed base class and lets the caller append more.
//! A caller override never replaces the base.

/// Append `extra` to `base`, ignoring a missing or blank override.
///
/// ```
/// use ta_site_core::merge_classes;
///
/// assert_eq!(merge_classes("card", None), "card");
/// assert_eq!(merge_classes("card", Some("  ")), "card");
/// assert_eq!(merge_classes("card", Some("rounded-2xl")), "card rounded-2xl");
/// ```
pub fn merge_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Join several optional fragments with single spaces, skipping blanks.
pub fn join_classes<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
