//! Text normalization for name matching.

use super::strip_status_glyph;

/// Normalizes task content or checklist item names for comparison.
///
/// Normalization strips any leading status glyph, trims and lower-cases
/// the text, drops every character outside `[a-z0-9 ]`, and collapses
/// whitespace runs to single spaces. Two names agree for matching
/// purposes exactly when their normalized forms are equal.
///
/// # Examples
///
/// ```
/// use aalto::sync::domain::normalize;
///
/// assert_eq!(normalize("✅  Create login endpoint!"), "create login endpoint");
/// assert_eq!(normalize("CREATE   Login   Endpoint"), "create login endpoint");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let lowered = strip_status_glyph(text).to_lowercase();
    let filtered: String = lowered
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == ' ')
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}
