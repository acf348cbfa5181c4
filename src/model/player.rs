//! Player-name helpers: placeholder detection and roster display fields.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Unfilled slots in the sheet look like "Player 3" (with or without
    // the space), in any case.
    static ref PLACEHOLDER_SLOT: Regex = Regex::new(r"(?i)^player\s*\d+$").unwrap();
}

/// Whether a name cell is an unfilled slot rather than a real participant.
///
/// Placeholders are excluded from aggregation and from team-completeness
/// checks: empty cells, the literal "vs" separator, template slot names
/// like "Player 2", and the "Team A"/"Team B" captions.
pub fn is_placeholder_name(name: &str) -> bool {
    let n = name.trim();
    if n.is_empty() {
        return true;
    }
    let low = n.to_lowercase();
    low == "vs" || low == "team a" || low == "team b" || PLACEHOLDER_SLOT.is_match(n)
}

/// Lowercased, alphanumeric-only first name token; empty when nothing
/// survives the filter.
pub fn first_name_slug(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Upper-cased first letters of the first two name parts, e.g. "RH".
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Conventional avatar path `images/<slug>.png`, or `None` when the name
/// yields no usable slug.
pub fn player_image_path(full_name: &str) -> Option<String> {
    let slug = first_name_slug(full_name);
    if slug.is_empty() {
        None
    } else {
        Some(format!("images/{slug}.png"))
    }
}
