//! Header-role resolution.
//!
//! The sheet's columns get renamed and reordered by its human editors, so
//! semantic roles (round, player slots, score) are matched against headers
//! fuzzily: exact normalized match first, then substring containment, then
//! an optional positional fallback from the conventional export layout.

/// Candidate labels and optional positional fallback for one column role.
///
/// Kept as configuration data so each consumer (standings, rounds view)
/// declares its own role table instead of scattering indices around.
#[derive(Debug, Clone, Copy)]
pub struct RoleSpec {
    pub candidates: &'static [&'static str],
    pub fallback: Option<usize>,
}

/// Normalize a header label for comparison.
///
/// Lowercases, strips bidi/control marks (the sheet mixes Hebrew and
/// English, which drags in U+200E/U+200F and friends), and removes
/// whitespace plus `:`, `-`, `_`.
pub fn normalize_header(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| {
            !matches!(c, '\u{200e}' | '\u{200f}' | '\u{202a}'..='\u{202e}')
                && !c.is_whitespace()
                && !matches!(c, ':' | '-' | '_')
        })
        .collect()
}

/// Find the column index for a candidate list: exact normalized match in
/// candidate order, then substring containment in candidate order.
pub fn find_header_index(headers: &[String], candidates: &[&str]) -> Option<usize> {
    let normed: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

    for cand in candidates {
        let key = normalize_header(cand);
        if let Some(idx) = normed.iter().position(|h| *h == key) {
            return Some(idx);
        }
    }
    for cand in candidates {
        let key = normalize_header(cand);
        if let Some(idx) = normed.iter().position(|h| h.contains(&key)) {
            return Some(idx);
        }
    }
    None
}

/// Resolve one role to a column index, or `None` when neither a header
/// match nor a fallback applies. Never fails: a fallback index may point
/// past the grid's width, in which case reads come back empty downstream.
pub fn resolve_role(headers: &[String], spec: RoleSpec) -> Option<usize> {
    find_header_index(headers, spec.candidates).or(spec.fallback)
}
