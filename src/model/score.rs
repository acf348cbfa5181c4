//! Match-score and round-number parsing.
//!
//! Score cells are free-form: the sheet's editors use hyphens, en/em
//! dashes, the Unicode minus, the Hebrew maqaf, or a colon between the two
//! set counts. Everything is normalized to a plain hyphen before parsing.

use lazy_static::lazy_static;
use nom::{
    character::complete::{char, digit1, space0},
    IResult, Parser,
};
use regex::Regex;

/// Which team took the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// A best-of-3 match result; one side has 2 sets, the other 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub team_a: u32,
    pub team_b: u32,
}

impl MatchResult {
    /// Winning side, `None` on a tie. Ties cannot come out of
    /// [`parse_score`] but the aggregation treats them as a no-op anyway.
    pub fn winner(&self) -> Option<Side> {
        match self.team_a.cmp(&self.team_b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Map the alternate separators (en dash, em dash, minus, maqaf, colon)
/// to a plain hyphen.
pub fn normalize_separators(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' | '\u{2212}' | '\u{05be}' | ':' => '-',
            other => other,
        })
        .collect()
}

/// `<digits> - <digits>` with optional whitespace around the hyphen.
fn score_pair(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, a) = digit1.parse(input)?;
    let (input, _) = space0.parse(input)?;
    let (input, _) = char('-').parse(input)?;
    let (input, _) = space0.parse(input)?;
    let (input, b) = digit1.parse(input)?;
    Ok((input, (a, b)))
}

/// Parse a score cell without the best-of-3 gate.
///
/// Used by the rounds view, which only needs to know which side's number
/// is higher. `None` for blank or non-matching cells.
pub fn parse_score_lenient(cell: &str) -> Option<(u32, u32)> {
    let t = cell.trim();
    if t.is_empty() {
        return None;
    }
    let clean = normalize_separators(t);
    let (rest, (a, b)) = score_pair(&clean).ok()?;
    if !rest.is_empty() {
        return None;
    }
    Some((a.parse().ok()?, b.parse().ok()?))
}

/// Parse a score cell into a valid best-of-3 [`MatchResult`].
///
/// Blank cells mean "not played yet"; anything that is not exactly 2-0,
/// 2-1, 0-2 or 1-2 is treated the same way. Not an error either way.
pub fn parse_score(cell: &str) -> Option<MatchResult> {
    let (a, b) = parse_score_lenient(cell)?;
    let valid = (a == 2 && b <= 1) || (b == 2 && a <= 1);
    if !valid {
        return None;
    }
    Some(MatchResult { team_a: a, team_b: b })
}

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();
}

/// Extract the round number as the first run of digits in the cell, so
/// "Round 3" and "3" both work. `None` when the cell has no digits, which
/// marks the whole row as non-data for the standings pass.
pub fn parse_round_number(cell: &str) -> Option<u32> {
    let t = cell.trim();
    if t.is_empty() {
        return None;
    }
    DIGIT_RUN.find(t)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_scores() {
        assert_eq!(
            parse_score("2-0"),
            Some(MatchResult { team_a: 2, team_b: 0 })
        );
        assert_eq!(
            parse_score("2:1"),
            Some(MatchResult { team_a: 2, team_b: 1 })
        );
        assert_eq!(
            parse_score("2\u{2013}1"), // en dash
            Some(MatchResult { team_a: 2, team_b: 1 })
        );
        assert_eq!(
            parse_score("1\u{05be}2"), // maqaf
            Some(MatchResult { team_a: 1, team_b: 2 })
        );
        assert_eq!(
            parse_score("  2 - 0  "),
            Some(MatchResult { team_a: 2, team_b: 0 })
        );
    }

    #[test]
    fn test_invalid_scores() {
        assert_eq!(parse_score("1-1"), None);
        assert_eq!(parse_score("3-0"), None);
        assert_eq!(parse_score("2-2"), None);
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("   "), None);
        assert_eq!(parse_score("abc"), None);
        assert_eq!(parse_score("2-0 (wo)"), None);
        assert_eq!(parse_score("2-"), None);
    }

    #[test]
    fn test_lenient_skips_best_of_3_gate() {
        assert_eq!(parse_score_lenient("3-1"), Some((3, 1)));
        assert_eq!(parse_score_lenient("1-1"), Some((1, 1)));
        assert_eq!(parse_score_lenient("abc"), None);
    }

    #[test]
    fn test_winner() {
        assert_eq!(MatchResult { team_a: 2, team_b: 1 }.winner(), Some(Side::A));
        assert_eq!(MatchResult { team_a: 0, team_b: 2 }.winner(), Some(Side::B));
        assert_eq!(MatchResult { team_a: 1, team_b: 1 }.winner(), None);
    }

    #[test]
    fn test_round_number() {
        assert_eq!(parse_round_number("3"), Some(3));
        assert_eq!(parse_round_number("Round 12"), Some(12));
        assert_eq!(parse_round_number("  7  "), Some(7));
        assert_eq!(parse_round_number(""), None);
        assert_eq!(parse_round_number("final"), None);
    }
}
