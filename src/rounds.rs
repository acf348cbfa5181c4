//! Rounds projection: reshapes the normalized grid into display columns
//! with win markers, leaving markup to the presentation layer.

use crate::model::{normalize_separators, parse_score_lenient};
use crate::sheet::{find_header_index, RawGrid};

/// Decorative prefix for winning player cells.
pub const WIN_MARK: &str = "\u{1f3c6} ";

/// One display cell: text (win mark already applied) plus the annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundsCell {
    pub text: String,
    pub winner: bool,
}

/// Column labels plus annotated row cells, ready for tabular display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundsView {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<RoundsCell>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DisplayRole {
    Round,
    Player1,
    Player2,
    Vs,
    Player3,
    Player4,
    Score,
    Verbatim,
}

struct DisplayColumn {
    role: DisplayRole,
    index: usize,
    label: String,
}

// Both pairs reuse the PLAYER 1/2 labels: the table reads as
// "team vs team", not as four distinct seats.
const DISPLAY_ROLES: &[(DisplayRole, &[&str], &str)] = &[
    (DisplayRole::Round, &["round", "rounds"], "ROUNDS"),
    (DisplayRole::Player1, &["player1", "player 1", "p1"], "PLAYER 1"),
    (DisplayRole::Player2, &["player2", "player 2", "p2"], "PLAYER 2"),
    (DisplayRole::Vs, &["vs"], "VS"),
    (DisplayRole::Player3, &["player3", "player 3", "p3"], "PLAYER 1"),
    (DisplayRole::Player4, &["player4", "player 4", "p4"], "PLAYER 2"),
    (DisplayRole::Score, &["score", "result"], "SCORE"),
];

/// Resolve the display column set; when no role matches at all, fall back
/// to showing every original column under its upper-cased header.
fn display_columns(headers: &[String]) -> Vec<DisplayColumn> {
    let cols: Vec<DisplayColumn> = DISPLAY_ROLES
        .iter()
        .filter_map(|(role, candidates, label)| {
            find_header_index(headers, candidates).map(|index| DisplayColumn {
                role: *role,
                index,
                label: label.to_string(),
            })
        })
        .collect();

    if !cols.is_empty() {
        return cols;
    }

    headers
        .iter()
        .enumerate()
        .map(|(index, h)| DisplayColumn {
            role: DisplayRole::Verbatim,
            index,
            label: h.to_uppercase(),
        })
        .collect()
}

/// Project the grid into a [`RoundsView`].
///
/// The score cell is parsed leniently (no best-of-3 gate, display only):
/// whichever side's number is strictly higher gets its two player cells
/// marked as winning. Ties and unparseable scores mark nothing.
pub fn project_rounds(grid: &RawGrid) -> RoundsView {
    let cols = display_columns(&grid.headers);
    let score_col = cols
        .iter()
        .find(|c| c.role == DisplayRole::Score)
        .map(|c| c.index);

    let labels = cols.iter().map(|c| c.label.clone()).collect();

    let rows = grid
        .rows
        .iter()
        .map(|row| {
            let score = score_col
                .and_then(|i| row.get(i))
                .and_then(|cell| parse_score_lenient(cell));
            let (a_win, b_win) = match score {
                Some((a, b)) => (a > b, b > a),
                None => (false, false),
            };

            cols.iter()
                .map(|c| {
                    let raw = row.get(c.index).map(String::as_str).unwrap_or("").trim();
                    let base = if c.role == DisplayRole::Score && !raw.is_empty() {
                        normalize_separators(raw)
                    } else {
                        raw.to_string()
                    };

                    let winner = match c.role {
                        DisplayRole::Player1 | DisplayRole::Player2 => a_win,
                        DisplayRole::Player3 | DisplayRole::Player4 => b_win,
                        _ => false,
                    };

                    let text = if winner {
                        format!("{WIN_MARK}{base}")
                    } else {
                        base
                    };
                    RoundsCell { text, winner }
                })
                .collect()
        })
        .collect();

    RoundsView { labels, rows }
}
