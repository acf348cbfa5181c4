//! Standings computation: folds the rounds grid into per-player aggregates
//! and produces a deterministically ranked table.

use serde::Serialize;
use std::collections::HashMap;

use crate::model::{is_placeholder_name, parse_round_number, parse_score, Side};
use crate::sheet::{resolve_role, RawGrid, RoleSpec};

/// Every player on the winning pair takes 3 points per match won.
pub const POINTS_PER_WIN: u32 = 3;

const ROUND: RoleSpec = RoleSpec {
    candidates: &["round"],
    fallback: Some(0),
};
const PLAYER1: RoleSpec = RoleSpec {
    candidates: &["player1", "player 1"],
    fallback: Some(1),
};
const PLAYER2: RoleSpec = RoleSpec {
    candidates: &["player2", "player 2"],
    fallback: Some(2),
};
// Index 3 is the conventional cosmetic "vs" column, never a data role.
const PLAYER3: RoleSpec = RoleSpec {
    candidates: &["player3", "player 3"],
    fallback: Some(4),
};
const PLAYER4: RoleSpec = RoleSpec {
    candidates: &["player4", "player 4"],
    fallback: Some(5),
};
const SCORE: RoleSpec = RoleSpec {
    candidates: &["score", "result"],
    fallback: Some(6),
};

/// Running totals for one player, keyed by exact trimmed name.
#[derive(Debug, Clone, Default)]
pub struct PlayerAggregate {
    pub name: String,
    pub points: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
}

impl PlayerAggregate {
    fn set_diff(&self) -> i64 {
        self.sets_won as i64 - self.sets_lost as i64
    }
}

/// One line of the ranked standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsRow {
    pub place: u32,
    pub name: String,
    pub points: u32,
    pub sets_record: String,
}

/// Columns the standings pass reads, resolved once per grid.
struct StandingsColumns {
    round: Option<usize>,
    player1: Option<usize>,
    player2: Option<usize>,
    player3: Option<usize>,
    player4: Option<usize>,
    score: Option<usize>,
}

impl StandingsColumns {
    fn resolve(headers: &[String]) -> Self {
        let cols = Self {
            round: resolve_role(headers, ROUND),
            player1: resolve_role(headers, PLAYER1),
            player2: resolve_role(headers, PLAYER2),
            player3: resolve_role(headers, PLAYER3),
            player4: resolve_role(headers, PLAYER4),
            score: resolve_role(headers, SCORE),
        };
        log::debug!(
            "standings columns: round={:?} p1={:?} p2={:?} p3={:?} p4={:?} score={:?}",
            cols.round,
            cols.player1,
            cols.player2,
            cols.player3,
            cols.player4,
            cols.score
        );
        cols
    }
}

/// Cell read that is total over absent roles and short rows.
fn read<'a>(row: &'a [String], col: Option<usize>) -> &'a str {
    col.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
}

/// Fold the rounds grid into a ranked standings table.
///
/// Rows without a parseable round number are skipped outright. Every
/// non-placeholder name on a surviving row is registered (so a player who
/// has only unplayed matches still shows up at 0/0-0). Score effects apply
/// only when the score is a valid best-of-3 result and both pairs have
/// exactly two named players.
pub fn compute_standings(grid: &RawGrid) -> Vec<StandingsRow> {
    let cols = StandingsColumns::resolve(&grid.headers);

    let mut stats: HashMap<String, PlayerAggregate> = HashMap::new();

    for row in &grid.rows {
        if parse_round_number(read(row, cols.round)).is_none() {
            continue;
        }

        let p1 = read(row, cols.player1).trim();
        let p2 = read(row, cols.player2).trim();
        let p3 = read(row, cols.player3).trim();
        let p4 = read(row, cols.player4).trim();

        for name in [p1, p2, p3, p4] {
            if !is_placeholder_name(name) {
                stats
                    .entry(name.to_string())
                    .or_insert_with(|| PlayerAggregate {
                        name: name.to_string(),
                        ..Default::default()
                    });
            }
        }

        let result = match parse_score(read(row, cols.score)) {
            Some(r) => r,
            None => continue,
        };

        let team_a: Vec<&str> = [p1, p2]
            .into_iter()
            .filter(|n| !is_placeholder_name(n))
            .collect();
        let team_b: Vec<&str> = [p3, p4]
            .into_iter()
            .filter(|n| !is_placeholder_name(n))
            .collect();
        if team_a.len() != 2 || team_b.len() != 2 {
            continue;
        }

        for name in &team_a {
            if let Some(s) = stats.get_mut(*name) {
                s.sets_won += result.team_a;
                s.sets_lost += result.team_b;
            }
        }
        for name in &team_b {
            if let Some(s) = stats.get_mut(*name) {
                s.sets_won += result.team_b;
                s.sets_lost += result.team_a;
            }
        }

        let winners = match result.winner() {
            Some(Side::A) => &team_a,
            Some(Side::B) => &team_b,
            None => continue,
        };
        for name in winners {
            if let Some(s) = stats.get_mut(*name) {
                s.points += POINTS_PER_WIN;
            }
        }
    }

    let mut list: Vec<PlayerAggregate> = stats.into_values().collect();
    list.sort_by(|x, y| {
        y.points
            .cmp(&x.points)
            .then_with(|| y.set_diff().cmp(&x.set_diff()))
            .then_with(|| y.sets_won.cmp(&x.sets_won))
            .then_with(|| x.name.cmp(&y.name))
    });

    list.into_iter()
        .enumerate()
        .map(|(idx, s)| StandingsRow {
            place: idx as u32 + 1,
            name: s.name,
            points: s.points,
            sets_record: format!("{}-{}", s.sets_won, s.sets_lost),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(headers: &[&str], rows: &[&[&str]]) -> RawGrid {
        RawGrid {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    const HEADERS: &[&str] = &["Round", "Player1", "Player2", "vs", "Player3", "Player4", "Score"];

    fn row_of(standings: &[StandingsRow], name: &str) -> StandingsRow {
        standings
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .unwrap_or_else(|| panic!("no standings row for {name}"))
    }

    #[test]
    fn test_single_match() {
        let g = grid(
            HEADERS,
            &[&[
                "1",
                "Ran Halifa",
                "Tal Shor",
                "vs",
                "Omer Muallem",
                "Lior Usishkin Engelchin",
                "2-0",
            ]],
        );
        let standings = compute_standings(&g);
        assert_eq!(standings.len(), 4);

        for winner in ["Ran Halifa", "Tal Shor"] {
            let r = row_of(&standings, winner);
            assert_eq!(r.points, 3);
            assert_eq!(r.sets_record, "2-0");
        }
        for loser in ["Omer Muallem", "Lior Usishkin Engelchin"] {
            let r = row_of(&standings, loser);
            assert_eq!(r.points, 0);
            assert_eq!(r.sets_record, "0-2");
        }

        // Winners ahead of losers; equal winners ordered by name.
        assert_eq!(standings[0].name, "Ran Halifa");
        assert_eq!(standings[1].name, "Tal Shor");
        assert_eq!(standings[0].place, 1);
        assert_eq!(standings[1].place, 2);
        assert_eq!(standings[2].place, 3);
        assert_eq!(standings[3].place, 4);
    }

    #[test]
    fn test_row_without_round_number_is_ignored() {
        let g = grid(
            HEADERS,
            &[&["", "Ran", "Tal", "vs", "Omer", "Lior", "2-0"]],
        );
        assert!(compute_standings(&g).is_empty());
    }

    #[test]
    fn test_unparsed_score_still_registers_players() {
        let g = grid(HEADERS, &[&["1", "Ran", "Tal", "vs", "Omer", "Lior", ""]]);
        let standings = compute_standings(&g);
        assert_eq!(standings.len(), 4);
        for r in &standings {
            assert_eq!(r.points, 0);
            assert_eq!(r.sets_record, "0-0");
        }
    }

    #[test]
    fn test_placeholder_slot_blocks_score_effects() {
        // "Player 1" is a template slot, so Team A has only one real member
        // and the 2-0 must not count for anyone.
        let g = grid(
            HEADERS,
            &[&["1", "Player 1", "Tal", "vs", "Omer", "Lior", "2-0"]],
        );
        let standings = compute_standings(&g);
        assert_eq!(standings.len(), 3);
        assert!(standings.iter().all(|r| r.name != "Player 1"));
        for r in &standings {
            assert_eq!(r.points, 0);
            assert_eq!(r.sets_record, "0-0");
        }
    }

    #[test]
    fn test_sets_accumulate_across_rounds() {
        let g = grid(
            HEADERS,
            &[
                &["1", "Ran", "Tal", "vs", "Omer", "Lior", "2-1"],
                &["2", "Ran", "Omer", "vs", "Tal", "Lior", "1-2"],
            ],
        );
        let standings = compute_standings(&g);
        let ran = row_of(&standings, "Ran");
        assert_eq!(ran.points, 3);
        assert_eq!(ran.sets_record, "3-3");
        let tal = row_of(&standings, "Tal");
        assert_eq!(tal.points, 6);
        assert_eq!(tal.sets_record, "4-2");
    }

    #[test]
    fn test_tie_breaks() {
        // Dana and Gil both end on 6 points; Dana is 4-1 in sets, Gil 4-3,
        // so Dana leads on set differential.
        let g = grid(
            HEADERS,
            &[
                &["1", "Dana", "Eli", "vs", "Gil", "Noa", "2-0"],
                &["2", "Ben", "Gil", "vs", "Eli", "Noa", "2-0"],
                &["3", "Ben", "Noa", "vs", "Dana", "Gil", "1-2"],
            ],
        );
        let standings = compute_standings(&g);
        let dana = row_of(&standings, "Dana");
        let gil = row_of(&standings, "Gil");
        assert_eq!(dana.points, 6);
        assert_eq!(gil.points, 6);
        assert_eq!(dana.sets_record, "4-1");
        assert_eq!(gil.sets_record, "4-3");
        assert!(dana.place < gil.place);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let g = grid(
            HEADERS,
            &[
                &["1", "Ran", "Tal", "vs", "Omer", "Lior", "2-0"],
                &["2", "Ran", "Omer", "vs", "Tal", "Lior", "2-1"],
            ],
        );
        let first = compute_standings(&g);
        for _ in 0..10 {
            assert_eq!(compute_standings(&g), first);
        }
    }

    #[test]
    fn test_renamed_headers_resolve_fuzzily() {
        let g = grid(
            &["Round No", "Player 1:", "Player 2", "vs", "Player 3", "Player 4", "Final Result"],
            &[&["1", "Ran", "Tal", "vs", "Omer", "Lior", "2-0"]],
        );
        let standings = compute_standings(&g);
        assert_eq!(row_of(&standings, "Ran").points, 3);
    }

    #[test]
    fn test_headerless_grid_uses_positional_fallbacks() {
        // Headers carry no recognizable labels at all; the conventional
        // column layout still applies.
        let g = grid(
            &["a", "b", "c", "d", "e", "f", "g"],
            &[&["1", "Ran", "Tal", "vs", "Omer", "Lior", "2-0"]],
        );
        let standings = compute_standings(&g);
        assert_eq!(row_of(&standings, "Ran").points, 3);
        assert_eq!(row_of(&standings, "Omer").sets_record, "0-2");
    }
}
