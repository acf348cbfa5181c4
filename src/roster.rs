//! Roster derivation: distinct players from the rounds grid, with the
//! display fields (initials, avatar path, optional bio) the player cards
//! are built from.

use std::collections::{BTreeSet, HashMap};

use crate::model::{initials, is_placeholder_name, player_image_path};
use crate::sheet::{resolve_role, RawGrid, RoleSpec};

const PLAYER_SLOTS: [RoleSpec; 4] = [
    RoleSpec {
        candidates: &["player1", "player 1"],
        fallback: Some(1),
    },
    RoleSpec {
        candidates: &["player2", "player 2"],
        fallback: Some(2),
    },
    RoleSpec {
        candidates: &["player3", "player 3"],
        fallback: Some(4),
    },
    RoleSpec {
        candidates: &["player4", "player 4"],
        fallback: Some(5),
    },
];

/// Read-only card for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub name: String,
    pub initials: String,
    pub image_path: Option<String>,
    pub bio: Option<String>,
}

/// Distinct non-placeholder player names, alphabetically sorted.
pub fn player_names(grid: &RawGrid) -> Vec<String> {
    let slots: Vec<Option<usize>> = PLAYER_SLOTS
        .iter()
        .map(|spec| resolve_role(&grid.headers, *spec))
        .collect();

    let mut names = BTreeSet::new();
    for row in &grid.rows {
        for col in slots.iter().flatten() {
            let name = row.get(*col).map(String::as_str).unwrap_or("").trim();
            if !is_placeholder_name(name) {
                names.insert(name.to_string());
            }
        }
    }
    names.into_iter().collect()
}

/// Build player cards, pairing each name with a bio from the supplied map
/// (keyed by exact name) when one exists.
pub fn build_roster(grid: &RawGrid, bios: &HashMap<String, String>) -> Vec<PlayerCard> {
    player_names(grid)
        .into_iter()
        .map(|name| PlayerCard {
            initials: initials(&name),
            image_path: player_image_path(&name),
            bio: bios.get(&name).cloned(),
            name,
        })
        .collect()
}
