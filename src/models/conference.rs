use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub static EAST_TEAMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "BOS", "MIL", "PHI", "NYK", "MIA", "ATL", "CHI", "TOR", "IND", "CLE", "WAS", "CHA", "DET",
        "ORL", "BKN",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Conference {
    East,
    West,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::East, Conference::West];

    // Anything outside the East set is West, defunct codes included
    pub fn of(team: &str) -> Self {
        if EAST_TEAMS.contains(team) {
            Conference::East
        } else {
            Conference::West
        }
    }
}
