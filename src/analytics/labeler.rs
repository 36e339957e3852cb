use std::collections::BTreeMap;

use crate::{
    analytics::filters::descending_nan_last,
    models::{Conference, TeamSeasonAggregate},
};

pub const PLAYOFF_SPOTS: usize = 10;

// Ties at the cutoff go to the team that comes first in `teams`; after
// `aggregate` that is the alphabetically earlier code
pub fn label_playoff_teams(teams: &mut [TeamSeasonAggregate]) {
    let mut groups: BTreeMap<(Option<&str>, Conference), Vec<usize>> = BTreeMap::new();
    for (idx, team) in teams.iter().enumerate() {
        groups
            .entry((team.season.as_deref(), team.conference))
            .or_default()
            .push(idx);
    }

    let mut winners = Vec::new();
    for (_, mut members) in groups {
        // Stable sort keeps input order among equal point totals.
        members.sort_by(|&a, &b| descending_nan_last(teams[a].points, teams[b].points));
        winners.extend(members.into_iter().take(PLAYOFF_SPOTS));
    }

    for team in teams.iter_mut() {
        team.success = false;
    }
    for idx in winners {
        teams[idx].success = true;
    }
}
