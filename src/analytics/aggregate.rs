use std::collections::BTreeMap;

use crate::models::{Conference, PlayerSeasonRecord, TeamSeasonAggregate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Team,
    TeamSeason,
}

#[derive(Default)]
struct Accumulator {
    points: f64,
    assists: f64,
    rebounds: f64,
    fg: Mean,
    ft: Mean,
}

#[derive(Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn value(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

// Blank stats add nothing to a sum; output is ordered by team code, then season
pub fn aggregate(rows: &[PlayerSeasonRecord], group_by: GroupBy) -> Vec<TeamSeasonAggregate> {
    let mut groups: BTreeMap<(&str, Option<&str>), Accumulator> = BTreeMap::new();

    for row in rows.iter().filter(|row| !row.is_multi_team()) {
        let season = match group_by {
            GroupBy::Team => None,
            GroupBy::TeamSeason => Some(row.season.as_str()),
        };

        let acc = groups.entry((row.team.as_str(), season)).or_default();
        acc.points += present(row.points);
        acc.assists += present(row.assists);
        acc.rebounds += present(row.rebounds);
        acc.fg.push(row.fg_pct);
        acc.ft.push(row.ft_pct);
    }

    groups
        .into_iter()
        .map(|((team, season), acc)| TeamSeasonAggregate {
            team: team.to_string(),
            season: season.map(str::to_string),
            conference: Conference::of(team),
            points: acc.points,
            assists: acc.assists,
            rebounds: acc.rebounds,
            fg_pct: acc.fg.value(),
            ft_pct: acc.ft.value(),
            success: false,
        })
        .collect()
}

fn present(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}
