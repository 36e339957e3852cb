use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use crate::{
    analytics::filters,
    errors::AppError,
    models::{PlayerSeasonRecord, SeasonId, player::RawPlayerRow},
};

pub const HISTORICAL_FILE: &str = "PlayerStats.csv";

const REQUIRED_COLUMNS: [&str; 11] = [
    "PLAYER_ID",
    "PLAYER_AGE",
    "TEAM_ABBREVIATION",
    "GP",
    "MIN",
    "PTS",
    "AST",
    "REB",
    "STL",
    "FG_PCT",
    "FT_PCT",
];

// Nothing is cached; each call goes back to disk
#[derive(Debug, Clone)]
pub struct DataLoader {
    data_dir: PathBuf,
}

impl DataLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn historical_path(&self) -> PathBuf {
        self.data_dir.join(HISTORICAL_FILE)
    }

    pub fn snapshot_path(&self, season: &SeasonId) -> PathBuf {
        self.data_dir
            .join(format!("PlayerStats_{}.csv", season.file_key()))
    }

    // Rows that saw the floor, multi-team aggregates removed
    pub fn load_historical(&self) -> Result<Vec<PlayerSeasonRecord>, AppError> {
        let path = self.historical_path();
        let rows = read_players_file(&path, None)?;
        let total = rows.len();
        let rows = filters::eligible_history(rows);

        tracing::info!(
            "Loaded {} of {} historical player rows from {}",
            rows.len(),
            total,
            path.display()
        );
        Ok(rows)
    }

    // A snapshot file, when present, wins over the historical slice. Empty means no data
    pub fn load_season(&self, season: &str) -> Result<Vec<PlayerSeasonRecord>, AppError> {
        if let Some(rows) = self.load_snapshot(season)? {
            return Ok(rows);
        }

        let historical = self.load_historical()?;
        Ok(season_slice(&historical, season))
    }

    pub fn load_season_from(
        &self,
        season: &str,
        historical: &[PlayerSeasonRecord],
    ) -> Result<Vec<PlayerSeasonRecord>, AppError> {
        if let Some(rows) = self.load_snapshot(season)? {
            return Ok(rows);
        }
        Ok(season_slice(historical, season))
    }

    fn load_snapshot(&self, season: &str) -> Result<Option<Vec<PlayerSeasonRecord>>, AppError> {
        // A malformed id cannot name a snapshot file.
        let Ok(season_id) = SeasonId::parse(season) else {
            return Ok(None);
        };

        let path = self.snapshot_path(&season_id);
        if !path.is_file() {
            return Ok(None);
        }

        let rows = read_players_file(&path, Some(season))?;
        let rows = filters::exclude_multi_team(rows);
        tracing::info!(
            "Loaded {} player rows for {} from snapshot {}",
            rows.len(),
            season,
            path.display()
        );
        Ok(Some(rows))
    }
}

fn season_slice(historical: &[PlayerSeasonRecord], season: &str) -> Vec<PlayerSeasonRecord> {
    let season = season.trim();
    let rows: Vec<PlayerSeasonRecord> = historical
        .iter()
        .filter(|row| row.season == season)
        .cloned()
        .collect();
    filters::exclude_multi_team(rows)
}

fn read_players_file(
    path: &Path,
    fallback_season: Option<&str>,
) -> Result<Vec<PlayerSeasonRecord>, AppError> {
    let file = File::open(path).map_err(|e| AppError::DataUnavailable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    read_players(file, fallback_season).map_err(|e| match e {
        AppError::DataUnavailable { reason, .. } => AppError::DataUnavailable {
            path: path.display().to_string(),
            reason,
        },
        other => other,
    })
}

pub(crate) fn read_players<R: Read>(
    rdr: R,
    fallback_season: Option<&str>,
) -> Result<Vec<PlayerSeasonRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader.headers()?.clone();
    let has = |name: &str| headers.iter().any(|h| h == name);

    let mut missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !has(*col))
        .collect();
    if !has("Name") && !has("PLAYER_NAME") {
        missing.push("Name");
    }
    if fallback_season.is_none() && !has("SEASON_ID") {
        missing.push("SEASON_ID");
    }
    if !missing.is_empty() {
        return Err(AppError::DataUnavailable {
            path: String::new(),
            reason: format!("missing columns: {}", missing.join(", ")),
        });
    }

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize::<RawPlayerRow>().enumerate() {
        match result {
            Ok(raw) => rows.push(raw.into_record(fallback_season)),
            Err(e) => {
                tracing::warn!("Skipping malformed player row {}: {}", line + 2, e);
            }
        }
    }
    Ok(rows)
}
