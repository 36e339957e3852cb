use std::fmt;

use crate::errors::AppError;

// `YYYY-YY`, e.g. `2023-24`, keyed by its start year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeasonId {
    start_year: i32,
}

impl SeasonId {
    pub const TRAINING_WINDOW: i32 = 7;

    pub fn from_start_year(start_year: i32) -> Self {
        Self { start_year }
    }

    // Any two-digit suffix is accepted; only the start year is kept
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let (start, end) = raw
            .trim()
            .split_once('-')
            .ok_or(AppError::InvalidSeasonFormat)?;

        if start.len() != 4 || end.len() != 2 {
            return Err(AppError::InvalidSeasonFormat);
        }
        if !start.chars().chain(end.chars()).all(|c| c.is_ascii_digit()) {
            return Err(AppError::InvalidSeasonFormat);
        }

        let start_year: i32 = start.parse().map_err(|_| AppError::InvalidSeasonFormat)?;

        Ok(Self { start_year })
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    // Oldest first, this season excluded
    pub fn training_window(&self) -> Vec<SeasonId> {
        (self.start_year - Self::TRAINING_WINDOW..self.start_year)
            .map(SeasonId::from_start_year)
            .collect()
    }

    pub fn file_key(&self) -> String {
        self.to_string().replace('-', "_")
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:02}",
            self.start_year,
            (self.start_year + 1).rem_euclid(100)
        )
    }
}
