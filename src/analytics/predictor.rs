use crate::{
    analytics::{
        aggregate::{GroupBy, aggregate},
        filters::descending_nan_last,
        forest::{Classifier, RandomForest},
        trainer::train_playoff_model,
    },
    data::DataLoader,
    errors::AppError,
    models::{
        Conference, PlayerSeasonRecord, SeasonId,
        outlook::{ConferenceSplit, PlayoffOutlook, PlayoffPick, round_to},
        team::FeatureVector,
    },
};

pub const PLAYOFF_PICKS: usize = 10;

pub fn predict_playoff_teams<C: Classifier>(
    model: &C,
    season_rows: &[PlayerSeasonRecord],
    season: &str,
) -> Result<PlayoffOutlook, AppError> {
    if season_rows.is_empty() {
        return Err(AppError::NoPredictionData);
    }

    let teams = aggregate(season_rows, GroupBy::Team);
    if teams.is_empty() {
        return Err(AppError::NoPredictionData);
    }

    let features: Vec<FeatureVector> = teams.iter().map(|t| t.features()).collect();
    let probabilities = model.predict_probability(&features);

    let mut conferences = ConferenceSplit::default();
    for conference in Conference::ALL {
        let mut scored: Vec<(&str, f64)> = teams
            .iter()
            .zip(&probabilities)
            .filter(|(team, _)| team.conference == conference)
            .map(|(team, &p)| (team.team.as_str(), p))
            .collect();
        scored.sort_by(|a, b| descending_nan_last(a.1, b.1));

        *conferences.get_mut(conference) = scored
            .into_iter()
            .take(PLAYOFF_PICKS)
            .map(|(team, p)| PlayoffPick {
                team: team.to_string(),
                confidence: round_to(p * 100.0, 2),
            })
            .collect();
    }

    Ok(PlayoffOutlook {
        season: season.to_string(),
        conferences,
    })
}

pub fn playoff_outlook(loader: &DataLoader, season: &str) -> Result<PlayoffOutlook, AppError> {
    let season_id = SeasonId::parse(season)?;

    let historical = loader.load_historical()?;
    let model = train_playoff_model(RandomForest::default(), &historical, &season_id)?;

    let season_rows = loader.load_season_from(season, &historical)?;
    predict_playoff_teams(&model, &season_rows, season)
}
