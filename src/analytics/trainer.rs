use crate::{
    analytics::{
        aggregate::{GroupBy, aggregate},
        forest::Classifier,
        labeler::label_playoff_teams,
    },
    errors::AppError,
    models::{PlayerSeasonRecord, SeasonId, team::FeatureVector},
};

pub fn train_playoff_model<C: Classifier>(
    mut classifier: C,
    historical: &[PlayerSeasonRecord],
    season: &SeasonId,
) -> Result<C, AppError> {
    let window: Vec<String> = season
        .training_window()
        .iter()
        .map(SeasonId::to_string)
        .collect();

    let rows: Vec<PlayerSeasonRecord> = historical
        .iter()
        .filter(|row| window.contains(&row.season))
        .cloned()
        .collect();

    if rows.is_empty() {
        tracing::warn!(
            "No training rows for {} (window {} to {})",
            season,
            window.first().map(String::as_str).unwrap_or("?"),
            window.last().map(String::as_str).unwrap_or("?")
        );
        return Err(AppError::NoTrainingData);
    }

    let mut teams = aggregate(&rows, GroupBy::TeamSeason);
    label_playoff_teams(&mut teams);

    let features: Vec<FeatureVector> = teams.iter().map(|t| t.features()).collect();
    let labels: Vec<bool> = teams.iter().map(|t| t.success).collect();

    classifier.fit(&features, &labels)?;

    tracing::info!(
        "Trained playoff model for {} on {} team-seasons ({} playoff-bound)",
        season,
        teams.len(),
        labels.iter().filter(|&&l| l).count()
    );
    Ok(classifier)
}
