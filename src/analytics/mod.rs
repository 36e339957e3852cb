pub mod aggregate;
pub mod breakouts;
pub mod filters;
pub mod forest;
pub mod improvers;
pub mod labeler;
pub mod predictor;
pub mod trainer;

pub use aggregate::{GroupBy, aggregate};
pub use breakouts::rank_breakouts;
pub use forest::{Classifier, RandomForest};
pub use improvers::rank_improvers;
pub use labeler::label_playoff_teams;
pub use predictor::predict_playoff_teams;
pub use trainer::train_playoff_model;
