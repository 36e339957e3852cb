pub mod conference;
pub mod outlook;
pub mod player;
pub mod season;
pub mod team;

pub use conference::Conference;
pub use player::PlayerSeasonRecord;
pub use season::SeasonId;
pub use team::TeamSeasonAggregate;
