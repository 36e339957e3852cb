pub mod live;
pub mod loader;

pub use live::{HttpTeamTotalsSource, TeamTotalsSource, fetch_live_totals};
pub use loader::DataLoader;
