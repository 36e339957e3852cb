use std::sync::Arc;

use crate::{
    config::AppConfig,
    data::{DataLoader, TeamTotalsSource},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub loader: DataLoader,
    pub live: Arc<dyn TeamTotalsSource>,
}

impl AppState {
    pub fn new(config: AppConfig, live: Arc<dyn TeamTotalsSource>) -> Self {
        let loader = DataLoader::new(config.data_dir.clone());
        Self {
            config: Arc::new(config),
            loader,
            live,
        }
    }
}
