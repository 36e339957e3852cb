use std::{path::PathBuf, str::FromStr, time::Duration};

pub const DEFAULT_LIVE_STATS_URL: &str = "https://stats.nba.com/stats/leaguedashteamstats";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub port: u16,
    // None allows any origin
    pub allowed_origins: Option<Vec<String>>,
    pub rate_limit_per_minute: u32,
    pub live_stats_url: String,
    pub live_stats_timeout: Duration,
    pub live_stats_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            port: 8000,
            allowed_origins: None,
            rate_limit_per_minute: 1000,
            live_stats_url: DEFAULT_LIVE_STATS_URL.to_string(),
            live_stats_timeout: Duration::from_secs(10),
            live_stats_delay: Duration::from_millis(1000),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty() && !origins.iter().any(|o| o == "*"));

        let live_stats_url =
            std::env::var("LIVE_STATS_URL").unwrap_or(defaults.live_stats_url);

        Self {
            data_dir,
            port: env_or("PORT", defaults.port),
            allowed_origins,
            rate_limit_per_minute: env_or("RATE_LIMIT_PER_MINUTE", defaults.rate_limit_per_minute)
                .max(1),
            live_stats_url,
            live_stats_timeout: Duration::from_secs(env_or(
                "LIVE_STATS_TIMEOUT_SECS",
                defaults.live_stats_timeout.as_secs(),
            )),
            live_stats_delay: Duration::from_millis(env_or(
                "LIVE_STATS_DELAY_MS",
                defaults.live_stats_delay.as_millis() as u64,
            )),
        }
    }
}

fn env_or<T: FromStr + Copy + std::fmt::Debug>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {:?}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
