use config::{Config, File};
use serde::Deserialize;
use std::convert::TryFrom;
use std::error::Error;

/// Env/file defaults for the harness, merged under whatever `CliConfig` flags
/// the caller actually passed (CLI wins — see `ansv-harness::run`).
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub workers: usize,
    pub log_level: String,
    pub verify: bool,
}

impl TryFrom<Config> for AppConfig {
    type Error = Box<dyn Error>;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        Ok(Self {
            workers: config.get::<usize>("workers")?,
            log_level: config.get::<String>("log_level")?,
            verify: config.get::<bool>("verify")?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            workers: std::env::var("ANSV_WORKERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(Self::default_workers),
            log_level: std::env::var("ANSV_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            verify: std::env::var("ANSV_VERIFY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    #[allow(deprecated)]
    pub fn from_file() -> Self {
        let mut settings = Config::default();
        settings.merge(File::with_name("config")).unwrap();
        settings.try_into().unwrap()
    }

    fn default_workers() -> usize {
        std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    }

    pub fn default() -> Self {
        Self {
            workers: Self::default_workers(),
            log_level: "info".to_string(),
            verify: false,
        }
    }
}
