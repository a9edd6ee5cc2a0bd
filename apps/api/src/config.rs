use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory that receives exported PDF artifacts.
    pub export_dir: PathBuf,
    /// Artificial wait before the mock generator answers.
    pub generation_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            export_dir: std::env::var("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("exports")),
            generation_delay: Duration::from_millis(
                std::env::var("GENERATION_DELAY_MS")
                    .unwrap_or_else(|_| "1500".to_string())
                    .parse::<u64>()
                    .context("GENERATION_DELAY_MS must be a whole number of milliseconds")?,
            ),
        })
    }

    /// Config used by router tests: no delay, exports into `export_dir`.
    #[cfg(test)]
    pub fn for_tests(export_dir: PathBuf) -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            export_dir,
            generation_delay: Duration::ZERO,
        }
    }
}
