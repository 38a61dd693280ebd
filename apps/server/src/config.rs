use std::{net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use marketlens_core::quotes::TrendingMode;
use marketlens_market_data::provider::alpha_vantage::DEFAULT_BASE_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub api_key: String,
    pub api_base_url: String,
    pub db_path: String,
    pub sample_data_dir: String,
    pub upstream_timeout: Duration,
    pub request_timeout: Duration,
    pub trending_mode: TrendingMode,
    pub cors_allow: Vec<String>,
    pub static_dir: String,
    pub log_format: String,
}

impl Config {
    /// Reads the configuration from the process environment, loading `.env`
    /// first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api_key = lookup("ALPHA_VANTAGE_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow!("ALPHA_VANTAGE_API_KEY must be set"))?;

        let listen_addr: SocketAddr = var("ML_LISTEN_ADDR", "0.0.0.0:8000")
            .parse()
            .context("Invalid ML_LISTEN_ADDR")?;

        let millis = |key: &str, default: u64| -> anyhow::Result<Duration> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .with_context(|| format!("Invalid {}", key)),
                None => Ok(Duration::from_millis(default)),
            }
        };

        let trending_mode = var("ML_TRENDING_MODE", "sample")
            .parse::<TrendingMode>()
            .context("Invalid ML_TRENDING_MODE")?;

        let cors_allow = var("ML_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            listen_addr,
            api_key,
            api_base_url: var("ML_API_BASE_URL", DEFAULT_BASE_URL),
            db_path: var("ML_DB_PATH", "./db/stocks.db"),
            sample_data_dir: var("ML_SAMPLE_DATA_DIR", "./sample_data"),
            upstream_timeout: millis("ML_UPSTREAM_TIMEOUT_MS", 10_000)?,
            request_timeout: millis("ML_REQUEST_TIMEOUT_MS", 30_000)?,
            trending_mode,
            cors_allow,
            static_dir: var("ML_STATIC_DIR", "app/static"),
            log_format: var("ML_LOG_FORMAT", "text").to_lowercase(),
        })
    }
}
