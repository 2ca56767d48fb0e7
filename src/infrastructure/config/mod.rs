use crate::domain::discover::DISCOVER_CACHE_TTL;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upstream_base_url: String,
    pub discover_cache_ttl: Duration,
    pub views_file: PathBuf,
    pub views_flush_interval: Duration,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| "https://ophim1.com".to_string()),
            discover_cache_ttl: match env::var("DISCOVER_CACHE_TTL_SECS") {
                Ok(raw) => Duration::from_secs(raw.parse()?),
                Err(_) => DISCOVER_CACHE_TTL,
            },
            views_file: env::var("VIEWS_FILE")
                .unwrap_or_else(|_| "views.json".to_string())
                .into(),
            views_flush_interval: Duration::from_secs(
                env::var("VIEWS_FLUSH_INTERVAL_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()?,
            ),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }
}
