use anyhow::Context as _;
use serde::Deserialize;
use std::path::Path;
use tokio::fs::read_to_string;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub leetify_api_key: String,
    /// Pause between two polls of every watched player.
    pub iteration_secs: u64,
    /// Pause between two requests to the Leetify API.
    pub request_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            leetify_api_key: String::new(),
            iteration_secs: 300,
            request_interval_ms: 1000,
        }
    }
}

impl Config {
    pub async fn load(path: Option<impl AsRef<Path>>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_file(path).await?,
            None => Default::default(),
        };

        config.database_url = std::env::var("DATABASE_URL")
            .ok()
            .unwrap_or(config.database_url);
        config.leetify_api_key = std::env::var("LEETIFY_API_KEY")
            .ok()
            .unwrap_or(config.leetify_api_key);
        config.iteration_secs = env_number("ITERATION_SECS")?.unwrap_or(config.iteration_secs);
        config.request_interval_ms =
            env_number("REQUEST_INTERVAL_MS")?.unwrap_or(config.request_interval_ms);

        anyhow::ensure!(!config.database_url.is_empty(), "DATABASE_URL is not set");
        Ok(config)
    }

    async fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = read_to_string(path).await?;
        Ok(toml::from_str(&contents)?)
    }
}

fn env_number(name: &str) -> anyhow::Result<Option<u64>> {
    std::env::var(name)
        .ok()
        .map(|value| value.parse().with_context(|| format!("{name} should be numeric")))
        .transpose()
}
