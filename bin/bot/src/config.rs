use anyhow::Context as _;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use the_coach_analysis::{BenchmarkTable, ResourceCatalog};
use tokio::fs::read_to_string;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub discord_token: String,
    pub leetify_api_key: String,
    pub message_templates_path: PathBuf,
    pub resources_path: PathBuf,
    pub benchmarks: BenchmarkTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            discord_token: String::new(),
            leetify_api_key: String::new(),
            message_templates_path: PathBuf::from("assets/templates.toml"),
            resources_path: PathBuf::from("assets/resources.json"),
            benchmarks: BenchmarkTable::default(),
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
        config.discord_token = std::env::var("DISCORD_TOKEN")
            .ok()
            .unwrap_or(config.discord_token);
        config.leetify_api_key = std::env::var("LEETIFY_API_KEY")
            .ok()
            .unwrap_or(config.leetify_api_key);
        config.message_templates_path = std::env::var("MESSAGE_TEMPLATES_PATH")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(config.message_templates_path);
        config.resources_path = std::env::var("RESOURCES_PATH")
            .ok()
            .map(PathBuf::from)
            .unwrap_or(config.resources_path);

        anyhow::ensure!(!config.database_url.is_empty(), "DATABASE_URL is not set");
        anyhow::ensure!(!config.discord_token.is_empty(), "DISCORD_TOKEN is not set");
        Ok(config)
    }

    /// Read and parse the resource catalog at `resources_path`.
    pub async fn load_catalog(&self) -> anyhow::Result<ResourceCatalog> {
        let path = &self.resources_path;
        let contents = read_to_string(path)
            .await
            .with_context(|| format!("Failed to read resources from {path:?}"))?;
        ResourceCatalog::from_json(&contents)
            .with_context(|| format!("Failed to parse resources from {path:?}"))
    }

    async fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = read_to_string(path).await?;
        Ok(toml::from_str(&contents)?)
    }
}
