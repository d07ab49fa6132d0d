//! Configuration management

use crate::dashboard::DashboardConfig;
use crate::skills::SkillStore;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog file (TOML or JSON). `None` uses the embedded catalog
    pub data_path: Option<PathBuf>,

    /// Dashboard server settings
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let data_path = std::env::var("SKILLBOARD_DATA_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            data_path,
            dashboard: DashboardConfig::from_env(),
        })
    }

    /// Load the skill store this configuration points at
    pub async fn load_store(&self) -> Result<SkillStore> {
        match &self.data_path {
            Some(path) => SkillStore::load_from_file(path)
                .await
                .with_context(|| format!("Failed to load skill catalog {}", path.display())),
            None => {
                let store = SkillStore::builtin().context("Embedded skill catalog is invalid")?;
                info!("Loaded {} skills from embedded catalog", store.len());
                Ok(store)
            }
        }
    }
}
