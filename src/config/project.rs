use crate::config::schema::HashgenConfig;
use crate::config::validate_config;
use crate::core::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const CONFIG_FILE: &str = "hashgen.toml";

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(root: &Path) -> Self {
        Self {
            config_path: root.join(CONFIG_FILE),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    /// Load `hashgen.toml`, falling back to defaults when the file is absent.
    pub async fn load(&self) -> Result<HashgenConfig> {
        if !self.exists() {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE);
            return Ok(HashgenConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).await?;
        let config: HashgenConfig = toml::from_str(&content)?;
        validate_config(&config)?;
        tracing::debug!("Loaded {}", self.config_path.display());
        Ok(config)
    }
}
