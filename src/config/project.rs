use crate::config::schema::LauncherConfig;
use crate::config::validate_launcher_config;
use crate::core::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

const LAUNCHER_CONFIG_FILE: &str = "launcher.toml";

/// Optional `launcher.toml` sitting next to the launcher.
pub struct LauncherConfigManager {
    config_path: PathBuf,
}

impl LauncherConfigManager {
    pub fn new(root: &Path) -> Self {
        Self {
            config_path: root.join(LAUNCHER_CONFIG_FILE),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    pub async fn load(&self) -> Result<LauncherConfig> {
        if !self.exists() {
            return Ok(LauncherConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).await?;
        let config: LauncherConfig = toml::from_str(&content)?;
        validate_launcher_config(&config)?;
        Ok(config)
    }
}
