use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::{ConfigError, EngineConfig};
use crate::utils::persistence::replace_file;

const APP_DIR: &str = "budget_engine";
const CONFIG_FILE: &str = "config.json";

/// Handles persistence for [`EngineConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Uses `<base>/config/config.json`, creating the directory when needed.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE)))
    }

    /// Platform configuration directory, falling back to the working directory.
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<EngineConfig, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(EngineConfig::default())
        }
    }

    pub fn save(&self, config: &EngineConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        replace_file(&self.config_path, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TopLevelGrouping;
    use crate::utils::persistence::tmp_path;
    use tempfile::tempdir;

    #[test]
    fn load_without_file_returns_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        assert_eq!(manager.load().expect("load"), EngineConfig::default());
    }

    #[test]
    fn save_then_load_restores_values() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

        let cfg = EngineConfig {
            unbudgeted_label: "Everything else".into(),
            top_level_grouping: TopLevelGrouping::OwnName,
            ..EngineConfig::default()
        };
        manager.save(&cfg).expect("save");

        assert!(manager.config_path().exists());
        assert!(!tmp_path(manager.config_path()).exists());
        assert_eq!(manager.load().expect("load"), cfg);
    }

    #[test]
    fn malformed_file_reports_serde_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").expect("write");
        let err = ConfigManager::new(path).load().expect_err("should fail");
        assert!(matches!(err, ConfigError::Serde(_)));
    }
}
