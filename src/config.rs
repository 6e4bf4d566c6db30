use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILE: &str = "contacts.json";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub birthdays: BirthdaysConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_file: Option<PathBuf>,
    pub autosave: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_file: None, autosave: true }
    }
}

/// Upcoming birthday window and weekend policy
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BirthdaysConfig {
    pub window_days: i64,
    pub shift_weekend_to_monday: bool,
    /// Look at next year's occurrence once this year's has passed
    pub wrap_year_end: bool,
}

impl Default for BirthdaysConfig {
    fn default() -> Self {
        Self { window_days: 7, shift_weekend_to_monday: true, wrap_year_end: false }
    }
}

impl Config {
    /// Load from the platform config directory. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        match project_dirs() {
            Some(dirs) => Self::load_from(&dirs.config_dir().join(CONFIG_FILE)),
            None => {
                log::debug!("No home directory, using default configuration");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Data file from the config, else the platform data directory
    pub fn data_file(&self) -> PathBuf {
        if let Some(path) = &self.storage.data_file {
            return path.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(DATA_FILE))
            .unwrap_or_else(|| PathBuf::from(DATA_FILE))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "addressbook", "addressbook")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.birthdays.window_days, 7);
        assert!(config.birthdays.shift_weekend_to_monday);
        assert!(!config.birthdays.wrap_year_end);
        assert!(config.storage.autosave);
        assert_eq!(config.storage.data_file, None);
    }

    #[test]
    fn test_config_partial_toml() -> Result<()> {
        let config: Config = toml::from_str(
            r#"
            [birthdays]
            shift_weekend_to_monday = false
            "#,
        )?;
        assert!(!config.birthdays.shift_weekend_to_monday);
        assert_eq!(config.birthdays.window_days, 7);
        assert!(config.storage.autosave);
        Ok(())
    }

    #[test]
    fn test_config_missing_file_is_default() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("absent.toml");

        assert_eq!(Config::load_from(&path)?, Config::default());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[storage]\ndata_file = \"book.json\"\nautosave = false\n\n[birthdays]\nwindow_days = 14\n",
        )?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.storage.data_file, Some(PathBuf::from("book.json")));
        assert!(!loaded.storage.autosave);
        assert_eq!(loaded.birthdays.window_days, 14);
        assert!(loaded.birthdays.shift_weekend_to_monday);
        assert_eq!(loaded.data_file(), PathBuf::from("book.json"));
        Ok(())
    }

    #[test]
    fn test_config_malformed_file() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[birthdays\nwindow_days = ")?;

        assert!(Config::load_from(&path).is_err());
        Ok(())
    }
}
