use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{storage::FileStore, weather::OpenMeteoProvider};

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Override of the Open-Meteo forecast URL, e.g. for a self-hosted instance.
    pub weather_endpoint: Option<String>,

    /// Where the consent flag is persisted. Defaults to the platform data dir.
    pub storage_path: Option<PathBuf>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "tripsite", "tripsite")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn weather_provider(&self) -> OpenMeteoProvider {
        match &self.weather_endpoint {
            Some(endpoint) => OpenMeteoProvider::with_endpoint(endpoint.clone()),
            None => OpenMeteoProvider::new(),
        }
    }

    pub fn consent_store(&self) -> Result<FileStore> {
        match &self.storage_path {
            Some(path) => Ok(FileStore::new(path.clone())),
            None => FileStore::open_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{storage::tests::scratch_path, weather::open_meteo::DEFAULT_ENDPOINT};

    #[test]
    fn default_uses_public_endpoint() {
        let cfg = Config::default();
        assert_eq!(cfg.weather_provider().endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn endpoint_override_is_used() {
        let cfg = Config {
            weather_endpoint: Some("http://localhost:8080/v1/forecast".into()),
            ..Default::default()
        };
        assert_eq!(cfg.weather_provider().endpoint(), "http://localhost:8080/v1/forecast");
    }

    #[test]
    fn storage_override_is_used() {
        let cfg = Config { storage_path: Some("/tmp/x/storage.toml".into()), ..Default::default() };
        let store = cfg.consent_store().expect("explicit path needs no platform dirs");
        assert_eq!(store.path(), std::path::Path::new("/tmp/x/storage.toml"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let cfg = Config::load_from(&scratch_path("no-config")).expect("missing file is fine");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let path = scratch_path("config").with_file_name("config.toml");
        let cfg = Config {
            weather_endpoint: Some("http://127.0.0.1:9/v1/forecast".into()),
            storage_path: None,
        };
        cfg.save_to(&path).expect("save");

        assert_eq!(Config::load_from(&path).expect("load"), cfg);

        if let Some(dir) = path.parent() {
            fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn malformed_file_reports_path() {
        let path = scratch_path("bad-config").with_file_name("config.toml");
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).unwrap();
        }
        fs::write(&path, "weather_endpoint = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        if let Some(dir) = path.parent() {
            fs::remove_dir_all(dir).ok();
        }
    }
}
