use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

/// String key/value storage that survives page reloads.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A flat TOML table on disk, read on every lookup.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "tripsite", "tripsite")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(dirs.data_dir().join("storage.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file: {}", self.path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse storage file: {}", self.path.display()))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(mut items) => items.remove(key),
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "treating unreadable storage as empty");
                None
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(&items).context("Failed to serialize storage to TOML")?;

        fs::write(&self.path, toml)
            .with_context(|| format!("Failed to write storage file: {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    pub(crate) fn scratch_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
        std::env::temp_dir()
            .join(format!("tripsite-{name}-{}-{nanos}", std::process::id()))
            .join("storage.toml")
    }

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get_item("cookieConsent"), None);

        store.set_item("cookieConsent", "accepted").unwrap();
        assert_eq!(store.get_item("cookieConsent").as_deref(), Some("accepted"));
    }

    #[test]
    fn file_store_missing_file_reads_empty() {
        let store = FileStore::new(scratch_path("missing"));
        assert_eq!(store.get_item("cookieConsent"), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let path = scratch_path("persist");
        let mut store = FileStore::new(&path);
        store.set_item("cookieConsent", "rejected").unwrap();
        store.set_item("other", "1").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get_item("cookieConsent").as_deref(), Some("rejected"));
        assert_eq!(reopened.get_item("other").as_deref(), Some("1"));

        if let Some(dir) = path.parent() {
            fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn default_path_is_named_storage_toml() {
        if let Ok(path) = FileStore::default_path() {
            assert!(path.ends_with("storage.toml"));
        }
    }
}
