use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use vellum_ai::{ConfigStore, ConfigStoreError};

/// Key-value config store persisted as one JSON object on disk.
///
/// Entries are kept in memory and rewritten as a whole on every `set`,
/// so reads never touch the filesystem after startup. A missing or
/// unreadable file starts the store empty instead of failing; writes
/// then recreate it.
pub(crate) struct JsonFileConfigStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileConfigStore {
    pub(crate) fn open_default() -> Self {
        JsonFileConfigStore::open(default_config_path())
    }

    pub(crate) fn open(path: PathBuf) -> Self {
        let entries = read_entries(&path);

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn persist(
        &self,
        entries: &BTreeMap<String, String>,
    ) -> Result<(), ConfigStoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_string_pretty(entries)?;
        write_atomic(&self.path, payload.as_bytes())?;

        Ok(())
    }
}

impl ConfigStore for JsonFileConfigStore {
    fn get(&self, entry: &str) -> Option<String> {
        self.entries.lock().ok()?.get(entry).cloned()
    }

    fn set(&self, entry: &str, value: &str) -> Result<(), ConfigStoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| std::io::Error::other("config store lock poisoned"))
            .map_err(ConfigStoreError::Io)?;

        entries.insert(String::from(entry), String::from(value));
        self.persist(&entries)
    }
}

fn read_entries(path: &Path) -> BTreeMap<String, String> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return BTreeMap::new();
        },
        Err(err) => {
            log::warn!("config file {} unreadable: {err}", path.display());
            return BTreeMap::new();
        },
    };

    match serde_json::from_str(&data) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!(
                "config file {} is not valid JSON, starting empty: {err}",
                path.display()
            );
            BTreeMap::new()
        },
    }
}

fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("vellum")
            .join("config.json");
    }

    std::env::temp_dir().join("vellum").join("config.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
