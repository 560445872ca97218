use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use bookboard_core::{errors::BoardResult, persistence::KeyValueStore};
use eyre::WrapErr;
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

/// Key-value store backed by one JSON object on disk.
///
/// The file maps keys to string values, e.g. `{"reservations": "[...]"}`.
/// Every call reads the file afresh and every write replaces it whole, so the
/// file is the only state.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> eyre::Result<Option<Entries>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("Failed to read {}", self.path.display()));
            }
        };

        let entries = serde_json::from_slice(&bytes)
            .wrap_err_with(|| format!("{} is not a key-value JSON object", self.path.display()))?;
        Ok(Some(entries))
    }

    // Entries to update in place. A corrupt file is replaced rather than
    // blocking every later write.
    fn entries_for_update(&self) -> eyre::Result<Entries> {
        match self.read_entries() {
            Ok(entries) => Ok(entries.unwrap_or_default()),
            Err(e) if e.downcast_ref::<serde_json::Error>().is_some() => {
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable storage file");
                Ok(Entries::new())
            }
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &Entries) -> eyre::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }

        let data = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, data).wrap_err_with(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .wrap_err_with(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        let entries = self.read_entries()?;
        Ok(entries.and_then(|mut entries| entries.remove(key)))
    }

    fn set(&mut self, key: &str, value: &str) -> BoardResult<()> {
        let mut entries = self.entries_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;
        debug!(path = %self.path.display(), key, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BoardResult<()> {
        let mut entries = self.entries_for_update()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
            debug!(path = %self.path.display(), key, "Removed value");
        }
        Ok(())
    }
}
