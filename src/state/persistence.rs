use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preferences could not be read")]
    Read,
    #[error("preferences are malformed")]
    Format,
    #[error("preferences could not be written")]
    Write,
}

/// Small synchronous key/value storage for user preferences.
pub trait PreferenceStore: fmt::Debug {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`. The value is durable once this returns `Ok`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

type Preferences = BTreeMap<String, String>;

/// The store used by the application on the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Box<dyn PreferenceStore> {
    let store = FileStore::new(FileStore::path());
    tracing::info!(path = %store.location().display(), "preferences file");
    Box::new(store)
}

#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Box<dyn PreferenceStore> {
    Box::new(LocalStorage)
}

/// Preferences kept as a JSON object in a single file.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path() -> std::path::PathBuf {
        let mut path = if let Some(project_dirs) =
            directories::ProjectDirs::from("dev", "oscarsalazar", "Portfolio")
        {
            project_dirs.data_dir().into()
        } else {
            std::env::current_dir().unwrap_or_default()
        };

        path.push("preferences.json");
        path
    }

    pub fn location(&self) -> &std::path::Path {
        &self.path
    }

    fn load(&self) -> Result<Option<Preferences>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(io_error(&err, StoreError::Read)),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|_| StoreError::Format)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.and_then(|mut preferences| preferences.remove(key)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A malformed file is replaced rather than blocking every later write.
        let mut preferences = self.load().ok().flatten().unwrap_or_default();
        preferences.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&preferences).map_err(|_| StoreError::Format)?;

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|err| io_error(&err, StoreError::Write))?;
        }

        std::fs::write(&self.path, json.as_bytes())
            .map_err(|err| io_error(&err, StoreError::Write))
    }
}

/// A location the process may not touch is unavailable, like disabled browser
/// storage. Any other I/O failure maps to `fallback`.
#[cfg(not(target_arch = "wasm32"))]
fn io_error(err: &std::io::Error, fallback: StoreError) -> StoreError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => StoreError::Unavailable,
        _ => fallback,
    }
}

/// The browser's `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        window.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage.get_item(key).map_err(|_| StoreError::Read)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| StoreError::Write)
    }
}

/// In-memory store. `unavailable()` behaves like disabled storage.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MemoryStore {
    values: Preferences,
    available: bool,
}

#[cfg(test)]
impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            values: Preferences::new(),
            available: true,
        }
    }
}

#[cfg(test)]
impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
