//! Key/value stores for the saved planner blob
//!
//! The planner only ever reads and writes one opaque string under one key.
//! Stores report failures as errors; deciding to ignore them is the
//! planner's business, not the store's.

use std::collections::HashMap;
use std::path::PathBuf;

use super::file_io::{read_text, write_text_atomic};
use crate::error::{PlannerError, PlannerResult};

/// Durable string storage keyed by name
pub trait StateStore {
    /// Read the value stored under `key`, `None` if nothing is stored
    fn load(&self, key: &str) -> PlannerResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&mut self, key: &str, value: &str) -> PlannerResult<()>;
}

/// A store that lives and dies with the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStateStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `value` under `key`
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }

    /// Make every call fail, as a disabled storage area would
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Peek at a stored value without going through the trait
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, key: &str) -> PlannerResult<Option<String>> {
        if self.unavailable {
            return Err(PlannerError::Storage("storage is unavailable".into()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> PlannerResult<()> {
        if self.unavailable {
            return Err(PlannerError::Storage("storage is unavailable".into()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// Store files under `dir`, created on first write
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn file_for(&self, key: &str) -> PlannerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(PlannerError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl StateStore for FileStateStore {
    fn load(&self, key: &str) -> PlannerResult<Option<String>> {
        read_text(self.file_for(key)?)
    }

    fn save(&mut self, key: &str, value: &str) -> PlannerResult<()> {
        write_text_atomic(self.file_for(key)?, value)
    }
}
