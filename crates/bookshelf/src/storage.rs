//! Key-value backends the collection is persisted to

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StorageError;

/// Minimal string-to-string storage, in the shape of browser local storage
pub trait KeyValueStorage {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
  fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
  dir: PathBuf,
}

impl FileStorage {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  pub fn path_for(&self, key: &str) -> PathBuf {
    self.dir.join(format!("{key}.json"))
  }
}

impl KeyValueStorage for FileStorage {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
    let path = self.path_for(key);
    match fs::read_to_string(&path) {
      Ok(content) => Ok(Some(content)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(StorageError::io(path, e)),
    }
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
    fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;

    // Write next to the target and rename so readers never see a partial entry
    let path = self.path_for(key);
    let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;
    tmp.write_all(value.as_bytes()).map_err(|e| StorageError::io(tmp.path(), e))?;
    tmp.persist(&path).map_err(|e| StorageError::io(&path, e.error))?;

    tracing::debug!(path = %path.display(), bytes = value.len(), "wrote storage entry");
    Ok(())
  }
}

/// Non-durable storage held in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
  entries: HashMap<String, String>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Start with a single entry already present
  pub fn with_entry(key: &str, value: &str) -> Self {
    let mut entries = HashMap::new();
    entries.insert(key.to_string(), value.to_string());
    Self { entries }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl KeyValueStorage for MemoryStorage {
  fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
    self.entries.insert(key.to_string(), value.to_string());
    Ok(())
  }
}
