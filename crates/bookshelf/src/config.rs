//! Configuration for the bookshelf tools
//!
//! The root directory is `~/.bookshelf`, or `BOOKSHELF_ROOT` when set. An
//! optional `config.json` in the root can move the data directory or change
//! the storage key; every field has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::storage::FileStorage;
use crate::store::STORAGE_KEY;

pub const ROOT_ENV_VAR: &str = "BOOKSHELF_ROOT";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Where the collection is stored; relative paths are taken from the root
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data_dir: Option<PathBuf>,
  /// Key the collection is stored under
  #[serde(default = "default_storage_key")]
  pub storage_key: String,

  #[serde(skip)]
  root: PathBuf,
}

fn default_storage_key() -> String {
  STORAGE_KEY.to_string()
}

impl Config {
  /// Defaults anchored at `root`
  pub fn with_root(root: impl Into<PathBuf>) -> Self {
    Self { data_dir: None, storage_key: default_storage_key(), root: root.into() }
  }

  /// Resolve the root and read `config.json` from it if present
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&get_root()?)
  }

  /// Read `config.json` from `root`, falling back to defaults when absent
  pub fn load_from(root: &Path) -> Result<Self, ConfigError> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
      return Ok(Self::with_root(root));
    }

    let content =
      std::fs::read_to_string(&path).map_err(|source| ConfigError::Read { path: path.clone(), source })?;
    let mut config: Config =
      serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?;
    config.root = root.to_path_buf();
    Ok(config)
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn data_dir(&self) -> PathBuf {
    match &self.data_dir {
      Some(dir) if dir.is_absolute() => dir.clone(),
      Some(dir) => self.root.join(dir),
      None => self.root.clone(),
    }
  }

  pub fn storage(&self) -> FileStorage {
    FileStorage::new(self.data_dir())
  }
}

/// Get the bookshelf root directory (~/.bookshelf)
pub fn get_root() -> Result<PathBuf, ConfigError> {
  if let Ok(custom_root) = std::env::var(ROOT_ENV_VAR) {
    return Ok(PathBuf::from(custom_root));
  }

  let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
  Ok(home.join(".bookshelf"))
}
