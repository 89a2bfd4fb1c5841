use std::path::PathBuf;
use thiserror::Error;

/// Failures of the key-value backend. None of these are recovered from.
#[derive(Debug, Error)]
pub enum StorageError {
  #[error("Failed to access storage at {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to encode collection: {0}")]
  Encode(#[from] serde_json::Error),

  #[error("Storage unavailable: {0}")]
  Unavailable(String),
}

impl StorageError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    StorageError::Io { path: path.into(), source }
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Failed to read config file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse config file {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Could not find home directory")]
  NoHomeDirectory,
}
