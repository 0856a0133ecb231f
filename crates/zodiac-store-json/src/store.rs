//! [`JsonFileStore`] — the JSON file implementation of [`PersonStore`].

use std::path::{Path, PathBuf};

use tracing::debug;
use zodiac_core::{Person, PersonStore};

use crate::{Error, Result};

/// Directory, relative to the working directory, holding the default file.
pub const DEFAULT_STORAGE_DIR: &str = "Storage";

/// File name of the default storage file.
pub const DEFAULT_STORAGE_FILE: &str = "storage.json";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person list stored as a single JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  path: PathBuf,
}

impl JsonFileStore {
  /// A store backed by the file at `path`. Nothing is touched on disk until
  /// the first load or save.
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  /// A store at `Storage/storage.json` under the current working directory.
  pub fn in_working_dir() -> Result<Self> {
    let cwd = std::env::current_dir().map_err(|source| Error::Io {
      path: PathBuf::from("."),
      source,
    })?;
    Ok(Self::new(cwd.join(DEFAULT_STORAGE_DIR).join(DEFAULT_STORAGE_FILE)))
  }

  pub fn path(&self) -> &Path { &self.path }

  fn io_error(&self, source: std::io::Error) -> Error {
    Error::Io { path: self.path.clone(), source }
  }

  fn json_error(&self, source: serde_json::Error) -> Error {
    Error::Json { path: self.path.clone(), source }
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for JsonFileStore {
  type Error = Error;

  async fn load(&self) -> Result<Vec<Person>> {
    let bytes = tokio::fs::read(&self.path)
      .await
      .map_err(|e| self.io_error(e))?;
    let people: Vec<Person> =
      serde_json::from_slice(&bytes).map_err(|e| self.json_error(e))?;

    debug!(path = %self.path.display(), count = people.len(), "read person list");
    Ok(people)
  }

  async fn save(&self, people: &[Person]) -> Result<()> {
    let json =
      serde_json::to_vec_pretty(people).map_err(|e| self.json_error(e))?;

    if let Some(dir) = self.path.parent()
      && !dir.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| self.io_error(e))?;
    }
    tokio::fs::write(&self.path, json)
      .await
      .map_err(|e| self.io_error(e))?;

    debug!(path = %self.path.display(), count = people.len(), "wrote person list");
    Ok(())
  }
}
