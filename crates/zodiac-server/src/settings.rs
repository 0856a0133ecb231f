//! Runtime configuration, layered from an optional TOML file and `ZODIAC_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use zodiac_store_json::{DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_FILE};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5080;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// Relative paths resolve against the working directory.
  pub storage_path: PathBuf,
}

impl ServerConfig {
  /// Read `file` (if it exists) and the environment on top of the defaults.
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    let default_storage = Path::new(DEFAULT_STORAGE_DIR).join(DEFAULT_STORAGE_FILE);

    let settings = config::Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("storage_path", default_storage.to_string_lossy().into_owned())?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("ZODIAC"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}
