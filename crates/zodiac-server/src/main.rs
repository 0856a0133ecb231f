//! zodiac-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the JSON
//! person store, and serves the person-list API over HTTP.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use zodiac_core::PersonListService;
use zodiac_store_json::JsonFileStore;

use crate::settings::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Zodiac person list server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(&cli.config)?;

  let store = JsonFileStore::new(&server_cfg.storage_path);
  tracing::info!(path = %store.path().display(), "opening person store");

  let service = PersonListService::open(store)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.storage_path))?;
  tracing::info!(count = service.len().await, "person list ready");

  let app = zodiac_api::api_router(Arc::new(service)).layer(TraceLayer::new_for_http());
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
