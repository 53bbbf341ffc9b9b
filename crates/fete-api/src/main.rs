//! fete server binary.
//!
//! Reads `config.toml` (or the path given with `--config`, plus `FETE_*`
//! environment overrides), opens the flat-file invitation store under the
//! configured data directory, and serves the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use fete_api::{AppState, ServerConfig, auth::AuthConfig};
use fete_config::ConfigStore;
use fete_store_flatfile::{DEFAULT_SHARD_CAPACITY, FlatFileStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "fete invitation server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("FETE"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let capacity =
    server_cfg.shard_capacity.unwrap_or(DEFAULT_SHARD_CAPACITY);
  let store =
    FlatFileStore::open_with_capacity(&server_cfg.data_dir, capacity)
      .await
      .with_context(|| {
        format!("failed to open store at {:?}", server_cfg.data_dir)
      })?;

  let state = AppState {
    store:  Arc::new(store),
    config: Arc::new(ConfigStore::new(&server_cfg.data_dir)),
    auth:   Arc::new(AuthConfig {
      admin_secret: server_cfg.admin_secret.clone(),
    }),
  };

  let app = fete_api::router(state).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
