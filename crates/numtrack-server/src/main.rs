//! numtrack server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! record store, and serves the JSON API over HTTP under `/api`.

mod config;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use numtrack_api::AppState;
use numtrack_store_sqlite::SqliteStore;
use numtrack_tracker::Tracker;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "numtrack phone-number tracker server")]
struct Cli {
  /// Path to the TOML configuration file. Missing files are ignored.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Address to bind, overriding the config file.
  #[arg(long)]
  host: Option<String>,

  /// Port to bind, overriding the config file.
  #[arg(short, long)]
  port: Option<u16>,
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
  let server_cfg = load_config(&cli)?;

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let geocoder = server_cfg
    .geocoder
    .build()
    .context("failed to build geocoder client")?;
  if !server_cfg.geocoder.enabled {
    tracing::info!("geocoding disabled; location lookups will omit coordinates");
  }

  let tracker = Tracker::new(store, geocoder).with_default_region(server_cfg.default_region());
  let state = AppState::new(tracker, expand_tilde(&server_cfg.backup_dir));

  let app = numtrack_api::app(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}/api");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<ServerConfig> {
  let settings = ::config::Config::builder()
    .add_source(::config::File::from(cli.config.clone()).required(false))
    .add_source(
      ::config::Environment::with_prefix("NUMTRACK")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true),
    )
    .set_override_option("host", cli.host.clone())
    .context("invalid --host override")?
    .set_override_option("port", cli.port.map(i64::from))
    .context("invalid --port override")?
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
