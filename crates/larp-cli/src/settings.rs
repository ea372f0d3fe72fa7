//! Layered configuration: defaults, then `larp.toml`, then `LARP_*`
//! environment variables, then command-line overrides.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

const DEFAULT_STORE_PATH: &str = "larp.sqlite3";
const DEFAULT_EVENT_NAME: &str = "Larp";

#[derive(Debug, Clone, Deserialize)]
pub struct LarpConfig {
  /// SQLite database file. A leading `~/` is expanded.
  pub store_path: PathBuf,
  /// The event imports are filed under and reports default to.
  pub event_name: String,
}

impl LarpConfig {
  pub fn load(path: &Path, event: Option<String>) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("store_path", DEFAULT_STORE_PATH)?
      .set_default("event_name", DEFAULT_EVENT_NAME)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("LARP"))
      .set_override_option("event_name", event)?
      .build()
      .context("failed to read config file")?;

    let mut cfg: Self = settings
      .try_deserialize()
      .context("failed to deserialise LarpConfig")?;
    cfg.store_path = expand_tilde(&cfg.store_path);
    Ok(cfg)
  }
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
