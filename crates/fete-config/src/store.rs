//! JSON file persistence for the config document.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;

use crate::{EditableWeddingConfig, Result, migrate};

/// File name inside the data directory.
pub const CONFIG_FILE: &str = "wedding-config.json";

/// Loads and saves the single `wedding-config.json` document.
///
/// Stateless: the on-disk file is the only state. Saves rewrite the whole
/// document; there is no partial-field update path.
pub struct ConfigStore {
  path: PathBuf,
}

impl ConfigStore {
  /// A store persisting to `<data_dir>/wedding-config.json`.
  pub fn new(data_dir: impl AsRef<Path>) -> Self {
    Self { path: data_dir.as_ref().join(CONFIG_FILE) }
  }

  /// Load the stored document, running schema migrations first.
  ///
  /// Never fails: a missing file is the expected first-run state, and an
  /// unreadable or unparseable one also yields the default document — same
  /// outcome as the reference behavior, but logged so operators can tell
  /// corruption apart from first run.
  pub async fn load(&self) -> EditableWeddingConfig {
    let content = match fs::read_to_string(&self.path).await {
      Ok(content) => content,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        tracing::debug!(path = %self.path.display(), "no config file, using defaults");
        return EditableWeddingConfig::default();
      }
      Err(e) => {
        tracing::warn!(path = %self.path.display(), error = %e, "config unreadable, using defaults");
        return EditableWeddingConfig::default();
      }
    };

    let raw: Value = match serde_json::from_str(&content) {
      Ok(raw) => raw,
      Err(e) => {
        tracing::warn!(path = %self.path.display(), error = %e, "config is not valid json, using defaults");
        return EditableWeddingConfig::default();
      }
    };

    match serde_json::from_value(migrate::run(raw)) {
      Ok(config) => config,
      Err(e) => {
        tracing::warn!(path = %self.path.display(), error = %e, "config has unexpected shape, using defaults");
        EditableWeddingConfig::default()
      }
    }
  }

  /// Overwrite the stored document with `config`, pretty-printed.
  ///
  /// Written to a `.tmp` sibling and renamed into place, so readers never
  /// observe a half-written file.
  pub async fn save(&self, config: &EditableWeddingConfig) -> Result<()> {
    if let Some(dir) = self.path.parent() {
      fs::create_dir_all(dir).await?;
    }

    let content = serde_json::to_string_pretty(config)?;
    let tmp = self.path.with_extension("json.tmp");
    fs::write(&tmp, content).await?;
    fs::rename(&tmp, &self.path).await?;

    tracing::debug!(path = %self.path.display(), "saved config");
    Ok(())
  }
}
