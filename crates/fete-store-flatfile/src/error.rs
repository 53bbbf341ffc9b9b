//! Error type for `fete-store-flatfile`.

use thiserror::Error;

/// A write-path failure. Read-path problems (unreadable shards, corrupt
/// lines) are skipped, not surfaced — see [`crate::FlatFileStore`].
#[derive(Debug, Error)]
pub enum Error {
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
