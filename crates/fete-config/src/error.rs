//! Error type for `fete-config`.
//!
//! Only the save path can fail; `load` folds every failure into the default
//! document (see [`crate::ConfigStore::load`]).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
