//! The editable wedding configuration: model, localized-field resolution,
//! schema migration, and JSON file persistence.
//!
//! The document is a single global record. Admin saves rewrite it wholesale;
//! the rendering layer resolves a language-specific projection per request
//! through the pure functions in [`resolve`].

mod defaults;

pub mod error;
pub mod migrate;
pub mod model;
pub mod resolve;
pub mod store;

pub use error::{Error, Result};
pub use model::EditableWeddingConfig;
pub use resolve::{ResolvedWeddingConfig, resolve_config};
pub use store::ConfigStore;
