//! Flat-file backend for the fete invitation store.
//!
//! Invitations live in `invitations_<N>.txt` shard files (newline-delimited
//! JSON, at most `capacity` records each). Creation appends to the highest-
//! numbered shard; updates and deletes rewrite the whole set through the
//! compactor.

mod compact;
mod shard;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{DEFAULT_SHARD_CAPACITY, FlatFileStore};

#[cfg(test)]
mod tests;
