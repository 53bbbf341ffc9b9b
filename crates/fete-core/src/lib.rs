//! Core types and trait definitions for the fete invitation backend.
//!
//! This crate is deliberately free of HTTP and filesystem dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod invitation;
pub mod language;
pub mod slug;
pub mod store;

pub use error::{Error, Result};
pub use invitation::{Invitation, InvitationPatch, NewInvitation};
pub use language::Language;
