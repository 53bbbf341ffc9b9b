//! JSON REST API for the fete invitation backend.
//!
//! Exposes an axum [`Router`] backed by any
//! [`fete_core::store::InvitationStore`]. Admin routes are guarded by a
//! shared-secret bearer token; guest-facing routes (invitation lookup,
//! mark-as-read, resolved public config) are open.

pub mod auth;
pub mod error;
pub mod invitations;
pub mod wedding_config;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use fete_config::ConfigStore;
use fete_core::store::InvitationStore;
use serde::Deserialize;

use auth::AuthConfig;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FETE_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// Directory holding the invitation shards and `wedding-config.json`.
  pub data_dir:     PathBuf,
  /// The shared secret admin requests must present as a bearer token.
  pub admin_secret: String,
  /// Records per shard; defaults to the store's standard capacity.
  #[serde(default)]
  pub shard_capacity: Option<usize>,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S: InvitationStore> {
  pub store:  Arc<S>,
  pub config: Arc<ConfigStore>,
  pub auth:   Arc<AuthConfig>,
}

// Manual impl: `Arc` clones regardless of whether `S` itself is `Clone`.
impl<S: InvitationStore> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:  Arc::clone(&self.store),
      config: Arc::clone(&self.config),
      auth:   Arc::clone(&self.auth),
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for `state`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: InvitationStore + 'static,
{
  Router::new()
    // Admin session check
    .route("/api/auth", post(auth::login::<S>))
    // Invitations
    .route(
      "/api/invitations",
      get(invitations::list::<S>).post(invitations::create::<S>),
    )
    .route(
      "/api/invitations/{slug}",
      get(invitations::get_by_slug::<S>)
        .patch(invitations::mark_as_read::<S>)
        .delete(invitations::delete::<S>),
    )
    // Wedding config
    .route(
      "/api/wedding-config",
      get(wedding_config::get_config::<S>)
        .put(wedding_config::put_config::<S>),
    )
    .route(
      "/api/wedding-config/public",
      get(wedding_config::public_config::<S>),
    )
    .with_state(state)
}
