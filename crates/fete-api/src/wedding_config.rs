//! Handlers for `/api/wedding-config` endpoints.
//!
//! The raw editable document is admin-only; guests get the resolved,
//! single-language projection from the `public` route.

use axum::{
  Json,
  extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use fete_config::{
  EditableWeddingConfig, ResolvedWeddingConfig, resolve::recompute_full_names,
  resolve_config,
};
use fete_core::{Language, store::InvitationStore};

use crate::{AppState, auth::AdminAuth, error::ApiError};

/// `GET /api/wedding-config` — the raw editable document.
pub async fn get_config<S>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
) -> Json<EditableWeddingConfig>
where
  S: InvitationStore,
{
  Json(state.config.load().await)
}

/// `PUT /api/wedding-config` — whole-document save. There is no partial
/// update; the admin editor always submits the complete object.
///
/// `fullName` overrides are recomputed from the submitted first/last names
/// before the document hits disk, so independently-edited name fields stay
/// consistent.
pub async fn put_config<S>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
  Json(mut config): Json<EditableWeddingConfig>,
) -> Result<Json<Value>, ApiError>
where
  S: InvitationStore,
{
  recompute_full_names(&mut config.couple.bride);
  recompute_full_names(&mut config.couple.groom);

  state.config.save(&config).await?;
  Ok(Json(json!({ "success": true })))
}

// ─── Public projection ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PublicParams {
  pub lang: Option<Language>,
}

/// `GET /api/wedding-config/public?lang=xx` — the display-ready projection
/// for one language (default `en`).
pub async fn public_config<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<PublicParams>,
) -> Json<ResolvedWeddingConfig>
where
  S: InvitationStore,
{
  let config = state.config.load().await;
  let language = params.lang.unwrap_or(Language::En);
  Json(resolve_config(&config, language))
}
