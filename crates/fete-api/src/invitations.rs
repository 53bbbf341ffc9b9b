//! Handlers for `/api/invitations` endpoints.
//!
//! | Method   | Path | Access | Notes |
//! |----------|------|--------|-------|
//! | `GET`    | `/api/invitations` | admin | all records |
//! | `POST`   | `/api/invitations` | admin | `{"recipientName","language"}` |
//! | `GET`    | `/api/invitations/{slug}` | public | 404 on miss |
//! | `PATCH`  | `/api/invitations/{slug}` | public | mark as read |
//! | `DELETE` | `/api/invitations/{id}` | admin | the segment is the id |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde_json::{Value, json};
use uuid::Uuid;

use fete_core::{Invitation, NewInvitation, store::InvitationStore};

use crate::{AppState, auth::AdminAuth, error::ApiError};

fn store_err<E: std::error::Error + Send + Sync + 'static>(e: E) -> ApiError {
  ApiError::Store(Box::new(e))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /api/invitations`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
) -> Result<Json<Vec<Invitation>>, ApiError>
where
  S: InvitationStore,
{
  let invitations = state.store.get_all().await.map_err(store_err)?;
  Ok(Json(invitations))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /api/invitations` — body: `{"recipientName":"…","language":"pl"}`.
///
/// Validation happens here, not in the store: the name must be non-blank,
/// and an unknown language code is already rejected by deserialisation.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
  Json(body): Json<NewInvitation>,
) -> Result<impl IntoResponse, ApiError>
where
  S: InvitationStore,
{
  if body.recipient_name.trim().is_empty() {
    return Err(ApiError::BadRequest("recipient name is required".into()));
  }

  let invitation = state.store.create(body).await.map_err(store_err)?;
  Ok((StatusCode::CREATED, Json(invitation)))
}

// ─── Guest lookup ────────────────────────────────────────────────────────────

/// `GET /api/invitations/{slug}`
pub async fn get_by_slug<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<Json<Invitation>, ApiError>
where
  S: InvitationStore,
{
  let invitation = state
    .store
    .get_by_slug(&slug)
    .await
    .map_err(store_err)?
    .ok_or_else(|| ApiError::NotFound(format!("invitation {slug:?}")))?;
  Ok(Json(invitation))
}

/// `PATCH /api/invitations/{slug}` — the guest opened the envelope.
/// Idempotent: repeat calls succeed and change nothing.
pub async fn mark_as_read<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: InvitationStore,
{
  let marked = state.store.mark_as_read(&slug).await.map_err(store_err)?;
  if !marked {
    return Err(ApiError::NotFound(format!("invitation {slug:?}")));
  }
  Ok(Json(json!({ "success": true })))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /api/invitations/{id}`
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  _auth: AdminAuth,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: InvitationStore,
{
  let deleted = state.store.delete(id).await.map_err(store_err)?;
  if !deleted {
    return Err(ApiError::NotFound(format!("invitation {id}")));
  }
  Ok(StatusCode::NO_CONTENT)
}
