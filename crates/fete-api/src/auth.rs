//! Shared-secret admin auth: a bearer-token extractor and the login check
//! endpoint the admin panel calls before showing its forms.
//!
//! This is deliberately not a real authentication system — one secret
//! string, compared verbatim, no sessions, no hashing.

use axum::{
  Json,
  extract::{FromRequestParts, State},
  http::{HeaderMap, header, request::Parts},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{AppState, error::ApiError};
use fete_core::store::InvitationStore;

/// The secret accepted as valid for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  pub admin_secret: String,
}

/// Zero-size marker: present in a handler means the request carried the
/// admin secret.
pub struct AdminAuth;

/// Verify `Authorization: Bearer <secret>` directly from headers.
pub fn verify_bearer(
  headers: &HeaderMap,
  config: &AuthConfig,
) -> Result<(), ApiError> {
  let token = headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
    .ok_or(ApiError::Unauthorized)?;

  if token != config.admin_secret {
    return Err(ApiError::Unauthorized);
  }
  Ok(())
}

impl<S> FromRequestParts<AppState<S>> for AdminAuth
where
  S: InvitationStore + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    verify_bearer(&parts.headers, &state.auth)?;
    Ok(AdminAuth)
  }
}

// ─── Login check ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
  pub secret_key: String,
}

/// `POST /api/auth` — body `{"secretKey": "…"}`. Returns `{"success":true}`
/// when the secret matches; 401 otherwise.
pub async fn login<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<Value>, ApiError>
where
  S: InvitationStore,
{
  if body.secret_key.is_empty()
    || body.secret_key != state.auth.admin_secret
  {
    return Err(ApiError::Unauthorized);
  }
  Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
  use axum::http::HeaderValue;

  use super::*;

  fn config() -> AuthConfig {
    AuthConfig { admin_secret: "hunter2".into() }
  }

  fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers
      .insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
  }

  #[test]
  fn accepts_matching_bearer_token() {
    let headers = headers_with("Bearer hunter2");
    assert!(verify_bearer(&headers, &config()).is_ok());
  }

  #[test]
  fn rejects_wrong_secret() {
    let headers = headers_with("Bearer wrong");
    assert!(verify_bearer(&headers, &config()).is_err());
  }

  #[test]
  fn rejects_missing_header() {
    assert!(verify_bearer(&HeaderMap::new(), &config()).is_err());
  }

  #[test]
  fn rejects_non_bearer_scheme() {
    let headers = headers_with("Basic aHVudGVyMg==");
    assert!(verify_bearer(&headers, &config()).is_err());
  }
}
