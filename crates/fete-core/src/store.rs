//! The `InvitationStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `fete-store-flatfile`).
//! The HTTP layer (`fete-api`) depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::invitation::{Invitation, InvitationPatch, NewInvitation};

/// Abstraction over an invitation store backend.
///
/// Creation appends; `update` and `delete` are whole-store rewrites in the
/// flat-file backend, so callers should treat them as comparatively heavy.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait InvitationStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create and persist a new invitation with a fresh id and slug.
  fn create(
    &self,
    input: NewInvitation,
  ) -> impl Future<Output = Result<Invitation, Self::Error>> + Send + '_;

  /// Return every invitation, in creation order.
  fn get_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Invitation>, Self::Error>> + Send + '_;

  /// Look up an invitation by slug. Returns `None` on a miss.
  fn get_by_slug<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<Option<Invitation>, Self::Error>> + Send + 'a;

  /// Look up an invitation by id. Returns `None` on a miss.
  fn get_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Invitation>, Self::Error>> + Send + '_;

  /// Merge `patch` into the invitation with `id` and rewrite the store.
  /// Returns the updated record, or `None` if the id is unknown.
  fn update(
    &self,
    id: Uuid,
    patch: InvitationPatch,
  ) -> impl Future<Output = Result<Option<Invitation>, Self::Error>> + Send + '_;

  /// Mark the invitation with `slug` as read. Returns `false` on a miss.
  /// Idempotent: marking an already-read invitation succeeds and changes
  /// nothing observable.
  fn mark_as_read<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Delete the invitation with `id`. Returns `false` if the id is unknown.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
