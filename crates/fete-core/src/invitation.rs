//! Invitation — one record per guest link.
//!
//! Field names serialise in camelCase to stay byte-compatible with the
//! NDJSON shard files the original deployment already has on disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::Language;

/// A persisted invitation.
///
/// `id` and `slug` are assigned at creation and never change; `is_read`
/// flips to `true` at most once, when the guest first opens the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
  pub id:             Uuid,
  pub slug:           String,
  pub recipient_name: String,
  pub language:       Language,
  #[serde(default)]
  pub is_read:        bool,
  pub created_at:     DateTime<Utc>,
}

/// Input for creating an invitation. Validation (non-empty name) is the
/// caller layer's job; the store itself is permissive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvitation {
  pub recipient_name: String,
  pub language:       Language,
}

/// A sparse update; `None` means "leave the field as it is".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationPatch {
  pub recipient_name: Option<String>,
  pub language:       Option<Language>,
  pub is_read:        Option<bool>,
}

impl InvitationPatch {
  /// A patch that only flips the read flag.
  pub fn read() -> Self {
    Self { is_read: Some(true), ..Self::default() }
  }

  /// Apply this patch to `invitation` in place.
  pub fn apply(&self, invitation: &mut Invitation) {
    if let Some(name) = &self.recipient_name {
      invitation.recipient_name = name.clone();
    }
    if let Some(language) = self.language {
      invitation.language = language;
    }
    if let Some(is_read) = self.is_read {
      invitation.is_read = is_read;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Invitation {
    Invitation {
      id:             Uuid::new_v4(),
      slug:           "anna-kowalska-x1y2z3".into(),
      recipient_name: "Anna Kowalska".into(),
      language:       Language::Pl,
      is_read:        false,
      created_at:     Utc::now(),
    }
  }

  #[test]
  fn serialises_camel_case() {
    let json = serde_json::to_value(sample()).unwrap();
    assert!(json.get("recipientName").is_some());
    assert!(json.get("isRead").is_some());
    assert!(json.get("createdAt").is_some());
  }

  #[test]
  fn empty_patch_is_a_no_op() {
    let mut inv = sample();
    let before = inv.clone();
    InvitationPatch::default().apply(&mut inv);
    assert_eq!(inv, before);
  }

  #[test]
  fn read_patch_only_touches_is_read() {
    let mut inv = sample();
    InvitationPatch::read().apply(&mut inv);
    assert!(inv.is_read);
    assert_eq!(inv.recipient_name, "Anna Kowalska");
    assert_eq!(inv.language, Language::Pl);
  }
}
