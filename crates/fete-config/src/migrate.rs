//! Versioned schema migration for stored config documents.
//!
//! Older deployments wrote a flat, single-language document. `load()` runs
//! every applicable step here, in order, over the raw JSON before
//! deserialising — one explicit transform per historical shape instead of
//! field sniffing scattered through handlers.

use serde_json::{Map, Value, json};

/// One migration step: a shape test plus a pure transform from that shape to
/// the next one.
struct Migration {
  name:    &'static str,
  applies: fn(&Value) -> bool,
  run:     fn(Value) -> Value,
}

/// Ordered chain, oldest shape first.
const MIGRATIONS: &[Migration] = &[Migration {
  name:    "flat-to-localized",
  applies: is_legacy_flat,
  run:     flat_to_localized,
}];

/// Run every applicable migration over `document`.
pub fn run(mut document: Value) -> Value {
  for migration in MIGRATIONS {
    if (migration.applies)(&document) {
      tracing::info!(migration = migration.name, "migrating stored config");
      document = (migration.run)(document);
    }
  }
  document
}

// ─── flat-to-localized (v0 -> v1) ────────────────────────────────────────────
//
// v0: `couple.bride.firstName` directly, flat `ceremony.locationName`, and a
// single `telegramQrCode` string.
// v1: localized records (`base` + per-language overrides) and a per-language
// `groupQrCode`.

fn is_legacy_flat(document: &Value) -> bool {
  document
    .pointer("/couple/bride")
    .is_some_and(|bride| bride.get("base").is_none())
}

fn flat_to_localized(document: Value) -> Value {
  let mut doc = match document {
    Value::Object(doc) => doc,
    other => return other,
  };

  if let Some(couple) = doc.get_mut("couple").and_then(Value::as_object_mut) {
    for key in ["bride", "groom"] {
      if let Some(person) = couple.remove(key) {
        couple.insert(key.into(), json!({ "base": person }));
      }
    }
  }

  for key in ["ceremony", "reception"] {
    if let Some(Value::Object(venue)) = doc.remove(key) {
      doc.insert(key.into(), localize_venue(venue));
    }
  }

  // The old single QR code becomes the English entry; the fallback chain
  // serves it to the other languages.
  if let Some(qr) = doc.remove("telegramQrCode") {
    doc.insert("groupQrCode".into(), json!({ "en": qr }));
  }

  Value::Object(doc)
}

fn localize_venue(mut venue: Map<String, Value>) -> Value {
  let mut base = Map::new();
  for field in ["locationName", "address"] {
    if let Some(value) = venue.remove(field) {
      base.insert(field.into(), value);
    }
  }
  venue.insert("base".into(), Value::Object(base));
  Value::Object(venue)
}
