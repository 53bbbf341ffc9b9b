//! The `EditableWeddingConfig` document and its localized building blocks.
//!
//! Every localized record is a required `base` plus optional per-language
//! override records where any subset of fields may be present. `base` is the
//! fallback of last resort; overrides are sparse, and an absent field means
//! "inherit" (see [`crate::resolve`] for the exact chain).
//!
//! Field names serialise in camelCase to match the `wedding-config.json`
//! documents the original deployment wrote.

use fete_core::Language;
use serde::{Deserialize, Serialize};

// ─── People ──────────────────────────────────────────────────────────────────

/// Language-neutral details for one half of the couple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
  pub first_name: String,
  pub last_name:  String,
  pub full_name:  String,
  pub phone:      String,
}

/// A sparse per-language override of [`PersonDetails`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub first_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_name:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub full_name:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone:      Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedPerson {
  pub base: PersonDetails,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub en:   Option<PersonOverride>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pl:   Option<PersonOverride>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uk:   Option<PersonOverride>,
}

impl LocalizedPerson {
  pub fn override_for(&self, language: Language) -> Option<&PersonOverride> {
    match language {
      Language::En => self.en.as_ref(),
      Language::Pl => self.pl.as_ref(),
      Language::Uk => self.uk.as_ref(),
    }
  }

  pub fn override_for_mut(
    &mut self,
    language: Language,
  ) -> Option<&mut PersonOverride> {
    match language {
      Language::En => self.en.as_mut(),
      Language::Pl => self.pl.as_mut(),
      Language::Uk => self.uk.as_mut(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple {
  pub bride: LocalizedPerson,
  pub groom: LocalizedPerson,
}

// ─── Venues ──────────────────────────────────────────────────────────────────

/// Language-neutral venue details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetails {
  pub location_name: String,
  pub address:       String,
}

/// A sparse per-language override of [`LocationDetails`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationOverride {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub address:       Option<String>,
}

/// One venue (ceremony or reception): `time` and the maps link are shared
/// across languages, the location text is localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueConfig {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time:            Option<String>,
  pub google_maps_url: String,
  pub base:            LocationDetails,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub en:              Option<LocationOverride>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pl:              Option<LocationOverride>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uk:              Option<LocationOverride>,
}

impl VenueConfig {
  pub fn override_for(&self, language: Language) -> Option<&LocationOverride> {
    match language {
      Language::En => self.en.as_ref(),
      Language::Pl => self.pl.as_ref(),
      Language::Uk => self.uk.as_ref(),
    }
  }
}

// ─── Leaf localized values ───────────────────────────────────────────────────

/// A localized piece of free text (e.g. the dress code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
  pub base: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub en:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pl:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uk:   Option<String>,
}

impl LocalizedText {
  pub fn override_for(&self, language: Language) -> Option<&str> {
    match language {
      Language::En => self.en.as_deref(),
      Language::Pl => self.pl.as_deref(),
      Language::Uk => self.uk.as_deref(),
    }
  }
}

/// A per-language image reference (base64 data URI or URL), independently
/// present or absent per language. There is no `base` — a language with no
/// entry in the fallback chain simply has no image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedImage {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub en: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pl: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub uk: Option<String>,
}

impl LocalizedImage {
  pub fn for_language(&self, language: Language) -> Option<&str> {
    match language {
      Language::En => self.en.as_deref(),
      Language::Pl => self.pl.as_deref(),
      Language::Uk => self.uk.as_deref(),
    }
  }
}

// ─── Scalars ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeddingDate {
  pub year:  i32,
  /// 1-12.
  pub month: u8,
  pub day:   u8,
}

/// Where the background image is placed on the invitation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundPosition {
  Full,
  MainSection,
  Header,
  BetweenHeader,
}

// ─── The document ────────────────────────────────────────────────────────────

/// The single global configuration record, rewritten wholesale on every
/// admin save. The default document (used on first run and on unreadable
/// files) lives in `defaults.rs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableWeddingConfig {
  pub couple:    Couple,
  pub ceremony:  VenueConfig,
  pub reception: VenueConfig,
  pub date:      WeddingDate,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dress_code:          Option<LocalizedText>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub group_qr_code:       Option<LocalizedImage>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub background_image:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub background_position: Option<BackgroundPosition>,
}
