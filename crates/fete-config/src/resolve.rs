//! Pure localized-field resolution. No I/O.
//!
//! For a target language L, each leaf field resolves to the first non-blank
//! value along `L`, then [`FALLBACK_ORDER`] (skipping L), then `base`. The
//! chain applies per field, never per record — one resolved record may mix
//! fields sourced from different languages.

use fete_core::Language;
use serde::Serialize;

use crate::model::{
  BackgroundPosition, EditableWeddingConfig, LocalizedImage, LocalizedPerson,
  LocalizedText, VenueConfig, WeddingDate,
};

/// Cross-language fallback priority, consulted after the target language
/// itself. The asymmetric order is long-standing observed behavior of this
/// system; do not "fix" it.
pub const FALLBACK_ORDER: [Language; 3] =
  [Language::Pl, Language::Uk, Language::En];

/// The languages to try for `language`, in order: the target first, then the
/// fallback order minus the target.
fn candidates(language: Language) -> impl Iterator<Item = Language> {
  std::iter::once(language)
    .chain(FALLBACK_ORDER.into_iter().filter(move |l| *l != language))
}

/// Resolve one leaf field: the first candidate language whose override is
/// present and non-blank wins; otherwise `base`.
fn resolve_leaf<'a>(
  language: Language,
  lookup: impl Fn(Language) -> Option<&'a str>,
  base: &'a str,
) -> &'a str {
  candidates(language)
    .filter_map(&lookup)
    .find(|value| !value.trim().is_empty())
    .unwrap_or(base)
}

/// Like [`resolve_leaf`] but with no base value: yields `None` when no
/// language in the chain has one (used for the per-language QR codes).
fn resolve_optional_leaf<'a>(
  language: Language,
  lookup: impl Fn(Language) -> Option<&'a str>,
) -> Option<&'a str> {
  candidates(language)
    .filter_map(&lookup)
    .find(|value| !value.trim().is_empty())
}

// ─── Resolved projections ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPerson {
  pub first_name: String,
  pub last_name:  String,
  pub full_name:  String,
  pub phone:      String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVenue {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub time:            Option<String>,
  pub google_maps_url: String,
  pub location_name:   String,
  pub address:         String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCouple {
  pub bride: ResolvedPerson,
  pub groom: ResolvedPerson,
}

/// The display-ready, single-language projection of the config that the
/// rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedWeddingConfig {
  pub language:  Language,
  pub couple:    ResolvedCouple,
  pub ceremony:  ResolvedVenue,
  pub reception: ResolvedVenue,
  pub date:      WeddingDate,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dress_code:          Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub group_qr_code:       Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub background_image:    Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub background_position: Option<BackgroundPosition>,
}

// ─── Per-record resolvers ────────────────────────────────────────────────────

pub fn resolve_person(
  person: &LocalizedPerson,
  language: Language,
) -> ResolvedPerson {
  let field = |get: fn(&crate::model::PersonOverride) -> Option<&str>,
               base: &str| {
    resolve_leaf(language, |l| person.override_for(l).and_then(get), base)
      .to_string()
  };

  ResolvedPerson {
    first_name: field(|o| o.first_name.as_deref(), &person.base.first_name),
    last_name:  field(|o| o.last_name.as_deref(), &person.base.last_name),
    full_name:  field(|o| o.full_name.as_deref(), &person.base.full_name),
    phone:      field(|o| o.phone.as_deref(), &person.base.phone),
  }
}

pub fn resolve_venue(venue: &VenueConfig, language: Language) -> ResolvedVenue {
  let field = |get: fn(&crate::model::LocationOverride) -> Option<&str>,
               base: &str| {
    resolve_leaf(language, |l| venue.override_for(l).and_then(get), base)
      .to_string()
  };

  ResolvedVenue {
    time:            venue.time.clone(),
    google_maps_url: venue.google_maps_url.clone(),
    location_name:   field(
      |o| o.location_name.as_deref(),
      &venue.base.location_name,
    ),
    address:         field(|o| o.address.as_deref(), &venue.base.address),
  }
}

pub fn resolve_text(text: &LocalizedText, language: Language) -> String {
  resolve_leaf(language, |l| text.override_for(l), &text.base).to_string()
}

pub fn resolve_image(
  image: &LocalizedImage,
  language: Language,
) -> Option<String> {
  resolve_optional_leaf(language, |l| image.for_language(l))
    .map(str::to_string)
}

/// Flatten the whole document for one language.
pub fn resolve_config(
  config: &EditableWeddingConfig,
  language: Language,
) -> ResolvedWeddingConfig {
  ResolvedWeddingConfig {
    language,
    couple: ResolvedCouple {
      bride: resolve_person(&config.couple.bride, language),
      groom: resolve_person(&config.couple.groom, language),
    },
    ceremony: resolve_venue(&config.ceremony, language),
    reception: resolve_venue(&config.reception, language),
    date: config.date,
    dress_code: config
      .dress_code
      .as_ref()
      .map(|text| resolve_text(text, language)),
    group_qr_code: config
      .group_qr_code
      .as_ref()
      .and_then(|image| resolve_image(image, language)),
    background_image: config.background_image.clone(),
    background_position: config.background_position,
  }
}

// ─── Editor helper ───────────────────────────────────────────────────────────

/// Keep `full_name` overrides consistent with independently-edited first and
/// last names: for every language override carrying a first or last name,
/// recompute its `full_name` as `"{first} {last}"`, taking the sibling from
/// the same override or from `base` when the override leaves it out.
///
/// This is an editor-side convenience run before saving; the resolver never
/// calls it and reads `full_name` as an ordinary leaf.
pub fn recompute_full_names(person: &mut LocalizedPerson) {
  person.base.full_name =
    format!("{} {}", person.base.first_name, person.base.last_name);

  for language in Language::ALL {
    let base = person.base.clone();
    if let Some(over) = person.override_for_mut(language)
      && (over.first_name.is_some() || over.last_name.is_some())
    {
      let first = over.first_name.as_deref().unwrap_or(&base.first_name);
      let last = over.last_name.as_deref().unwrap_or(&base.last_name);
      over.full_name = Some(format!("{first} {last}"));
    }
  }
}
