//! URL-safe slug generation for invitation links.
//!
//! A slug is the recipient's name, lower-cased and folded to ASCII, with a
//! short random suffix so two guests with the same name get distinct links.
//! Uniqueness is probabilistic (36^6 suffix space), not enforced.

use rand::Rng;

/// Length of the random `[a-z0-9]` suffix.
const SUFFIX_LEN: usize = 6;

const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a slug for `name`, e.g. `"Józef Żółty"` → `"jozef-zolty-k3x9ab"`.
///
/// Names with no ASCII-foldable characters at all (e.g. fully Cyrillic)
/// degenerate to just the random suffix.
pub fn generate(name: &str) -> String {
  let base = slugify(name);
  let suffix = random_suffix();
  if base.is_empty() {
    suffix
  } else {
    format!("{base}-{suffix}")
  }
}

/// The deterministic part: lowercase, fold diacritics, collapse every run of
/// other characters into a single hyphen, trim hyphens at both ends.
pub fn slugify(name: &str) -> String {
  let mut out = String::with_capacity(name.len());
  for c in name.chars().flat_map(char::to_lowercase) {
    match fold_diacritic(c) {
      Some(folded) => out.push(folded),
      None if c.is_ascii_alphanumeric() => out.push(c),
      None => {
        if !out.ends_with('-') {
          out.push('-');
        }
      }
    }
  }
  out.trim_matches('-').to_string()
}

fn random_suffix() -> String {
  let mut rng = rand::thread_rng();
  (0..SUFFIX_LEN)
    .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
    .collect()
}

/// ASCII fold for the Latin diacritics that actually occur in the guest
/// lists this serves (Polish, plus a few common western-European letters).
/// Anything not covered collapses to a hyphen in [`slugify`].
fn fold_diacritic(c: char) -> Option<char> {
  let folded = match c {
    'ą' | 'à' | 'á' | 'â' | 'ä' | 'ã' => 'a',
    'ć' | 'ç' => 'c',
    'ę' | 'è' | 'é' | 'ê' | 'ë' => 'e',
    'ł' => 'l',
    'ń' | 'ñ' => 'n',
    'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
    'ś' => 's',
    'ź' | 'ż' => 'z',
    'ì' | 'í' | 'î' | 'ï' => 'i',
    'ù' | 'ú' | 'û' | 'ü' => 'u',
    'ý' => 'y',
    _ => return None,
  };
  Some(folded)
}
