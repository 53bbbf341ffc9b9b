//! The closed set of languages an invitation (and the wedding config) can
//! be rendered in.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A supported invitation language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  En,
  Pl,
  Uk,
}

impl Language {
  /// Every supported language, in declaration order.
  pub const ALL: [Language; 3] = [Language::En, Language::Pl, Language::Uk];

  /// The two-letter code used in URLs and on disk.
  pub fn code(self) -> &'static str {
    match self {
      Language::En => "en",
      Language::Pl => "pl",
      Language::Uk => "uk",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl FromStr for Language {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "en" => Ok(Language::En),
      "pl" => Ok(Language::Pl),
      "uk" => Ok(Language::Uk),
      other => Err(Error::UnknownLanguage(other.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_known_codes() {
    for lang in Language::ALL {
      assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
    }
  }

  #[test]
  fn parse_unknown_code_fails() {
    assert!("de".parse::<Language>().is_err());
    assert!("EN".parse::<Language>().is_err());
  }

  #[test]
  fn serde_uses_lowercase_codes() {
    let json = serde_json::to_string(&Language::Uk).unwrap();
    assert_eq!(json, "\"uk\"");
    let back: Language = serde_json::from_str("\"pl\"").unwrap();
    assert_eq!(back, Language::Pl);
  }
}
