//! Language codes accepted by the game-data service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::XivError;

/// One of the fixed language codes the service serves text fields in.
///
/// # Examples
///
/// ```
/// use xivapi_core::Language;
///
/// let lang: Language = "fr".parse().unwrap();
/// assert_eq!(lang, Language::Fr);
/// assert_eq!(lang.code(), "fr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Japanese.
    Ja,
    /// English.
    En,
    /// German.
    De,
    /// French.
    Fr,
    /// Simplified Chinese.
    Chs,
    /// Traditional Chinese.
    Cht,
    /// Korean.
    Kr,
}

impl Language {
    /// Every supported language, in the service's documented order.
    pub const ALL: [Self; 7] = [
        Self::Ja,
        Self::En,
        Self::De,
        Self::Fr,
        Self::Chs,
        Self::Cht,
        Self::Kr,
    ];

    /// Returns the wire code for this language.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Chs => "chs",
            Self::Cht => "cht",
            Self::Kr => "kr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = XivError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| XivError::Parameter(format!("unsupported language code '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_unknown_code_is_parameter_error() {
        let err = "en-us".parse::<Language>().unwrap_err();
        assert!(matches!(err, XivError::Parameter(_)));
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!("EN".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        assert_eq!(serde_json::to_string(&Language::Chs).unwrap(), "\"chs\"");
        let lang: Language = serde_json::from_str("\"kr\"").unwrap();
        assert_eq!(lang, Language::Kr);
    }
}
