//! Display languages and text direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Urdu.
    Ur,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::En, Language::Ur];

    /// Get the language code (e.g., "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ur => "ur",
        }
    }

    /// Parse a language code. Only the two supported codes are recognised.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "ur" => Some(Language::Ur),
            _ => None,
        }
    }

    /// Text direction used when rendering this language.
    pub fn direction(&self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::Ur => Direction::Rtl,
        }
    }

    /// The other supported language.
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Ur,
            Language::Ur => Language::En,
        }
    }

    /// Name of the language written in itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ur => "اردو",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a language code is not one of the supported codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language code: {0}")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| ParseLanguageError(s.to_string()))
    }
}

/// Text layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        *self == Direction::Rtl
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::from_code("UR"), Some(Language::Ur));
        assert_eq!(Language::from_code(" en "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_direction_follows_language() {
        assert_eq!(Language::En.direction(), Direction::Ltr);
        assert_eq!(Language::Ur.direction(), Direction::Rtl);
        assert!(Language::Ur.direction().is_rtl());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Language::En.toggled(), Language::Ur);
        assert_eq!(Language::Ur.toggled().toggled(), Language::Ur);
    }

    #[test]
    fn test_parse_error() {
        let err = "de".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported language code: de");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Ur).unwrap(), "\"ur\"");
        assert_eq!(serde_json::to_string(&Direction::Rtl).unwrap(), "\"rtl\"");
    }
}
