//! Bilingual text pairs.

use crate::Language;
use serde::{Deserialize, Serialize};

/// A piece of text available in both English and Urdu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    /// English text.
    pub en: String,
    /// Urdu text.
    pub ur: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ur: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ur: ur.into(),
        }
    }

    /// Get the text for a language.
    ///
    /// An empty Urdu variant falls back to English.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ur if !self.ur.is_empty() => &self.ur,
            _ => &self.en,
        }
    }

    /// Case-insensitive substring match against either variant.
    ///
    /// `needle` must already be lowercase.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.en.to_lowercase().contains(needle) || self.ur.to_lowercase().contains(needle)
    }
}
