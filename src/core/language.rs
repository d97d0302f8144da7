//! Supported synthesis languages.
//!
//! The form offers a fixed set of languages. Each variant maps to the
//! language code understood by the synthesis engine and to the placeholder
//! shown in the text area, so an unmapped selection cannot exist.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a supported language
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language: {0}")]
pub struct LanguageParseError(pub String);

/// Languages offered by the form, in dropdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "Bengali", alias = "bn")]
    Bengali,
    #[serde(alias = "English", alias = "en")]
    English,
    #[serde(alias = "Hindi", alias = "hi")]
    Hindi,
}

impl Language {
    /// All languages in the order they appear in the dropdown
    pub const ALL: [Language; 3] = [Language::Bengali, Language::English, Language::Hindi];

    /// Display name shown in the dropdown
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bengali => "Bengali",
            Self::English => "English",
            Self::Hindi => "Hindi",
        }
    }

    /// Language code passed to the synthesis engine
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Bengali => "bn",
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// Lowercase name, used as the form value and in download filenames
    #[inline]
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Bengali => "bengali",
            Self::English => "english",
            Self::Hindi => "hindi",
        }
    }

    /// Placeholder text for the input area, written in the language itself
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Bengali => "এখানে বাংলা লিখুন...",
            Self::English => "Type your English text here...",
            Self::Hindi => "यहाँ हिंदी में लिखें...",
        }
    }

    /// Suggested filename for a downloaded clip, e.g. `bengali_speech.mp3`
    pub fn download_filename(&self, extension: &str) -> String {
        format!("{}_speech.{}", self.slug(), extension)
    }

    /// Parse from string, with fallback to default.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for Language {
    type Err = LanguageParseError;

    /// Accepts the display name, the slug or the language code, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bengali" | "bangla" | "bn" => Ok(Self::Bengali),
            "english" | "en" => Ok(Self::English),
            "hindi" | "hi" => Ok(Self::Hindi),
            _ => Err(LanguageParseError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Bengali.code(), "bn");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Hindi.code(), "hi");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Language::Bengali.placeholder(), "এখানে বাংলা লিখুন...");
        assert_eq!(
            Language::English.placeholder(),
            "Type your English text here..."
        );
        assert_eq!(Language::Hindi.placeholder(), "यहाँ हिंदी में लिखें...");
    }

    #[test]
    fn test_dropdown_order() {
        let names: Vec<_> = Language::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Bengali", "English", "Hindi"]);
        assert_eq!(Language::default(), Language::Bengali);
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(
            Language::Bengali.download_filename("mp3"),
            "bengali_speech.mp3"
        );
        assert_eq!(Language::Hindi.download_filename("mp3"), "hindi_speech.mp3");
    }

    #[test]
    fn test_parse_accepts_names_slugs_and_codes() {
        assert_eq!("Bengali".parse::<Language>(), Ok(Language::Bengali));
        assert_eq!("english".parse::<Language>(), Ok(Language::English));
        assert_eq!("HI".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!(" bn ".parse::<Language>(), Ok(Language::Bengali));
        assert!("french".parse::<Language>().is_err());
    }

    #[test]
    fn test_from_str_or_default() {
        assert_eq!(Language::from_str_or_default("hindi"), Language::Hindi);
        // Unknown defaults to Bengali
        assert_eq!(Language::from_str_or_default("klingon"), Language::Bengali);
        assert_eq!(Language::from_str_or_default(""), Language::Bengali);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Language::Hindi).unwrap();
        assert_eq!(json, "\"hindi\"");
        let parsed: Language = serde_json::from_str("\"bn\"").unwrap();
        assert_eq!(parsed, Language::Bengali);
        let parsed: Language = serde_json::from_str("\"English\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
