use axum::response::Json;
use serde::Serialize;

use crate::core::language::Language;

/// One entry of the language listing
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Display name, e.g. "Bengali"
    pub name: &'static str,
    /// Synthesis language code, e.g. "bn"
    pub code: &'static str,
    /// Placeholder shown in the text area
    pub placeholder: &'static str,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            name: language.name(),
            code: language.code(),
            placeholder: language.placeholder(),
        }
    }
}

/// List supported languages in dropdown order
pub async fn list_languages() -> Json<Vec<LanguageInfo>> {
    Json(Language::ALL.into_iter().map(LanguageInfo::from).collect())
}
