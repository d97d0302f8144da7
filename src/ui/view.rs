use crate::core::language::Language;
use crate::core::tts::AudioClip;

/// Warning shown when Play is pressed with blank text
pub const VALIDATION_WARNING: &str = "Please enter some text.";

/// Result of one user action. Exactly one block is rendered per action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Synthesized clip with its suggested download filename
    Audio { clip: AudioClip, filename: String },
    Warning(String),
    Error(String),
    /// Generation info endpoint answered 200
    GenerationInfo { body: String },
    /// Generation info endpoint answered with any other status
    GenerationInfoFailed { status: u16, body: String },
}

impl Outcome {
    /// Short tag used as a `data-outcome` attribute on the result section
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Audio { .. } => "audio",
            Self::Warning(_) => "warning",
            Self::Error(_) => "error",
            Self::GenerationInfo { .. } => "generation-info",
            Self::GenerationInfoFailed { .. } => "generation-info-failed",
        }
    }
}

/// Everything needed to render the page for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub language: Language,
    pub text: String,
    pub outcome: Option<Outcome>,
}

impl PageView {
    pub fn new(language: Language, text: impl Into<String>) -> Self {
        Self {
            language,
            text: text.into(),
            outcome: None,
        }
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Label above the text area, e.g. `Hindi Text`
    pub fn text_label(&self) -> String {
        format!("{} Text", self.language.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_label_follows_language() {
        assert_eq!(PageView::new(Language::Hindi, "").text_label(), "Hindi Text");
        assert_eq!(
            PageView::new(Language::Bengali, "").text_label(),
            "Bengali Text"
        );
    }

    #[test]
    fn test_with_outcome() {
        let view = PageView::new(Language::English, "hi")
            .with_outcome(Outcome::Warning(VALIDATION_WARNING.to_string()));
        assert_eq!(view.outcome.as_ref().map(Outcome::kind), Some("warning"));
        assert_eq!(view.text, "hi");
    }
}
