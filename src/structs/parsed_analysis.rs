use serde::{Deserialize, Serialize};

pub const NO_CODE_CORRECTIONS: &str = "No code corrections suggested";
pub const NO_ERRORS_DETECTED: &str = "No errors detected";
pub const NO_BEST_PRACTICES: &str = "No best practices available";
pub const STRUCTURED_PARSE_FAILURE: &str = "Failed to parse AI response";

/// Everything extracted from one model reply. Every field always holds a
/// value: empty sequences / empty strings by default, or the fallback texts
/// above when a free-text section is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAnalysis {
    pub corrected_code: String,
    pub bugs: Vec<String>,
    pub fixes: Vec<String>,
    pub recommendations: Vec<String>,
    pub optimizations: Vec<String>,
    pub explanation: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParsedAnalysis {
    /// Values used for a free-text reply in which no section could be found.
    pub fn free_text_fallback() -> Self {
        Self {
            corrected_code: NO_CODE_CORRECTIONS.to_string(),
            explanation: vec![NO_ERRORS_DETECTED.to_string()],
            recommendations: vec![NO_BEST_PRACTICES.to_string()],
            ..Self::default()
        }
    }

    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn explanation_text(&self) -> String {
        self.explanation.join("\n")
    }

    pub fn recommendations_text(&self) -> String {
        self.recommendations.join("\n")
    }

    /// True when the model reported nothing wrong with the code.
    pub fn claims_no_errors(&self) -> bool {
        let explanation_silent = self.explanation.is_empty()
            || self.explanation.iter().all(|e| e.trim().is_empty() || e == NO_ERRORS_DETECTED);
        self.bugs.is_empty() && explanation_silent
    }
}
