use serde::Serialize;
use crate::enums::analysis_mode::AnalysisMode;
use crate::enums::code_template::CodeTemplate;
use crate::enums::language::Language;
use crate::errors::{DebuggerError, DebuggerResult};

/// One user request for a review. Construction rejects blank code, so every
/// value of this type is safe to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    code: String,
    language: Language,
    mode: AnalysisMode,
    template: Option<CodeTemplate>,
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>, language: Language, mode: AnalysisMode) -> DebuggerResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DebuggerError::input_error(
                "<empty code>",
                "non-empty source code",
                "Please input code to analyze",
            ));
        }

        Ok(Self {
            code,
            language,
            mode,
            template: None,
        })
    }

    pub fn with_template(mut self, template: Option<CodeTemplate>) -> Self {
        self.template = template;
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn template(&self) -> Option<CodeTemplate> {
        self.template
    }
}
