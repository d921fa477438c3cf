use crate::enums::code_template::CodeTemplate;
use crate::errors::{DebuggerError, DebuggerResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub description: String,
    pub language: String,
    pub template: Option<CodeTemplate>,
}

impl GenerationRequest {
    pub fn new(description: impl Into<String>, language: impl Into<String>, template: Option<CodeTemplate>) -> DebuggerResult<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DebuggerError::input_error(
                "<empty description>",
                "a description of the functionality",
                "Please describe the functionality to generate",
            ));
        }

        Ok(Self {
            description,
            language: language.into(),
            template,
        })
    }
}
