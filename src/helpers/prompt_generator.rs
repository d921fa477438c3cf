use crate::constants::prompts::{
    API_DOCUMENTATION_PROMPT, CLEAN_EXECUTION_PROMPT, CODE_GENERATION_PROMPT, EXECUTION_FEEDBACK_PROMPT,
    FREE_TEXT_ANALYSIS_PROMPT, STRUCTURED_ANALYSIS_PROMPT,
};
use crate::enums::execution_status::ExecutionStatus;
use crate::enums::response_format::ResponseFormat;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::execution_outcome::ExecutionOutcome;
use crate::structs::generation_request::GenerationRequest;

/// Builds model instructions. Pure: output depends only on the inputs and the
/// two settings captured at construction.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    format: ResponseFormat,
    default_language: String,
}

impl PromptBuilder {
    pub fn new(format: ResponseFormat, default_language: impl Into<String>) -> Self {
        Self {
            format,
            default_language: default_language.into(),
        }
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    pub fn resolve_language(&self, request: &AnalysisRequest) -> String {
        request.language().resolve(&self.default_language)
    }

    pub fn build(&self, request: &AnalysisRequest) -> String {
        let lang = self.resolve_language(request);
        let template = match self.format {
            ResponseFormat::FreeText => FREE_TEXT_ANALYSIS_PROMPT,
            ResponseFormat::Structured => STRUCTURED_ANALYSIS_PROMPT,
        };
        let context = request
            .template()
            .map(|t| format!("The code belongs to a {} project.\n", t.label()))
            .unwrap_or_default();

        fill_template(template, &[
            ("lang", &lang),
            ("focus", request.mode().focus()),
            ("context", &context),
            ("code", request.code()),
        ])
    }

    /// Analysis prompt followed by what the sandbox observed.
    pub fn build_with_execution(&self, request: &AnalysisRequest, outcome: &ExecutionOutcome) -> String {
        let mut prompt = self.build(request);

        match outcome.status {
            ExecutionStatus::Unsupported | ExecutionStatus::LaunchFailed => {}
            _ if outcome.has_errors() => {
                let status = match outcome.status {
                    ExecutionStatus::TimedOut => "the program did not finish before the timeout".to_string(),
                    ExecutionStatus::CompileFailed(code) => format!("compilation failed with exit code {}", code),
                    ExecutionStatus::Terminated => "the program was killed by a signal".to_string(),
                    ExecutionStatus::Exited(code) => format!("the program exited with code {}", code),
                    _ => String::new(),
                };
                prompt.push_str(&fill_template(EXECUTION_FEEDBACK_PROMPT, &[
                    ("status", &status),
                    ("stdout", or_none(&outcome.stdout)),
                    ("stderr", or_none(&outcome.stderr)),
                ]));
            }
            _ => {
                prompt.push_str(&fill_template(CLEAN_EXECUTION_PROMPT, &[("stdout", or_none(&outcome.stdout))]));
            }
        }

        prompt
    }

    pub fn build_generation_prompt(&self, request: &GenerationRequest) -> String {
        let template = request
            .template
            .map(|t| format!(" using {} template", t.label()))
            .unwrap_or_default();

        fill_template(CODE_GENERATION_PROMPT, &[
            ("lang", &request.language),
            ("template", &template),
            ("description", &request.description),
        ])
    }

    pub fn build_documentation_prompt(&self, code: &str, language: &str) -> String {
        fill_template(API_DOCUMENTATION_PROMPT, &[("lang", language), ("code", code)])
    }
}

fn or_none(text: &str) -> &str {
    if text.trim().is_empty() { "(empty)" } else { text.trim_end() }
}

/// Single pass `{name}` substitution; inserted values are never rescanned, so
/// user code containing `{lang}` and the like is left intact.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
