use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;
use crate::enums::analysis_mode::AnalysisMode;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::parsed_analysis::ParsedAnalysis;

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub code: String,
    pub language: String,
    pub mode: AnalysisMode,
    pub response: String,
    pub timestamp: DateTime<Local>,
}

/// Per-user state owned by the application layer and lent to the analyzer
/// for each request. Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    current_code: String,
    history: Vec<HistoryEntry>,
    last_analysis: Option<ParsedAnalysis>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_code(&mut self, code: impl Into<String>) {
        self.current_code = code.into();
    }

    pub fn current_code(&self) -> &str {
        &self.current_code
    }

    pub fn record(&mut self, request: &AnalysisRequest, resolved_language: &str, response: &str, analysis: &ParsedAnalysis) {
        self.history.push(HistoryEntry {
            id: Uuid::new_v4(),
            code: request.code().to_string(),
            language: resolved_language.to_string(),
            mode: request.mode(),
            response: response.to_string(),
            timestamp: Local::now(),
        });
        self.last_analysis = Some(analysis.clone());
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn last_analysis(&self) -> Option<&ParsedAnalysis> {
        self.last_analysis.as_ref()
    }

    pub fn clear(&mut self) {
        self.current_code.clear();
        self.history.clear();
        self.last_analysis = None;
    }
}
