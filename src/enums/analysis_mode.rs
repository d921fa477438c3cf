use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    #[default]
    FullAudit,
    QuickFix,
    SecurityReview,
}

impl AnalysisMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullAudit => "Full Audit",
            Self::QuickFix => "Quick Fix",
            Self::SecurityReview => "Security Review",
        }
    }

    pub fn focus(&self) -> &'static str {
        match self {
            Self::FullAudit => "Perform a full audit: correctness, error handling, performance, readability and maintainability.",
            Self::QuickFix => "Perform a quick fix: only correct errors that stop the code from running or producing the right result. Keep every other line unchanged.",
            Self::SecurityReview => "Perform a security review: injection, unsafe deserialization, hardcoded secrets, missing input validation, insecure defaults and resource exhaustion.",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
