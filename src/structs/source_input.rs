use std::path::PathBuf;
use crate::enums::language::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    Code {
        origin: String,
        text: String,
        language: Language,
    },
    Image {
        path: PathBuf,
        bytes: Vec<u8>,
    },
}

impl SourceInput {
    pub fn origin(&self) -> String {
        match self {
            Self::Code { origin, .. } => origin.clone(),
            Self::Image { path, .. } => path.display().to_string(),
        }
    }
}
