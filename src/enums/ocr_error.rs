use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OcrError {
    #[error("image is empty")]
    EmptyImage,
    #[error("no text detected in image")]
    NoTextDetected,
    #[error("vision service error: {0}")]
    Service(String),
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("network error: {0}")]
    Transport(String),
}

impl OcrError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyImage => "empty-image",
            Self::NoTextDetected => "no-text",
            Self::Service(_) => "service",
            Self::Authentication(_) => "authentication",
            Self::Transport(_) => "transport",
        }
    }
}
