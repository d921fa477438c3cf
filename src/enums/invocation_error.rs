use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error("the model returned no text")]
    EmptyResponse,
    #[error("{0}")]
    Transport(String),
}

impl InvocationError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyResponse => "empty-response",
            Self::Transport(_) => "transport",
        }
    }

    pub fn transport(cause: impl Into<String>) -> Self {
        Self::Transport(cause.into())
    }
}
