use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which reply contract the model is asked for, and therefore how the reply is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Markdown reply with fixed `###` section headers.
    #[default]
    FreeText,
    /// JSON object, optionally wrapped in a ```json fence.
    Structured,
}
