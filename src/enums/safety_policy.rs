use serde::{Deserialize, Serialize};

pub const HARM_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Content-safety thresholds sent with every generation request.
///
/// `ProviderDefault` sends no safety settings at all and leaves filtering to
/// the provider. Every other policy applies one threshold to all four harm
/// categories; `BlockNone` disables filtering entirely and should only be
/// chosen deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SafetyPolicy {
    #[default]
    ProviderDefault,
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
}

impl SafetyPolicy {
    pub fn threshold(&self) -> Option<&'static str> {
        match self {
            Self::ProviderDefault => None,
            Self::BlockNone => Some("BLOCK_NONE"),
            Self::BlockOnlyHigh => Some("BLOCK_ONLY_HIGH"),
            Self::BlockMediumAndAbove => Some("BLOCK_MEDIUM_AND_ABOVE"),
        }
    }
}
