use serde::{Deserialize, Serialize};
use crate::enums::safety_policy::{SafetyPolicy, HARM_CATEGORIES};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GeminiSafetySetting {
    pub category: String,
    pub threshold: String,
}

impl GeminiSafetySetting {
    /// One setting per harm category, or `None` when the provider default applies.
    pub fn for_policy(policy: SafetyPolicy) -> Option<Vec<Self>> {
        let threshold = policy.threshold()?;
        Some(
            HARM_CATEGORIES
                .iter()
                .map(|category| Self {
                    category: (*category).to_string(),
                    threshold: threshold.to_string(),
                })
                .collect(),
        )
    }
}
