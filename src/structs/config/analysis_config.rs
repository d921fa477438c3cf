use serde::{Deserialize, Serialize};
use crate::enums::analysis_mode::AnalysisMode;
use crate::enums::response_format::ResponseFormat;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    /// Language assumed when the caller asks for auto-detection.
    #[serde(default = "ConfigHelper::default_language")]
    pub default_language: String,

    #[serde(default)]
    pub response_format: ResponseFormat,

    #[serde(default)]
    pub default_mode: AnalysisMode,

    #[serde(default)]
    pub execute_code: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_language: ConfigHelper::default_language(),
            response_format: ResponseFormat::default(),
            default_mode: AnalysisMode::default(),
            execute_code: false,
        }
    }
}
