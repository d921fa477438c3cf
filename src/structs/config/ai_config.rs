use serde::{Deserialize, Serialize};
use crate::enums::safety_policy::SafetyPolicy;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub safety_policy: SafetyPolicy,

    #[serde(default = "ConfigHelper::default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            max_output_tokens: ConfigHelper::default_max_output_tokens(),
            temperature: ConfigHelper::default_temperature(),
            api_key_env: ConfigHelper::default_api_key_env(),
            base_url: ConfigHelper::default_base_url(),
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
            safety_policy: SafetyPolicy::default(),
            cache_capacity: ConfigHelper::default_cache_capacity(),
        }
    }
}
