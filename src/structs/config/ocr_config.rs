use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OcrConfig {
    #[serde(default = "ConfigHelper::default_vision_endpoint")]
    pub endpoint: String,

    /// Variable holding a path to a service-account JSON key.
    #[serde(default = "ConfigHelper::default_credentials_path_env")]
    pub credentials_path_env: String,

    /// Variable holding the service-account JSON key inline.
    #[serde(default = "ConfigHelper::default_credentials_json_env")]
    pub credentials_json_env: String,

    /// Variable holding an already issued OAuth access token.
    #[serde(default = "ConfigHelper::default_access_token_env")]
    pub access_token_env: String,

    #[serde(default = "ConfigHelper::default_ocr_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: ConfigHelper::default_vision_endpoint(),
            credentials_path_env: ConfigHelper::default_credentials_path_env(),
            credentials_json_env: ConfigHelper::default_credentials_json_env(),
            access_token_env: ConfigHelper::default_access_token_env(),
            request_timeout_secs: ConfigHelper::default_ocr_timeout_secs(),
        }
    }
}
