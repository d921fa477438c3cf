use std::fmt;
use std::fs;
use crate::errors::{DebuggerError, DebuggerResult};
use crate::structs::config::config::Config;
use crate::structs::ocr::service_account_key::ServiceAccountKey;

#[derive(Clone, PartialEq, Eq)]
pub enum VisionCredentials {
    ServiceAccount(ServiceAccountKey),
    AccessToken(String),
}

impl fmt::Debug for VisionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServiceAccount(key) => f.debug_tuple("ServiceAccount").field(key).finish(),
            Self::AccessToken(_) => f.debug_tuple("AccessToken").field(&"<redacted>").finish(),
        }
    }
}

/// Secrets for the two external services. Read once, never mutated.
#[derive(Clone, Default)]
pub struct Credentials {
    model_api_key: Option<String>,
    vision: Option<VisionCredentials>,
    model_api_key_env: String,
}

impl Credentials {
    pub fn new(model_api_key: Option<String>, vision: Option<VisionCredentials>) -> Self {
        Self {
            model_api_key,
            vision,
            model_api_key_env: String::new(),
        }
    }

    /// Reads credentials through `lookup` (normally the process environment).
    /// Absent values are allowed here and rejected by the `require_*` accessors;
    /// present but unreadable service-account material fails immediately.
    pub fn load<F>(config: &Config, lookup: F) -> DebuggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let model_api_key = non_empty(&config.ai.api_key_env).map(|key| key.trim().to_string());

        let vision = if let Some(inline) = non_empty(&config.ocr.credentials_json_env) {
            Some(VisionCredentials::ServiceAccount(Self::parse_service_account(&inline, &config.ocr.credentials_json_env)?))
        } else if let Some(path) = non_empty(&config.ocr.credentials_path_env) {
            let content = fs::read_to_string(path.trim()).map_err(|e| DebuggerError::ConfigurationFileError {
                path: path.clone(),
                reason: format!("cannot read service-account key: {}", e),
            })?;
            Some(VisionCredentials::ServiceAccount(Self::parse_service_account(&content, &path)?))
        } else {
            non_empty(&config.ocr.access_token_env).map(|token| VisionCredentials::AccessToken(token.trim().to_string()))
        };

        Ok(Self {
            model_api_key,
            vision,
            model_api_key_env: config.ai.api_key_env.clone(),
        })
    }

    fn parse_service_account(content: &str, source: &str) -> DebuggerResult<ServiceAccountKey> {
        serde_json::from_str::<ServiceAccountKey>(content).map_err(|e| DebuggerError::config_error(
            &format!("invalid service-account credentials from {}: {}", source, e),
            Some("ocr.credentials"),
            Some("Provide the JSON key downloaded from the Google Cloud console"),
        ))
    }

    pub fn require_model_api_key(&self) -> DebuggerResult<&str> {
        self.model_api_key.as_deref().ok_or_else(|| {
            let env = if self.model_api_key_env.is_empty() { "the model API key variable" } else { &self.model_api_key_env };
            DebuggerError::config_error(
                "Gemini API key is missing",
                Some("ai.api_key_env"),
                Some(&format!("Export {} before running an analysis", env)),
            )
        })
    }

    pub fn require_vision(&self) -> DebuggerResult<&VisionCredentials> {
        self.vision.as_ref().ok_or_else(|| DebuggerError::config_error(
            "Vision credentials are missing",
            Some("ocr"),
            Some("Set GOOGLE_APPLICATION_CREDENTIALS (key path), GOOGLE_CREDENTIALS_JSON (inline key) or GOOGLE_OAUTH_ACCESS_TOKEN"),
        ))
    }

    pub fn has_model_api_key(&self) -> bool {
        self.model_api_key.is_some()
    }

    pub fn has_vision(&self) -> bool {
        self.vision.is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("model_api_key", &self.model_api_key.as_ref().map(|_| "<redacted>"))
            .field("vision", &self.vision)
            .finish()
    }
}
