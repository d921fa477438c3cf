use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::enums::language::Language;
use crate::errors::{DebuggerError, DebuggerResult};
use crate::structs::config::config::Config;
use crate::structs::credentials::Credentials;

static CREDENTIALS: OnceCell<Arc<Credentials>> = OnceCell::new();

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the config from `path`, or from the default location. A missing
    /// default file yields the built-in defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> DebuggerResult<Config> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        if !config_path.exists() {
            if explicit {
                return Err(DebuggerError::ConfigurationFileError {
                    path: config_path.display().to_string(),
                    reason: "file does not exist".to_string(),
                });
            }
            log::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path).map_err(|e| DebuggerError::ConfigurationFileError {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| DebuggerError::ConfigurationFileError {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn parse(content: &str) -> DebuggerResult<Config> {
        Ok(toml::from_str::<Config>(content)?)
    }

    /// Credentials are read from the environment once per process and shared afterwards.
    pub fn credentials(config: &Config) -> DebuggerResult<Arc<Credentials>> {
        CREDENTIALS
            .get_or_try_init(|| Credentials::load(config, |name| std::env::var(name).ok()).map(Arc::new))
            .cloned()
    }

    pub fn create_sample_config(path: Option<&Path>) -> DebuggerResult<PathBuf> {
        let sample_config = r#"# AI Debugger Configuration

[ai]
provider = "gemini"
model = "gemini-1.5-pro"
max_output_tokens = 2048
temperature = 0.4
# Environment variable holding the Gemini API key
api_key_env = "GEMINI_API_KEY"
request_timeout_secs = 60
# "provider_default", "block_none", "block_only_high", "block_medium_and_above"
safety_policy = "provider_default"
# Number of analysis replies memoized per process (0 disables the cache)
cache_capacity = 64

[analysis]
# Language used when auto-detection is requested
default_language = "python"
# "free_text" (### section headers) or "structured" (JSON)
response_format = "free_text"
# "full_audit", "quick_fix", "security_review"
default_mode = "full_audit"
# Run python/javascript/java snippets in the sandbox before asking the model
execute_code = false

[execution]
timeout_secs = 5
cpu_limit_secs = 10
memory_limit_mb = 512
max_file_size_kb = 10240
max_output_bytes = 65536
# Isolation prefix, e.g. ["unshare", "-rn"] or ["firejail", "--quiet", "--net=none"]
sandbox_wrapper = []
python_command = "python3"
node_command = "node"
javac_command = "javac"
java_command = "java"

[ocr]
endpoint = "https://vision.googleapis.com/v1/images:annotate"
credentials_path_env = "GOOGLE_APPLICATION_CREDENTIALS"
credentials_json_env = "GOOGLE_CREDENTIALS_JSON"
access_token_env = "GOOGLE_OAUTH_ACCESS_TOKEN"
request_timeout_secs = 30
"#;
        let config_file_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_config_path);

        if config_file_path.exists() {
            return Err(DebuggerError::file_error(
                &config_file_path.display().to_string(),
                "create",
                "file already exists",
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.provider != "gemini" {
            errors.push(format!("Unsupported AI provider '{}': only 'gemini' is available", config.ai.provider));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be between 0.0 and 2.0, got {}", config.ai.temperature));
        }

        if config.ai.max_output_tokens == 0 {
            errors.push("ai.max_output_tokens must be greater than 0".to_string());
        }

        if config.ai.request_timeout_secs == 0 {
            errors.push("ai.request_timeout_secs must be greater than 0".to_string());
        }

        if Language::from_name(&config.analysis.default_language).is_auto_detect() {
            errors.push("analysis.default_language must name a concrete language".to_string());
        }

        if config.execution.timeout_secs == 0 {
            errors.push("execution.timeout_secs must be greater than 0".to_string());
        }

        if config.execution.max_output_bytes == 0 {
            errors.push("execution.max_output_bytes must be greater than 0".to_string());
        }

        if config.ocr.request_timeout_secs == 0 {
            errors.push("ocr.request_timeout_secs must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
