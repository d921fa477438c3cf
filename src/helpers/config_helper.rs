use crate::config::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_EXECUTION_TIMEOUT_SECS, DEFAULT_GEMINI_MODEL, DEFAULT_LANGUAGE,
    DEFAULT_MAX_OUTPUT_BYTES, DEFAULT_OCR_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, GEMINI_API_KEY_ENV,
    GEMINI_BASE_URL, GOOGLE_ACCESS_TOKEN_ENV, GOOGLE_CREDENTIALS_JSON_ENV, GOOGLE_CREDENTIALS_PATH_ENV,
    VISION_ENDPOINT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "gemini".to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_GEMINI_MODEL.to_string()
    }

    pub fn default_max_output_tokens() -> u32 {
        2048
    }

    pub fn default_temperature() -> f32 {
        0.4
    }

    pub fn default_api_key_env() -> String {
        GEMINI_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        GEMINI_BASE_URL.to_string()
    }

    pub fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_cache_capacity() -> usize {
        DEFAULT_CACHE_CAPACITY
    }

    pub fn default_language() -> String {
        DEFAULT_LANGUAGE.to_string()
    }

    pub fn default_execution_timeout_secs() -> u64 {
        DEFAULT_EXECUTION_TIMEOUT_SECS
    }

    pub fn default_cpu_limit_secs() -> u64 {
        10
    }

    pub fn default_memory_limit_mb() -> u64 {
        512
    }

    pub fn default_max_file_size_kb() -> u64 {
        10 * 1024
    }

    pub fn default_max_output_bytes() -> usize {
        DEFAULT_MAX_OUTPUT_BYTES
    }

    pub fn default_python_command() -> String {
        "python3".to_string()
    }

    pub fn default_node_command() -> String {
        "node".to_string()
    }

    pub fn default_javac_command() -> String {
        "javac".to_string()
    }

    pub fn default_java_command() -> String {
        "java".to_string()
    }

    pub fn default_vision_endpoint() -> String {
        VISION_ENDPOINT.to_string()
    }

    pub fn default_credentials_path_env() -> String {
        GOOGLE_CREDENTIALS_PATH_ENV.to_string()
    }

    pub fn default_credentials_json_env() -> String {
        GOOGLE_CREDENTIALS_JSON_ENV.to_string()
    }

    pub fn default_access_token_env() -> String {
        GOOGLE_ACCESS_TOKEN_ENV.to_string()
    }

    pub fn default_ocr_timeout_secs() -> u64 {
        DEFAULT_OCR_TIMEOUT_SECS
    }
}
