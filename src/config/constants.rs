use std::time::Duration;

pub const CONFIG_DIR_NAME: &str = "aidebugger";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";

pub const GOOGLE_CREDENTIALS_PATH_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const GOOGLE_CREDENTIALS_JSON_ENV: &str = "GOOGLE_CREDENTIALS_JSON";
pub const GOOGLE_ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";
pub const VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";
pub const VISION_SCOPE: &str = "https://www.googleapis.com/auth/cloud-vision";
pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub const ACCESS_TOKEN_LIFETIME_SECS: i64 = 3600;
pub const ACCESS_TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

pub const DEFAULT_LANGUAGE: &str = "python";
pub const DEFAULT_EXECUTION_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_OCR_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CACHE_CAPACITY: usize = 64;
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 64 * 1024;

/// Variables passed through to sandboxed programs; everything else is cleared.
pub const SANDBOX_ENV_ALLOWLIST: &[&str] = &["PATH", "LANG", "LC_ALL", "JAVA_HOME", "PYENV_ROOT", "SYSTEMROOT"];

pub const SOURCE_FILE_EXTENSIONS: &[(&str, &str)] = &[
    ("py", "python"),
    ("js", "javascript"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("go", "go"),
];

pub const IMAGE_FILE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub const STDIN_PATH: &str = "-";

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
