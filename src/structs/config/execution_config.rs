use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::config::constants::timeout_duration_secs;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExecutionConfig {
    /// Wall-clock limit for each compile or run step.
    #[serde(default = "ConfigHelper::default_execution_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_cpu_limit_secs")]
    pub cpu_limit_secs: u64,

    #[serde(default = "ConfigHelper::default_memory_limit_mb")]
    pub memory_limit_mb: u64,

    #[serde(default = "ConfigHelper::default_max_file_size_kb")]
    pub max_file_size_kb: u64,

    #[serde(default = "ConfigHelper::default_max_output_bytes")]
    pub max_output_bytes: usize,

    /// Command prefix providing filesystem/network isolation, e.g. `["unshare", "-rn"]`.
    #[serde(default)]
    pub sandbox_wrapper: Vec<String>,

    #[serde(default = "ConfigHelper::default_python_command")]
    pub python_command: String,

    #[serde(default = "ConfigHelper::default_node_command")]
    pub node_command: String,

    #[serde(default = "ConfigHelper::default_javac_command")]
    pub javac_command: String,

    #[serde(default = "ConfigHelper::default_java_command")]
    pub java_command: String,
}

impl ExecutionConfig {
    pub fn timeout(&self) -> Duration {
        timeout_duration_secs(self.timeout_secs)
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: ConfigHelper::default_execution_timeout_secs(),
            cpu_limit_secs: ConfigHelper::default_cpu_limit_secs(),
            memory_limit_mb: ConfigHelper::default_memory_limit_mb(),
            max_file_size_kb: ConfigHelper::default_max_file_size_kb(),
            max_output_bytes: ConfigHelper::default_max_output_bytes(),
            sandbox_wrapper: Vec::new(),
            python_command: ConfigHelper::default_python_command(),
            node_command: ConfigHelper::default_node_command(),
            javac_command: ConfigHelper::default_javac_command(),
            java_command: ConfigHelper::default_java_command(),
        }
    }
}
