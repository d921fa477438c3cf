use serde::{Deserialize, Serialize};
use crate::enums::execution_language::ExecutionLanguage;
use crate::enums::execution_status::ExecutionStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
    pub status: ExecutionStatus,
}

impl ExecutionOutcome {
    pub fn finished(stdout: String, stderr: String, exit_code: Option<i32>) -> Self {
        Self {
            stdout,
            stderr,
            timed_out: false,
            status: exit_code.map_or(ExecutionStatus::Terminated, ExecutionStatus::Exited),
        }
    }

    pub fn compile_failed(stdout: String, stderr: String, exit_code: Option<i32>) -> Self {
        Self {
            stdout,
            stderr,
            timed_out: false,
            status: ExecutionStatus::CompileFailed(exit_code.unwrap_or(-1)),
        }
    }

    /// Nothing captured before the deadline is kept.
    pub fn timed_out() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            timed_out: true,
            status: ExecutionStatus::TimedOut,
        }
    }

    pub fn unsupported() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            timed_out: false,
            status: ExecutionStatus::Unsupported,
        }
    }

    pub fn launch_failed(language: ExecutionLanguage, reason: &str) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("could not start {} toolchain: {}", language, reason),
            timed_out: false,
            status: ExecutionStatus::LaunchFailed,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.status != ExecutionStatus::Unsupported
    }

    /// Whether the run observed a real failure of the user's code.
    pub fn has_errors(&self) -> bool {
        match self.status {
            ExecutionStatus::Exited(code) => code != 0 || !self.stderr.trim().is_empty(),
            ExecutionStatus::Terminated | ExecutionStatus::CompileFailed(_) | ExecutionStatus::TimedOut => true,
            ExecutionStatus::Unsupported | ExecutionStatus::LaunchFailed => false,
        }
    }

    pub fn summary(&self) -> String {
        match &self.status {
            ExecutionStatus::TimedOut => "Execution timed out; no output was captured".to_string(),
            ExecutionStatus::Unsupported => "Execution is not supported for this language".to_string(),
            ExecutionStatus::LaunchFailed => format!("Execution could not start: {}", self.stderr.trim()),
            ExecutionStatus::CompileFailed(code) => {
                format!("Compilation failed (exit code {})\n{}", code, self.combined_output())
            }
            ExecutionStatus::Terminated => {
                format!("Process was terminated by a signal\n{}", self.combined_output())
            }
            ExecutionStatus::Exited(code) => {
                format!("Process exited with code {}\n{}", code, self.combined_output())
            }
        }
    }

    fn combined_output(&self) -> String {
        let mut out = String::new();
        if !self.stdout.trim().is_empty() {
            out.push_str(&format!("stdout:\n{}\n", self.stdout.trim_end()));
        }
        if !self.stderr.trim().is_empty() {
            out.push_str(&format!("stderr:\n{}\n", self.stderr.trim_end()));
        }
        if out.is_empty() {
            out.push_str("(no output)");
        }
        out.trim_end().to_string()
    }
}
