use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::TempDir;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use crate::config::constants::SANDBOX_ENV_ALLOWLIST;
use crate::enums::execution_language::ExecutionLanguage;
use crate::structs::config::execution_config::ExecutionConfig;
use crate::structs::execution_outcome::ExecutionOutcome;

const TRUNCATION_MARKER: &str = "\n... [output truncated]";
const DEFAULT_JAVA_CLASS: &str = "Main";

/// Result of a single compile or run step.
enum StepResult {
    Finished {
        stdout: String,
        stderr: String,
        exit_code: Option<i32>,
    },
    TimedOut,
    LaunchFailed(String),
}

/// Runs untrusted snippets in a throwaway directory under resource limits.
pub struct ExecutionProbe {
    config: ExecutionConfig,
}

impl ExecutionProbe {
    pub fn new(config: ExecutionConfig) -> Self {
        if config.sandbox_wrapper.is_empty() {
            log::warn!("⚠️ No sandbox_wrapper configured: executed code can reach the network and the filesystem");
        }
        Self { config }
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    pub async fn execute(&self, code: &str, language: ExecutionLanguage) -> ExecutionOutcome {
        if !language.is_supported() {
            return ExecutionOutcome::unsupported();
        }

        let workdir = match tempfile::Builder::new().prefix("aidebugger-run-").tempdir() {
            Ok(dir) => dir,
            Err(e) => return ExecutionOutcome::launch_failed(language, &format!("temporary directory: {}", e)),
        };

        log::info!("🧪 Executing {} snippet in {}", language, workdir.path().display());

        let outcome = match language {
            ExecutionLanguage::Python => self.run_interpreted(&workdir, code, "main.py", &self.config.python_command, language).await,
            ExecutionLanguage::JavaScript => self.run_interpreted(&workdir, code, "main.js", &self.config.node_command, language).await,
            ExecutionLanguage::Java => self.run_java(&workdir, code).await,
            ExecutionLanguage::Unsupported => ExecutionOutcome::unsupported(),
        };

        log::debug!("Execution finished: {:?}", outcome.status);
        outcome
    }

    async fn run_interpreted(
        &self,
        workdir: &TempDir,
        code: &str,
        file_name: &str,
        program: &str,
        language: ExecutionLanguage,
    ) -> ExecutionOutcome {
        if let Err(e) = write_source(workdir.path(), file_name, code).await {
            return ExecutionOutcome::launch_failed(language, &e);
        }

        let mut args = Vec::new();
        if language == ExecutionLanguage::JavaScript {
            args.push(format!("--max-old-space-size={}", self.config.memory_limit_mb));
        }
        args.push(file_name.to_string());

        let limit_memory = language == ExecutionLanguage::Python;
        match self.run_step(workdir.path(), program, &args, limit_memory).await {
            StepResult::Finished { stdout, stderr, exit_code } => ExecutionOutcome::finished(stdout, stderr, exit_code),
            StepResult::TimedOut => ExecutionOutcome::timed_out(),
            StepResult::LaunchFailed(reason) => ExecutionOutcome::launch_failed(language, &reason),
        }
    }

    async fn run_java(&self, workdir: &TempDir, code: &str) -> ExecutionOutcome {
        let class_name = java_class_name(code);
        let file_name = format!("{}.java", class_name);

        if let Err(e) = write_source(workdir.path(), &file_name, code).await {
            return ExecutionOutcome::launch_failed(ExecutionLanguage::Java, &e);
        }

        let mut compile_args: Vec<String> = self.jvm_flags().into_iter().map(|flag| format!("-J{}", flag)).collect();
        compile_args.push(file_name);

        match self.run_step(workdir.path(), &self.config.javac_command, &compile_args, false).await {
            StepResult::Finished { stdout, stderr, exit_code } if exit_code != Some(0) => {
                return ExecutionOutcome::compile_failed(stdout, stderr, exit_code);
            }
            StepResult::Finished { .. } => {}
            StepResult::TimedOut => return ExecutionOutcome::timed_out(),
            StepResult::LaunchFailed(reason) => return ExecutionOutcome::launch_failed(ExecutionLanguage::Java, &reason),
        }

        let mut run_args = self.jvm_flags();
        run_args.extend(["-cp".to_string(), ".".to_string(), class_name]);

        match self.run_step(workdir.path(), &self.config.java_command, &run_args, false).await {
            StepResult::Finished { stdout, stderr, exit_code } => ExecutionOutcome::finished(stdout, stderr, exit_code),
            StepResult::TimedOut => ExecutionOutcome::timed_out(),
            StepResult::LaunchFailed(reason) => ExecutionOutcome::launch_failed(ExecutionLanguage::Java, &reason),
        }
    }

    fn jvm_flags(&self) -> Vec<String> {
        vec![
            format!("-Xmx{}m", (self.config.memory_limit_mb / 2).max(64)),
            "-XX:CompressedClassSpaceSize=64m".to_string(),
        ]
    }

    async fn run_step(&self, workdir: &Path, program: &str, args: &[String], limit_memory: bool) -> StepResult {
        if find_program(program).is_none() {
            return StepResult::LaunchFailed(format!("'{}' was not found on PATH", program));
        }

        let mut command = self.sandboxed_command(program, args, limit_memory);
        command
            .current_dir(workdir)
            .env_clear()
            .envs(SANDBOX_ENV_ALLOWLIST.iter().filter_map(|name| std::env::var(name).ok().map(|value| (*name, value))))
            .env("HOME", workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(unix)]
        command.process_group(0);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => return StepResult::LaunchFailed(e.to_string()),
        };
        let process_group = child.id();

        let max_bytes = self.config.max_output_bytes;
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let run = async {
            let (stdout, stderr, status) = tokio::join!(
                read_capped(stdout, max_bytes),
                read_capped(stderr, max_bytes),
                child.wait(),
            );
            status.map(|status| (stdout, stderr, status))
        };

        let result = tokio::time::timeout(self.config.timeout(), run).await;
        kill_process_group(process_group).await;

        match result {
            Err(_) => {
                let _ = child.kill().await;
                log::warn!("⏰ {} exceeded {}s and was killed", program, self.config.timeout_secs);
                StepResult::TimedOut
            }
            Ok(Err(e)) => StepResult::LaunchFailed(e.to_string()),
            Ok(Ok((stdout, stderr, status))) => StepResult::Finished {
                stdout: cap_output(&stdout, max_bytes),
                stderr: cap_output(&stderr, max_bytes),
                exit_code: status.code(),
            },
        }
    }

    #[cfg(unix)]
    fn sandboxed_command(&self, program: &str, args: &[String], limit_memory: bool) -> Command {
        let mut script = format!(
            "ulimit -t {} 2>/dev/null; ulimit -f {} 2>/dev/null; ",
            self.config.cpu_limit_secs,
            self.config.max_file_size_kb * 2,
        );
        if limit_memory {
            script.push_str(&format!("ulimit -v {} 2>/dev/null; ", self.config.memory_limit_mb * 1024));
        }
        script.push_str("exec \"$@\"");

        let mut command = Command::new("sh");
        command
            .arg("-c")
            .arg(script)
            .arg("aidebugger-sandbox")
            .args(&self.config.sandbox_wrapper)
            .arg(program)
            .args(args);
        command
    }

    #[cfg(not(unix))]
    fn sandboxed_command(&self, program: &str, args: &[String], _limit_memory: bool) -> Command {
        match self.config.sandbox_wrapper.split_first() {
            Some((wrapper, wrapper_args)) => {
                let mut command = Command::new(wrapper);
                command.args(wrapper_args).arg(program).args(args);
                command
            }
            None => {
                let mut command = Command::new(program);
                command.args(args);
                command
            }
        }
    }
}

/// Keeps at most `max_bytes + 1` bytes of a pipe and discards the rest, so the
/// writer never blocks and the caller can tell the stream was cut.
async fn read_capped<R: AsyncRead + Unpin>(reader: Option<R>, max_bytes: usize) -> Vec<u8> {
    let Some(mut reader) = reader else {
        return Vec::new();
    };

    let mut captured = Vec::new();
    if (&mut reader).take(max_bytes as u64 + 1).read_to_end(&mut captured).await.is_ok() {
        let _ = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await;
    }
    captured
}

/// SIGKILLs everything left in the step's process group, grandchildren included.
#[cfg(unix)]
async fn kill_process_group(process_group: Option<u32>) {
    let Some(pgid) = process_group else {
        return;
    };

    let killed = Command::new("kill")
        .arg("-KILL")
        .arg("--")
        .arg(format!("-{}", pgid))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;
    if let Err(e) = killed {
        log::debug!("Could not signal process group {}: {}", pgid, e);
    }
}

#[cfg(not(unix))]
async fn kill_process_group(_process_group: Option<u32>) {}

async fn write_source(dir: &Path, file_name: &str, code: &str) -> Result<(), String> {
    tokio::fs::write(dir.join(file_name), code)
        .await
        .map_err(|e| format!("writing {}: {}", file_name, e))
}

/// Name of the first `public class`, or `Main`.
pub fn java_class_name(code: &str) -> String {
    code.split("public class")
        .skip(1)
        .find_map(|rest| {
            let name: String = rest
                .trim_start()
                .chars()
                .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
                .collect();
            (!name.is_empty() && rest.starts_with(char::is_whitespace)).then_some(name)
        })
        .unwrap_or_else(|| DEFAULT_JAVA_CLASS.to_string())
}

/// Keeps the first `max_bytes` of a stream and marks the cut.
pub fn cap_output(bytes: &[u8], max_bytes: usize) -> String {
    if bytes.len() <= max_bytes {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let mut text = String::from_utf8_lossy(&bytes[..max_bytes]).into_owned();
    text.push_str(TRUNCATION_MARKER);
    text
}

/// Resolves `program` the way a shell would, through `PATH`.
pub fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .flat_map(|dir| executable_names(program).into_iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

#[cfg(windows)]
fn executable_names(program: &str) -> Vec<String> {
    vec![program.to_string(), format!("{}.exe", program), format!("{}.cmd", program)]
}

#[cfg(not(windows))]
fn executable_names(program: &str) -> Vec<String> {
    vec![program.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_class_defaults_to_main() {
        assert_eq!(java_class_name("class Hidden { }"), "Main");
    }

    #[test]
    fn java_class_reads_public_class() {
        let code = "import java.util.*;\npublic class Greeter_2 {\n}\n";
        assert_eq!(java_class_name(code), "Greeter_2");
    }

    #[test]
    fn output_is_capped_with_marker() {
        let capped = cap_output(b"abcdefgh", 3);
        assert_eq!(capped, format!("abc{}", TRUNCATION_MARKER));
        assert_eq!(cap_output(b"abc", 3), "abc");
    }

    #[test]
    fn missing_program_is_not_found() {
        assert!(find_program("definitely-not-a-real-interpreter-42").is_none());
    }
}
