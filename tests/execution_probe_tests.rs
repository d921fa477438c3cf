use aidebugger::enums::execution_language::ExecutionLanguage;
use aidebugger::enums::execution_status::ExecutionStatus;
use aidebugger::services::execution_probe::{find_program, ExecutionProbe};
use aidebugger::structs::config::execution_config::ExecutionConfig;

macro_rules! skip_without {
    ($($program:expr),+) => {
        $(
            if find_program($program).is_none() {
                eprintln!("skipping: {} is not installed", $program);
                return;
            }
        )+
    };
}

fn probe_with(timeout_secs: u64) -> ExecutionProbe {
    ExecutionProbe::new(ExecutionConfig {
        timeout_secs,
        ..ExecutionConfig::default()
    })
}

#[tokio::test]
async fn python_stdout_is_captured() {
    skip_without!("python3");

    let outcome = probe_with(10).execute("print('hello from the probe')", ExecutionLanguage::Python).await;

    assert_eq!(outcome.status, ExecutionStatus::Exited(0));
    assert_eq!(outcome.stdout.trim(), "hello from the probe");
    assert!(!outcome.timed_out);
    assert!(!outcome.has_errors());
}

#[tokio::test]
async fn python_runtime_error_is_reported() {
    skip_without!("python3");

    let outcome = probe_with(10).execute("x = 1 / 0", ExecutionLanguage::Python).await;

    assert_eq!(outcome.status, ExecutionStatus::Exited(1));
    assert!(outcome.stderr.contains("ZeroDivisionError"));
    assert!(outcome.has_errors());
}

#[tokio::test]
async fn endless_loop_times_out_without_partial_output() {
    skip_without!("python3");

    let code = "import sys\nprint('started')\nsys.stdout.flush()\nwhile True:\n    pass\n";
    let outcome = probe_with(1).execute(code, ExecutionLanguage::Python).await;

    assert!(outcome.timed_out);
    assert_eq!(outcome.status, ExecutionStatus::TimedOut);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.is_empty());
}

#[tokio::test]
async fn environment_is_scrubbed_and_home_is_the_workdir() {
    skip_without!("python3");

    let code = "import os\nprint(os.environ.get('HOME') == os.getcwd())\nprint(os.environ.get('CARGO_MANIFEST_DIR'))";
    let outcome = probe_with(10).execute(code, ExecutionLanguage::Python).await;

    let lines: Vec<&str> = outcome.stdout.lines().collect();
    assert_eq!(lines, vec!["True", "None"]);
}

#[tokio::test]
async fn output_is_truncated_at_the_limit() {
    skip_without!("python3");

    let probe = ExecutionProbe::new(ExecutionConfig {
        max_output_bytes: 100,
        ..ExecutionConfig::default()
    });
    let outcome = probe.execute("print('x' * 5000)", ExecutionLanguage::Python).await;

    assert!(outcome.stdout.starts_with(&"x".repeat(100)));
    assert!(outcome.stdout.ends_with("[output truncated]"));
}

#[cfg(target_os = "linux")]
fn peak_rss_kb() -> u64 {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| {
            status
                .lines()
                .find(|line| line.starts_with("VmHWM:"))
                .and_then(|line| line.split_whitespace().nth(1))
                .and_then(|kb| kb.parse().ok())
        })
        .unwrap_or(0)
}

#[cfg(target_os = "linux")]
fn is_running(pid: u32) -> bool {
    std::fs::read_to_string(format!("/proc/{}/stat", pid))
        .map(|stat| stat.rsplit(')').next().is_some_and(|rest| !rest.trim_start().starts_with('Z')))
        .unwrap_or(false)
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn flood_of_output_keeps_host_memory_bounded() {
    skip_without!("python3");

    let probe = ExecutionProbe::new(ExecutionConfig {
        max_output_bytes: 100,
        timeout_secs: 60,
        ..ExecutionConfig::default()
    });
    let code = "import sys\nchunk = 'x' * (1024 * 1024)\nfor _ in range(300):\n    sys.stdout.write(chunk)\n";

    let before = peak_rss_kb();
    let outcome = probe.execute(code, ExecutionLanguage::Python).await;
    let after = peak_rss_kb();

    assert_eq!(outcome.status, ExecutionStatus::Exited(0));
    assert!(outcome.stdout.starts_with(&"x".repeat(100)));
    assert!(outcome.stdout.ends_with("[output truncated]"));
    assert!(after.saturating_sub(before) < 150 * 1024, "peak RSS grew from {}KB to {}KB", before, after);
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn timeout_kills_processes_the_snippet_spawned() {
    skip_without!("python3", "sleep");

    let scratch = tempfile::TempDir::new().unwrap();
    let pid_file = scratch.path().join("grandchild.pid");
    let code = format!(
        "import subprocess, time\nchild = subprocess.Popen(['sleep', '4242'])\nwith open(r'{}', 'w') as f:\n    f.write(str(child.pid))\nwhile True:\n    time.sleep(0.1)\n",
        pid_file.display()
    );

    let outcome = probe_with(2).execute(&code, ExecutionLanguage::Python).await;
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;

    let grandchild: u32 = std::fs::read_to_string(&pid_file).unwrap().trim().parse().unwrap();
    assert!(outcome.timed_out);
    assert!(!is_running(grandchild), "sleep {} survived the timeout", grandchild);
}

#[tokio::test]
async fn javascript_runs_under_node() {
    skip_without!("node");

    let outcome = probe_with(10).execute("console.log(6 * 7)", ExecutionLanguage::JavaScript).await;

    assert_eq!(outcome.status, ExecutionStatus::Exited(0));
    assert_eq!(outcome.stdout.trim(), "42");
}

#[tokio::test]
async fn java_is_compiled_then_run() {
    skip_without!("javac", "java");

    let code = "public class Greeter {\n    public static void main(String[] args) {\n        System.out.println(\"hi\");\n    }\n}\n";
    let outcome = probe_with(60).execute(code, ExecutionLanguage::Java).await;

    assert_eq!(outcome.status, ExecutionStatus::Exited(0));
    assert_eq!(outcome.stdout.trim(), "hi");
}

#[tokio::test]
async fn java_compile_error_stops_before_running() {
    skip_without!("javac", "java");

    let code = "public class Broken {\n    public static void main(String[] args) {\n        int x = \"text\";\n    }\n}\n";
    let outcome = probe_with(60).execute(code, ExecutionLanguage::Java).await;

    assert!(matches!(outcome.status, ExecutionStatus::CompileFailed(code) if code != 0));
    assert!(outcome.stderr.contains("Broken.java"));
    assert!(outcome.has_errors());
}

#[tokio::test]
async fn unsupported_language_is_never_run() {
    let outcome = probe_with(1).execute("package main", ExecutionLanguage::Unsupported).await;

    assert_eq!(outcome.status, ExecutionStatus::Unsupported);
    assert!(!outcome.is_supported());
    assert!(!outcome.has_errors());
}

#[tokio::test]
async fn missing_interpreter_is_a_launch_failure() {
    let probe = ExecutionProbe::new(ExecutionConfig {
        python_command: "no-such-python-interpreter".to_string(),
        ..ExecutionConfig::default()
    });

    let outcome = probe.execute("print(1)", ExecutionLanguage::Python).await;

    assert_eq!(outcome.status, ExecutionStatus::LaunchFailed);
    assert!(outcome.stderr.contains("no-such-python-interpreter"));
}
