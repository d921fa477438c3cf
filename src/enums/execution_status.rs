use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "code")]
pub enum ExecutionStatus {
    /// Program ran to completion with this exit code.
    Exited(i32),
    /// Program was killed by a signal (resource limit or crash).
    Terminated,
    /// Compile step failed; the program never ran.
    CompileFailed(i32),
    TimedOut,
    Unsupported,
    /// Interpreter or compiler could not be started.
    LaunchFailed,
}
