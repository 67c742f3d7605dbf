pub mod pause;
pub mod runner;

pub use pause::pause;
pub use runner::{Pipeline, PipelineOutcome, TaskRunner};

/// How a launch ended, and the status the process should exit with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success,
    MissingInterpreter,
    TaskFailed { task: String, code: i32 },
}

impl LaunchOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchOutcome::Success => 0,
            LaunchOutcome::MissingInterpreter => 1,
            LaunchOutcome::TaskFailed { code, .. } => *code,
        }
    }
}
