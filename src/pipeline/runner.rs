use crate::config::{LauncherConfig, TaskConfig};
use crate::core::error::Result;
use std::future::Future;
use tracing::info;

/// Something that can run one task to completion and report its exit code.
///
/// `VenvExecutor` is the production implementation; tests substitute
/// recording fakes.
pub trait TaskRunner {
    /// Whether the runner can start anything at all (e.g. the interpreter
    /// exists). Checked once, before the first task.
    fn is_ready(&self) -> bool;

    fn run_task(&self, task: &TaskConfig) -> impl Future<Output = Result<i32>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Completed,
    Failed { task: String, code: i32 },
}

/// Ordered tasks where each one only runs if every earlier one exited 0.
#[derive(Debug, Clone)]
pub struct Pipeline {
    tasks: Vec<TaskConfig>,
}

impl Pipeline {
    pub fn new(tasks: Vec<TaskConfig>) -> Self {
        Self { tasks }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.tasks.clone())
    }

    pub fn tasks(&self) -> &[TaskConfig] {
        &self.tasks
    }

    pub async fn run<R: TaskRunner>(&self, runner: &R) -> Result<PipelineOutcome> {
        for (index, task) in self.tasks.iter().enumerate() {
            info!(task = %task.name, script = %task.script, "starting task");

            let code = runner.run_task(task).await?;

            info!(task = %task.name, exit_code = code, "task finished");

            if code != 0 {
                let remaining = self.tasks[index + 1..]
                    .iter()
                    .map(|t| t.name.as_str())
                    .collect::<Vec<_>>();
                info!(task = %task.name, ?remaining, "task failed; skipping remaining tasks");

                return Ok(PipelineOutcome::Failed {
                    task: task.name.clone(),
                    code,
                });
            }
        }

        Ok(PipelineOutcome::Completed)
    }
}
