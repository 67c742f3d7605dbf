use crate::config::{LauncherConfig, LauncherConfigManager, DEFAULT_VENV_DIR};
use crate::core::error::Result;
use crate::core::launcher_root;
use crate::pipeline::{pause, LaunchOutcome, Pipeline, PipelineOutcome, TaskRunner};
use crate::python::VenvExecutor;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tracing::{debug, info};

/// Launch from the directory holding the executable, on the real stdio.
pub async fn execute() -> Result<i32> {
    let root = launcher_root()?;
    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    let outcome = launch_in(&root, &mut input, &mut output).await?;
    Ok(outcome.exit_code())
}

/// Load the configuration found under `root` and launch against the venv
/// interpreter there.
///
/// A broken `launcher.toml` is only reported when the default interpreter
/// exists; without one the launch ends as `MissingInterpreter`, silently.
pub async fn launch_in<R, W>(root: &Path, input: &mut R, output: &mut W) -> Result<LaunchOutcome>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let manager = LauncherConfigManager::new(root);
    if manager.exists() {
        debug!(path = %manager.config_path().display(), "using launcher configuration");
    }
    let config = match manager.load().await {
        Ok(config) => config,
        Err(e) => {
            let fallback = VenvExecutor::new(root.to_path_buf(), DEFAULT_VENV_DIR);
            if !fallback.is_ready() {
                debug!(error = %e, "launcher configuration unusable and interpreter not found");
                return Ok(LaunchOutcome::MissingInterpreter);
            }
            return Err(e);
        }
    };

    let executor = VenvExecutor::new(root.to_path_buf(), &config.venv.dir);
    launch_with(&config, &executor, input, output).await
}

pub async fn launch_with<T, R, W>(
    config: &LauncherConfig,
    runner: &T,
    input: &mut R,
    output: &mut W,
) -> Result<LaunchOutcome>
where
    T: TaskRunner,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    // Missing interpreter exits 1 without printing anything.
    if !runner.is_ready() {
        debug!(venv = %config.venv.dir, "interpreter not found; nothing to run");
        return Ok(LaunchOutcome::MissingInterpreter);
    }

    match Pipeline::from_config(config).run(runner).await? {
        PipelineOutcome::Failed { task, code } => Ok(LaunchOutcome::TaskFailed { task, code }),
        PipelineOutcome::Completed => {
            if config.pause.enabled {
                pause(&config.pause.prompt, input, output).await?;
            } else {
                info!("pause disabled; exiting");
            }
            Ok(LaunchOutcome::Success)
        }
    }
}
