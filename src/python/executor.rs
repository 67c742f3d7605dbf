use crate::config::TaskConfig;
use crate::core::error::{LauncherError, Result};
use crate::core::{exit_code, resolve_path};
use crate::pipeline::TaskRunner;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

const INTERPRETER: &str = "python";

pub struct VenvExecutor {
    venv_path: PathBuf,
    root: PathBuf,
}

impl VenvExecutor {
    pub fn new(root: PathBuf, venv_dir: &str) -> Self {
        let venv_path = resolve_path(&root, venv_dir);
        Self { venv_path, root }
    }

    fn get_venv_bin_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.venv_path.join("Scripts")
        } else {
            self.venv_path.join("bin")
        }
    }

    fn get_executable_path(&self, command: &str) -> PathBuf {
        let bin_dir = self.get_venv_bin_dir();
        if cfg!(windows) {
            bin_dir.join(format!("{}.exe", command))
        } else {
            bin_dir.join(command)
        }
    }

    pub fn interpreter_path(&self) -> PathBuf {
        self.get_executable_path(INTERPRETER)
    }

    pub fn interpreter_exists(&self) -> bool {
        self.interpreter_path().exists()
    }

    /// `PATH` with the venv's script directory in front, as activation does.
    fn activated_path(&self) -> Result<OsString> {
        let bin_dir = self.get_venv_bin_dir();
        let original = std::env::var_os("PATH").unwrap_or_default();
        let paths = std::iter::once(bin_dir).chain(std::env::split_paths(&original));
        std::env::join_paths(paths)
            .map_err(|e| LauncherError::CommandFailed(format!("cannot build PATH: {}", e)))
    }

    /// Run a script with the venv interpreter, full stdio passthrough, cwd at
    /// the launcher root. Returns the script's exit code.
    pub async fn run_script(&self, script: &str, args: &[String]) -> Result<i32> {
        let interpreter = self.interpreter_path();
        let script_path = resolve_path(&self.root, script);

        debug!(
            interpreter = %interpreter.display(),
            script = %script_path.display(),
            ?args,
            "spawning interpreter"
        );

        let status = Command::new(&interpreter)
            .arg(&script_path)
            .args(args)
            .env("VIRTUAL_ENV", &self.venv_path)
            .env("PATH", self.activated_path()?)
            .current_dir(&self.root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                LauncherError::CommandFailed(format!(
                    "Failed to execute {} {}: {}",
                    interpreter.display(),
                    script_path.display(),
                    e
                ))
            })?;

        Ok(exit_code(status))
    }
}

impl TaskRunner for VenvExecutor {
    fn is_ready(&self) -> bool {
        self.interpreter_exists()
    }

    async fn run_task(&self, task: &TaskConfig) -> Result<i32> {
        self.run_script(&task.script, &task.args).await
    }
}
