use crate::config::schema::LauncherConfig;
use crate::core::error::{LauncherError, Result};
use std::collections::HashSet;

pub fn validate_launcher_config(config: &LauncherConfig) -> Result<()> {
    if config.venv.dir.trim().is_empty() {
        return Err(LauncherError::Config("venv.dir cannot be empty".to_string()));
    }

    if config.tasks.is_empty() {
        return Err(LauncherError::Config(
            "at least one [[tasks]] entry is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for task in &config.tasks {
        if task.name.trim().is_empty() {
            return Err(LauncherError::Config(
                "tasks.name cannot be empty".to_string(),
            ));
        }

        if !seen.insert(task.name.as_str()) {
            return Err(LauncherError::Config(format!(
                "duplicate task name '{}'",
                task.name
            )));
        }

        if task.script.trim().is_empty() {
            return Err(LauncherError::Config(format!(
                "tasks.script cannot be empty (task '{}')",
                task.name
            )));
        }

        if task.args.iter().any(|a| a.is_empty()) {
            return Err(LauncherError::Config(format!(
                "tasks.args cannot contain empty entries (task '{}')",
                task.name
            )));
        }
    }

    Ok(())
}
