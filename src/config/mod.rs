pub mod project;
pub mod schema;
pub mod validation;

pub use project::LauncherConfigManager;
pub use schema::{
    LauncherConfig, PauseConfig, TaskConfig, VenvConfig, DEFAULT_PAUSE_PROMPT, DEFAULT_VENV_DIR,
};
pub use validation::validate_launcher_config;
