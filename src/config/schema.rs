use serde::{Deserialize, Serialize};

pub const DEFAULT_VENV_DIR: &str = "venv";
pub const DEFAULT_PAUSE_PROMPT: &str = "Press Enter to continue . . .";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LauncherConfig {
    #[serde(default)]
    pub venv: VenvConfig,
    #[serde(default = "default_tasks")]
    pub tasks: Vec<TaskConfig>,
    #[serde(default)]
    pub pause: PauseConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            venv: VenvConfig::default(),
            tasks: default_tasks(),
            pause: PauseConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VenvConfig {
    #[serde(default = "default_venv_dir")]
    pub dir: String,
}

impl Default for VenvConfig {
    fn default() -> Self {
        Self {
            dir: default_venv_dir(),
        }
    }
}

/// One script run by the venv interpreter.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TaskConfig {
    pub name: String,
    pub script: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl TaskConfig {
    pub fn new(name: &str, script: &str) -> Self {
        Self {
            name: name.to_string(),
            script: script.to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PauseConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for PauseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prompt: default_prompt(),
        }
    }
}

fn default_venv_dir() -> String {
    DEFAULT_VENV_DIR.to_string()
}

/// Converter first, then the `.prj` generator that post-processes its output.
fn default_tasks() -> Vec<TaskConfig> {
    vec![
        TaskConfig::new("dxf2shp", "src/dxf2shp.py"),
        TaskConfig::new("makePrj4shp", "src/makePrj4shp.py"),
    ]
}

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PAUSE_PROMPT.to_string()
}
