pub mod error;
pub mod path;
pub mod process;

pub use error::{LauncherError, Result};
pub use path::{launcher_root, resolve_path};
pub use process::exit_code;
