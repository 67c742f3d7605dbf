use crate::core::error::Result;
use anyhow::anyhow;
use std::path::{Path, PathBuf};

pub fn resolve_path(base_dir: &Path, configured: &str) -> PathBuf {
    let path = PathBuf::from(configured);
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

/// Directory holding the launcher executable. Every relative path the
/// launcher touches is resolved against it, whatever the caller's cwd is.
pub fn launcher_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("launcher executable {} has no parent directory", exe.display()).into())
}
