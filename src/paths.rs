use std::env;
use std::path::PathBuf;

use crate::install::CLAUDE_DIR;

/// Locate the directory holding the bundled `.claude` template tree.
///
/// When installed, the tree sits next to the binary; during development it
/// sits in the repository root, so the current working directory is the
/// fallback. Absence of the marker is not an error here, it only changes
/// which path the installer will try to read from.
pub fn package_root() -> PathBuf {
    if let Some(dir) = exe_dir() {
        if dir.join(CLAUDE_DIR).is_dir() {
            return dir;
        }
    }

    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn exe_dir() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    exe.parent().map(PathBuf::from)
}
