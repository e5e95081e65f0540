//! Path resolution helpers shared by commands

use std::env;
use std::path::{Path, PathBuf};

/// The directory project discovery starts from: `--root`, else the current
/// directory, else "."
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// `path` as given when absolute, otherwise joined onto `base`
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
