use std::path::{Path, PathBuf};

/// Resolve the devkit repository root.
///
/// Priority:
/// 1. `--root` flag / `DEVKIT_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `plugins/`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    for marker in ["plugins", ".git"] {
        if let Some(found) = find_up(&cwd, marker) {
            return found;
        }
    }
    cwd
}

/// Nearest ancestor of `start` (inclusive) containing a directory `marker`.
fn find_up(start: &Path, marker: &str) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(marker).is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
