use crate::error::{DevkitError, Result};
use crate::io;
use crate::paths;
use crate::types::Tool;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Copy a tool's entire config directory to a timestamped sibling
/// (`~/.claude` → `~/.claude.backup-20260807-143000`). The source is never
/// mutated. Returns the backup path.
pub fn backup_tool(home: &Path, tool: Tool) -> Result<PathBuf> {
    let src = paths::tool_root_in(home, tool);
    if !src.is_dir() {
        return Err(DevkitError::BackupSourceMissing(src));
    }

    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let dest = src.with_file_name(format!(
        "{}.backup-{stamp}",
        src.file_name().unwrap_or_default().to_string_lossy()
    ));
    io::copy_dir_all(&src, &dest)?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn backup_copies_tree_and_keeps_source() {
        let home = TempDir::new().unwrap();
        let commands = home.path().join(".claude/commands");
        std::fs::create_dir_all(&commands).unwrap();
        std::fs::write(commands.join("review.md"), "content").unwrap();

        let dest = backup_tool(home.path(), Tool::Claude).unwrap();

        assert!(dest.file_name().unwrap().to_string_lossy().starts_with(".claude.backup-"));
        assert_eq!(
            std::fs::read_to_string(dest.join("commands/review.md")).unwrap(),
            "content"
        );
        assert!(commands.join("review.md").exists());
    }

    #[test]
    fn backup_of_missing_root_errors() {
        let home = TempDir::new().unwrap();
        let err = backup_tool(home.path(), Tool::Codex).unwrap_err();
        assert!(matches!(err, DevkitError::BackupSourceMissing(_)));
    }
}
