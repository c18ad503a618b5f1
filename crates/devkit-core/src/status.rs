use crate::install;
use crate::io;
use crate::paths;
use crate::types::{Category, Tool};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Point-in-time view of one tool's target directory. "Installed" is
/// inferred, not recorded: a devkit-marked index or any non-empty category
/// directory counts.
#[derive(Debug, Serialize)]
pub struct ToolStatus {
    pub tool: Tool,
    /// Tool binary found on PATH.
    pub binary_found: bool,
    pub installed: bool,
    pub index_generated: bool,
    pub counts: BTreeMap<Category, usize>,
}

pub fn tool_status(home: &Path, tool: Tool) -> ToolStatus {
    let mut counts = BTreeMap::new();
    for &category in tool.categories() {
        let dir = paths::category_dir(home, tool, category);
        counts.insert(category, io::entry_count(&dir));
    }

    let index_generated = install::is_devkit_generated(&paths::index_path(home, tool));
    let installed = index_generated || counts.values().any(|&n| n > 0);

    ToolStatus {
        tool,
        binary_found: which::which(tool.binary()).is_ok(),
        installed,
        index_generated,
        counts,
    }
}

pub fn status_all(home: &Path) -> Vec<ToolStatus> {
    Tool::all().iter().map(|&tool| tool_status(home, tool)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_home_reports_nothing_installed() {
        let home = TempDir::new().unwrap();
        for status in status_all(home.path()) {
            assert!(!status.installed);
            assert!(!status.index_generated);
            assert!(status.counts.values().all(|&n| n == 0));
        }
    }

    #[test]
    fn non_empty_category_dir_counts_as_installed() {
        let home = TempDir::new().unwrap();
        let commands = home.path().join(".claude/commands");
        std::fs::create_dir_all(&commands).unwrap();
        std::fs::write(commands.join("review.md"), "x").unwrap();

        let status = tool_status(home.path(), Tool::Claude);
        assert!(status.installed);
        assert_eq!(status.counts[&Category::Commands], 1);
    }

    #[test]
    fn marked_index_counts_as_installed() {
        let home = TempDir::new().unwrap();
        let root = home.path().join(".codex");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(
            root.join("AGENTS.md"),
            format!("{}\n# Installed\n", paths::DEVKIT_MARKER),
        )
        .unwrap();

        let status = tool_status(home.path(), Tool::Codex);
        assert!(status.installed);
        assert!(status.index_generated);
    }

    #[test]
    fn user_authored_index_is_not_devkit_content() {
        let home = TempDir::new().unwrap();
        let root = home.path().join(".codex");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("AGENTS.md"), "# My own agents file\n").unwrap();

        let status = tool_status(home.path(), Tool::Codex);
        assert!(!status.index_generated);
        assert!(!status.installed);
    }
}
