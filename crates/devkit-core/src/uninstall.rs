use crate::error::Result;
use crate::install;
use crate::manifest::Plugin;
use crate::paths;
use crate::types::Tool;
use serde::Serialize;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct UninstallReport {
    pub plugin: String,
    pub tool: Tool,
    pub removed: usize,
    pub index_removed: bool,
}

/// Remove one plugin's components from one tool's config directories.
///
/// Only files whose names match entries declared in the manifest are
/// touched; anything else in the target directories is left alone. The
/// generated index is deleted only when it carries the devkit marker, and
/// regenerated when other devkit content remains on disk.
pub fn uninstall_plugin(plugin: &Plugin, tool: Tool, home: &Path) -> Result<UninstallReport> {
    let mut report = UninstallReport {
        plugin: plugin.name().to_string(),
        tool,
        removed: 0,
        index_removed: false,
    };

    for &category in tool.categories() {
        let dest_dir = paths::category_dir(home, tool, category);
        for name in declared_names(plugin, category)? {
            let target = dest_dir.join(&name);
            if target.is_dir() {
                std::fs::remove_dir_all(&target)?;
                report.removed += 1;
            } else if target.is_file() {
                std::fs::remove_file(&target)?;
                report.removed += 1;
            }
        }
        // Drop the category directory itself once it's empty.
        if dest_dir.is_dir() && crate::io::entry_count(&dest_dir) == 0 {
            let _ = std::fs::remove_dir(&dest_dir);
        }
    }

    if tool.needs_index() {
        let index = paths::index_path(home, tool);
        if install::is_devkit_generated(&index) {
            std::fs::remove_file(&index)?;
            report.index_removed = true;
            // Other plugins' components may still be installed.
            if has_remaining_content(home, tool) {
                install::write_index(home, tool)?;
            }
        }
    }

    Ok(report)
}

/// File (or skill-directory) names this plugin declares for a category.
/// Glob entries contribute whatever they currently match under the plugin
/// source; literal entries contribute their final path segment even when
/// the source file has since been deleted.
fn declared_names(plugin: &Plugin, category: crate::types::Category) -> Result<BTreeSet<OsString>> {
    let mut names = BTreeSet::new();
    let resolved = plugin.resolve(category)?;
    for path in &resolved.present {
        if let Some(name) = path.file_name() {
            names.insert(name.to_os_string());
        }
    }
    for entry in plugin.manifest.entries(category) {
        if entry.contains(['*', '?', '[']) {
            continue;
        }
        if let Some(name) = Path::new(entry).file_name() {
            names.insert(name.to_os_string());
        }
    }
    Ok(names)
}

fn has_remaining_content(home: &Path, tool: Tool) -> bool {
    tool.categories()
        .iter()
        .any(|&c| crate::io::entry_count(&paths::category_dir(home, tool, c)) > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::{install_plugin, Overwrite};
    use crate::manifest::find_plugin;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, TempDir) {
        let repo = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let root = repo.path().join("plugins/developer-kit");
        std::fs::create_dir_all(root.join(".claude-plugin")).unwrap();
        std::fs::write(
            root.join(".claude-plugin/plugin.json"),
            r#"{"name":"developer-kit","version":"1.0.0","description":"d",
                "agents":["agents/reviewer.md"],
                "commands":["commands/review.md"],
                "skills":["skills/*"]}"#,
        )
        .unwrap();
        std::fs::create_dir_all(root.join("agents")).unwrap();
        std::fs::write(root.join("agents/reviewer.md"), "---\nname: r\ndescription: x\n---\n").unwrap();
        std::fs::create_dir_all(root.join("commands")).unwrap();
        std::fs::write(root.join("commands/review.md"), "---\nname: c\ndescription: x\n---\n").unwrap();
        std::fs::create_dir_all(root.join("skills/crud-patterns")).unwrap();
        std::fs::write(root.join("skills/crud-patterns/SKILL.md"), "---\nname: s\ndescription: x\n---\n")
            .unwrap();
        (repo, home)
    }

    #[test]
    fn uninstall_removes_exactly_what_install_added() {
        let (repo, home) = fixture();
        let plugin = find_plugin(repo.path(), "developer-kit").unwrap();

        // A pre-existing user file in the same directory must survive.
        let user_file = home.path().join(".claude/commands/my-own.md");
        std::fs::create_dir_all(user_file.parent().unwrap()).unwrap();
        std::fs::write(&user_file, "mine").unwrap();

        install_plugin(&plugin, Tool::Claude, home.path(), &mut Overwrite).unwrap();
        let report = uninstall_plugin(&plugin, Tool::Claude, home.path()).unwrap();

        assert_eq!(report.removed, 3);
        assert!(!home.path().join(".claude/agents/reviewer.md").exists());
        assert!(!home.path().join(".claude/commands/review.md").exists());
        assert!(!home.path().join(".claude/skills/crud-patterns").exists());
        assert!(user_file.exists());
        // Emptied category directories are pruned, occupied ones kept.
        assert!(!home.path().join(".claude/agents").exists());
        assert!(home.path().join(".claude/commands").exists());
    }

    #[test]
    fn uninstall_removes_marked_index() {
        let (repo, home) = fixture();
        let plugin = find_plugin(repo.path(), "developer-kit").unwrap();

        install_plugin(&plugin, Tool::Codex, home.path(), &mut Overwrite).unwrap();
        assert!(home.path().join(".codex/AGENTS.md").exists());

        let report = uninstall_plugin(&plugin, Tool::Codex, home.path()).unwrap();
        assert!(report.index_removed);
        assert!(!home.path().join(".codex/AGENTS.md").exists());
    }

    #[test]
    fn uninstall_spares_user_authored_index() {
        let (repo, home) = fixture();
        let plugin = find_plugin(repo.path(), "developer-kit").unwrap();

        let root = home.path().join(".codex");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("AGENTS.md"), "# Hand-written\n").unwrap();

        let report = uninstall_plugin(&plugin, Tool::Codex, home.path()).unwrap();
        assert!(!report.index_removed);
        assert_eq!(
            std::fs::read_to_string(root.join("AGENTS.md")).unwrap(),
            "# Hand-written\n"
        );
    }

    #[test]
    fn uninstall_on_clean_home_is_a_noop() {
        let (repo, home) = fixture();
        let plugin = find_plugin(repo.path(), "developer-kit").unwrap();

        let report = uninstall_plugin(&plugin, Tool::Claude, home.path()).unwrap();
        assert_eq!(report.removed, 0);
    }
}
