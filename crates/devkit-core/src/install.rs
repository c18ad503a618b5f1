use crate::error::Result;
use crate::frontmatter;
use crate::io;
use crate::manifest::Plugin;
use crate::paths;
use crate::types::{Category, Tool};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Conflict resolution
// ---------------------------------------------------------------------------

/// Operator decision for a destination path that already exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictChoice {
    /// Destructive replace.
    Overwrite,
    /// Leave the existing content untouched.
    Skip,
    /// Install the incoming component under this alternate file name.
    Rename(String),
}

/// Policy seam for conflicts. The CLI plugs an interactive prompt in here;
/// `--force` and `--skip-existing` map to the two fixed policies below.
pub trait ConflictResolver {
    fn resolve(&mut self, dest: &Path) -> Result<ConflictChoice>;
}

/// Always overwrite (`--force`).
pub struct Overwrite;

impl ConflictResolver for Overwrite {
    fn resolve(&mut self, _dest: &Path) -> Result<ConflictChoice> {
        Ok(ConflictChoice::Overwrite)
    }
}

/// Always skip (`--skip-existing`).
pub struct KeepExisting;

impl ConflictResolver for KeepExisting {
    fn resolve(&mut self, _dest: &Path) -> Result<ConflictChoice> {
        Ok(ConflictChoice::Skip)
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Serialize)]
pub struct CategoryReport {
    pub installed: usize,
    pub skipped: usize,
    pub renamed: usize,
    pub missing: usize,
}

#[derive(Debug, Serialize)]
pub struct InstallReport {
    pub plugin: String,
    pub tool: Tool,
    pub categories: BTreeMap<Category, CategoryReport>,
}

impl InstallReport {
    pub fn total_installed(&self) -> usize {
        self.categories.values().map(|c| c.installed + c.renamed).sum()
    }

    pub fn total_missing(&self) -> usize {
        self.categories.values().map(|c| c.missing).sum()
    }
}

// ---------------------------------------------------------------------------
// Install
// ---------------------------------------------------------------------------

/// Install one plugin's components into one tool's config directories under
/// `home`. Declared components that don't resolve on disk are skipped with
/// a warning and counted; siblings still install. After copying, tools
/// without native discovery get their index regenerated from disk.
pub fn install_plugin(
    plugin: &Plugin,
    tool: Tool,
    home: &Path,
    resolver: &mut dyn ConflictResolver,
) -> Result<InstallReport> {
    let mut report = InstallReport {
        plugin: plugin.name().to_string(),
        tool,
        categories: BTreeMap::new(),
    };

    for &category in tool.categories() {
        let resolved = plugin.resolve(category)?;
        let stats = report.categories.entry(category).or_default();
        stats.missing = resolved.missing.len();
        for entry in &resolved.missing {
            tracing::warn!(
                "plugin '{}': {category} entry '{entry}' does not resolve, skipping",
                plugin.name()
            );
        }

        let dest_dir = paths::category_dir(home, tool, category);
        for src in &resolved.present {
            let Some(file_name) = src.file_name() else { continue };
            let Some((dest, renamed)) = pick_destination(&dest_dir, file_name, src, resolver)?
            else {
                stats.skipped += 1;
                continue;
            };

            if category.is_directory() {
                io::copy_dir_all(src, &dest)?;
            } else {
                io::copy_file(src, &dest)?;
            }
            if renamed {
                stats.renamed += 1;
            } else {
                stats.installed += 1;
            }
        }
    }

    if tool.needs_index() {
        write_index(home, tool)?;
    }

    Ok(report)
}

/// Pick the final destination for one component, consulting the resolver
/// while the candidate path is taken. Returns `None` when the operator
/// skips, otherwise the path and whether it came from a rename.
fn pick_destination(
    dest_dir: &Path,
    file_name: &std::ffi::OsStr,
    src: &Path,
    resolver: &mut dyn ConflictResolver,
) -> Result<Option<(std::path::PathBuf, bool)>> {
    let mut dest = dest_dir.join(file_name);
    let mut renamed = false;
    while dest.exists() {
        match resolver.resolve(&dest)? {
            ConflictChoice::Overwrite => break,
            ConflictChoice::Skip => return Ok(None),
            ConflictChoice::Rename(new_name) => {
                dest = dest_dir.join(with_source_extension(&new_name, src));
                renamed = true;
            }
        }
    }
    Ok(Some((dest, renamed)))
}

/// Carry the source's extension over when the operator-supplied rename
/// leaves it off. Skill directories keep the name as given.
fn with_source_extension(new_name: &str, src: &Path) -> String {
    if src.is_dir() || new_name.contains('.') {
        return new_name.to_string();
    }
    match src.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{new_name}.{ext}"),
        None => new_name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Index generation
// ---------------------------------------------------------------------------

/// Synthesize `AGENTS.md` at the tool root from what is installed on disk,
/// for tools that cannot discover agents and skills on their own. The file
/// opens with the devkit marker so status and uninstall can tell it apart
/// from user-authored content.
pub fn write_index(home: &Path, tool: Tool) -> Result<()> {
    let mut out = String::new();
    out.push_str(paths::DEVKIT_MARKER);
    out.push_str("\n# Installed agents and skills\n");

    let agents = list_markdown(&paths::category_dir(home, tool, Category::Agents));
    if !agents.is_empty() {
        out.push_str("\n## Agents\n\n");
        for path in agents {
            let name = path.file_stem().unwrap_or_default().to_string_lossy().into_owned();
            push_entry(&mut out, &name, frontmatter::description_of(&path));
        }
    }

    let skills_dir = paths::category_dir(home, tool, Category::Skills);
    let skills = list_dirs(&skills_dir);
    if !skills.is_empty() {
        out.push_str("\n## Skills\n\n");
        for dir in skills {
            let name = dir.file_name().unwrap_or_default().to_string_lossy().into_owned();
            let doc = dir.join(paths::SKILL_FILE);
            push_entry(&mut out, &name, frontmatter::description_of(&doc));
        }
    }

    io::atomic_write(&paths::index_path(home, tool), out.as_bytes())
}

/// True when `path` is a file devkit generated, judged by the marker on its
/// first line. Unreadable files are treated as user-authored.
pub fn is_devkit_generated(path: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(path) else {
        return false;
    };
    content.lines().next() == Some(paths::DEVKIT_MARKER)
}

fn push_entry(out: &mut String, name: &str, description: Option<String>) {
    match description {
        Some(desc) => out.push_str(&format!("- **{name}** — {desc}\n")),
        None => out.push_str(&format!("- **{name}**\n")),
    }
}

fn list_markdown(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = std::fs::read_dir(dir)
        .into_iter()
        .flatten()
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "md"))
        .collect();
    files.sort();
    files
}

fn list_dirs(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut dirs: Vec<_> = std::fs::read_dir(dir)
        .into_iter()
        .flatten()
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
