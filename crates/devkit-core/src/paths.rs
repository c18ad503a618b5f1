use crate::error::{DevkitError, Result};
use crate::types::{Category, Tool};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Source-side constants (devkit repository layout)
// ---------------------------------------------------------------------------

pub const PLUGINS_DIR: &str = "plugins";
pub const PLUGIN_CONFIG_DIR: &str = ".claude-plugin";
pub const MANIFEST_FILE: &str = "plugin.json";
pub const SKILL_FILE: &str = "SKILL.md";

/// First line of every file devkit generates. Status and uninstall key off
/// it so user-authored files with the same name are never touched.
pub const DEVKIT_MARKER: &str = "<!-- generated by devkit -->";

pub const INDEX_FILE: &str = "AGENTS.md";

// ---------------------------------------------------------------------------
// Source-side helpers
// ---------------------------------------------------------------------------

pub fn plugins_dir(root: &Path) -> PathBuf {
    root.join(PLUGINS_DIR)
}

pub fn plugin_dir(root: &Path, name: &str) -> PathBuf {
    plugins_dir(root).join(name)
}

pub fn plugin_manifest(root: &Path, name: &str) -> PathBuf {
    plugin_dir(root, name).join(PLUGIN_CONFIG_DIR).join(MANIFEST_FILE)
}

// ---------------------------------------------------------------------------
// Target-side helpers (per-tool config directories)
// ---------------------------------------------------------------------------

/// The user's home directory, which all target paths hang off.
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir().ok_or(DevkitError::HomeNotFound)
}

/// Root config directory for a tool, under the user's home directory.
pub fn tool_root(tool: Tool) -> Result<PathBuf> {
    Ok(tool_root_in(&home_dir()?, tool))
}

/// Same as [`tool_root`] but relative to an explicit home directory.
/// Install, status, and uninstall all take the home this way so tests can
/// point them at a tempdir.
pub fn tool_root_in(home: &Path, tool: Tool) -> PathBuf {
    match tool {
        Tool::Claude => home.join(".claude"),
        Tool::Opencode => home.join(".config/opencode"),
        Tool::Copilot => home.join(".copilot"),
        Tool::Codex => home.join(".codex"),
    }
}

/// Directory a category installs into for a given tool. OpenCode uses
/// singular directory names; Copilot and Codex call commands "prompts".
pub fn category_dir(home: &Path, tool: Tool, category: Category) -> PathBuf {
    let root = tool_root_in(home, tool);
    let sub = match (tool, category) {
        (Tool::Opencode, Category::Agents) => "agent",
        (Tool::Opencode, Category::Commands) => "command",
        (Tool::Copilot | Tool::Codex, Category::Commands) => "prompts",
        (_, Category::Agents) => "agents",
        (_, Category::Commands) => "commands",
        (_, Category::Skills) => "skills",
        (_, Category::Rules) => "rules",
    };
    root.join(sub)
}

pub fn index_path(home: &Path, tool: Tool) -> PathBuf {
    tool_root_in(home, tool).join(INDEX_FILE)
}

// ---------------------------------------------------------------------------
// Name validation
// ---------------------------------------------------------------------------

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > 64 || !name_re().is_match(name) {
        return Err(DevkitError::InvalidName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
