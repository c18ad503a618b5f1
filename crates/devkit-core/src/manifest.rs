use crate::error::{DevkitError, Result};
use crate::paths;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// PluginManifest
// ---------------------------------------------------------------------------

/// The `plugin.json` descriptor: identity plus four optional lists of
/// relative paths under the plugin root. Skill entries name directories and
/// may be glob patterns (`skills/*`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agents: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<String>,
}

impl PluginManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|e| DevkitError::InvalidManifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn entries(&self, category: Category) -> &[String] {
        match category {
            Category::Agents => &self.agents,
            Category::Commands => &self.commands,
            Category::Skills => &self.skills,
            Category::Rules => &self.rules,
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// A discovered plugin: its manifest plus the directory the manifest's
/// relative paths resolve against.
#[derive(Debug, Clone)]
pub struct Plugin {
    pub manifest: PluginManifest,
    pub root: PathBuf,
}

/// Component paths for one category of one plugin, split into those that
/// resolve on disk and those declared but absent.
#[derive(Debug, Default)]
pub struct ResolvedComponents {
    pub present: Vec<PathBuf>,
    pub missing: Vec<String>,
}

impl Plugin {
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// Resolve a category's manifest entries to concrete paths. Skill
    /// entries are directory globs; other categories are literal file
    /// paths. Entries that match nothing land in `missing` so the caller
    /// can warn and still install the siblings; a bad entry never aborts
    /// the set.
    pub fn resolve(&self, category: Category) -> Result<ResolvedComponents> {
        let mut out = ResolvedComponents::default();
        for entry in self.manifest.entries(category) {
            if category.is_directory() {
                let pattern = self.root.join(entry);
                let mut matched = false;
                for hit in glob::glob(&pattern.to_string_lossy())? {
                    let Ok(path) = hit else { continue };
                    if path.is_dir() && path.join(paths::SKILL_FILE).is_file() {
                        out.present.push(path);
                        matched = true;
                    }
                }
                if !matched {
                    out.missing.push(entry.clone());
                }
            } else {
                let path = self.root.join(entry);
                if path.is_file() {
                    out.present.push(path);
                } else {
                    out.missing.push(entry.clone());
                }
            }
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// Walk `<root>/plugins/*/.claude-plugin/plugin.json` and return every
/// manifest that parses. A malformed manifest is skipped with a warning;
/// a missing plugins directory yields an empty list.
pub fn discover_plugins(root: &Path) -> Result<Vec<Plugin>> {
    let dir = paths::plugins_dir(root);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut plugins = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let entry = entry?;
        let plugin_root = entry.path();
        let manifest_path = plugin_root.join(paths::PLUGIN_CONFIG_DIR).join(paths::MANIFEST_FILE);
        if !manifest_path.is_file() {
            continue;
        }
        match PluginManifest::load(&manifest_path) {
            Ok(manifest) => plugins.push(Plugin {
                manifest,
                root: plugin_root,
            }),
            Err(e) => {
                tracing::warn!("skipping malformed manifest {}: {e}", manifest_path.display());
            }
        }
    }

    plugins.sort_by(|a, b| a.manifest.name.cmp(&b.manifest.name));
    Ok(plugins)
}

/// Discover plugins and keep only the named one.
pub fn find_plugin(root: &Path, name: &str) -> Result<Plugin> {
    discover_plugins(root)?
        .into_iter()
        .find(|p| p.name() == name)
        .ok_or_else(|| DevkitError::PluginNotFound(name.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_plugin(root: &Path, name: &str, body: &str) {
        let config = root.join("plugins").join(name).join(".claude-plugin");
        std::fs::create_dir_all(&config).unwrap();
        std::fs::write(config.join("plugin.json"), body).unwrap();
    }

    #[test]
    fn discover_returns_empty_for_missing_dir() {
        let dir = TempDir::new().unwrap();
        let plugins = discover_plugins(dir.path()).unwrap();
        assert!(plugins.is_empty());
    }

    #[test]
    fn discover_parses_manifests_sorted() {
        let dir = TempDir::new().unwrap();
        write_plugin(
            dir.path(),
            "kit-b",
            r#"{"name":"kit-b","version":"1.0.0","description":"B"}"#,
        );
        write_plugin(
            dir.path(),
            "kit-a",
            r#"{"name":"kit-a","version":"0.2.0","description":"A","agents":["agents/reviewer.md"]}"#,
        );

        let plugins = discover_plugins(dir.path()).unwrap();
        assert_eq!(plugins.len(), 2);
        assert_eq!(plugins[0].name(), "kit-a");
        assert_eq!(plugins[0].manifest.agents, vec!["agents/reviewer.md"]);
        assert_eq!(plugins[1].name(), "kit-b");
    }

    #[test]
    fn discover_skips_malformed_manifest() {
        let dir = TempDir::new().unwrap();
        write_plugin(dir.path(), "broken", "{not json");
        write_plugin(
            dir.path(),
            "good",
            r#"{"name":"good","version":"1.0.0","description":"ok"}"#,
        );

        let plugins = discover_plugins(dir.path()).unwrap();
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].name(), "good");
    }

    #[test]
    fn resolve_splits_present_and_missing() {
        let dir = TempDir::new().unwrap();
        write_plugin(
            dir.path(),
            "kit",
            r#"{"name":"kit","version":"1.0.0","description":"d",
                "commands":["commands/review.md","commands/ghost.md"]}"#,
        );
        let plugin_root = dir.path().join("plugins/kit");
        std::fs::create_dir_all(plugin_root.join("commands")).unwrap();
        std::fs::write(plugin_root.join("commands/review.md"), "---\nname: review\n---\nx").unwrap();

        let plugin = find_plugin(dir.path(), "kit").unwrap();
        let resolved = plugin.resolve(Category::Commands).unwrap();
        assert_eq!(resolved.present.len(), 1);
        assert_eq!(resolved.missing, vec!["commands/ghost.md"]);
    }

    #[test]
    fn resolve_expands_skill_globs() {
        let dir = TempDir::new().unwrap();
        write_plugin(
            dir.path(),
            "kit",
            r#"{"name":"kit","version":"1.0.0","description":"d","skills":["skills/*"]}"#,
        );
        let plugin_root = dir.path().join("plugins/kit");
        for skill in ["crud-patterns", "aws-sdk"] {
            let d = plugin_root.join("skills").join(skill);
            std::fs::create_dir_all(&d).unwrap();
            std::fs::write(d.join("SKILL.md"), "---\nname: s\n---\nx").unwrap();
        }
        // A directory without SKILL.md must not match.
        std::fs::create_dir_all(plugin_root.join("skills/not-a-skill")).unwrap();

        let plugin = find_plugin(dir.path(), "kit").unwrap();
        let resolved = plugin.resolve(Category::Skills).unwrap();
        assert_eq!(resolved.present.len(), 2);
        assert!(resolved.missing.is_empty());
    }

    #[test]
    fn find_plugin_unknown_name_errors() {
        let dir = TempDir::new().unwrap();
        let err = find_plugin(dir.path(), "nope").unwrap_err();
        assert!(matches!(err, DevkitError::PluginNotFound(_)));
    }
}
