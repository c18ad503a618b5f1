pub mod backup;
pub mod install;
pub mod list;
pub mod status;
pub mod uninstall;
pub mod validate;

use anyhow::Context;
use devkit_core::manifest::{self, Plugin};
use devkit_core::types::Tool;
use std::path::Path;
use std::str::FromStr;

/// `--tool` narrows to one tool; omitted means every tool.
pub fn parse_tools(tool: Option<&str>) -> anyhow::Result<Vec<Tool>> {
    match tool {
        Some(s) => Ok(vec![
            Tool::from_str(s).with_context(|| format!("unknown tool: {s}"))?
        ]),
        None => Ok(Tool::all().to_vec()),
    }
}

/// `--plugin` narrows to one plugin; omitted means every discovered one.
pub fn select_plugins(root: &Path, plugin: Option<&str>) -> anyhow::Result<Vec<Plugin>> {
    match plugin {
        Some(name) => Ok(vec![manifest::find_plugin(root, name)
            .with_context(|| format!("plugin '{name}' not found"))?]),
        None => manifest::discover_plugins(root).context("failed to discover plugins"),
    }
}
