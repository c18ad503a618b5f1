use crate::output::print_json;
use anyhow::Context;
use colored::Colorize;
use devkit_core::backup::backup_tool;
use devkit_core::paths;
use devkit_core::types::Tool;
use std::str::FromStr;

pub fn run(tool: Option<&str>, json: bool) -> anyhow::Result<()> {
    let home = paths::home_dir().context("failed to resolve home directory")?;

    // An explicitly named tool must exist; with no --tool, absent
    // directories are simply not backed up.
    let mut backed_up = Vec::new();
    match tool {
        Some(s) => {
            let tool = Tool::from_str(s).with_context(|| format!("unknown tool: {s}"))?;
            let dest = backup_tool(&home, tool)
                .with_context(|| format!("failed to back up {tool}"))?;
            backed_up.push((tool, dest));
        }
        None => {
            for &tool in Tool::all() {
                if !paths::tool_root_in(&home, tool).is_dir() {
                    continue;
                }
                let dest = backup_tool(&home, tool)
                    .with_context(|| format!("failed to back up {tool}"))?;
                backed_up.push((tool, dest));
            }
        }
    }

    if json {
        let value: Vec<_> = backed_up
            .iter()
            .map(|(tool, dest)| {
                serde_json::json!({ "tool": tool, "backup": dest })
            })
            .collect();
        return print_json(&value);
    }

    if backed_up.is_empty() {
        println!("Nothing to back up: no tool config directories exist.");
        return Ok(());
    }
    for (tool, dest) in &backed_up {
        println!("{} {} → {}", "✓".green(), tool, dest.display());
    }
    Ok(())
}
