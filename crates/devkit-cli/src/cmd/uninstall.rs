use crate::output::print_json;
use anyhow::Context;
use colored::Colorize;
use devkit_core::paths;
use devkit_core::uninstall::{self, UninstallReport};
use std::path::Path;

pub fn run(
    root: &Path,
    tool: Option<&str>,
    plugin: Option<&str>,
    yes: bool,
    json: bool,
) -> anyhow::Result<()> {
    let tools = super::parse_tools(tool)?;
    let plugins = super::select_plugins(root, plugin)?;
    if plugins.is_empty() {
        println!("No plugins found under {}", paths::plugins_dir(root).display());
        return Ok(());
    }

    // Interactive confirmation (skipped with --yes).
    if !yes {
        let names: Vec<&str> = plugins.iter().map(|p| p.name()).collect();
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Remove installed components of {} from {} tool config(s)?",
                names.join(", "),
                tools.len()
            ))
            .default(false)
            .interact()
            .context("confirmation prompt failed")?;
        if !confirmed {
            println!("{} Uninstall cancelled.", "→".yellow());
            return Ok(());
        }
    }

    let home = paths::home_dir().context("failed to resolve home directory")?;

    let mut reports: Vec<UninstallReport> = Vec::new();
    for &tool in &tools {
        for plugin in &plugins {
            let report = uninstall::uninstall_plugin(plugin, tool, &home).with_context(|| {
                format!("failed to uninstall plugin '{}' from {tool}", plugin.name())
            })?;
            reports.push(report);
        }
    }

    if json {
        return print_json(&reports);
    }

    for report in &reports {
        let index_note = if report.index_removed { ", index removed" } else { "" };
        println!(
            "{} {} ← {} ({} item(s) removed{index_note})",
            "✓".green(),
            report.tool,
            report.plugin,
            report.removed
        );
    }
    Ok(())
}
