use crate::output::print_json;
use crate::prompt::InteractiveResolver;
use anyhow::Context;
use colored::Colorize;
use devkit_core::install::{self, ConflictResolver, InstallReport, KeepExisting, Overwrite};
use devkit_core::paths;
use std::path::Path;

pub fn run(
    root: &Path,
    tool: Option<&str>,
    plugin: Option<&str>,
    force: bool,
    skip_existing: bool,
    json: bool,
) -> anyhow::Result<()> {
    let tools = super::parse_tools(tool)?;
    let plugins = super::select_plugins(root, plugin)?;
    if plugins.is_empty() {
        println!("No plugins found under {}", paths::plugins_dir(root).display());
        return Ok(());
    }

    let home = paths::home_dir().context("failed to resolve home directory")?;

    let mut resolver: Box<dyn ConflictResolver> = if force {
        Box::new(Overwrite)
    } else if skip_existing {
        Box::new(KeepExisting)
    } else {
        Box::new(InteractiveResolver)
    };

    let mut reports: Vec<InstallReport> = Vec::new();
    for &tool in &tools {
        for plugin in &plugins {
            let report = install::install_plugin(plugin, tool, &home, resolver.as_mut())
                .with_context(|| {
                    format!("failed to install plugin '{}' for {tool}", plugin.name())
                })?;
            reports.push(report);
        }
    }

    if json {
        return print_json(&reports);
    }

    for report in &reports {
        println!(
            "{} {} → {}",
            "✓".green(),
            report.plugin,
            report.tool
        );
        for (category, stats) in &report.categories {
            if stats.installed + stats.renamed + stats.skipped + stats.missing == 0 {
                continue;
            }
            let mut parts = vec![format!("{} installed", stats.installed)];
            if stats.renamed > 0 {
                parts.push(format!("{} renamed", stats.renamed));
            }
            if stats.skipped > 0 {
                parts.push(format!("{} skipped", stats.skipped));
            }
            if stats.missing > 0 {
                parts.push(format!("{} missing", stats.missing).yellow().to_string());
            }
            println!("    {:<10} {}", category.to_string(), parts.join(", "));
        }
    }
    Ok(())
}
