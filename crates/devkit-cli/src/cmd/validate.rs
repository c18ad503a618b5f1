use crate::output::print_json;
use devkit_core::paths;
use devkit_core::validate::{validate_plugin, Severity};
use std::path::Path;

pub fn run(root: &Path, plugin: Option<&str>, json: bool) -> anyhow::Result<()> {
    let plugins = super::select_plugins(root, plugin)?;
    if plugins.is_empty() {
        println!("No plugins found under {}", paths::plugins_dir(root).display());
        return Ok(());
    }

    let reports: Vec<_> = plugins.iter().map(validate_plugin).collect();

    if json {
        print_json(&reports)?;
    } else {
        for report in &reports {
            if report.issues.is_empty() {
                println!("{}: ok", report.plugin);
                continue;
            }
            println!("{}:", report.plugin);
            for issue in &report.issues {
                let prefix = match issue.severity {
                    Severity::Warning => "warning",
                    Severity::Error => "error",
                };
                println!("  [{prefix}] {}: {}", issue.file, issue.message);
            }
        }
    }

    let has_errors = reports.iter().any(|r| r.has_errors());
    if has_errors {
        anyhow::bail!("validation found errors");
    }

    Ok(())
}
