use crate::output::{print_json, print_table};
use clap::Subcommand;
use devkit_core::frontmatter;
use devkit_core::paths;
use devkit_core::types::Category;
use std::path::Path;

#[derive(Subcommand)]
pub enum ListSubcommand {
    /// List discovered plugins
    Plugins,
    /// List agent components across all plugins
    Agents,
    /// List command components across all plugins
    Commands,
    /// List skill components across all plugins
    Skills,
    /// List rule components across all plugins
    Rules,
}

pub fn run(root: &Path, subcmd: ListSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ListSubcommand::Plugins => plugins(root, json),
        ListSubcommand::Agents => components(root, Category::Agents, json),
        ListSubcommand::Commands => components(root, Category::Commands, json),
        ListSubcommand::Skills => components(root, Category::Skills, json),
        ListSubcommand::Rules => components(root, Category::Rules, json),
    }
}

fn plugins(root: &Path, json: bool) -> anyhow::Result<()> {
    let plugins = super::select_plugins(root, None)?;

    if json {
        let summaries: Vec<_> = plugins.iter().map(|p| &p.manifest).collect();
        return print_json(&summaries);
    }

    if plugins.is_empty() {
        println!("No plugins found under {}", paths::plugins_dir(root).display());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = plugins
        .iter()
        .map(|p| {
            vec![
                p.manifest.name.clone(),
                p.manifest.version.clone(),
                p.manifest.description.clone(),
            ]
        })
        .collect();
    print_table(&["NAME", "VERSION", "DESCRIPTION"], rows);
    Ok(())
}

fn components(root: &Path, category: Category, json: bool) -> anyhow::Result<()> {
    let plugins = super::select_plugins(root, None)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for plugin in &plugins {
        let resolved = plugin.resolve(category)?;
        for path in &resolved.present {
            let doc = if category.is_directory() {
                path.join(paths::SKILL_FILE)
            } else {
                path.clone()
            };
            let name = path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned();
            rows.push(vec![
                plugin.name().to_string(),
                name,
                frontmatter::description_of(&doc).unwrap_or_default(),
            ]);
        }
    }

    if json {
        let value: Vec<_> = rows
            .iter()
            .map(|r| {
                serde_json::json!({ "plugin": r[0], "name": r[1], "description": r[2] })
            })
            .collect();
        return print_json(&value);
    }

    if rows.is_empty() {
        println!("No {category} found.");
        return Ok(());
    }
    print_table(&["PLUGIN", "NAME", "DESCRIPTION"], rows);
    Ok(())
}
