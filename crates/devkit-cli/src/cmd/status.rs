use crate::output::{print_json, print_table};
use anyhow::Context;
use devkit_core::paths;
use devkit_core::status;

pub fn run(json: bool) -> anyhow::Result<()> {
    let home = paths::home_dir().context("failed to resolve home directory")?;
    let statuses = status::status_all(&home);

    if json {
        return print_json(&statuses);
    }

    let rows: Vec<Vec<String>> = statuses
        .iter()
        .map(|s| {
            let items = s
                .counts
                .iter()
                .map(|(category, n)| format!("{category}:{n}"))
                .collect::<Vec<_>>()
                .join(" ");
            vec![
                s.tool.to_string(),
                if s.binary_found { "yes".to_string() } else { "no".to_string() },
                if s.installed { "yes".to_string() } else { String::new() },
                if s.index_generated { "yes".to_string() } else { String::new() },
                items,
            ]
        })
        .collect();
    print_table(&["TOOL", "BINARY", "INSTALLED", "INDEX", "ITEMS"], rows);
    Ok(())
}
