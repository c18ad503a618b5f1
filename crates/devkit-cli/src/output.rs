use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Plain two-space-padded table with a dashed separator under the header.
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|cell| cell.len())
                .chain([h.len()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let fmt_row = |cells: Vec<String>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", fmt_row(headers.iter().map(|h| h.to_string()).collect()));
    println!("{}", fmt_row(widths.iter().map(|w| "-".repeat(*w)).collect()));
    for row in rows {
        println!("{}", fmt_row(row));
    }
}
