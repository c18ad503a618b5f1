use devkit_core::install::{ConflictChoice, ConflictResolver};
use std::io::{BufRead, Write};
use std::path::Path;

/// Conflict prompt for the interactive install path. Reads one line per
/// conflict, no timeout, no default; any answer other than the three known
/// ones is treated as skip.
pub struct InteractiveResolver;

impl ConflictResolver for InteractiveResolver {
    fn resolve(&mut self, dest: &Path) -> devkit_core::Result<ConflictChoice> {
        let stdin = std::io::stdin();
        let mut line = String::new();

        print!("{} already exists. [o]verwrite / [s]kip / [r]ename: ", dest.display());
        std::io::stdout().flush()?;
        stdin.lock().read_line(&mut line)?;

        match line.trim().to_ascii_lowercase().as_str() {
            "o" | "overwrite" => Ok(ConflictChoice::Overwrite),
            "r" | "rename" => {
                print!("new name: ");
                std::io::stdout().flush()?;
                let mut name = String::new();
                stdin.lock().read_line(&mut name)?;
                let name = name.trim();
                if name.is_empty() {
                    Ok(ConflictChoice::Skip)
                } else {
                    Ok(ConflictChoice::Rename(name.to_string()))
                }
            }
            _ => Ok(ConflictChoice::Skip),
        }
    }
}
