use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

use crate::codegen::generate_c_header;

/// Write the C header for the library, or print it when no output is given
pub fn execute(library: &str, output: Option<&str>) -> Result<()> {
    let header = generate_c_header(library);

    match output {
        Some(path) => {
            write_header(Path::new(path), &header)?;
            println!("  {} {}", "Generated".green().bold(), path);
        }
        None => print!("{}", header),
    }

    Ok(())
}

fn write_header(path: &Path, header: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, header).context(format!("Failed to write header: {}", path.display()))
}
