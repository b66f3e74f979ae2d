use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::layout::ResourceLayout;
use crate::config::{self, ResourcesConfig};
use crate::platform::Platform;

/// Suffix the resource loader strips after decompressing with zstd
pub const ZSTD_SUFFIX: &str = ".zst";

const ZSTD_LEVEL: i32 = 19;

/// Copy a built library into the resource tree
pub fn execute(library: &str, config_path: Option<&str>, root: Option<&str>, compress: bool) -> Result<()> {
    let config = config::resolve_config(config_path)?;
    let mut resources = config.resources;
    if let Some(root) = root {
        resources.root = root.to_string();
    }

    let dest = stage_library(Path::new(library), &resources, Platform::detect()?, compress)?;
    println!("   {} {} -> {}", "Staged".green().bold(), library, dest.display());

    Ok(())
}

/// Copy `library` to `<root>/<layout>/<file name>` and return the destination.
///
/// With `compress`, the file is written as `<file name>.zst` instead.
pub fn stage_library(
    library: &Path,
    resources: &ResourcesConfig,
    platform: Platform,
    compress: bool,
) -> Result<PathBuf> {
    if !library.is_file() {
        anyhow::bail!("Library '{}' does not exist or is not a file", library.display());
    }

    let layout = ResourceLayout::resolve(resources, platform)?;
    fs::create_dir_all(&layout.directory)
        .context(format!("Failed to create directory: {}", layout.directory.display()))?;

    let dest = layout.library_path();
    if !compress {
        fs::copy(library, &dest)
            .context(format!("Failed to copy {} to {}", library.display(), dest.display()))?;
        return Ok(dest);
    }

    let mut file_name = dest.file_name().unwrap_or_default().to_os_string();
    file_name.push(ZSTD_SUFFIX);
    let dest = dest.with_file_name(file_name);

    let data = fs::read(library)
        .context(format!("Failed to read {}", library.display()))?;
    // Single-shot compression records the content size in the frame header,
    // which the loader needs to size its output buffer
    let compressed = zstd::bulk::compress(&data, ZSTD_LEVEL)
        .context(format!("Failed to compress {}", library.display()))?;
    fs::write(&dest, compressed)
        .context(format!("Failed to write {}", dest.display()))?;

    Ok(dest)
}
