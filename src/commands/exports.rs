use anyhow::Result;
use colored::Colorize;

use crate::config;
use crate::export_table::export_table;
use crate::exports::JNI_AVG_SYMBOL;
use crate::jni_name::jni_symbol;

/// Print the export table of this build
pub fn execute(config_path: Option<&str>) -> Result<()> {
    let config = config::resolve_config(config_path)?;
    let table = export_table();

    let width = table.iter().map(|e| e.symbol.len()).max().unwrap_or(0);
    for export in &table {
        println!(
            "  {}  {:<42}  {:<8}  {}",
            format!("{:<width$}", export.symbol).green(),
            export.signature,
            export.convention.as_str(),
            export.note.dimmed()
        );
    }

    if !class_matches_export(&config.jni.class)? {
        println!(
            "{} JNI class '{}' resolves to `{}`, but this library exports `{}`",
            "warning:".yellow().bold(),
            config.jni.class,
            jni_symbol(&config.jni.class, "avg")?,
            JNI_AVG_SYMBOL
        );
    }

    Ok(())
}

/// Whether the JVM would find our `avg` alias when `class` declares it
pub fn class_matches_export(class: &str) -> Result<bool> {
    Ok(jni_symbol(class, "avg")? == JNI_AVG_SYMBOL)
}
