//! CLI command for data export
//!
//! Writes the whole directory to a file or to stdout.

use crate::error::{ContactError, ContactResult};
use crate::export::{export_contacts_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format, one row per contact
    Csv,
    /// JSON format with metadata
    Json,
    /// YAML format, human-readable
    Yaml,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ContactResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                ContactError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ContactError::Export(e.to_string()))?;
            print_summary(storage, format, &path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(storage, format, &mut handle)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    writer: &mut W,
) -> ContactResult<()> {
    let directory = storage.directory();
    match format {
        ExportFormat::Csv => export_contacts_csv(directory, writer),
        ExportFormat::Json => export_full_json(directory, writer),
        ExportFormat::Yaml => export_full_yaml(directory, writer),
    }
}

fn print_summary(storage: &Storage, format: ExportFormat, path: &Path) {
    let label = match format {
        ExportFormat::Csv => "CSV",
        ExportFormat::Json => "JSON",
        ExportFormat::Yaml => "YAML",
    };
    println!("Export complete!");
    println!("  Format: {}", label);
    println!("  Contacts: {}", storage.directory().len());
    println!("  Output: {}", path.display());
}
