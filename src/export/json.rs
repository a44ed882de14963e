//! JSON Export functionality
//!
//! Exports the whole directory to JSON with schema versioning.

use crate::error::{ContactError, ContactResult};
use crate::models::{Directory, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full directory export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All contacts, in name order
    pub contacts: Vec<Record>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of contacts
    pub contact_count: usize,

    /// Total number of phone numbers across contacts
    pub phone_count: usize,

    /// Contacts with a birthday set
    pub birthday_count: usize,
}

impl FullExport {
    /// Build an export from the directory
    pub fn from_directory(directory: &Directory) -> Self {
        let contacts: Vec<Record> = directory.iter().cloned().collect();

        let metadata = ExportMetadata {
            contact_count: contacts.len(),
            phone_count: contacts.iter().map(|c| c.phones.len()).sum(),
            birthday_count: contacts.iter().filter(|c| c.birthday.is_some()).count(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contacts,
            metadata,
        }
    }
}

/// Export the directory as pretty-printed JSON
pub fn export_full_json<W: Write>(directory: &Directory, writer: &mut W) -> ContactResult<()> {
    let export = FullExport::from_directory(directory);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ContactError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ContactError::Export(e.to_string()))?;
    Ok(())
}
