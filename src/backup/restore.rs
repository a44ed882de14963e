//! Backup restoration
//!
//! Replaces contacts.json with the contents of a backup archive.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::config::paths::ContactPaths;
use crate::error::{ContactError, ContactResult};
use crate::storage::file_io::write_json_atomic;

use super::manager::BackupArchive;

/// Handles restoring from backups
pub struct RestoreManager {
    paths: ContactPaths,
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(paths: ContactPaths) -> Self {
        Self { paths }
    }

    /// Read and validate a backup archive without touching current data
    pub fn read_archive(&self, backup_path: &Path) -> ContactResult<BackupArchive> {
        let contents = fs::read_to_string(backup_path)
            .map_err(|e| ContactError::Io(format!("Failed to read backup file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ContactError::Json(format!("Failed to parse backup file: {}", e)))
    }

    /// Overwrite the current contacts with the backup contents
    pub fn restore_from_file(&self, backup_path: &Path) -> ContactResult<RestoreResult> {
        let archive = self.read_archive(backup_path)?;

        self.paths.ensure_directories()?;
        write_json_atomic(self.paths.contacts_file(), &archive.contacts)?;

        Ok(RestoreResult {
            backup_date: archive.created_at,
            contact_count: archive.contacts.contacts.len(),
        })
    }
}

/// Result of a restore operation
#[derive(Debug)]
pub struct RestoreResult {
    /// Date the backup was created
    pub backup_date: DateTime<Utc>,
    /// Number of contacts written back
    pub contact_count: usize,
}

impl RestoreResult {
    /// One-line summary for the terminal
    pub fn summary(&self) -> String {
        format!(
            "Restored {} contact(s) from backup taken {}",
            self.contact_count,
            self.backup_date.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
