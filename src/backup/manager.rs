//! Backup manager for the contact book
//!
//! Takes rolling snapshots of contacts.json with a count-based retention
//! policy. Backups are stored as dated JSON archives.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::ContactPaths;
use crate::config::settings::BackupRetention;
use crate::error::{ContactError, ContactResult};
use crate::storage::file_io::read_json;
use crate::storage::ContactData;

/// Current backup archive schema version
pub const BACKUP_SCHEMA_VERSION: u32 = 1;

/// Metadata about a backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Tie-breaker for backups taken in the same millisecond
    pub sequence: u32,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Backup archive format
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Schema version of the archive
    pub schema_version: u32,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Contacts as they were on disk
    pub contacts: ContactData,
}

/// Manages backup creation and retention
pub struct BackupManager {
    /// Path to backup directory
    backup_dir: PathBuf,
    /// Paths to data files
    paths: ContactPaths,
    /// Retention policy
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: ContactPaths, retention: BackupRetention) -> Self {
        let backup_dir = paths.backup_dir();
        Self {
            backup_dir,
            paths,
            retention,
        }
    }

    /// Create a backup of the persisted contacts
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self) -> ContactResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            ContactError::Io(format!("Failed to create backup directory: {}", e))
        })?;

        let now = Utc::now();
        let stem = format!(
            "backup-{}-{:03}",
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let backup_path = unique_backup_path(&self.backup_dir, &stem);

        let archive = BackupArchive {
            schema_version: BACKUP_SCHEMA_VERSION,
            created_at: now,
            contacts: read_json(self.paths.contacts_file())?,
        };

        let json = serde_json::to_string_pretty(&archive)
            .map_err(|e| ContactError::Json(format!("Failed to serialize backup: {}", e)))?;

        fs::write(&backup_path, json)
            .map_err(|e| ContactError::Io(format!("Failed to write backup file: {}", e)))?;

        Ok(backup_path)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> ContactResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| ContactError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| ContactError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| (b.created_at, b.sequence).cmp(&(a.created_at, a.sequence)));

        Ok(backups)
    }

    /// Delete backups beyond the retention count
    pub fn enforce_retention(&self) -> ContactResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for backup in self
            .list_backups()?
            .into_iter()
            .skip(self.retention.count as usize)
        {
            fs::remove_file(&backup.path)
                .map_err(|e| ContactError::Io(format!("Failed to delete old backup: {}", e)))?;
            deleted.push(backup.path);
        }

        Ok(deleted)
    }

    /// Create a backup and then enforce retention policy
    pub fn create_backup_with_retention(&self) -> ContactResult<(PathBuf, Vec<PathBuf>)> {
        let backup_path = self.create_backup()?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> ContactResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }

    /// Resolve `latest`, a filename in the backup directory, or a path
    pub fn resolve(&self, backup: &str) -> ContactResult<PathBuf> {
        if backup == "latest" {
            return self
                .get_latest_backup()?
                .map(|b| b.path)
                .ok_or_else(|| ContactError::NotFound {
                    entity_type: "Backup",
                    identifier: backup.to_string(),
                });
        }

        let in_dir = self.backup_dir.join(backup);
        if in_dir.exists() {
            return Ok(in_dir);
        }

        let as_path = PathBuf::from(backup);
        if as_path.exists() {
            return Ok(as_path);
        }

        Err(ContactError::NotFound {
            entity_type: "Backup",
            identifier: backup.to_string(),
        })
    }
}

/// First free `<stem>.json`, then `<stem>-1.json`, `<stem>-2.json`, ...
fn unique_backup_path(dir: &Path, stem: &str) -> PathBuf {
    let mut path = dir.join(format!("{}.json", stem));
    let mut sequence = 1;
    while path.exists() {
        path = dir.join(format!("{}-{}.json", stem, sequence));
        sequence += 1;
    }
    path
}

/// Parse backup info from a backup file
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    // backup-YYYYMMDD-HHMMSS-mmm[-N].json
    let date_part = filename.strip_prefix("backup-")?.strip_suffix(".json")?;
    let (created_at, sequence) = parse_backup_timestamp(date_part)?;

    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        sequence,
        size_bytes,
    })
}

/// Parse a backup timestamp and sequence number from the filename date part
fn parse_backup_timestamp(date_str: &str) -> Option<(DateTime<Utc>, u32)> {
    let parts: Vec<&str> = date_str.split('-').collect();
    let sequence: u32 = match parts.len() {
        3 => 0,
        4 => parts[3].parse().ok()?,
        _ => return None,
    };

    let (date_part, time_part) = (parts[0], parts[1]);
    let millis: u32 = parts[2].parse().ok()?;

    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let year: i32 = date_part[0..4].parse().ok()?;
    let month: u32 = date_part[4..6].parse().ok()?;
    let day: u32 = date_part[6..8].parse().ok()?;
    let hour: u32 = time_part[0..2].parse().ok()?;
    let minute: u32 = time_part[2..4].parse().ok()?;
    let second: u32 = time_part[4..6].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = chrono::NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;
    let datetime = chrono::NaiveDateTime::new(date, time);

    Some((DateTime::from_naive_utc_and_offset(datetime, Utc), sequence))
}
