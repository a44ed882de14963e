//! Backup system for the contact book
//!
//! Provides rolling backups of contacts.json with a count-based retention
//! policy, plus restore.
//!
//! # Backup Format
//!
//! Backups are JSON files named `backup-YYYYMMDD-HHMMSS-mmm.json`:
//! - `schema_version`: archive format version
//! - `created_at`: timestamp when the backup was created
//! - `contacts`: the contacts file as it was on disk
//!
//! A backup is taken automatically before every save that replaces an
//! existing snapshot.

mod manager;
mod restore;

pub use manager::{BackupArchive, BackupInfo, BackupManager, BACKUP_SCHEMA_VERSION};
pub use restore::{RestoreManager, RestoreResult};
