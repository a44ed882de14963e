//! Storage layer for the contact book
//!
//! Owns the in-memory directory for the length of a session. The directory
//! is loaded once from contacts.json and written back atomically, after the
//! previous snapshot has been copied into the backup directory.

pub mod contacts;
pub mod file_io;

pub use contacts::{ContactData, ContactRepository};
pub use file_io::{read_json, write_json_atomic};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger};
use crate::backup::BackupManager;
use crate::config::paths::ContactPaths;
use crate::config::settings::Settings;
use crate::error::ContactError;
use crate::models::Directory;

/// Session storage: the loaded directory plus everything needed to persist it
pub struct Storage {
    paths: ContactPaths,
    pub contacts: ContactRepository,
    directory: Directory,
    audit: Option<AuditLogger>,
    backups: BackupManager,
}

impl Storage {
    /// Create a new Storage instance with an empty directory
    pub fn new(paths: ContactPaths, settings: &Settings) -> Result<Self, ContactError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            directory: Directory::new(),
            audit,
            backups: BackupManager::new(paths.clone(), settings.backup_retention.clone()),
            paths,
        })
    }

    /// Create storage and load the persisted directory
    pub fn open(paths: ContactPaths, settings: &Settings) -> Result<Self, ContactError> {
        let mut storage = Self::new(paths, settings)?;
        storage.load_all()?;
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContactPaths {
        &self.paths
    }

    /// Load all data from disk, replacing the in-memory directory
    pub fn load_all(&mut self) -> Result<(), ContactError> {
        self.directory = self.contacts.load()?;
        Ok(())
    }

    /// Save all data to disk
    ///
    /// An existing snapshot is backed up first and old backups are pruned.
    pub fn save_all(&self) -> Result<(), ContactError> {
        if self.contacts.exists() {
            self.backups.create_backup_with_retention()?;
        }
        self.contacts.save(&self.directory)
    }

    /// The loaded directory
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The loaded directory, for mutation
    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a contact creation
    pub fn log_create<T: Serialize>(&self, contact: &str, entity: &T) -> Result<(), ContactError> {
        self.log(|| AuditEntry::create(contact, entity))
    }

    /// Record a contact update
    pub fn log_update<T: Serialize>(
        &self,
        contact: &str,
        before: &T,
        after: &T,
    ) -> Result<(), ContactError> {
        self.log(|| AuditEntry::update(contact, before, after))
    }

    /// Record a contact deletion
    pub fn log_delete<T: Serialize>(&self, contact: &str, entity: &T) -> Result<(), ContactError> {
        self.log(|| AuditEntry::delete(contact, entity))
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) -> Result<(), ContactError> {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}
