//! Contact repository for JSON storage
//!
//! Manages loading and saving the directory to contacts.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ContactError;
use crate::models::{Directory, Record};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of contacts.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactData {
    #[serde(default)]
    pub contacts: Vec<Record>,
}

impl ContactData {
    /// Snapshot a directory in key order
    pub fn from_directory(directory: &Directory) -> Self {
        Self {
            contacts: directory.iter().cloned().collect(),
        }
    }

    /// Rebuild a directory; later duplicates of a name replace earlier ones
    pub fn into_directory(self) -> Directory {
        self.contacts.into_iter().collect()
    }
}

/// Repository for contact persistence
pub struct ContactRepository {
    path: PathBuf,
}

impl ContactRepository {
    /// Create a new contact repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a snapshot has ever been written
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the directory, or an empty one if the file doesn't exist yet
    pub fn load(&self) -> Result<Directory, ContactError> {
        let data: ContactData = read_json(&self.path)?;
        Ok(data.into_directory())
    }

    /// Save the directory, replacing any previous snapshot
    pub fn save(&self, directory: &Directory) -> Result<(), ContactError> {
        write_json_atomic(&self.path, &ContactData::from_directory(directory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ContactRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contacts.json");
        (temp_dir, ContactRepository::new(path))
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(!repo.exists());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_round_trip() {
        let (_temp_dir, repo) = create_test_repo();
        repo.save(&Directory::new()).unwrap();
        assert!(repo.exists());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();

        let mut john = Record::new("John");
        john.add_phone("1234567890").unwrap();
        john.add_phone("5555555555").unwrap();
        john.add_birthday("12.06.1990").unwrap();
        let mut jane = Record::new("Jane");
        jane.add_phone("9876543210").unwrap();

        let directory: Directory = vec![john.clone(), jane.clone()].into_iter().collect();
        repo.save(&directory).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.find("John"), Some(&john));
        assert_eq!(loaded.find("Jane"), Some(&jane));
        assert_eq!(loaded, directory);
    }

    #[test]
    fn test_file_layout() {
        let (_temp_dir, repo) = create_test_repo();
        let mut ann = Record::new("Ann");
        ann.add_phone("1234567890").unwrap();
        ann.add_birthday("12.06.1990").unwrap();
        repo.save(&vec![ann].into_iter().collect()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(raw["contacts"][0]["name"], "Ann");
        assert_eq!(raw["contacts"][0]["phones"][0], "1234567890");
        assert_eq!(raw["contacts"][0]["birthday"], "12.06.1990");
    }

    #[test]
    fn test_invalid_phone_in_file_is_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"{"contacts":[{"name":"Bad","phones":["12"]}]}"#,
        )
        .unwrap();

        assert!(matches!(repo.load(), Err(ContactError::Storage(_))));
    }
}
