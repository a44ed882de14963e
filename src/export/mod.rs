//! Export module for the contact book
//!
//! Provides whole-directory export in multiple formats:
//! - CSV: spreadsheet-compatible, one row per contact
//! - JSON: machine-readable, with schema version and metadata
//! - YAML: human-readable, same structure as JSON

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_contacts_csv;
pub use self::json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
