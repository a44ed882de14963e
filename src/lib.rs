//! Contact Book - Terminal-based contact and birthday assistant
//!
//! This library provides the core functionality for the `contacts` binary:
//! an interactive command loop that keeps an address book of names, phone
//! numbers, and birthdays, and reports whose birthday is coming up.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Value objects, records, and the directory
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `backup`: Automatic backup management
//! - `cli`: Command parsing, dispatch, and the interactive session
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::config::{paths::ContactPaths, settings::Settings};
//! use contact_book::storage::Storage;
//!
//! let paths = ContactPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths, &settings)?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ContactError, ContactResult};
