//! CLI command handlers
//!
//! The interactive assistant (command parsing, dispatch, and the session
//! loop) plus the clap subcommands for backups and export.

pub mod backup;
pub mod commands;
pub mod dispatcher;
pub mod export;
pub mod session;

pub use backup::{handle_backup_command, BackupCommands};
pub use commands::{parse_input, Command, Input};
pub use dispatcher::{Dispatcher, Reply};
pub use export::{handle_export_command, ExportFormat};
pub use session::run_session;
