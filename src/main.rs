use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use contact_book::cli::{
    handle_backup_command, handle_export_command, run_session, BackupCommands, ExportFormat,
};
use contact_book::config::paths::{ContactPaths, DATA_DIR_ENV};
use contact_book::config::settings::Settings;
use contact_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal-based contact book with birthday reminders",
    long_about = "Run without a subcommand to start the interactive assistant. \
                  Type 'help' at the prompt for the list of commands."
)]
struct Cli {
    /// Directory holding settings, contacts, backups, and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today when computing birthdays
    #[arg(long, global = true, hide = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Export all contacts
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ContactPaths::with_base_dir(dir),
        None => ContactPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None => {
            let mut storage = Storage::open(paths, &settings)?;
            let fixed_today = cli.today;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_session(&mut storage, &settings, stdin.lock(), &mut stdout, || {
                fixed_today.unwrap_or_else(|| Local::now().date_naive())
            })?;
        }
        Some(Commands::Config) => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Contacts file:    {}", paths.contacts_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Upcoming birthday window: {} day(s)", settings.upcoming_days);
            println!("  Audit log enabled:        {}", settings.audit_enabled);
            println!(
                "  Backups kept:             {}",
                settings.backup_retention.count
            );
        }
        Some(Commands::History { limit }) => {
            let storage = Storage::new(paths, &settings)?;
            let Some(audit) = storage.audit() else {
                println!("Audit logging is disabled.");
                return Ok(());
            };

            let entries = audit.read_recent(limit)?;
            if entries.is_empty() {
                println!("No history recorded in {}.", audit.path().display());
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Export { format, output }) => {
            let storage = Storage::open(paths, &settings)?;
            handle_export_command(&storage, format, output)?;
        }
    }

    Ok(())
}
