//! Rental CLI - Command-line interface for rental property records
//!
//! Provides `rental property`, `rental appliance`, `rental vendor`,
//! `rental task`, and reporting commands.

mod commands;
mod config;
mod logging;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rental_core::storage::{Database, KeyValueStore, RecordStore, SqliteStore, StoreIssue};
use std::path::PathBuf;
use tracing::debug;

use commands::appliance::ApplianceCommands;
use commands::property::PropertyCommands;
use commands::task::TaskCommands;
use commands::vendor::VendorCommands;

#[derive(Parser)]
#[command(name = "rental")]
#[command(about = "Rental property, appliance, and maintenance records")]
#[command(version)]
struct Cli {
    /// Directory holding the records database (defaults to ~/.rental)
    #[arg(long, global = true, env = "RENTAL_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage properties
    Property {
        #[command(subcommand)]
        action: PropertyCommands,
    },
    /// Manage appliances
    Appliance {
        #[command(subcommand)]
        action: ApplianceCommands,
    },
    /// Manage vendors
    Vendor {
        #[command(subcommand)]
        action: VendorCommands,
    },
    /// Manage maintenance tasks
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Show record counts
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List open tasks past their due date
    Overdue {
        /// Reference date (defaults to today)
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List appliances whose warranty ends soon
    Warranties {
        /// Window in days
        #[arg(long, default_value_t = 30)]
        within: u32,
        /// Reference date (defaults to today)
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load sample records into an empty store
    Seed,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = config::data_dir(cli.data_dir)?;
    debug!(target: "rental", event = "data_dir", path = %data_dir.display());
    let db = Database::open(&config::db_path(&data_dir))?;
    let store = RecordStore::new(SqliteStore::new(db.connection()));

    let result = dispatch(&store, cli.command);

    let issues = store.take_issues();
    for issue in &issues {
        eprintln!("Warning: {issue}");
    }

    result?;
    if issues.iter().any(StoreIssue::lost_write) {
        anyhow::bail!("Some changes could not be saved");
    }
    Ok(())
}

fn dispatch<S: KeyValueStore>(store: &RecordStore<S>, command: Commands) -> Result<()> {
    match command {
        Commands::Property { action } => commands::property::execute(store, action),
        Commands::Appliance { action } => commands::appliance::execute(store, action),
        Commands::Vendor { action } => commands::vendor::execute(store, action),
        Commands::Task { action } => commands::task::execute(store, action),
        Commands::Stats { json } => commands::report::stats(store, json),
        Commands::Overdue { today, json } => {
            commands::report::overdue(store, today.unwrap_or_else(commands::today), json)
        }
        Commands::Warranties {
            within,
            today,
            json,
        } => commands::report::warranties(
            store,
            today.unwrap_or_else(commands::today),
            within,
            json,
        ),
        Commands::Seed => commands::seed::execute(store),
    }
}
