use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pocket_ledger::app::{App, is_user_notice};
use pocket_ledger::core::{SortOrder, TransactionKind, format_naira};
use pocket_ledger::render::{Surface, TextChart, TextSurface};
use pocket_ledger::storage::FileSlot;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Deserialize, Default)]
struct StorageConfig {
    /// Directory holding the ledger slot file.
    dir: Option<String>,
}

#[derive(Deserialize, Default)]
struct ExportConfig {
    /// Directory CSV exports are written to.
    dir: Option<String>,
}

#[derive(Deserialize, Default)]
struct Config {
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    export: ExportConfig,
}

#[derive(Parser)]
#[command(name = "ledger", about = "Track personal income and expenses")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new transaction
    Add {
        #[arg(long)]
        kind: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        amount: f64,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Show totals, the transaction listing and the chart
    List {
        /// Category to filter by, or "all"
        #[arg(long, default_value = "all")]
        category: String,
        /// One of: newest, oldest, amount-high
        #[arg(long, default_value = "unsorted")]
        sort: String,
    },
    /// Delete a transaction by id
    Remove {
        #[arg(long)]
        id: u64,
    },
    /// Show the registered categories for a transaction kind
    Categories {
        #[arg(long)]
        kind: String,
    },
    /// Register a custom category for this session
    AddCategory {
        #[arg(long)]
        kind: String,
        #[arg(long)]
        name: String,
    },
    /// Write the CSV export file
    Export {
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Show the aggregate totals
    Totals,
}

#[derive(Debug)]
enum CliError {
    InvalidConfig(String),
    InvalidDate(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            CliError::InvalidDate(d) => write!(f, "invalid date (expected YYYY-MM-DD): {d}"),
        }
    }
}

impl std::error::Error for CliError {}

// Missing config file means defaults; a present but malformed file is an
// error rather than silently ignored.
fn load_config(path: &PathBuf) -> Result<Config, CliError> {
    let Ok(data) = fs::read_to_string(path) else {
        return Ok(Config::default());
    };
    toml::from_str(&data).map_err(|e| CliError::InvalidConfig(e.to_string()))
}

fn parse_date(s: &str) -> Result<chrono::NaiveDate, CliError> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.into()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = load_config(&cli.config)?;
    let storage_dir = cfg.storage.dir.unwrap_or_else(|| ".".to_string());
    let export_dir = PathBuf::from(cfg.export.dir.unwrap_or_else(|| ".".to_string()));

    let mut app = App::open(FileSlot::new(&storage_dir))?;
    let mut surface = TextSurface::new(std::io::stdout());
    let mut chart = TextChart::new(std::io::stdout());

    match cli.command {
        Commands::Add {
            kind,
            category,
            amount,
            date,
            note,
        } => {
            app.set_kind(kind.parse::<TransactionKind>()?);
            app.choose_category(&category);
            let date = parse_date(&date)?;
            match app.submit(amount, date, &note) {
                Ok(id) => {
                    println!("Recorded transaction #{id}");
                    app.refresh(&mut surface, &mut chart)?;
                }
                Err(err) if is_user_notice(&err) => surface.notice(&err.to_string()),
                Err(err) => return Err(err.into()),
            }
        }
        Commands::List { category, sort } => {
            app.set_filter(category);
            app.set_sort(SortOrder::from_key(&sort));
            app.refresh(&mut surface, &mut chart)?;
        }
        Commands::Remove { id } => {
            app.delete(id)?;
            app.refresh(&mut surface, &mut chart)?;
        }
        Commands::Categories { kind } => {
            let kind = kind.parse::<TransactionKind>()?;
            for name in app.categories_for(kind) {
                println!("{name}");
            }
        }
        Commands::AddCategory { kind, name } => {
            let kind = kind.parse::<TransactionKind>()?;
            match app.add_category(kind, &name) {
                Ok(()) => println!("Added {kind} category {name}"),
                Err(err) if is_user_notice(&err) => surface.notice(&err.to_string()),
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Export { dir } => {
            let dir = dir.unwrap_or(export_dir);
            match app.export_to(&dir) {
                Ok(path) => println!("Exported to {}", path.display()),
                Err(err) if is_user_notice(&err) => surface.notice(&err.to_string()),
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Totals => {
            let totals = app.totals();
            println!("Income:  {}", format_naira(totals.income));
            println!("Expense: {}", format_naira(totals.expense));
            println!("Balance: {}", format_naira(totals.balance));
        }
    }

    Ok(())
}
