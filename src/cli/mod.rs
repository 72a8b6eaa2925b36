pub mod accounts;
pub mod completions;
pub mod export;
pub mod import;
pub mod init;
pub mod journal;
pub mod report;
pub mod status;

use clap::{Parser, Subcommand, ValueEnum};

use buku::db::SqliteStore;
use buku::error::Result;
use buku::settings::get_data_dir;

pub(crate) fn open_store() -> Result<SqliteStore> {
    SqliteStore::open_in(&get_data_dir())
}

pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[derive(Parser)]
#[command(
    name = "buku",
    version,
    about = "Double-entry ledger and period-end reports for a small business."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up buku: choose a data directory and initialize the database.
    Init {
        /// Path for buku data (default: ~/Documents/buku)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record one journal line.
    Add {
        /// Account name, e.g. 'Kas' or 'Beban Listrik'
        account: String,
        /// Account reference code, e.g. 101
        #[arg(long = "ref")]
        reference: String,
        /// Debit amount
        #[arg(long, default_value = "0")]
        debit: f64,
        /// Credit amount
        #[arg(long, default_value = "0")]
        credit: f64,
        /// Transaction date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Show the general journal.
    List,
    /// Change fields of a journal line.
    Edit {
        /// Entry ID (shown in `buku list`)
        id: usize,
        #[arg(long)]
        account: Option<String>,
        #[arg(long = "ref")]
        reference: Option<String>,
        #[arg(long)]
        debit: Option<f64>,
        #[arg(long)]
        credit: Option<f64>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a journal line.
    Remove {
        /// Entry ID (shown in `buku list`)
        id: usize,
    },
    /// Delete every journal line and import record.
    Reset {
        /// Skip the safety check
        #[arg(long)]
        yes: bool,
    },
    /// Append journal lines from a CSV file.
    Import {
        /// CSV with columns date,account,reference,description,debit,credit
        file: String,
    },
    /// Show how each account in the journal is classified.
    Accounts,
    /// Show a report.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Write every report to a file set.
    Export {
        /// Output directory (default: <data_dir>/exports)
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Closing date for closing entries (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show current database and summary statistics.
    Status,
    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// General ledger for one account, or every account.
    Ledger {
        account: Option<String>,
    },
    /// Trial balance by account and reference.
    TrialBalance,
    /// Income statement.
    Income,
    /// Statement of changes in equity.
    Equity,
    /// Balance sheet.
    BalanceSheet,
    /// Closing entries for the period.
    Closing {
        /// Closing date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Trial balance after closing.
    PostClosing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One CSV file per sheet
    Csv,
    /// The whole workbook as one JSON document
    Json,
}
