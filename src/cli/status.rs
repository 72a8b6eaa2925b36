use buku::db::{db_path, LogStore, SqliteStore};
use buku::error::Result;
use buku::settings::{load_settings, settings_path};

use crate::cli::report::balance_note;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db = db_path(&data_dir);

    println!(
        "Company:    {}",
        if settings.company_name.is_empty() { "(not set)" } else { &settings.company_name }
    );
    println!("Settings:   {}", settings_path().display());
    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db.display());

    if db.exists() {
        let store = SqliteStore::open(&db)?;
        let journal = store.load()?;
        let totals = journal.totals();

        println!();
        println!("Entries:       {}", journal.len());
        println!("Accounts:      {}", journal.accounts().len());
        println!("Imports:       {}", store.import_count()?);
        println!("Chart rules:   {}", settings.chart.rules.len());
        println!("Journal:       {}", balance_note(totals.is_balanced(), totals.difference()));
    } else {
        println!();
        println!("Database not found. Run `buku init` to set up.");
    }

    Ok(())
}
