use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use buku::db::LogStore;
use buku::error::{BukuError, Result};
use buku::fmt::money;
use buku::models::{validate_entry, Journal, JournalEntry};

use crate::cli::{open_store, today};

/// IDs shown to the user are 1-based positions in the log.
fn index_of(journal: &Journal, id: usize) -> Result<usize> {
    if id == 0 || id > journal.len() {
        return Err(BukuError::UnknownEntry(id));
    }
    Ok(id - 1)
}

pub fn add(
    account: &str,
    reference: &str,
    debit: f64,
    credit: f64,
    date: Option<String>,
    description: &str,
) -> Result<()> {
    let mut entry = JournalEntry::new(
        date.unwrap_or_else(today),
        account.trim(),
        reference.trim(),
        description,
        debit,
        credit,
    );
    validate_entry(&mut entry)?;

    let mut store = open_store()?;
    let mut journal = store.load()?;
    journal.push(entry);
    store.save(&journal)?;
    println!("Added entry {}: {account}", journal.len());
    Ok(())
}

pub struct EntryChanges {
    pub account: Option<String>,
    pub reference: Option<String>,
    pub debit: Option<f64>,
    pub credit: Option<f64>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl EntryChanges {
    fn apply(self, mut entry: JournalEntry) -> JournalEntry {
        if let Some(v) = self.account {
            entry.account = v.trim().to_string();
        }
        if let Some(v) = self.reference {
            entry.reference = v.trim().to_string();
        }
        if let Some(v) = self.debit {
            entry.debit = v;
        }
        if let Some(v) = self.credit {
            entry.credit = v;
        }
        if let Some(v) = self.date {
            entry.date = v;
        }
        if let Some(v) = self.description {
            entry.description = v;
        }
        entry
    }
}

pub fn edit(id: usize, changes: EntryChanges) -> Result<()> {
    let mut store = open_store()?;
    let mut journal = store.load()?;
    let index = index_of(&journal, id)?;
    let mut updated = changes.apply(journal.get(index)?.clone());
    validate_entry(&mut updated)?;
    journal.update(index, updated)?;
    store.save(&journal)?;
    println!("Updated entry {id}");
    Ok(())
}

pub fn remove(id: usize) -> Result<()> {
    let mut store = open_store()?;
    let mut journal = store.load()?;
    let index = index_of(&journal, id)?;
    let removed = journal.remove(index)?;
    store.save(&journal)?;
    println!("Removed entry {id}: {} ({})", removed.account, removed.date);
    Ok(())
}

pub fn reset(yes: bool) -> Result<()> {
    if !yes {
        println!("This deletes every journal entry. Re-run with --yes to confirm.");
        return Ok(());
    }
    let mut store = open_store()?;
    store.save(&Journal::new())?;
    store.clear_imports()?;
    println!("Journal cleared.");
    Ok(())
}

pub fn format_journal(journal: &Journal) -> String {
    if journal.is_empty() {
        return "General Journal\nNo journal entries.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Account", "Ref", "Description", "Debit", "Credit"]);
    for (i, e) in journal.entries().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&e.date),
            Cell::new(&e.account),
            Cell::new(&e.reference),
            Cell::new(&e.description),
            Cell::new(money(e.debit)).set_alignment(CellAlignment::Right),
            Cell::new(money(e.credit)).set_alignment(CellAlignment::Right),
        ]);
    }
    let totals = journal.totals();
    table.add_row(vec![
        Cell::new("TOTAL".bold()),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(money(totals.total_debit)).set_alignment(CellAlignment::Right),
        Cell::new(money(totals.total_credit)).set_alignment(CellAlignment::Right),
    ]);
    format!(
        "General Journal\n{table}\n{}",
        crate::cli::report::balance_note(totals.is_balanced(), totals.difference())
    )
}

pub fn list() -> Result<()> {
    let journal = open_store()?.load()?;
    println!("{}", format_journal(&journal));
    Ok(())
}
