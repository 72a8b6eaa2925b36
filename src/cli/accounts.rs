use comfy_table::{Cell, CellAlignment, Table};

use buku::aggregator::{aggregate, GroupBy};
use buku::chart::Chart;
use buku::classifier::classify;
use buku::db::LogStore;
use buku::error::Result;
use buku::fmt::money;
use buku::models::Journal;
use buku::settings::load_settings;

use crate::cli::open_store;

pub fn format_accounts(journal: &Journal, chart: &Chart) -> String {
    if journal.is_empty() {
        return "Accounts\nNo journal entries.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Account", "Category", "Normal", "Balance"]);
    for g in aggregate(journal.entries(), GroupBy::Account) {
        let cls = classify(chart, &g.account);
        table.add_row(vec![
            Cell::new(&g.account),
            Cell::new(cls.category.label()),
            Cell::new(cls.normal_side.label()),
            Cell::new(money(g.balance(cls.normal_side))).set_alignment(CellAlignment::Right),
        ]);
    }
    format!("Accounts\n{table}")
}

pub fn list() -> Result<()> {
    let chart = load_settings().chart;
    let journal = open_store()?.load()?;
    println!("{}", format_accounts(&journal, &chart));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use buku::models::JournalEntry;

    #[test]
    fn test_format_accounts() {
        let journal: Journal = vec![
            JournalEntry::new("2025-01-01", "Utang Bank", "202", "", 0.0, 750.0),
            JournalEntry::new("2025-01-01", "Kas", "101", "", 750.0, 0.0),
        ]
        .into();
        let out = format_accounts(&journal, &Chart::default());
        assert!(out.contains("liability"));
        assert!(out.contains("credit"));
        assert!(out.contains("current asset"));
        assert!(out.contains("Rp 750"));
        assert!(!out.contains("-Rp"));
    }
}
