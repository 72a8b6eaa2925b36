//! Period-end closing entries: zero revenue, expense and drawings accounts
//! into equity through the income summary account.

use serde::Serialize;
use tracing::debug;

use crate::aggregator::{aggregate, GroupBy};
use crate::chart::Chart;
use crate::classifier::category_of;
use crate::models::{Category, Journal, JournalEntry, JournalTotals};
use crate::reports::{equity_account_name, EquityStatement};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClosingEntries {
    pub entries: Vec<JournalEntry>,
    pub totals: JournalTotals,
}

struct Closer<'a> {
    date: &'a str,
    entries: Vec<JournalEntry>,
}

impl Closer<'_> {
    /// Append one balanced pair. Amounts that are not strictly positive emit nothing.
    fn pair(&mut self, debit_account: &str, credit_account: &str, amount: f64, description: &str) {
        if amount <= 0.0 {
            return;
        }
        self.entries.push(JournalEntry::new(
            self.date,
            debit_account,
            "",
            description,
            amount,
            0.0,
        ));
        self.entries.push(JournalEntry::new(
            self.date,
            credit_account,
            "",
            description,
            0.0,
            amount,
        ));
    }
}

pub fn closing_entries(
    journal: &Journal,
    chart: &Chart,
    equity: &EquityStatement,
    closing_date: &str,
) -> ClosingEntries {
    let summary = chart.income_summary_account.as_str();
    let equity_account = equity_account_name(journal, chart);
    let by_account = aggregate(journal.entries(), GroupBy::Account);
    let mut closer = Closer {
        date: closing_date,
        entries: Vec::new(),
    };

    for g in by_account
        .iter()
        .filter(|g| category_of(chart, &g.account) == Category::Revenue)
    {
        let description = format!("Closing {}", g.account);
        closer.pair(&g.account, summary, g.total_credit - g.total_debit, &description);
    }

    for g in by_account
        .iter()
        .filter(|g| category_of(chart, &g.account) == Category::Expense)
    {
        let description = format!("Closing {}", g.account);
        closer.pair(summary, &g.account, g.total_debit - g.total_credit, &description);
    }

    if equity.net_income > 0.0 {
        closer.pair(summary, &equity_account, equity.net_income, "Closing net income");
    } else if equity.net_income < 0.0 {
        closer.pair(&equity_account, summary, -equity.net_income, "Closing net loss");
    }

    for g in by_account
        .iter()
        .filter(|g| category_of(chart, &g.account) == Category::Drawings)
    {
        closer.pair(
            &equity_account,
            &g.account,
            g.total_debit - g.total_credit,
            "Closing drawings",
        );
    }

    let entries = closer.entries;
    debug!(count = entries.len(), "generated closing entries");
    let totals = JournalTotals::of(&entries);
    ClosingEntries { entries, totals }
}
