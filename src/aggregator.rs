use std::collections::HashMap;

use serde::Serialize;

use crate::models::{JournalEntry, JournalTotals, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Account,
    AccountReference,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountTotals {
    pub account: String,
    /// Set only when grouped by account and reference.
    pub reference: Option<String>,
    pub total_debit: f64,
    pub total_credit: f64,
}

impl AccountTotals {
    pub fn net(&self) -> f64 {
        self.total_debit - self.total_credit
    }

    pub fn balance_debit(&self) -> f64 {
        self.net().max(0.0)
    }

    pub fn balance_credit(&self) -> f64 {
        (-self.net()).max(0.0)
    }

    /// Net balance read from the account's normal side.
    pub fn balance(&self, side: Side) -> f64 {
        side.movement(self.total_debit, self.total_credit)
    }
}

/// Sum debits and credits per group. Groups come back in first-seen order.
pub fn aggregate(entries: &[JournalEntry], group_by: GroupBy) -> Vec<AccountTotals> {
    let mut index: HashMap<(&str, Option<&str>), usize> = HashMap::new();
    let mut groups: Vec<AccountTotals> = Vec::new();

    for e in entries {
        let reference = match group_by {
            GroupBy::Account => None,
            GroupBy::AccountReference => Some(e.reference.as_str()),
        };
        let slot = *index.entry((e.account.as_str(), reference)).or_insert_with(|| {
            groups.push(AccountTotals {
                account: e.account.clone(),
                reference: reference.map(str::to_string),
                total_debit: 0.0,
                total_credit: 0.0,
            });
            groups.len() - 1
        });
        groups[slot].total_debit += e.debit;
        groups[slot].total_credit += e.credit;
    }

    groups
}

/// Column sums over every entry whose account satisfies `pred`.
pub fn totals_where(entries: &[JournalEntry], pred: impl Fn(&str) -> bool) -> JournalTotals {
    JournalTotals::of(entries.iter().filter(|e| pred(&e.account)))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerRow {
    pub date: String,
    pub reference: String,
    pub description: String,
    pub debit: f64,
    pub credit: f64,
    pub balance: f64,
}

/// One account's entries sorted by date (stable), with a cumulative balance
/// taken from the account's normal side.
pub fn running_balance(entries: &[JournalEntry], account: &str, side: Side) -> Vec<LedgerRow> {
    let mut own: Vec<&JournalEntry> = entries.iter().filter(|e| e.account == account).collect();
    own.sort_by(|a, b| a.date.cmp(&b.date));

    let mut balance = 0.0f64;
    own.into_iter()
        .map(|e| {
            balance += side.movement(e.debit, e.credit);
            LedgerRow {
                date: e.date.clone(),
                reference: e.reference.clone(),
                description: e.description.clone(),
                debit: e.debit,
                credit: e.credit,
                balance,
            }
        })
        .collect()
}
