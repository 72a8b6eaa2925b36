use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BukuError, Result};

/// Which column of the journal an amount lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Debit,
    Credit,
}

impl Side {
    /// Signed movement of an entry as seen from this normal side.
    pub fn movement(self, debit: f64, credit: f64) -> f64 {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CurrentAsset,
    FixedAsset,
    Liability,
    Equity,
    Revenue,
    Expense,
    /// Owner withdrawals, closed into equity at period end.
    Drawings,
    /// Suspense account that nets revenue against expense while closing.
    IncomeSummary,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::CurrentAsset => "current asset",
            Self::FixedAsset => "fixed asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
            Self::Drawings => "drawings",
            Self::IncomeSummary => "income summary",
        }
    }

    /// Accounts zeroed by closing entries and left out of the post-closing trial balance.
    pub fn is_temporary(self) -> bool {
        matches!(
            self,
            Self::Revenue | Self::Expense | Self::Drawings | Self::IncomeSummary
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: String,
    pub account: String,
    pub reference: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub debit: f64,
    #[serde(default)]
    pub credit: f64,
}

impl JournalEntry {
    pub fn new(
        date: impl Into<String>,
        account: impl Into<String>,
        reference: impl Into<String>,
        description: impl Into<String>,
        debit: f64,
        credit: f64,
    ) -> Self {
        Self {
            date: date.into(),
            account: account.into(),
            reference: reference.into(),
            description: description.into(),
            debit,
            credit,
        }
    }
}

/// Debit and credit column sums. Imbalance is reported, never rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalTotals {
    pub total_debit: f64,
    pub total_credit: f64,
}

/// Differences smaller than half a cent count as balanced.
pub const BALANCE_TOLERANCE: f64 = 0.005;

impl JournalTotals {
    pub fn of<'a>(entries: impl IntoIterator<Item = &'a JournalEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |mut acc, e| {
            acc.total_debit += e.debit;
            acc.total_credit += e.credit;
            acc
        })
    }

    pub fn difference(&self) -> f64 {
        self.total_debit - self.total_credit
    }

    pub fn is_balanced(&self) -> bool {
        self.difference().abs() < BALANCE_TOLERANCE
    }
}

/// The transaction log. Every report is derived from a borrowed `Journal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    pub fn get(&self, index: usize) -> Result<&JournalEntry> {
        self.entries.get(index).ok_or(BukuError::UnknownEntry(index))
    }

    pub fn update(&mut self, index: usize, entry: JournalEntry) -> Result<JournalEntry> {
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(BukuError::UnknownEntry(index))?;
        Ok(std::mem::replace(slot, entry))
    }

    pub fn remove(&mut self, index: usize) -> Result<JournalEntry> {
        if index >= self.entries.len() {
            return Err(BukuError::UnknownEntry(index));
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn totals(&self) -> JournalTotals {
        JournalTotals::of(&self.entries)
    }

    /// Distinct account names in the order they first appear.
    pub fn accounts(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for e in &self.entries {
            if !seen.contains(&e.account.as_str()) {
                seen.push(&e.account);
            }
        }
        seen
    }
}

impl From<Vec<JournalEntry>> for Journal {
    fn from(entries: Vec<JournalEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<JournalEntry> for Journal {
    fn from_iter<I: IntoIterator<Item = JournalEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// ISO dates pass through; day-first `dd/mm/yyyy` and `dd-mm-yyyy` are
/// normalized to ISO.
pub fn parse_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Entry-submission guard. Derivations never call this; they accept any log.
/// On success the entry's date has been rewritten to `YYYY-MM-DD`.
pub fn validate_entry(entry: &mut JournalEntry) -> Result<()> {
    if entry.account.trim().is_empty() || entry.reference.trim().is_empty() {
        return Err(BukuError::InvalidEntry(
            "account name and reference are required".into(),
        ));
    }
    if !entry.debit.is_finite() || !entry.credit.is_finite() {
        return Err(BukuError::InvalidEntry(
            "debit and credit must be finite numbers".into(),
        ));
    }
    if entry.debit < 0.0 || entry.credit < 0.0 {
        return Err(BukuError::InvalidEntry(
            "debit and credit must not be negative".into(),
        ));
    }
    if entry.debit == 0.0 && entry.credit == 0.0 {
        return Err(BukuError::InvalidEntry(
            "at least one of debit or credit must be filled in".into(),
        ));
    }
    let Some(date) = parse_date(&entry.date) else {
        return Err(BukuError::InvalidEntry(format!(
            "date '{}' must be YYYY-MM-DD or DD/MM/YYYY",
            entry.date
        )));
    };
    entry.date = date;
    Ok(())
}
