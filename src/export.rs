use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{Journal, JournalTotals};
use crate::reports::{ReportSet, StatementLine, TrialBalanceRow};

pub const FILENAME_PREFIX: &str = "financial_report";
pub const UNKNOWN_DATE: &str = "unknown_date";
/// Spreadsheet applications reject longer sheet names.
pub const MAX_SHEET_NAME: usize = 31;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];

// ---------------------------------------------------------------------------
// Workbook model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    /// Single-row stand-in for a report with nothing to show.
    fn no_data(name: impl Into<String>, message: &str) -> Self {
        let mut sheet = Self::new(name, &["Info"]);
        sheet.row(vec![Cell::text(message)]);
        sheet
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// Filename
// ---------------------------------------------------------------------------

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// `financial_report_<DD-Mon-YYYY>.xlsx` from the earliest entry date. Any
/// unparseable date, or an empty log, yields the unknown-date placeholder.
pub fn suggested_filename(journal: &Journal) -> String {
    let earliest = journal
        .entries()
        .iter()
        .map(|e| parse_date(&e.date))
        .collect::<Option<Vec<_>>>()
        .and_then(|dates| dates.into_iter().min());
    let stamp = match earliest {
        Some(date) => date.format("%d-%b-%Y").to_string(),
        None => UNKNOWN_DATE.to_string(),
    };
    format!("{FILENAME_PREFIX}_{stamp}.xlsx")
}

// ---------------------------------------------------------------------------
// Sheet builders
// ---------------------------------------------------------------------------

fn sanitize_sheet_name(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            c => c,
        })
        .take(MAX_SHEET_NAME)
        .collect()
}

fn unique_sheet_name(taken: &[String], raw: &str) -> String {
    let base = sanitize_sheet_name(raw);
    if !taken.contains(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let suffix = format!(" ({n})");
        let keep = MAX_SHEET_NAME.saturating_sub(suffix.chars().count());
        let candidate = format!("{}{suffix}", base.chars().take(keep).collect::<String>());
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn totals_row(label_cells: usize, totals: &JournalTotals) -> Vec<Cell> {
    let mut row = vec![Cell::text("TOTAL")];
    row.extend(std::iter::repeat(Cell::Empty).take(label_cells - 1));
    row.push(totals.total_debit.into());
    row.push(totals.total_credit.into());
    row
}

fn journal_sheet(journal: &Journal) -> Sheet {
    const NAME: &str = "General Journal";
    if journal.is_empty() {
        return Sheet::no_data(NAME, "No journal entries");
    }
    let mut sheet = Sheet::new(NAME, &["Date", "Account", "Reference", "Description", "Debit", "Credit"]);
    for e in journal.entries() {
        sheet.row(vec![
            e.date.as_str().into(),
            e.account.as_str().into(),
            e.reference.as_str().into(),
            e.description.as_str().into(),
            e.debit.into(),
            e.credit.into(),
        ]);
    }
    sheet.row(totals_row(4, &journal.totals()));
    sheet
}

fn ledger_sheets(reports: &ReportSet) -> Vec<Sheet> {
    let mut taken: Vec<String> = Vec::new();
    let mut sheets = Vec::new();
    for ledger in &reports.ledgers {
        let name = unique_sheet_name(&taken, &format!("Ledger - {}", ledger.account));
        taken.push(name.clone());
        let mut sheet = Sheet::new(name, &["Date", "Reference", "Description", "Debit", "Credit", "Balance"]);
        for r in &ledger.rows {
            sheet.row(vec![
                r.date.as_str().into(),
                r.reference.as_str().into(),
                r.description.as_str().into(),
                r.debit.into(),
                r.credit.into(),
                r.balance.into(),
            ]);
        }
        let mut total = totals_row(3, &ledger.totals);
        total.push(ledger.closing_balance.into());
        sheet.row(total);
        sheets.push(sheet);
    }
    sheets
}

fn balance_rows(sheet: &mut Sheet, rows: &[TrialBalanceRow], totals: &JournalTotals) {
    for r in rows {
        sheet.row(vec![
            r.reference.as_str().into(),
            r.account.as_str().into(),
            r.balance_debit.into(),
            r.balance_credit.into(),
        ]);
    }
    sheet.row(totals_row(2, totals));
}

fn trial_balance_sheet(reports: &ReportSet) -> Sheet {
    const NAME: &str = "Trial Balance";
    let tb = &reports.trial_balance;
    if tb.rows.is_empty() {
        return Sheet::no_data(NAME, "No trial balance data");
    }
    let mut sheet = Sheet::new(NAME, &["Reference", "Account", "Balance Debit", "Balance Credit"]);
    balance_rows(&mut sheet, &tb.rows, &tb.totals);
    sheet
}

fn income_statement_sheet(reports: &ReportSet) -> Sheet {
    const NAME: &str = "Income Statement";
    let is = &reports.income_statement;
    if is.is_empty() {
        return Sheet::no_data(NAME, "No income statement data");
    }
    let mut sheet = Sheet::new(NAME, &["Category", "Description", "Amount"]);
    for line in &is.revenues {
        sheet.row(vec!["Revenue".into(), line.account.as_str().into(), line.amount.into()]);
    }
    sheet.row(vec!["Revenue".into(), "Total revenue".into(), is.total_revenue.into()]);
    for line in &is.expenses {
        sheet.row(vec!["Expense".into(), line.account.as_str().into(), line.amount.into()]);
    }
    sheet.row(vec!["Expense".into(), "Total expense".into(), is.total_expense.into()]);
    sheet.row(vec![Cell::Empty, "Net income".into(), is.net_income.into()]);
    sheet
}

fn equity_sheet(journal: &Journal, reports: &ReportSet) -> Sheet {
    const NAME: &str = "Changes in Equity";
    if journal.is_empty() {
        return Sheet::no_data(NAME, "No equity data");
    }
    let eq = &reports.equity_statement;
    let mut sheet = Sheet::new(NAME, &["Description", "Amount"]);
    sheet.row(vec!["Opening equity".into(), eq.opening_equity.into()]);
    sheet.row(vec!["Net income".into(), eq.net_income.into()]);
    sheet.row(vec!["Drawings".into(), eq.drawings.into()]);
    sheet.row(vec!["Closing equity".into(), eq.closing_equity.into()]);
    sheet
}

fn section(sheet: &mut Sheet, side: &str, heading: &str, lines: &[StatementLine]) {
    sheet.row(vec![side.into(), heading.into(), Cell::Empty]);
    for line in lines {
        sheet.row(vec![side.into(), line.account.as_str().into(), line.amount.into()]);
    }
}

fn balance_sheet_sheet(reports: &ReportSet) -> Sheet {
    const NAME: &str = "Balance Sheet";
    let bs = &reports.balance_sheet;
    if reports.trial_balance.rows.is_empty() {
        return Sheet::no_data(NAME, "No balance sheet data");
    }
    let mut sheet = Sheet::new(NAME, &["Side", "Account", "Amount"]);
    section(&mut sheet, "Assets", "Current assets", &bs.current_assets);
    section(&mut sheet, "Assets", "Fixed assets", &bs.fixed_assets);
    sheet.row(vec!["Assets".into(), "TOTAL ASSETS".into(), bs.total_assets.into()]);
    section(&mut sheet, "Liabilities & Equity", "Liabilities", &bs.liabilities);
    section(&mut sheet, "Liabilities & Equity", "Equity", &bs.equity);
    sheet.row(vec![
        "Liabilities & Equity".into(),
        "TOTAL LIABILITIES AND EQUITY".into(),
        bs.total_liabilities_and_equity().into(),
    ]);
    if !bs.is_balanced() {
        sheet.row(vec![Cell::Empty, "Difference".into(), bs.difference().into()]);
    }
    sheet
}

fn closing_sheet(reports: &ReportSet) -> Sheet {
    const NAME: &str = "Closing Entries";
    let closing = &reports.closing_entries;
    if closing.entries.is_empty() {
        return Sheet::no_data(NAME, "No closing entries");
    }
    let mut sheet = Sheet::new(NAME, &["Date", "Description", "Account", "Debit", "Credit"]);
    for e in &closing.entries {
        sheet.row(vec![
            e.date.as_str().into(),
            e.description.as_str().into(),
            e.account.as_str().into(),
            e.debit.into(),
            e.credit.into(),
        ]);
    }
    sheet.row(totals_row(3, &closing.totals));
    sheet
}

fn post_closing_sheet(reports: &ReportSet) -> Sheet {
    const NAME: &str = "Post-Closing Trial Balance";
    let pc = &reports.post_closing;
    if pc.rows.is_empty() {
        return Sheet::no_data(NAME, "No permanent accounts");
    }
    let mut sheet = Sheet::new(NAME, &["Reference", "Account", "Debit", "Credit"]);
    balance_rows(&mut sheet, &pc.rows, &pc.totals);
    sheet
}

/// Every report plus the raw log, as named sheets of one workbook.
pub fn build_workbook(journal: &Journal, reports: &ReportSet) -> Workbook {
    let mut sheets = vec![journal_sheet(journal)];
    sheets.extend(ledger_sheets(reports));
    sheets.push(trial_balance_sheet(reports));
    sheets.push(income_statement_sheet(reports));
    sheets.push(equity_sheet(journal, reports));
    sheets.push(balance_sheet_sheet(reports));
    sheets.push(closing_sheet(reports));
    sheets.push(post_closing_sheet(reports));
    debug!(sheets = sheets.len(), "built workbook");
    Workbook { sheets }
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

fn csv_file_name(sheet_name: &str) -> String {
    let stem: String = sheet_name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{stem}.csv")
}

/// One CSV file per sheet, prefixed with the sheet's position so the
/// workbook order survives a directory listing.
pub fn write_csv_dir(workbook: &Workbook, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for (i, sheet) in workbook.sheets.iter().enumerate() {
        let path = dir.join(format!("{:02}_{}", i + 1, csv_file_name(&sheet.name)));
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&path)?;
        wtr.write_record(&sheet.headers)?;
        for row in &sheet.rows {
            wtr.write_record(row.iter().map(Cell::as_text))?;
        }
        wtr.flush()?;
        written.push(path);
    }
    Ok(written)
}

pub fn write_json(workbook: &Workbook, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(workbook)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
