use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregator::{aggregate, running_balance, totals_where, GroupBy, LedgerRow};
use crate::chart::Chart;
use crate::classifier::{category_of, classify, Classification};
use crate::closing::{closing_entries, ClosingEntries};
use crate::models::{Category, Journal, JournalTotals, BALANCE_TOLERANCE};

/// Name of the account the closing process treats as "the" equity account:
/// the first equity account in the log, else the chart default.
pub fn equity_account_name(journal: &Journal, chart: &Chart) -> String {
    journal
        .accounts()
        .into_iter()
        .find(|name| category_of(chart, name) == Category::Equity)
        .map(str::to_string)
        .unwrap_or_else(|| chart.default_equity_account.clone())
}

// ---------------------------------------------------------------------------
// General Ledger
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralLedger {
    pub account: String,
    pub classification: Classification,
    pub rows: Vec<LedgerRow>,
    pub totals: JournalTotals,
    pub closing_balance: f64,
}

pub fn general_ledger(journal: &Journal, chart: &Chart, account: &str) -> GeneralLedger {
    let classification = classify(chart, account);
    let rows = running_balance(journal.entries(), account, classification.normal_side);
    let totals = totals_where(journal.entries(), |name| name == account);
    let closing_balance = rows.last().map(|r| r.balance).unwrap_or(0.0);
    GeneralLedger {
        account: account.to_string(),
        classification,
        rows,
        totals,
        closing_balance,
    }
}

/// One ledger per account, in the order accounts first appear in the log.
pub fn general_ledgers(journal: &Journal, chart: &Chart) -> Vec<GeneralLedger> {
    journal
        .accounts()
        .into_iter()
        .map(|account| general_ledger(journal, chart, account))
        .collect()
}

// ---------------------------------------------------------------------------
// Trial Balance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialBalanceRow {
    pub reference: String,
    pub account: String,
    pub total_debit: f64,
    pub total_credit: f64,
    pub balance_debit: f64,
    pub balance_credit: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrialBalance {
    pub rows: Vec<TrialBalanceRow>,
    /// Column sums of `balance_debit` / `balance_credit` (the TOTAL row).
    pub totals: JournalTotals,
}

fn sum_balances(rows: &[TrialBalanceRow]) -> JournalTotals {
    JournalTotals {
        total_debit: rows.iter().map(|r| r.balance_debit).sum(),
        total_credit: rows.iter().map(|r| r.balance_credit).sum(),
    }
}

fn sort_by_reference(rows: &mut [TrialBalanceRow]) {
    rows.sort_by(|a, b| {
        a.reference
            .cmp(&b.reference)
            .then_with(|| a.account.cmp(&b.account))
    });
}

pub fn trial_balance(journal: &Journal) -> TrialBalance {
    let mut rows: Vec<TrialBalanceRow> = aggregate(journal.entries(), GroupBy::AccountReference)
        .into_iter()
        .map(|g| TrialBalanceRow {
            balance_debit: g.balance_debit(),
            balance_credit: g.balance_credit(),
            reference: g.reference.unwrap_or_default(),
            account: g.account,
            total_debit: g.total_debit,
            total_credit: g.total_credit,
        })
        .collect();
    sort_by_reference(&mut rows);
    let totals = sum_balances(&rows);
    if !totals.is_balanced() {
        warn!(difference = totals.difference(), "trial balance does not balance");
    }
    TrialBalance { rows, totals }
}

// ---------------------------------------------------------------------------
// Income Statement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementLine {
    pub account: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IncomeStatement {
    pub revenues: Vec<StatementLine>,
    pub expenses: Vec<StatementLine>,
    pub total_revenue: f64,
    pub total_expense: f64,
    pub net_income: f64,
}

impl IncomeStatement {
    pub fn is_empty(&self) -> bool {
        self.revenues.is_empty() && self.expenses.is_empty()
    }
}

pub fn income_statement(journal: &Journal, chart: &Chart) -> IncomeStatement {
    let mut report = IncomeStatement::default();

    for g in aggregate(journal.entries(), GroupBy::Account) {
        let (lines, total, amount) = match category_of(chart, &g.account) {
            Category::Revenue => (
                &mut report.revenues,
                &mut report.total_revenue,
                g.total_credit - g.total_debit,
            ),
            Category::Expense => (
                &mut report.expenses,
                &mut report.total_expense,
                g.total_debit - g.total_credit,
            ),
            _ => continue,
        };
        *total += amount;
        if amount != 0.0 {
            lines.push(StatementLine {
                account: g.account,
                amount,
            });
        }
    }

    report.net_income = report.total_revenue - report.total_expense;
    report
}

// ---------------------------------------------------------------------------
// Statement of Changes in Equity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EquityStatement {
    pub opening_equity: f64,
    pub net_income: f64,
    pub drawings: f64,
    pub closing_equity: f64,
}

pub fn equity_statement(journal: &Journal, chart: &Chart, net_income: f64) -> EquityStatement {
    let entries = journal.entries();
    let equity = totals_where(entries, |name| category_of(chart, name) == Category::Equity);
    let drawings = totals_where(entries, |name| category_of(chart, name) == Category::Drawings);

    let opening_equity = equity.total_credit - equity.total_debit;
    let drawings = drawings.total_debit - drawings.total_credit;
    EquityStatement {
        opening_equity,
        net_income,
        drawings,
        closing_equity: opening_equity + net_income - drawings,
    }
}

// ---------------------------------------------------------------------------
// Balance Sheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BalanceSheet {
    pub current_assets: Vec<StatementLine>,
    pub fixed_assets: Vec<StatementLine>,
    pub liabilities: Vec<StatementLine>,
    pub equity: Vec<StatementLine>,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub total_equity: f64,
}

impl BalanceSheet {
    pub fn total_liabilities_and_equity(&self) -> f64 {
        self.total_liabilities + self.total_equity
    }

    pub fn difference(&self) -> f64 {
        self.total_assets - self.total_liabilities_and_equity()
    }

    pub fn is_balanced(&self) -> bool {
        self.difference().abs() < BALANCE_TOLERANCE
    }

    pub fn is_empty(&self) -> bool {
        self.current_assets.is_empty()
            && self.fixed_assets.is_empty()
            && self.liabilities.is_empty()
            && self.equity.is_empty()
    }
}

/// Per-account net (debit - credit) across references, in trial balance order.
fn net_by_account(trial_balance: &TrialBalance) -> Vec<(String, f64)> {
    let mut nets: Vec<(String, f64)> = Vec::new();
    for row in &trial_balance.rows {
        let net = row.balance_debit - row.balance_credit;
        match nets.iter_mut().find(|(name, _)| *name == row.account) {
            Some((_, total)) => *total += net,
            None => nets.push((row.account.clone(), net)),
        }
    }
    nets
}

pub fn balance_sheet(
    trial_balance: &TrialBalance,
    chart: &Chart,
    equity: &EquityStatement,
    equity_account: &str,
) -> BalanceSheet {
    let mut sheet = BalanceSheet::default();

    for (account, net) in net_by_account(trial_balance) {
        // Assets read debit - credit, so contra assets come out negative.
        let (lines, amount) = match category_of(chart, &account) {
            Category::CurrentAsset => (&mut sheet.current_assets, net),
            Category::FixedAsset => (&mut sheet.fixed_assets, net),
            Category::Liability => (&mut sheet.liabilities, -net),
            _ => continue,
        };
        if amount != 0.0 {
            lines.push(StatementLine { account, amount });
        }
    }

    sheet.total_assets = sheet
        .current_assets
        .iter()
        .chain(&sheet.fixed_assets)
        .map(|l| l.amount)
        .sum();
    sheet.total_liabilities = sheet.liabilities.iter().map(|l| l.amount).sum();
    sheet.total_equity = equity.closing_equity;
    if equity.closing_equity != 0.0 {
        sheet.equity.push(StatementLine {
            account: equity_account.to_string(),
            amount: equity.closing_equity,
        });
    }

    if !trial_balance.rows.is_empty() && !sheet.is_balanced() {
        warn!(difference = sheet.difference(), "balance sheet does not balance");
    }
    sheet
}

// ---------------------------------------------------------------------------
// Post-Closing Trial Balance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostClosingTrialBalance {
    pub rows: Vec<TrialBalanceRow>,
    pub totals: JournalTotals,
}

fn closing_equity_row(reference: String, account: String, closing_equity: f64) -> TrialBalanceRow {
    let (debit, credit) = if closing_equity >= 0.0 {
        (0.0, closing_equity)
    } else {
        (-closing_equity, 0.0)
    };
    TrialBalanceRow {
        reference,
        account,
        total_debit: debit,
        total_credit: credit,
        balance_debit: debit,
        balance_credit: credit,
    }
}

/// Permanent accounts only; equity carries the closing equity balance.
pub fn post_closing_trial_balance(
    trial_balance: &TrialBalance,
    chart: &Chart,
    equity: &EquityStatement,
) -> PostClosingTrialBalance {
    if trial_balance.rows.is_empty() {
        return PostClosingTrialBalance::default();
    }

    let mut rows = Vec::new();
    let mut equity_placed = false;
    for row in &trial_balance.rows {
        match category_of(chart, &row.account) {
            c if c.is_temporary() => {}
            Category::Equity => {
                // Every equity balance is already inside closing equity.
                if !equity_placed {
                    rows.push(closing_equity_row(
                        row.reference.clone(),
                        row.account.clone(),
                        equity.closing_equity,
                    ));
                    equity_placed = true;
                }
            }
            _ => rows.push(row.clone()),
        }
    }

    if !equity_placed {
        rows.push(closing_equity_row(
            chart.default_equity_reference.clone(),
            chart.default_equity_account.clone(),
            equity.closing_equity,
        ));
        sort_by_reference(&mut rows);
    }

    let totals = sum_balances(&rows);
    PostClosingTrialBalance { rows, totals }
}

// ---------------------------------------------------------------------------
// Full report set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSet {
    pub journal_totals: JournalTotals,
    pub ledgers: Vec<GeneralLedger>,
    pub trial_balance: TrialBalance,
    pub income_statement: IncomeStatement,
    pub equity_statement: EquityStatement,
    pub balance_sheet: BalanceSheet,
    pub closing_entries: ClosingEntries,
    pub post_closing: PostClosingTrialBalance,
}

impl ReportSet {
    /// Derive every report from the log in dependency order.
    pub fn derive(journal: &Journal, chart: &Chart, closing_date: &str) -> Self {
        debug!(entries = journal.len(), "deriving reports");
        let equity_account = equity_account_name(journal, chart);

        let trial_balance = trial_balance(journal);
        let income_statement = income_statement(journal, chart);
        let equity_statement = equity_statement(journal, chart, income_statement.net_income);
        let balance_sheet = balance_sheet(&trial_balance, chart, &equity_statement, &equity_account);
        let closing_entries = closing_entries(journal, chart, &equity_statement, closing_date);
        let post_closing = post_closing_trial_balance(&trial_balance, chart, &equity_statement);

        Self {
            journal_totals: journal.totals(),
            ledgers: general_ledgers(journal, chart),
            trial_balance,
            income_statement,
            equity_statement,
            balance_sheet,
            closing_entries,
            post_closing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JournalEntry;

    fn e(account: &str, reference: &str, debit: f64, credit: f64) -> JournalEntry {
        JournalEntry::new("2025-01-10", account, reference, "", debit, credit)
    }

    fn chart() -> Chart {
        Chart::default()
    }

    /// A balanced month for a small shop.
    fn sample() -> Journal {
        vec![
            JournalEntry::new("2025-01-01", "Kas", "101", "Setoran modal", 10_000_000.0, 0.0),
            JournalEntry::new("2025-01-01", "Modal", "301", "Setoran modal", 0.0, 10_000_000.0),
            JournalEntry::new("2025-01-03", "Peralatan", "121", "Beli kompor", 3_000_000.0, 0.0),
            JournalEntry::new("2025-01-03", "Utang Usaha", "201", "Beli kompor", 0.0, 3_000_000.0),
            JournalEntry::new("2025-01-15", "Kas", "101", "Penjualan", 4_000_000.0, 0.0),
            JournalEntry::new("2025-01-15", "Pendapatan Usaha", "401", "Penjualan", 0.0, 4_000_000.0),
            JournalEntry::new("2025-01-20", "Beban Gaji", "501", "Gaji", 1_500_000.0, 0.0),
            JournalEntry::new("2025-01-20", "Kas", "101", "Gaji", 0.0, 1_500_000.0),
            JournalEntry::new("2025-01-25", "Prive", "311", "Ambil pribadi", 500_000.0, 0.0),
            JournalEntry::new("2025-01-25", "Kas", "101", "Ambil pribadi", 0.0, 500_000.0),
        ]
        .into()
    }

    #[test]
    fn test_simple_sale_scenario() {
        let journal: Journal = vec![e("Kas", "101", 1_000_000.0, 0.0), e("Pendapatan", "401", 0.0, 1_000_000.0)].into();
        let tb = trial_balance(&journal);
        assert_eq!(tb.rows.len(), 2);
        assert_eq!(tb.rows[0].account, "Kas");
        assert_eq!(tb.rows[0].balance_debit, 1_000_000.0);
        assert_eq!(tb.rows[1].account, "Pendapatan");
        assert_eq!(tb.rows[1].balance_credit, 1_000_000.0);
        assert_eq!(tb.totals.total_debit, 1_000_000.0);
        assert_eq!(tb.totals.total_credit, 1_000_000.0);

        let is = income_statement(&journal, &chart());
        assert_eq!(is.total_revenue, 1_000_000.0);
        assert_eq!(is.total_expense, 0.0);
        assert_eq!(is.net_income, 1_000_000.0);
        assert!(is.expenses.is_empty());
    }

    #[test]
    fn test_trial_balance_sorted_by_reference() {
        let journal: Journal = vec![
            e("Pendapatan", "401", 0.0, 10.0),
            e("Kas", "101", 10.0, 0.0),
            e("Utang Bank", "202", 0.0, 5.0),
            e("Kas", "101", 5.0, 0.0),
        ]
        .into();
        let tb = trial_balance(&journal);
        let refs: Vec<&str> = tb.rows.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(refs, vec!["101", "202", "401"]);
        assert_eq!(tb.rows[0].balance_debit, 15.0);
    }

    #[test]
    fn test_trial_balance_keeps_zero_balance_accounts() {
        let journal: Journal = vec![e("Kas", "101", 10.0, 10.0)].into();
        let tb = trial_balance(&journal);
        assert_eq!(tb.rows.len(), 1);
        assert_eq!(tb.rows[0].balance_debit, 0.0);
        assert_eq!(tb.rows[0].balance_credit, 0.0);
    }

    #[test]
    fn test_trial_balance_preserves_imbalance() {
        let journal: Journal = vec![e("Kas", "101", 700.0, 0.0), e("Modal", "301", 0.0, 500.0)].into();
        let tb = trial_balance(&journal);
        assert_eq!(tb.totals.difference(), 200.0);
        assert_eq!(tb.totals.difference(), journal.totals().difference());
        assert!(!tb.totals.is_balanced());
    }

    #[test]
    fn test_general_ledger_running_balance() {
        let ledger = general_ledger(&sample(), &chart(), "Kas");
        let balances: Vec<f64> = ledger.rows.iter().map(|r| r.balance).collect();
        assert_eq!(balances, vec![10_000_000.0, 14_000_000.0, 12_500_000.0, 12_000_000.0]);
        assert_eq!(ledger.closing_balance, 12_000_000.0);
        assert_eq!(ledger.totals.total_debit, 14_000_000.0);
        assert_eq!(ledger.totals.total_credit, 2_000_000.0);
    }

    #[test]
    fn test_general_ledger_credit_normal_account() {
        let ledger = general_ledger(&sample(), &chart(), "Utang Usaha");
        assert_eq!(ledger.classification.normal_side, crate::models::Side::Credit);
        assert_eq!(ledger.closing_balance, 3_000_000.0);
    }

    #[test]
    fn test_general_ledger_unknown_account_is_empty() {
        let ledger = general_ledger(&sample(), &chart(), "Bank BCA");
        assert!(ledger.rows.is_empty());
        assert_eq!(ledger.closing_balance, 0.0);
        assert_eq!(ledger.totals, JournalTotals::default());
    }

    #[test]
    fn test_general_ledgers_one_per_account() {
        let ledgers = general_ledgers(&sample(), &chart());
        let names: Vec<&str> = ledgers.iter().map(|l| l.account.as_str()).collect();
        assert_eq!(
            names,
            vec!["Kas", "Modal", "Peralatan", "Utang Usaha", "Pendapatan Usaha", "Beban Gaji", "Prive"]
        );
    }

    #[test]
    fn test_income_statement_omits_zero_rows() {
        let journal: Journal = vec![
            e("Pendapatan Jasa", "401", 0.0, 500.0),
            e("Beban Sewa", "502", 100.0, 100.0),
            e("Beban Listrik", "501", 80.0, 0.0),
            e("Kas", "101", 400.0, 0.0),
        ]
        .into();
        let is = income_statement(&journal, &chart());
        assert_eq!(is.expenses.len(), 1);
        assert_eq!(is.expenses[0].account, "Beban Listrik");
        assert_eq!(is.total_expense, 80.0);
        assert_eq!(is.net_income, 420.0);
    }

    #[test]
    fn test_equity_statement() {
        let journal = sample();
        let is = income_statement(&journal, &chart());
        assert_eq!(is.net_income, 2_500_000.0);
        let eq = equity_statement(&journal, &chart(), is.net_income);
        assert_eq!(eq.opening_equity, 10_000_000.0);
        assert_eq!(eq.drawings, 500_000.0);
        assert_eq!(eq.closing_equity, 12_000_000.0);
    }

    #[test]
    fn test_balance_sheet_balances_for_balanced_log() {
        let journal = sample();
        let tb = trial_balance(&journal);
        let is = income_statement(&journal, &chart());
        let eq = equity_statement(&journal, &chart(), is.net_income);
        let bs = balance_sheet(&tb, &chart(), &eq, &equity_account_name(&journal, &chart()));

        assert_eq!(bs.current_assets, vec![StatementLine { account: "Kas".into(), amount: 12_000_000.0 }]);
        assert_eq!(bs.fixed_assets[0].account, "Peralatan");
        assert_eq!(bs.liabilities[0].amount, 3_000_000.0);
        assert_eq!(bs.equity[0].account, "Modal");
        assert_eq!(bs.total_assets, 15_000_000.0);
        assert_eq!(bs.total_liabilities_and_equity(), 15_000_000.0);
        assert!(bs.is_balanced());
    }

    #[test]
    fn test_balance_sheet_reports_imbalance() {
        let journal: Journal = vec![e("Kas", "101", 900.0, 0.0), e("Modal", "301", 0.0, 500.0)].into();
        let tb = trial_balance(&journal);
        let eq = equity_statement(&journal, &chart(), 0.0);
        let bs = balance_sheet(&tb, &chart(), &eq, "Modal");
        assert!(!bs.is_balanced());
        assert_eq!(bs.difference(), 400.0);
    }

    #[test]
    fn test_balance_sheet_contra_asset_reduces_assets() {
        let journal: Journal = vec![
            e("Peralatan", "121", 1000.0, 0.0),
            e("Modal", "301", 0.0, 1000.0),
            e("Beban Penyusutan", "510", 100.0, 0.0),
            e("Akumulasi Penyusutan Peralatan", "122", 0.0, 100.0),
        ]
        .into();
        let tb = trial_balance(&journal);
        let is = income_statement(&journal, &chart());
        let eq = equity_statement(&journal, &chart(), is.net_income);
        let bs = balance_sheet(&tb, &chart(), &eq, "Modal");
        assert_eq!(bs.fixed_assets.len(), 2);
        assert_eq!(bs.fixed_assets[1].amount, -100.0);
        assert_eq!(bs.total_assets, 900.0);
        assert!(bs.is_balanced());
    }

    #[test]
    fn test_balance_sheet_drops_zero_balance_accounts() {
        let journal: Journal = vec![
            e("Kas", "101", 500.0, 500.0),
            e("Piutang Usaha", "102", 200.0, 0.0),
            e("Modal", "301", 0.0, 200.0),
        ]
        .into();
        let tb = trial_balance(&journal);
        let eq = equity_statement(&journal, &chart(), 0.0);
        let bs = balance_sheet(&tb, &chart(), &eq, "Modal");
        assert_eq!(bs.current_assets.len(), 1);
        assert_eq!(bs.current_assets[0].account, "Piutang Usaha");
    }

    #[test]
    fn test_post_closing_overwrites_equity() {
        let journal = sample();
        let tb = trial_balance(&journal);
        let is = income_statement(&journal, &chart());
        let eq = equity_statement(&journal, &chart(), is.net_income);
        let pc = post_closing_trial_balance(&tb, &chart(), &eq);

        let names: Vec<&str> = pc.rows.iter().map(|r| r.account.as_str()).collect();
        assert_eq!(names, vec!["Kas", "Peralatan", "Utang Usaha", "Modal"]);
        let modal = pc.rows.iter().find(|r| r.account == "Modal").unwrap();
        assert_eq!(modal.balance_credit, 12_000_000.0);
        assert_eq!(pc.totals.total_debit, 15_000_000.0);
        assert_eq!(pc.totals.total_credit, 15_000_000.0);
        assert!(pc.totals.is_balanced());
    }

    #[test]
    fn test_post_closing_synthesizes_equity_row() {
        let journal: Journal = vec![e("Kas", "101", 300.0, 0.0), e("Pendapatan", "401", 0.0, 300.0)].into();
        let tb = trial_balance(&journal);
        let is = income_statement(&journal, &chart());
        let eq = equity_statement(&journal, &chart(), is.net_income);
        let pc = post_closing_trial_balance(&tb, &chart(), &eq);
        assert_eq!(pc.rows.len(), 2);
        assert_eq!(pc.rows[1].account, "Modal");
        assert_eq!(pc.rows[1].reference, "300");
        assert_eq!(pc.rows[1].balance_credit, 300.0);
        assert!(pc.totals.is_balanced());
    }

    #[test]
    fn test_post_closing_negative_equity_on_debit_side() {
        let journal: Journal = vec![
            e("Modal", "301", 0.0, 100.0),
            e("Beban Sewa", "501", 300.0, 0.0),
            e("Kas", "101", 0.0, 200.0),
        ]
        .into();
        let tb = trial_balance(&journal);
        let is = income_statement(&journal, &chart());
        let eq = equity_statement(&journal, &chart(), is.net_income);
        let pc = post_closing_trial_balance(&tb, &chart(), &eq);
        let modal = pc.rows.iter().find(|r| r.account == "Modal").unwrap();
        assert_eq!(modal.balance_debit, 200.0);
        assert_eq!(modal.balance_credit, 0.0);
    }

    #[test]
    fn test_post_closing_excludes_income_summary() {
        let journal: Journal = vec![
            e("Kas", "101", 100.0, 0.0),
            e("Ikhtisar Laba Rugi", "399", 0.0, 100.0),
        ]
        .into();
        let tb = trial_balance(&journal);
        let eq = equity_statement(&journal, &chart(), 0.0);
        let pc = post_closing_trial_balance(&tb, &chart(), &eq);
        assert!(pc.rows.iter().all(|r| r.account != "Ikhtisar Laba Rugi"));
    }

    #[test]
    fn test_empty_log_yields_empty_reports() {
        let journal = Journal::new();
        let set = ReportSet::derive(&journal, &chart(), "2025-01-31");
        assert!(set.ledgers.is_empty());
        assert!(set.trial_balance.rows.is_empty());
        assert!(set.income_statement.is_empty());
        assert_eq!(set.equity_statement, EquityStatement::default());
        assert!(set.balance_sheet.is_empty());
        assert!(set.closing_entries.entries.is_empty());
        assert!(set.post_closing.rows.is_empty());
    }

    #[test]
    fn test_derive_is_idempotent() {
        let journal = sample();
        let a = ReportSet::derive(&journal, &chart(), "2025-01-31");
        let b = ReportSet::derive(&journal, &chart(), "2025-01-31");
        assert_eq!(a, b);
    }

    #[test]
    fn test_equity_account_name_falls_back_to_chart() {
        let journal: Journal = vec![e("Kas", "101", 1.0, 0.0)].into();
        assert_eq!(equity_account_name(&journal, &chart()), "Modal");
        let journal: Journal = vec![e("Modal Pemilik", "301", 0.0, 1.0)].into();
        assert_eq!(equity_account_name(&journal, &chart()), "Modal Pemilik");
    }
}
