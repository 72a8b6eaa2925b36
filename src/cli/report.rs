use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use buku::chart::Chart;
use buku::closing::ClosingEntries;
use buku::db::LogStore;
use buku::error::Result;
use buku::fmt::money;
use buku::models::Journal;
use buku::reports::{
    self, BalanceSheet, EquityStatement, GeneralLedger, IncomeStatement, PostClosingTrialBalance,
    StatementLine, TrialBalance, TrialBalanceRow,
};
use buku::settings::load_settings;

use super::{open_store, today, ReportCommands};

/// Prepend company name as a header line if non-empty.
fn with_header(company_name: &str, body: String) -> String {
    if company_name.is_empty() {
        body
    } else {
        format!("{company_name}\n{body}")
    }
}

fn amount(val: f64) -> Cell {
    Cell::new(money(val)).set_alignment(CellAlignment::Right)
}

fn blank() -> Cell {
    Cell::new("")
}

pub(crate) fn balance_note(balanced: bool, difference: f64) -> String {
    if balanced {
        "Balanced".green().to_string()
    } else {
        format!("NOT BALANCED (difference {})", money(difference))
            .red()
            .bold()
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

pub fn format_ledger(ledger: &GeneralLedger) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Ref", "Description", "Debit", "Credit", "Balance"]);
    for r in &ledger.rows {
        table.add_row(vec![
            Cell::new(&r.date),
            Cell::new(&r.reference),
            Cell::new(&r.description),
            amount(r.debit),
            amount(r.credit),
            amount(r.balance),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL".bold()),
        blank(),
        blank(),
        amount(ledger.totals.total_debit),
        amount(ledger.totals.total_credit),
        amount(ledger.closing_balance),
    ]);
    format!(
        "Ledger: {} ({}, normal {})\n{table}",
        ledger.account,
        ledger.classification.category.label(),
        ledger.classification.normal_side.label()
    )
}

fn balance_table(rows: &[TrialBalanceRow], debit: f64, credit: f64) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Ref", "Account", "Debit", "Credit"]);
    for r in rows {
        table.add_row(vec![
            Cell::new(&r.reference),
            Cell::new(&r.account),
            amount(r.balance_debit),
            amount(r.balance_credit),
        ]);
    }
    table.add_row(vec![Cell::new("TOTAL".bold()), blank(), amount(debit), amount(credit)]);
    table
}

pub fn format_trial_balance(tb: &TrialBalance) -> String {
    if tb.rows.is_empty() {
        return "Trial Balance\nNo journal entries.".to_string();
    }
    let table = balance_table(&tb.rows, tb.totals.total_debit, tb.totals.total_credit);
    format!(
        "Trial Balance\n{table}\n{}",
        balance_note(tb.totals.is_balanced(), tb.totals.difference())
    )
}

fn add_lines(table: &mut Table, lines: &[StatementLine]) {
    for line in lines {
        table.add_row(vec![Cell::new(format!("  {}", line.account)), amount(line.amount)]);
    }
}

pub fn format_income_statement(is: &IncomeStatement) -> String {
    if is.is_empty() {
        return "Income Statement\nNo revenue or expense accounts.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Account", "Amount"]);
    table.add_row(vec![Cell::new("REVENUE".green().bold()), blank()]);
    add_lines(&mut table, &is.revenues);
    table.add_row(vec![Cell::new("Total Revenue".bold()), amount(is.total_revenue)]);
    table.add_row(vec![blank(), blank()]);
    table.add_row(vec![Cell::new("EXPENSES".red().bold()), blank()]);
    add_lines(&mut table, &is.expenses);
    table.add_row(vec![Cell::new("Total Expenses".bold()), amount(is.total_expense)]);
    table.add_row(vec![blank(), blank()]);

    let net_label = if is.net_income >= 0.0 {
        "NET INCOME".green().bold()
    } else {
        "NET LOSS".red().bold()
    };
    table.add_row(vec![Cell::new(net_label), amount(is.net_income)]);
    format!("Income Statement\n{table}")
}

pub fn format_equity_statement(eq: &EquityStatement) -> String {
    let mut table = Table::new();
    table.set_header(vec!["", "Amount"]);
    table.add_row(vec![Cell::new("Opening equity"), amount(eq.opening_equity)]);
    table.add_row(vec![Cell::new("Net income"), amount(eq.net_income)]);
    table.add_row(vec![Cell::new("Drawings"), amount(-eq.drawings)]);
    table.add_row(vec![Cell::new("Closing equity".bold()), amount(eq.closing_equity)]);
    format!("Statement of Changes in Equity\n{table}")
}

pub fn format_balance_sheet(bs: &BalanceSheet) -> String {
    if bs.is_empty() {
        return "Balance Sheet\nNo asset, liability or equity balances.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Account", "Amount"]);
    table.add_row(vec![Cell::new("CURRENT ASSETS".bold()), blank()]);
    add_lines(&mut table, &bs.current_assets);
    table.add_row(vec![Cell::new("FIXED ASSETS".bold()), blank()]);
    add_lines(&mut table, &bs.fixed_assets);
    table.add_row(vec![Cell::new("Total Assets".bold()), amount(bs.total_assets)]);
    table.add_row(vec![blank(), blank()]);
    table.add_row(vec![Cell::new("LIABILITIES".bold()), blank()]);
    add_lines(&mut table, &bs.liabilities);
    table.add_row(vec![Cell::new("Total Liabilities".bold()), amount(bs.total_liabilities)]);
    table.add_row(vec![Cell::new("EQUITY".bold()), blank()]);
    add_lines(&mut table, &bs.equity);
    table.add_row(vec![
        Cell::new("Total Liabilities & Equity".bold()),
        amount(bs.total_liabilities_and_equity()),
    ]);
    format!(
        "Balance Sheet\n{table}\n{}",
        balance_note(bs.is_balanced(), bs.difference())
    )
}

pub fn format_closing_entries(closing: &ClosingEntries) -> String {
    if closing.entries.is_empty() {
        return "Closing Entries\nNothing to close.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Account", "Debit", "Credit"]);
    for e in &closing.entries {
        let account = if e.credit > 0.0 {
            format!("    {}", e.account)
        } else {
            e.account.clone()
        };
        table.add_row(vec![
            Cell::new(&e.date),
            Cell::new(&e.description),
            Cell::new(account),
            amount(e.debit),
            amount(e.credit),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL".bold()),
        blank(),
        blank(),
        amount(closing.totals.total_debit),
        amount(closing.totals.total_credit),
    ]);
    format!("Closing Entries\n{table}")
}

pub fn format_post_closing(pc: &PostClosingTrialBalance) -> String {
    if pc.rows.is_empty() {
        return "Post-Closing Trial Balance\nNo journal entries.".to_string();
    }
    let table = balance_table(&pc.rows, pc.totals.total_debit, pc.totals.total_credit);
    format!(
        "Post-Closing Trial Balance\n{table}\n{}",
        balance_note(pc.totals.is_balanced(), pc.totals.difference())
    )
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub(crate) fn render(cmd: &ReportCommands, journal: &Journal, chart: &Chart) -> String {
    match cmd {
        ReportCommands::Ledger { account: Some(account) } => {
            format_ledger(&reports::general_ledger(journal, chart, account))
        }
        ReportCommands::Ledger { account: None } => {
            let ledgers = reports::general_ledgers(journal, chart);
            if ledgers.is_empty() {
                return "General Ledger\nNo journal entries.".to_string();
            }
            ledgers.iter().map(format_ledger).collect::<Vec<_>>().join("\n\n")
        }
        ReportCommands::TrialBalance => format_trial_balance(&reports::trial_balance(journal)),
        ReportCommands::Income => {
            format_income_statement(&reports::income_statement(journal, chart))
        }
        ReportCommands::Equity => {
            let is = reports::income_statement(journal, chart);
            format_equity_statement(&reports::equity_statement(journal, chart, is.net_income))
        }
        ReportCommands::BalanceSheet => {
            format_balance_sheet(&reports::ReportSet::derive(journal, chart, &today()).balance_sheet)
        }
        ReportCommands::Closing { date } => {
            let date = date.clone().unwrap_or_else(today);
            format_closing_entries(&reports::ReportSet::derive(journal, chart, &date).closing_entries)
        }
        ReportCommands::PostClosing => {
            format_post_closing(&reports::ReportSet::derive(journal, chart, &today()).post_closing)
        }
    }
}

pub fn run(cmd: ReportCommands) -> Result<()> {
    let settings = load_settings();
    let journal = open_store()?.load()?;
    let body = render(&cmd, &journal, &settings.chart);
    println!("{}", with_header(&settings.company_name, body));
    Ok(())
}
