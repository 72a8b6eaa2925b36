//! Property tests over randomly generated logs.

use proptest::prelude::*;

use crate::chart::Chart;
use crate::classifier::classify;
use crate::models::{Journal, JournalEntry, BALANCE_TOLERANCE};
use crate::reports::{general_ledger, trial_balance, ReportSet};

const ACCOUNTS: &[(&str, &str)] = &[
    ("Kas", "101"),
    ("Piutang Usaha", "102"),
    ("Peralatan", "121"),
    ("Akumulasi Penyusutan Peralatan", "122"),
    ("Utang Usaha", "201"),
    ("Hutang Bank", "202"),
    ("Modal", "301"),
    ("Prive", "311"),
    ("Prive Tunai", "312"),
    ("Pendapatan Jasa", "401"),
    ("Beban Gaji", "501"),
    ("Beban Listrik", "502"),
];

fn close_enough(a: f64, b: f64) -> bool {
    (a - b).abs() < BALANCE_TOLERANCE
}

/// Whole-rupiah amounts keep every sum exact.
fn amount_strategy() -> impl Strategy<Value = f64> {
    (0u32..5_000_000u32).prop_map(f64::from)
}

fn entry_strategy() -> impl Strategy<Value = JournalEntry> {
    (
        0..ACCOUNTS.len(),
        1u32..29,
        amount_strategy(),
        amount_strategy(),
    )
        .prop_map(|(i, day, debit, credit)| {
            let (account, reference) = ACCOUNTS[i];
            JournalEntry::new(format!("2025-01-{day:02}"), account, reference, "", debit, credit)
        })
}

/// Arbitrary logs, balanced or not.
fn journal_strategy() -> impl Strategy<Value = Journal> {
    prop::collection::vec(entry_strategy(), 0..40).prop_map(Journal::from)
}

/// Balanced logs: every transaction is a debit line paired with an equal credit line.
fn balanced_journal_strategy() -> impl Strategy<Value = Journal> {
    prop::collection::vec(
        (0..ACCOUNTS.len(), 0..ACCOUNTS.len(), 1u32..29, 1u32..5_000_000u32),
        0..20,
    )
    .prop_map(|txns| {
        txns.into_iter()
            .flat_map(|(d, c, day, amount)| {
                let date = format!("2025-01-{day:02}");
                let amount = f64::from(amount);
                let (debit_account, debit_ref) = ACCOUNTS[d];
                let (credit_account, credit_ref) = ACCOUNTS[c];
                [
                    JournalEntry::new(date.clone(), debit_account, debit_ref, "", amount, 0.0),
                    JournalEntry::new(date, credit_account, credit_ref, "", 0.0, amount),
                ]
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The trial balance carries exactly the log's imbalance.
    #[test]
    fn prop_trial_balance_preserves_difference(journal in journal_strategy()) {
        let tb = trial_balance(&journal);
        prop_assert!(close_enough(tb.totals.difference(), journal.totals().difference()));
    }

    /// A ledger's final balance equals the account's trial-balance rows, read
    /// from its normal side.
    #[test]
    fn prop_ledger_final_balance_matches_trial_balance(journal in journal_strategy()) {
        let chart = Chart::default();
        let tb = trial_balance(&journal);
        for &account in &journal.accounts() {
            let ledger = general_ledger(&journal, &chart, account);
            let (debit, credit) = tb
                .rows
                .iter()
                .filter(|r| r.account == account)
                .fold((0.0, 0.0), |(d, c), r| (d + r.balance_debit, c + r.balance_credit));
            let side = classify(&chart, account).normal_side;
            prop_assert!(
                close_enough(ledger.closing_balance, side.movement(debit, credit)),
                "{}: ledger {} vs trial balance {}",
                account,
                ledger.closing_balance,
                side.movement(debit, credit)
            );
            prop_assert_eq!(
                ledger.rows.len(),
                journal.entries().iter().filter(|e| e.account == account).count()
            );
        }
    }

    /// Closing entries always balance, whatever the log looks like.
    #[test]
    fn prop_closing_entries_balance(journal in journal_strategy()) {
        let set = ReportSet::derive(&journal, &Chart::default(), "2025-01-31");
        prop_assert!(set.closing_entries.totals.is_balanced());
        prop_assert!(set.closing_entries.entries.len() % 2 == 0);
    }

    /// A balanced log yields a balanced balance sheet and post-closing trial balance.
    #[test]
    fn prop_balanced_log_balances_everywhere(journal in balanced_journal_strategy()) {
        let set = ReportSet::derive(&journal, &Chart::default(), "2025-01-31");
        prop_assert!(set.trial_balance.totals.is_balanced());
        prop_assert!(set.balance_sheet.is_balanced(), "difference {}", set.balance_sheet.difference());
        prop_assert!(set.post_closing.totals.is_balanced());
    }

    /// Net income is revenue less expense, and closing equity rolls forward from it.
    #[test]
    fn prop_equity_roll_forward(journal in journal_strategy()) {
        let set = ReportSet::derive(&journal, &Chart::default(), "2025-01-31");
        let is = &set.income_statement;
        let eq = &set.equity_statement;
        prop_assert!(close_enough(is.net_income, is.total_revenue - is.total_expense));
        prop_assert!(close_enough(
            eq.closing_equity,
            eq.opening_equity + eq.net_income - eq.drawings
        ));
    }

    /// Deriving twice from the same log gives identical results.
    #[test]
    fn prop_derivation_is_idempotent(journal in journal_strategy()) {
        let chart = Chart::default();
        let a = ReportSet::derive(&journal, &chart, "2025-01-31");
        let b = ReportSet::derive(&journal, &chart, "2025-01-31");
        prop_assert_eq!(a, b);
    }
}
