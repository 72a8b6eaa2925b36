use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::db::{LogStore, SqliteStore};
use crate::error::{BukuError, Result};
use crate::models::{validate_entry, JournalEntry};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lenient amount parsing: currency prefix, thousands separators and quotes
/// are stripped; `(500)` reads as -500. Garbage reads as 0.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw
        .replace(',', "")
        .replace('"', "")
        .replace("Rp", "")
        .replace("rp", "")
        .replace(' ', "");
    let s = s.trim().trim_end_matches('-');
    if let Some(inner) = s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return -inner.trim().parse::<f64>().unwrap_or(0.0);
    }
    s.parse().unwrap_or(0.0)
}

pub fn compute_checksum(file_path: &Path) -> Result<String> {
    let data = std::fs::read(file_path)?;
    let mut hasher = Sha256::new();
    hasher.update(&data);
    Ok(hex::encode(hasher.finalize()))
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

const COLUMNS: [&str; 6] = ["date", "account", "reference", "description", "debit", "credit"];

#[derive(Debug, Default)]
pub struct ParsedRows {
    pub entries: Vec<JournalEntry>,
    pub skipped: usize,
}

/// Read a headered journal CSV. Columns are found by name, in any order;
/// `description`, `debit` and `credit` may be absent.
pub fn parse_journal_csv(file_path: &Path) -> Result<ParsedRows> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(file_path)?;

    let headers = rdr.headers()?.clone();
    let position: Vec<Option<usize>> = COLUMNS
        .iter()
        .map(|col| headers.iter().position(|h| h.eq_ignore_ascii_case(col)))
        .collect();
    let [Some(date_col), Some(account_col), Some(reference_col), description_col, debit_col, credit_col] =
        position[..]
    else {
        return Err(BukuError::Other(
            "CSV must have date, account and reference columns".into(),
        ));
    };

    let mut parsed = ParsedRows::default();
    for result in rdr.records() {
        let Ok(record) = result else {
            parsed.skipped += 1;
            continue;
        };
        let field = |col: Option<usize>| col.and_then(|i| record.get(i)).unwrap_or("");
        let mut entry = JournalEntry::new(
            field(Some(date_col)),
            field(Some(account_col)),
            field(Some(reference_col)),
            field(description_col),
            parse_amount(field(debit_col)),
            parse_amount(field(credit_col)),
        );
        if let Err(e) = validate_entry(&mut entry) {
            warn!(line = ?record.position().map(|p| p.line()), "skipping row: {e}");
            parsed.skipped += 1;
            continue;
        }
        parsed.entries.push(entry);
    }
    Ok(parsed)
}

// ---------------------------------------------------------------------------
// import_csv
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ImportResult {
    pub imported: usize,
    pub skipped: usize,
}

/// Append every valid row of `file_path` to the stored log. A file whose
/// contents were already imported is refused.
pub fn import_csv(store: &mut SqliteStore, file_path: &Path) -> Result<ImportResult> {
    let filename = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string();
    let checksum = compute_checksum(file_path)?;
    if store.has_import(&checksum)? {
        return Err(BukuError::DuplicateImport(filename));
    }

    let parsed = parse_journal_csv(file_path)?;
    let mut journal = store.load()?;
    let imported = parsed.entries.len();
    for entry in parsed.entries {
        journal.push(entry);
    }
    store.save_import(&journal, &filename, &checksum, imported)?;
    debug!(imported, skipped = parsed.skipped, file = %filename, "imported journal CSV");

    Ok(ImportResult {
        imported,
        skipped: parsed.skipped,
    })
}
