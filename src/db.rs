use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, Transaction};
use tracing::debug;

use crate::error::Result;
use crate::models::{Journal, JournalEntry};

pub const DB_FILE: &str = "buku.db";

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS journal_entries (
    id INTEGER PRIMARY KEY,
    position INTEGER NOT NULL,
    date TEXT NOT NULL,
    account TEXT NOT NULL,
    reference TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    debit REAL NOT NULL DEFAULT 0,
    credit REAL NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS imports (
    id INTEGER PRIMARY KEY,
    filename TEXT NOT NULL,
    checksum TEXT NOT NULL,
    record_count INTEGER,
    imported_at TEXT DEFAULT (datetime('now'))
);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Where the transaction log lives. Derivations never touch it; they receive
/// a loaded `Journal`.
pub trait LogStore {
    fn load(&self) -> Result<Journal>;
    fn save(&mut self, journal: &Journal) -> Result<()>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (and create if needed) the database at `db_path`.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = get_connection(db_path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        Self::open(&db_path(data_dir))
    }

    pub fn has_import(&self, checksum: &str) -> Result<bool> {
        let mut stmt = self.conn.prepare("SELECT 1 FROM imports WHERE checksum = ?1")?;
        Ok(stmt.exists([checksum])?)
    }

    /// Replace the log and record the import that produced it in one
    /// transaction, so a failure leaves neither half behind.
    pub fn save_import(
        &mut self,
        journal: &Journal,
        filename: &str,
        checksum: &str,
        record_count: usize,
    ) -> Result<()> {
        let tx = self.conn.transaction()?;
        write_entries(&tx, journal)?;
        tx.execute(
            "INSERT INTO imports (filename, checksum, record_count) VALUES (?1, ?2, ?3)",
            params![filename, checksum, record_count as i64],
        )?;
        tx.commit()?;
        debug!(entries = journal.len(), file = filename, "saved imported journal");
        Ok(())
    }

    pub fn import_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT count(*) FROM imports", [], |r| r.get(0))?)
    }

    /// Forget every recorded import so the same files can be loaded again.
    pub fn clear_imports(&self) -> Result<()> {
        self.conn.execute("DELETE FROM imports", [])?;
        Ok(())
    }
}

impl LogStore for SqliteStore {
    fn load(&self) -> Result<Journal> {
        let mut stmt = self.conn.prepare(
            "SELECT date, account, reference, description, debit, credit
             FROM journal_entries ORDER BY position",
        )?;
        let journal = stmt
            .query_map([], |row| {
                Ok(JournalEntry {
                    date: row.get(0)?,
                    account: row.get(1)?,
                    reference: row.get(2)?,
                    description: row.get(3)?,
                    debit: row.get(4)?,
                    credit: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Journal, _>>()?;
        debug!(entries = journal.len(), "loaded journal");
        Ok(journal)
    }

    fn save(&mut self, journal: &Journal) -> Result<()> {
        let tx = self.conn.transaction()?;
        write_entries(&tx, journal)?;
        tx.commit()?;
        debug!(entries = journal.len(), "saved journal");
        Ok(())
    }
}

fn write_entries(tx: &Transaction<'_>, journal: &Journal) -> Result<()> {
    tx.execute("DELETE FROM journal_entries", [])?;
    let mut stmt = tx.prepare(
        "INSERT INTO journal_entries (position, date, account, reference, description, debit, credit)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for (i, e) in journal.entries().iter().enumerate() {
        stmt.execute(params![
            i as i64,
            e.date,
            e.account,
            e.reference,
            e.description,
            e.debit,
            e.credit
        ])?;
    }
    Ok(())
}

pub fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE)
}
