use thiserror::Error;

#[derive(Error, Debug)]
pub enum BukuError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid rule pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("No journal entry with ID {0}")]
    UnknownEntry(usize),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("This file has already been imported: {0}")]
    DuplicateImport(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BukuError>;
