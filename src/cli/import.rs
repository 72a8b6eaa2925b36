use std::path::PathBuf;

use buku::error::Result;
use buku::importer::import_csv;

use crate::cli::open_store;

pub fn run(file: &str) -> Result<()> {
    let file_path = PathBuf::from(file);
    let mut store = open_store()?;

    let result = import_csv(&mut store, &file_path)?;

    println!("{} imported, {} skipped (invalid rows)", result.imported, result.skipped);
    Ok(())
}
