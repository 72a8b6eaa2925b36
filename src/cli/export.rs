use std::path::{Path, PathBuf};

use buku::db::LogStore;
use buku::error::Result;
use buku::export::{build_workbook, suggested_filename, write_csv_dir, write_json};
use buku::reports::ReportSet;
use buku::settings::{get_data_dir, load_settings, shellexpand_path};

use super::{open_store, today, ExportFormat};

pub fn run(output_dir: Option<String>, format: ExportFormat, date: Option<String>) -> Result<()> {
    let settings = load_settings();
    let journal = open_store()?.load()?;
    let closing_date = date.unwrap_or_else(today);

    let reports = ReportSet::derive(&journal, &settings.chart, &closing_date);
    let workbook = build_workbook(&journal, &reports);

    let out_dir = match output_dir {
        Some(dir) => PathBuf::from(shellexpand_path(&dir)),
        None => get_data_dir().join("exports"),
    };
    let filename = suggested_filename(&journal);
    let stem = Path::new(&filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("financial_report");

    match format {
        ExportFormat::Csv => {
            let dir = out_dir.join(stem);
            let files = write_csv_dir(&workbook, &dir)?;
            println!("Wrote {} sheets to {}", files.len(), dir.display());
        }
        ExportFormat::Json => {
            let path = out_dir.join(format!("{stem}.json"));
            write_json(&workbook, &path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
