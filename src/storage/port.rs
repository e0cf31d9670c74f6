use super::*;

use csv::{Reader, Writer};
use std::fs::File;
use std::io::{BufWriter, Write};

pub const DEFAULT_EXPORT_FILE: &str = "exported.csv";
pub const CSV_HEADER: [&str; 4] = ["id", "name", "phone", "email"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Resolve an export destination. Directories get `exported.csv` inside them,
/// files must end in `.csv` or `.json`.
pub fn resolve_export_path(dest: &Path) -> Result<(PathBuf, ExportFormat), AppError> {
    if dest.is_dir() {
        return Ok((dest.join(DEFAULT_EXPORT_FILE), ExportFormat::Csv));
    }

    match dest.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => {
            Ok((dest.to_path_buf(), ExportFormat::Csv))
        }
        Some(ext) if ext.eq_ignore_ascii_case("json") => {
            Ok((dest.to_path_buf(), ExportFormat::Json))
        }
        _ => Err(AppError::Validation(
            "Export file must be a .csv or .json file".to_string(),
        )),
    }
}

pub fn export_contacts(contacts: &[Contact], dest: &Path) -> Result<PathBuf, AppError> {
    let (path, format) = resolve_export_path(dest)?;
    create_file_parent(&path)?;

    match format {
        ExportFormat::Csv => {
            let mut writer = Writer::from_path(&path)?;
            // serialize() only emits headers alongside the first row
            if contacts.is_empty() {
                writer.write_record(CSV_HEADER)?;
            }
            for contact in contacts {
                writer.serialize(contact)?;
            }
            writer.flush()?;
        }
        ExportFormat::Json => {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, contacts)?;
            writer.flush()?;
        }
    }

    Ok(path)
}

/// Read `name,phone,email` rows from a CSV file. Any `id` column is ignored,
/// the store assigns fresh ids on import.
pub fn read_csv_records(src: &Path) -> Result<Vec<ContactFields>, AppError> {
    if !src.exists() {
        return Err(AppError::NotFound(format!("CSV file {}", src.display())));
    }

    let is_csv = src
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(src)?;
    let mut records = Vec::new();

    for result in reader.deserialize() {
        let record: ContactFields = result?;
        records.push(record);
    }

    Ok(records)
}
