//! CSV file ingestion
//!
//! Turns an uploaded file into a [`TabularDataset`]: header row becomes the
//! column list, every cell is trimmed, and numeric-looking cells are stored
//! as numbers.
//!
//! ## Tolerance
//!
//! Short rows (fewer fields than the header) are accepted; the missing
//! trailing cells read as [`CellValue::Absent`]. Any other reader
//! diagnostic, including rows with more fields than the header, fails the
//! whole ingestion with [`IngestError::MalformedCsv`] carrying every
//! collected diagnostic. Blank lines and rows whose every cell is empty are
//! dropped before the dataset is built.

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::data::error::{CsvDiagnostic, IngestError, IngestResult};
use crate::types::{CellValue, Record, TabularDataset, UploadedFile};

/// Ingest an uploaded file into a dataset
///
/// The file must carry a `.csv` extension (case-insensitive) and contain
/// UTF-8 text; anything else is [`IngestError::UnsupportedFormat`]. The
/// content then goes through [`parse_csv`].
pub fn ingest(file: &UploadedFile) -> IngestResult<TabularDataset> {
    if !has_csv_extension(&file.name) {
        return Err(IngestError::UnsupportedFormat {
            file_name: file.name.clone(),
        });
    }

    let text = std::str::from_utf8(&file.bytes).map_err(|_| IngestError::UnsupportedFormat {
        file_name: file.name.clone(),
    })?;

    parse_csv(text)
}

/// Parse CSV text into a dataset
///
/// The first non-empty line is the header; its trimmed tokens become the
/// column list in order. Data rows keep their input order.
pub fn parse_csv(text: &str) -> IngestResult<TabularDataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(|h| h.to_string()).collect(),
        Err(e) => {
            return Err(IngestError::MalformedCsv {
                diagnostics: vec![CsvDiagnostic::new(None, e.to_string())],
            });
        }
    };

    let mut diagnostics: Vec<CsvDiagnostic> = Vec::new();
    let mut rows: Vec<Record> = Vec::new();
    let mut dropped = 0usize;

    for (index, result) in reader.records().enumerate() {
        let row_number = index as u64 + 1;
        match result {
            Ok(record) => {
                if record.len() > columns.len() {
                    diagnostics.push(CsvDiagnostic::new(
                        Some(row_number),
                        format!("expected {} fields, found {}", columns.len(), record.len()),
                    ));
                    continue;
                }
                let row = Record::new(record.iter().map(parse_cell).collect());
                if row.is_blank() {
                    dropped += 1;
                    continue;
                }
                rows.push(row);
            }
            Err(e) => {
                let row = e.position().map(|p| p.record());
                diagnostics.push(CsvDiagnostic::new(row, e.to_string()));
            }
        }
    }

    if !diagnostics.is_empty() {
        return Err(IngestError::MalformedCsv { diagnostics });
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyDataset);
    }

    tracing::debug!(
        "Parsed CSV with {} rows x {} cols ({} blank rows dropped)",
        rows.len(),
        columns.len(),
        dropped
    );

    Ok(TabularDataset::new(columns, rows))
}

/// Coerce a trimmed string to a finite number, if it reads as one
///
/// Integer, decimal and exponent forms are accepted, optionally signed.
/// Spellings like `inf` and `NaN` are rejected so stored numbers are
/// always finite.
pub fn lexical_number(s: &str) -> Option<f64> {
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Type a single trimmed field
fn parse_cell(field: &str) -> CellValue {
    if field.is_empty() {
        return CellValue::Absent;
    }
    match lexical_number(field) {
        Some(n) => CellValue::Number(n),
        None => CellValue::Text(field.to_string()),
    }
}

/// Check if a file name carries a CSV extension
fn has_csv_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "csv"))
        .unwrap_or(false)
}
