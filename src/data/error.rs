//! Error types for CSV ingestion
//!
//! Provides the failure taxonomy for the upload-to-dataset path. Each kind
//! maps to one user-facing message via [`IngestError::user_message`]; the
//! structured payloads exist for logging and tests.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while ingesting an uploaded file
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IngestError {
    /// The file is not recognizable as CSV (wrong extension or non-text content)
    #[error("unsupported format: {file_name}")]
    UnsupportedFormat { file_name: String },

    /// The content is CSV but contains diagnostics beyond short rows
    #[error("malformed CSV: {} diagnostic(s)", diagnostics.len())]
    MalformedCsv { diagnostics: Vec<CsvDiagnostic> },

    /// Parsing succeeded but no usable data rows remained
    #[error("no data rows after filtering")]
    EmptyDataset,
}

impl IngestError {
    /// The message shown to the user for this failure
    pub fn user_message(&self) -> &'static str {
        match self {
            IngestError::UnsupportedFormat { .. } => "Please upload a CSV file.",
            IngestError::MalformedCsv { .. } => {
                "Error parsing CSV file. Please check the format."
            }
            IngestError::EmptyDataset => "No valid data found in the CSV file.",
        }
    }

    /// Diagnostics carried by a `MalformedCsv` failure, empty otherwise
    pub fn diagnostics(&self) -> &[CsvDiagnostic] {
        match self {
            IngestError::MalformedCsv { diagnostics } => diagnostics,
            _ => &[],
        }
    }
}

/// One offending condition found while reading CSV records
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDiagnostic {
    /// 1-based data row the diagnostic refers to, when known
    pub row: Option<u64>,
    pub message: String,
}

impl CsvDiagnostic {
    pub fn new(row: Option<u64>, message: impl Into<String>) -> Self {
        Self {
            row,
            message: message.into(),
        }
    }
}

impl fmt::Display for CsvDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "row {}: {}", row, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Result type alias for ingestion
pub type IngestResult<T> = Result<T, IngestError>;
