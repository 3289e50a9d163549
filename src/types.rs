//! Core types for the chartboard data pipeline.
//!
//! This module defines the fundamental data structures shared by ingestion,
//! projection and the render session: cell values, datasets, uploaded files
//! and chart configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{BAR_SERIES_COLOR, LINE_SERIES_COLOR};

// ============================================================================
// Cells & Datasets
// ============================================================================

/// A single cell value
///
/// Cells carry exactly three shapes: text, a finite number, or nothing.
/// Ingestion never constructs a non-finite `Number`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Absent,
}

impl CellValue {
    /// Render the cell for display
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                // Format nicely: no trailing zeros for whole numbers. The
                // integer path only covers the i64 range; beyond it the
                // cast would saturate.
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Absent => String::new(),
        }
    }

    /// Numeric view of the cell, only for `Number` cells
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }
}

/// A row of cells, positionally aligned with the dataset's columns
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    cells: Vec<CellValue>,
}

impl Record {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Cell at a column index. Indices past the stored cells read as
    /// `Absent`, so short rows need no padding.
    pub fn cell(&self, index: usize) -> &CellValue {
        self.cells.get(index).unwrap_or(&CellValue::Absent)
    }

    /// Number of stored cells (may be fewer than the dataset's columns)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every stored cell is `Absent`. Unstored trailing cells
    /// read as `Absent` anyway, so this covers the whole row.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(CellValue::is_absent)
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

/// An immutable table of named columns and positional rows
///
/// Produced by ingestion and never modified afterwards; the session swaps
/// whole datasets instead of editing them. The default value is the empty
/// dataset: no rows and no columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularDataset {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl TabularDataset {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    /// The empty dataset (no rows, no columns)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name. Duplicate names resolve to the first.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column index), if the row exists
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).map(|r| r.cell(column))
    }
}

// ============================================================================
// Uploaded Files
// ============================================================================

/// A raw file handed to ingestion by the host (drop target, file picker)
#[derive(Clone, Debug)]
pub struct UploadedFile {
    /// File name as supplied by the host, used for format detection
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Convenience constructor for text content
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, text.as_bytes().to_vec())
    }
}

/// Summary of the file behind the current session, for display
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub size_bytes: u64,
}

impl SourceFile {
    pub fn from_upload(file: &UploadedFile) -> Self {
        Self {
            name: file.name.clone(),
            size_bytes: file.bytes.len() as u64,
        }
    }

    /// Human-readable size, e.g. "1.24 KB"
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// The two axis choices driving projection
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisSelection {
    /// Column supplying categorical/ordinal labels
    pub x_column: Option<String>,
    /// Column supplying numeric values
    pub y_column: Option<String>,
}

impl AxisSelection {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x_column: Some(x.into()),
            y_column: Some(y.into()),
        }
    }

    /// True when both axes are set
    pub fn is_complete(&self) -> bool {
        self.x_column.is_some() && self.y_column.is_some()
    }
}

/// Supported plot shapes
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotKind {
    #[default]
    Line,
    Bar,
}

impl PlotKind {
    pub fn label(&self) -> &'static str {
        match self {
            PlotKind::Line => "Line",
            PlotKind::Bar => "Bar",
        }
    }

    /// Series color as a hex string
    pub fn series_color(&self) -> &'static str {
        match self {
            PlotKind::Line => LINE_SERIES_COLOR,
            PlotKind::Bar => BAR_SERIES_COLOR,
        }
    }

    pub fn all() -> &'static [PlotKind] {
        &[PlotKind::Line, PlotKind::Bar]
    }
}
