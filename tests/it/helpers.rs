//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `SessionBuilder` - Builder pattern for creating preloaded chart sessions
//! - Helper functions like `csv_file()`, `dataset()`, `numbered_csv()`
//! - Common test fixtures and assertions

use chartboard::constants::SAMPLE_CSV;
use chartboard::data::PlotPoint;
use chartboard::session::ChartRenderSession;
use chartboard::types::{CellValue, PlotKind, Record, TabularDataset, UploadedFile};

// ============================================================================
// SessionBuilder - Builder pattern for creating test sessions
// ============================================================================

/// Builder for creating test sessions with data and axis choices.
///
/// # Example
/// ```ignore
/// let session = SessionBuilder::new()
///     .with_csv("sales.csv", "month,total\nJan,10\nFeb,12")
///     .with_axes("month", "total")
///     .with_plot_kind(PlotKind::Bar)
///     .build();
/// ```
pub struct SessionBuilder {
    file: Option<UploadedFile>,
    x_column: Option<String>,
    y_column: Option<String>,
    plot_kind: Option<PlotKind>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    /// Create a new builder with no data loaded.
    pub fn new() -> Self {
        Self {
            file: None,
            x_column: None,
            y_column: None,
            plot_kind: None,
        }
    }

    /// Load the given CSV content under the given file name.
    pub fn with_csv(mut self, name: &str, content: &str) -> Self {
        self.file = Some(UploadedFile::from_text(name, content));
        self
    }

    /// Load the bundled sample CSV (3 rows of `date,value`).
    pub fn with_sample_data(self) -> Self {
        self.with_csv("data.csv", SAMPLE_CSV)
    }

    /// Select the x-axis column after loading.
    pub fn with_x_column(mut self, name: impl Into<String>) -> Self {
        self.x_column = Some(name.into());
        self
    }

    /// Select the y-axis column after loading.
    pub fn with_y_column(mut self, name: impl Into<String>) -> Self {
        self.y_column = Some(name.into());
        self
    }

    /// Select both axes after loading.
    pub fn with_axes(self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.with_x_column(x).with_y_column(y)
    }

    /// Set the plot kind.
    pub fn with_plot_kind(mut self, kind: PlotKind) -> Self {
        self.plot_kind = Some(kind);
        self
    }

    /// Build the session: ingest the file (if any), then apply the
    /// configured axis and plot kind choices on top of the defaults.
    pub fn build(self) -> ChartRenderSession {
        init_tracing();
        let mut session = ChartRenderSession::new();
        if let Some(file) = &self.file {
            session.ingest_file(file);
        }
        if let Some(x) = self.x_column {
            session.set_x_column(x);
        }
        if let Some(y) = self.y_column {
            session.set_y_column(y);
        }
        if let Some(kind) = self.plot_kind {
            session.set_plot_kind(kind);
        }
        session
    }
}

// ============================================================================
// Tracing setup
// ============================================================================

/// Route tracing output through the test harness, filtered by `RUST_LOG`.
///
/// Safe to call from any test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Standalone helper functions
// ============================================================================

/// Create an uploaded file from CSV text.
pub fn csv_file(name: &str, content: &str) -> UploadedFile {
    UploadedFile::from_text(name, content)
}

/// The bundled sample CSV as an uploaded file.
pub fn sample_file() -> UploadedFile {
    csv_file("data.csv", SAMPLE_CSV)
}

/// A session with the sample CSV already loaded (and axes defaulted).
pub fn loaded_session() -> ChartRenderSession {
    init_tracing();
    let mut session = ChartRenderSession::new();
    session.ingest_file(&sample_file());
    session
}

/// Type a field the way ingestion would: empty is absent, numeric-looking
/// text is a number, anything else is text.
pub fn cell(value: &str) -> CellValue {
    if value.is_empty() {
        return CellValue::Absent;
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(value.to_string()),
    }
}

/// Build a dataset from string literals, typing each field via [`cell`].
pub fn dataset(columns: &[&str], rows: &[&[&str]]) -> TabularDataset {
    TabularDataset::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|row| Record::new(row.iter().map(|field| cell(field)).collect()))
            .collect(),
    )
}

/// CSV text with an `id,score` header and `rows` numbered data rows.
///
/// Row `i` holds `i,i*10`, so values are easy to predict in assertions.
pub fn numbered_csv(rows: usize) -> String {
    let mut text = String::from("id,score\n");
    for i in 1..=rows {
        text.push_str(&format!("{},{}\n", i, i * 10));
    }
    text
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert that a dataset has a specific number of rows.
pub fn assert_row_count(dataset: &TabularDataset, expected: usize) {
    assert_eq!(
        dataset.row_count(),
        expected,
        "Expected {} rows, found {}",
        expected,
        dataset.row_count()
    );
}

/// Assert that a dataset has exactly the given column names.
pub fn assert_columns(dataset: &TabularDataset, expected: &[&str]) {
    assert_eq!(dataset.columns(), expected, "Dataset has wrong columns");
}

/// Assert a point's text label and numeric value at an index.
pub fn assert_point(points: &[PlotPoint], index: usize, x: &str, y: f64) {
    assert!(index < points.len(), "Point {} not found", index);
    assert_eq!(
        points[index].x,
        CellValue::Text(x.to_string()),
        "Point {} has wrong label",
        index
    );
    assert_eq!(points[index].y, y, "Point {} has wrong value", index);
}

// ============================================================================
// Tests for the helpers themselves
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chartboard::session::SessionPhase;

    #[test]
    fn test_builder_creates_empty_session() {
        let session = SessionBuilder::new().build();
        assert_eq!(session.phase(), SessionPhase::Empty);
        assert!(session.columns().is_empty());
    }

    #[test]
    fn test_builder_with_sample_data() {
        let session = SessionBuilder::new().with_sample_data().build();

        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(session.axes().x_column.as_deref(), Some("date"));
        assert_eq!(session.plot_points().len(), 3);
    }

    #[test]
    fn test_builder_axis_overrides_default() {
        let session = SessionBuilder::new()
            .with_sample_data()
            .with_y_column("date")
            .build();

        assert_eq!(session.axes().y_column.as_deref(), Some("date"));
    }

    #[test]
    fn test_cell_typing() {
        assert_eq!(cell(""), CellValue::Absent);
        assert_eq!(cell("7"), CellValue::Number(7.0));
        assert_eq!(cell("7%"), CellValue::Text("7%".to_string()));
        assert_eq!(cell("nan"), CellValue::Text("nan".to_string()));
    }

    #[test]
    fn test_dataset_helper() {
        let data = dataset(&["a", "b"], &[&["1", "x"], &["2", ""]]);

        assert_columns(&data, &["a", "b"]);
        assert_row_count(&data, 2);
        assert_eq!(data.cell(1, 1), Some(&CellValue::Absent));
    }

    #[test]
    fn test_numbered_csv_shape() {
        let text = numbered_csv(5);

        assert!(text.starts_with("id,score\n"));
        assert_eq!(text.lines().count(), 6);
        assert!(text.ends_with("5,50\n"));
    }
}
