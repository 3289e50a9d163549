//! Chartboard - CSV upload to interactive chart, as a reusable core.
//!
//! The crate turns an uploaded CSV file into an immutable
//! [`TabularDataset`], projects it onto user-selected axes as chart
//! points, and tracks the screen lifecycle in a [`ChartRenderSession`].
//! Rendering, file dialogs and PNG encoding belong to the host; everything
//! here is plain state and pure functions, so the same core drives a
//! desktop shell, a web view or a test harness.
//!
//! This module is organized into several submodules:
//! - `types` - Cells, datasets, uploaded files, axis selection, plot kinds
//! - `constants` - Page sizes, chart colors, capture and export naming
//! - `data` - CSV ingestion, failure taxonomy, axis projection
//! - `session` - The observable chart render session and load lifecycle
//! - `table_view` - Pagination state for the data table panel
//! - `export` - Capture bracket and dated export file names

pub mod constants;
pub mod data;
pub mod export;
pub mod session;
pub mod table_view;
pub mod types;

pub use data::{
    CsvDiagnostic, IngestError, IngestResult, PlotFrame, PlotPoint, ingest, parse_csv, project,
};
pub use session::{ChartRenderSession, ChartStatus, LoadTicket, SessionPhase};
pub use table_view::{TablePager, cell_text};
pub use types::{
    AxisSelection, CellValue, PlotKind, Record, SourceFile, TabularDataset, UploadedFile,
};
