//! Data ingestion and projection module
//!
//! This module owns the path from an uploaded CSV file to chart-ready
//! points: parsing and typing (`csv_ingest`), the failure taxonomy
//! (`error`) and the pure dataset-to-points projection (`projector`).
//!
//! ## Error Handling
//!
//! All ingestion entry points return `IngestResult<T>` which uses the
//! [`IngestError`] type. The three kinds are:
//! - `UnsupportedFormat`: wrong extension or non-text content
//! - `MalformedCsv`: reader diagnostics beyond tolerated short rows
//! - `EmptyDataset`: nothing usable left after filtering

mod csv_ingest;
mod error;
mod projector;

pub use csv_ingest::*;
pub use error::*;
pub use projector::*;
