//! Application-wide constants.
//!
//! Centralizes magic numbers and UI-facing values so the data pipeline,
//! table view and export naming stay consistent with each other.

// ============================================================================
// Table View
// ============================================================================

/// Page size options for pagination
pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 25, 50, 100];

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ============================================================================
// Chart Rendering
// ============================================================================

/// Maximum characters of an x-axis tick label before truncation
pub const MAX_TICK_LABEL_CHARS: usize = 10;

/// Suffix appended to truncated tick labels
pub const TICK_LABEL_ELLIPSIS: &str = "...";

/// Line series color (blue)
pub const LINE_SERIES_COLOR: &str = "#3B82F6";

/// Bar series color (violet)
pub const BAR_SERIES_COLOR: &str = "#8B5CF6";

/// Stable element id of the chart region targeted by PNG capture.
/// The session's capture guard keeps this region unchanged while the
/// host rasterizes it.
pub const CHART_REGION_ID: &str = "visualization-chart";

// ============================================================================
// Export
// ============================================================================

/// Prefix for exported chart image file names
pub const EXPORT_FILE_PREFIX: &str = "chart-export";

/// Extension for exported chart images
pub const EXPORT_FILE_EXTENSION: &str = "png";

// ============================================================================
// Upload Hints
// ============================================================================

/// Example CSV shown next to the upload drop zone
pub const SAMPLE_CSV: &str = "\
date,value
2023-01-01,10
2023-01-02,15
2023-01-03,8
";
