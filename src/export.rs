//! Chart export support
//!
//! File naming for PNG exports of the chart region, and the capture
//! bracket hosts wrap around rasterization. Encoding pixels is the host's
//! concern; it targets [`CHART_REGION_ID`](crate::constants::CHART_REGION_ID)
//! and holds the session's capture guard so the region stays still while
//! the image is taken.

use chrono::{NaiveDate, Utc};

use crate::constants::{EXPORT_FILE_EXTENSION, EXPORT_FILE_PREFIX};
use crate::session::ChartRenderSession;

/// File name for a chart exported on the given date
pub fn export_file_name(date: NaiveDate) -> String {
    format!(
        "{}-{}.{}",
        EXPORT_FILE_PREFIX,
        date.format("%Y-%m-%d"),
        EXPORT_FILE_EXTENSION
    )
}

/// File name for a chart exported today (UTC)
pub fn suggested_export_file_name() -> String {
    export_file_name(Utc::now().date_naive())
}

/// Run a rasterization callback with the session's capture guard held
///
/// Ingest completions landing while the callback runs are deferred until
/// the guard is released, so the chart the callback reads cannot change
/// under it.
pub fn with_capture<T>(
    session: &mut ChartRenderSession,
    rasterize: impl FnOnce(&ChartRenderSession) -> T,
) -> T {
    session.begin_capture();
    let result = rasterize(session);
    session.end_capture();
    result
}
