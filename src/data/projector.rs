//! Axis projection
//!
//! Turns a dataset plus an axis selection into chart-ready points. This is
//! the only place chart math happens; rendering itself is the host's
//! concern, so everything here is a pure function of its inputs.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TICK_LABEL_CHARS, TICK_LABEL_ELLIPSIS};
use crate::data::csv_ingest::lexical_number;
use crate::types::{AxisSelection, CellValue, PlotKind, TabularDataset};

/// A single data point in a chart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Raw cell from the x column, used as a categorical/ordinal label
    pub x: CellValue,
    /// Numeric value (Y-axis), always finite
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: CellValue, y: f64) -> Self {
        Self { x, y }
    }

    /// X-axis tick text for this point, truncated for readability
    pub fn tick_label(&self) -> String {
        tick_label(&self.x)
    }
}

/// Processed chart data ready for rendering
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    /// Series shape to draw
    pub kind: PlotKind,
    /// X-axis column name
    pub x_label: String,
    /// Y-axis column name
    pub y_label: String,
    /// Points in dataset row order
    pub points: Vec<PlotPoint>,
}

impl PlotFrame {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Min/max of the y values for scaling, `None` when there are no points
    pub fn y_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in &self.points {
            min = min.min(point.y);
            max = max.max(point.y);
        }
        Some((min, max))
    }
}

/// Project a dataset onto the selected axes
///
/// Returns one point per row that has a usable y value: a numeric cell, or
/// a text cell that parses as a number. Rows without one are excluded. The
/// output is empty when the dataset is empty, either axis is unset, or a
/// selected name is not among the dataset's columns (a stale selection
/// reads as unset). Row order is preserved.
pub fn project(dataset: &TabularDataset, selection: &AxisSelection) -> Vec<PlotPoint> {
    let (x_name, y_name) = match (selection.x_column.as_deref(), selection.y_column.as_deref()) {
        (Some(x), Some(y)) => (x, y),
        _ => return Vec::new(),
    };

    let (x_col, y_col) = match (dataset.column_index(x_name), dataset.column_index(y_name)) {
        (Some(x), Some(y)) => (x, y),
        _ => return Vec::new(),
    };

    dataset
        .rows()
        .iter()
        .filter_map(|row| {
            let y = numeric_value(row.cell(y_col))?;
            Some(PlotPoint::new(row.cell(x_col).clone(), y))
        })
        .collect()
}

/// Assemble the full frame for the current chart
pub fn plot_frame(
    dataset: &TabularDataset,
    selection: &AxisSelection,
    kind: PlotKind,
) -> PlotFrame {
    PlotFrame {
        kind,
        x_label: selection.x_column.clone().unwrap_or_default(),
        y_label: selection.y_column.clone().unwrap_or_default(),
        points: project(dataset, selection),
    }
}

/// Numeric view of a cell for the y axis
fn numeric_value(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => lexical_number(s),
        CellValue::Absent => None,
    }
}

/// Render a cell as an x-axis tick label
///
/// Long text is truncated for readability; numeric labels are kept whole so
/// a large value never loses digits.
pub fn tick_label(value: &CellValue) -> String {
    let text = value.display();
    match value {
        CellValue::Text(_) if text.chars().count() > MAX_TICK_LABEL_CHARS => {
            let truncated: String = text.chars().take(MAX_TICK_LABEL_CHARS).collect();
            format!("{}{}", truncated, TICK_LABEL_ELLIPSIS)
        }
        _ => text,
    }
}
