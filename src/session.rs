//! Chart render session
//!
//! The stateful core behind the upload-and-chart screen. Hosts feed it
//! uploaded files and axis choices; it exposes the observable state a view
//! binds to (dataset, axis selection, plot kind, loading flag, error
//! message) and the projected chart frame.
//!
//! ## Load lifecycle
//!
//! [`ChartRenderSession::begin_ingest`] returns a [`LoadTicket`]; the host
//! runs the parse (possibly on a later tick) and hands the outcome to
//! [`ChartRenderSession::finish_ingest`]. Only the ticket from the most
//! recent `begin_ingest` is applied, so overlapping uploads resolve to the
//! last one started and a stale completion can never clobber a newer
//! dataset. [`ChartRenderSession::ingest_file`] drives the whole cycle
//! synchronously for hosts without an event loop.
//!
//! ## Capture guard
//!
//! While a capture is open (see [`ChartRenderSession::begin_capture`]) the
//! session defers ingest completions instead of applying them, so the chart
//! region stays unchanged while the host rasterizes it to an image.

use crate::data::{
    self, IngestError, IngestResult, PlotFrame, PlotPoint, plot_frame, project,
};
use crate::types::{AxisSelection, PlotKind, SourceFile, TabularDataset, UploadedFile};

/// Token identifying one load started by [`ChartRenderSession::begin_ingest`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Coarse lifecycle state of the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No dataset loaded, nothing in flight
    Empty,
    /// An ingest is in flight
    Loading,
    /// The most recent ingest failed (the previous dataset, if any, is kept)
    Error,
    /// A dataset is loaded
    Ready,
}

/// What the chart region should currently show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartStatus {
    /// No dataset yet, or an axis is unset
    AwaitingSelection,
    /// Axes are set but no row has a usable y value
    NoNumericData,
    /// Points are available to draw
    Renderable,
}

impl ChartStatus {
    /// Placeholder text for the empty chart states
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ChartStatus::AwaitingSelection => Some("Select columns to display the chart"),
            ChartStatus::NoNumericData => {
                Some("No numeric data available for the selected Y-axis")
            }
            ChartStatus::Renderable => None,
        }
    }
}

/// Stateful core of the upload-and-chart screen
#[derive(Debug, Default)]
pub struct ChartRenderSession {
    dataset: TabularDataset,
    axes: AxisSelection,
    plot_kind: PlotKind,
    loading: bool,
    error: Option<IngestError>,
    source_file: Option<SourceFile>,
    /// File summary for the in-flight load; published to the card when the
    /// load succeeds
    pending_source: Option<SourceFile>,
    /// Monotonically increasing load sequence; only the latest ticket wins
    load_seq: u64,
    capturing: bool,
    /// Completion parked while a capture is open
    deferred: Option<(LoadTicket, IngestResult<TabularDataset>)>,
}

impl ChartRenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Observable state
    // ========================================================================

    pub fn dataset(&self) -> &TabularDataset {
        &self.dataset
    }

    /// Column names of the current dataset (empty before the first load)
    pub fn columns(&self) -> &[String] {
        self.dataset.columns()
    }

    pub fn axes(&self) -> &AxisSelection {
        &self.axes
    }

    pub fn plot_kind(&self) -> PlotKind {
        self.plot_kind
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&IngestError> {
        self.error.as_ref()
    }

    /// User-facing message for the current error, if any
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(IngestError::user_message)
    }

    /// Summary of the most recently uploaded file, for the file card
    pub fn source_file(&self) -> Option<&SourceFile> {
        self.source_file.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Loading
        } else if self.error.is_some() {
            SessionPhase::Error
        } else if self.dataset.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Ready
        }
    }

    /// What the chart region should show for the current state
    pub fn chart_status(&self) -> ChartStatus {
        if self.dataset.is_empty() || !self.axes.is_complete() {
            return ChartStatus::AwaitingSelection;
        }
        if self.plot_points().is_empty() {
            ChartStatus::NoNumericData
        } else {
            ChartStatus::Renderable
        }
    }

    /// Chart points for the current dataset and selection
    pub fn plot_points(&self) -> Vec<PlotPoint> {
        project(&self.dataset, &self.axes)
    }

    /// Chart frame (points plus labels and series kind) for rendering
    pub fn plot_frame(&self) -> PlotFrame {
        plot_frame(&self.dataset, &self.axes, self.plot_kind)
    }

    // ========================================================================
    // Load lifecycle
    // ========================================================================

    /// Start a load: clears any previous error and raises the loading flag.
    /// The file summary reaches the card only once the load succeeds, so a
    /// rejected upload leaves the previous card intact. Returns the ticket
    /// the matching [`finish_ingest`](Self::finish_ingest) call must present.
    pub fn begin_ingest(&mut self, source: SourceFile) -> LoadTicket {
        self.load_seq += 1;
        self.loading = true;
        self.error = None;
        tracing::info!("Ingest of {} started (load #{})", source.name, self.load_seq);
        self.pending_source = Some(source);
        LoadTicket(self.load_seq)
    }

    /// Deliver the outcome of a load
    ///
    /// Applied only when `ticket` is the one handed out by the most recent
    /// [`begin_ingest`](Self::begin_ingest); superseded completions are
    /// dropped. While a capture is open the outcome is parked and applied
    /// at [`end_capture`](Self::end_capture).
    pub fn finish_ingest(&mut self, ticket: LoadTicket, outcome: IngestResult<TabularDataset>) {
        if ticket.0 != self.load_seq {
            tracing::debug!(
                "Ignoring stale ingest completion (load #{}, current #{})",
                ticket.0,
                self.load_seq
            );
            return;
        }
        if self.capturing {
            tracing::debug!("Capture open, deferring ingest completion");
            self.deferred = Some((ticket, outcome));
            return;
        }
        self.apply_outcome(outcome);
    }

    /// Ingest an uploaded file in one synchronous step
    pub fn ingest_file(&mut self, file: &UploadedFile) {
        let ticket = self.begin_ingest(SourceFile::from_upload(file));
        let outcome = data::ingest(file);
        self.finish_ingest(ticket, outcome);
    }

    fn apply_outcome(&mut self, outcome: IngestResult<TabularDataset>) {
        self.loading = false;
        let pending = self.pending_source.take();
        match outcome {
            Ok(dataset) => {
                tracing::info!(
                    "Dataset loaded with {} rows x {} cols",
                    dataset.row_count(),
                    dataset.column_count()
                );
                self.dataset = dataset;
                self.error = None;
                if let Some(source) = pending {
                    self.source_file = Some(source);
                }
                self.apply_default_axes();
            }
            Err(e) => {
                tracing::warn!("Ingest failed: {}", e);
                for diagnostic in e.diagnostics() {
                    tracing::warn!("CSV diagnostic: {}", diagnostic);
                }
                // Previous dataset, selection and file card stay as they were
                self.error = Some(e);
            }
        }
    }

    /// Default the axes to the first two columns when both are unset
    fn apply_default_axes(&mut self) {
        if self.axes.x_column.is_some() || self.axes.y_column.is_some() {
            return;
        }
        let columns = self.dataset.columns();
        self.axes.x_column = columns.first().cloned();
        self.axes.y_column = columns.get(1).cloned();
        tracing::debug!(
            "Defaulted axes to x={:?} y={:?}",
            self.axes.x_column,
            self.axes.y_column
        );
    }

    // ========================================================================
    // User operations
    // ========================================================================

    /// Select the x-axis column
    ///
    /// A name not present in the current dataset is allowed (it may refer
    /// to a previous dataset); projection treats it as unset. An empty name
    /// returns the axis to unset.
    pub fn set_x_column(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            self.axes.x_column = None;
            return;
        }
        if self.dataset.column_index(&name).is_none() {
            tracing::debug!("Selected x column {:?} not in current dataset", name);
        }
        self.axes.x_column = Some(name);
    }

    /// Select the y-axis column; an empty name returns the axis to unset
    pub fn set_y_column(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            self.axes.y_column = None;
            return;
        }
        if self.dataset.column_index(&name).is_none() {
            tracing::debug!("Selected y column {:?} not in current dataset", name);
        }
        self.axes.y_column = Some(name);
    }

    pub fn set_plot_kind(&mut self, kind: PlotKind) {
        self.plot_kind = kind;
    }

    /// Reset the dataset, selection, error and file card to the initial
    /// empty state. The plot kind is a standalone preference and survives.
    ///
    /// Also invalidates any in-flight load; its completion will arrive with
    /// a superseded ticket and be ignored.
    pub fn clear(&mut self) {
        self.load_seq += 1;
        self.deferred = None;
        self.dataset = TabularDataset::empty();
        self.axes = AxisSelection::default();
        self.loading = false;
        self.error = None;
        self.source_file = None;
        self.pending_source = None;
        tracing::info!("Session cleared");
    }

    // ========================================================================
    // Capture guard
    // ========================================================================

    /// Open a capture: until [`end_capture`](Self::end_capture), ingest
    /// completions are deferred so the chart region is not mutated while
    /// the host rasterizes it.
    pub fn begin_capture(&mut self) {
        self.capturing = true;
    }

    /// Close the capture and apply any completion parked during it
    pub fn end_capture(&mut self) {
        self.capturing = false;
        if let Some((ticket, outcome)) = self.deferred.take() {
            self.finish_ingest(ticket, outcome);
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }
}
