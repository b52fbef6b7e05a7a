//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, OutputResult, PhaseSummaryRow};

/// Trait implemented by output backends.
///
/// Errors do not interrupt the simulation: [`SimOutputObserver`] stores the
/// first one for retrieval with [`SimOutputObserver::take_error`].
///
/// [`SimOutputObserver`]: crate::SimOutputObserver
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one day/night summary row.
    fn write_phase_summary(&mut self, row: &PhaseSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
