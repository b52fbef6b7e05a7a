//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `phase_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use fg_sim::Transition;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, PhaseSummaryRow};

pub const SNAPSHOT_HEADER: [&str; 10] = [
    "tick", "agent_id", "x", "y", "state", "stored", "collected", "sleep", "moves_today",
    "days_survived",
];

pub const SUMMARY_HEADER: [&str; 7] = [
    "tick", "transition", "day_count", "time_cycles", "living_agents", "agents_home", "stranded",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open (or truncate) the two CSV
    /// files in it, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("phase_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

fn transition_label(t: Transition) -> &'static str {
    match t {
        Transition::Nightfall => "nightfall",
        Transition::Daybreak  => "daybreak",
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.state.as_str().to_owned(),
                row.stored.to_string(),
                row.collected.to_string(),
                row.sleep.to_string(),
                row.moves_today.to_string(),
                row.days_survived.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_phase_summary(&mut self, row: &PhaseSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            transition_label(row.transition).to_owned(),
            row.day_count.to_string(),
            row.time_cycles.to_string(),
            row.living_agents.to_string(),
            row.agents_home.to_string(),
            row.stranded.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
