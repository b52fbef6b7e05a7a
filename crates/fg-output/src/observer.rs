//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use fg_agent::Agent;
use fg_core::Tick;
use fg_sim::{SimObserver, SimStats, TimeSystem, Transition};
use fg_world::World;

use crate::row::{AgentSnapshotRow, PhaseSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and day/night summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    /// Stranded agents reported since the last transition.
    stranded:   u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, stranded: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_stranded(&mut self, _tick: Tick, _agent: &Agent, _lost: u32) {
        self.stranded += 1;
    }

    fn on_transition(
        &mut self,
        tick: Tick,
        transition: Transition,
        time: &TimeSystem,
        agents: &[Agent],
    ) {
        let living = agents.iter().filter(|a| a.is_alive());
        let (living_agents, agents_home) = living.fold((0u32, 0u32), |(n, home), a| {
            (n + 1, home + u32::from(a.is_at_home()))
        });
        let row = PhaseSummaryRow {
            tick: tick.0,
            transition,
            day_count: time.day_count(),
            time_cycles: time.time_cycles(),
            living_agents,
            agents_home,
            stranded: std::mem::take(&mut self.stranded),
        };
        let result = self.writer.write_phase_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[Agent], _world: &World) {
        let rows: Vec<AgentSnapshotRow> =
            agents.iter().map(|a| AgentSnapshotRow::from_agent(tick, a)).collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &SimStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
