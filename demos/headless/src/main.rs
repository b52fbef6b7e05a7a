//! headless: runs one forage simulation without a front end.
//!
//! ```text
//! headless [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! Without a config file a 50×50 world with four agents is simulated for at
//! most `DEFAULT_MAX_TICKS` ticks.  Logging goes through `tracing`; set
//! `RUST_LOG=debug` to follow individual agents.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fg_core::SimConfig;
use fg_output::{CsvWriter, SimOutputObserver};
use fg_sim::{SimBuilder, SimStats};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_MAX_TICKS:       u64  = 5_000;
const DEFAULT_OUTPUT_INTERVAL: u64  = 10;
const DEFAULT_OUTPUT_DIR:      &str = "output/headless";

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig {
            max_ticks:             DEFAULT_MAX_TICKS,
            output_interval_ticks: DEFAULT_OUTPUT_INTERVAL,
            ..SimConfig::default()
        });
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── Report ────────────────────────────────────────────────────────────────────

fn report(stats: &SimStats) {
    info!(
        ticks = stats.ticks.0,
        days = stats.days,
        time_cycles = stats.time_cycles,
        living = stats.living_count(),
        "final statistics"
    );
    for a in &stats.agents {
        match a.death_cause {
            Some(cause) => info!(
                agent = a.id.0,
                days = a.days_survived,
                distance = a.total_distance_traveled,
                %cause,
                "agent died"
            ),
            None => info!(
                agent = a.id.0,
                days = a.days_survived,
                distance = a.total_distance_traveled,
                "agent survived"
            ),
        }
    }

    let cells = &stats.cells;
    info!(
        full = cells.full,
        full_pct = format_args!("{:.1}", cells.full_percent()),
        consumed = cells.consumed,
        consumed_pct = format_args!("{:.1}", cells.consumed_percent()),
        regrowing = cells.regrowing,
        regrowing_pct = format_args!("{:.1}", cells.regrowing_percent()),
        "resource cells"
    );

    if let Some(best) = stats.best_agent() {
        info!(agent = best.id.0, days = best.days_survived, "longest survivor");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args_os().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    // 1. Config.
    let config = load_config(config_path.as_deref())?;
    info!(
        width = config.world.width,
        height = config.world.height,
        agents = config.agent_count,
        seed = config.seed,
        max_ticks = config.max_ticks,
        "configuration loaded"
    );

    // 2. Sim.
    let mut sim = SimBuilder::new(config).build().context("building simulation")?;
    let counts = sim.world.count_cells_by_state();
    info!(
        clusters = sim.world.clusters().len(),
        resource_cells = counts.full,
        "world generated"
    );

    // 3. Output.
    let writer = CsvWriter::new(&output_dir)
        .with_context(|| format!("opening output in {}", output_dir.display()))?;
    let mut obs = SimOutputObserver::new(writer);

    // 4. Run.
    let t0 = Instant::now();
    let stats = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!(error = %e, "output incomplete");
    }
    info!(
        elapsed_secs = format_args!("{:.3}", elapsed.as_secs_f64()),
        output = %output_dir.display(),
        "simulation complete"
    );

    report(&stats);
    Ok(())
}
