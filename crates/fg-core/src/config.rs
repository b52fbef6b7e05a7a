//! Static simulation configuration.
//!
//! Everything the core needs is supplied once at construction time.  How a
//! configuration is obtained (constants, JSON, TOML) is the application's
//! business; with the `serde` feature every struct here deserializes with
//! per-field defaults, so a config file only has to name what it changes.

use crate::{FgError, FgResult, GridPos, ResourceType};

// ── ResourceSpec ──────────────────────────────────────────────────────────────

/// How one resource type is scattered over the grid at generation time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResourceSpec {
    /// The resource placed by clusters of this spec.  Must not be `None`.
    pub kind: ResourceType,

    /// Energy yielded by one full cell, and restored on regrowth.
    pub value: u32,

    /// How many clusters to attempt.
    pub cluster_count: u32,

    /// Inclusive bounds for each cluster's randomly drawn target size.
    pub min_cluster_size: u32,
    pub max_cluster_size: u32,

    /// Base admission probability for a frontier neighbour, in `[0, 1]`.
    pub density: f64,

    /// Probability that a cluster grows as an elongated river strip instead
    /// of a blob.  Only honoured for `ResourceType::Water`.
    pub river_probability: f64,
}

impl ResourceSpec {
    /// Food patches: compact blobs of moderately valuable cells.
    pub fn food() -> Self {
        Self {
            kind:              ResourceType::Food,
            value:             5,
            cluster_count:     12,
            min_cluster_size:  8,
            max_cluster_size:  30,
            density:           0.75,
            river_probability: 0.0,
        }
    }

    /// Water: fewer, larger clusters, most of them river-shaped.
    pub fn water() -> Self {
        Self {
            kind:              ResourceType::Water,
            value:             3,
            cluster_count:     4,
            min_cluster_size:  10,
            max_cluster_size:  40,
            density:           0.85,
            river_probability: 0.6,
        }
    }
}

impl Default for ResourceSpec {
    fn default() -> Self {
        Self::food()
    }
}

// ── WorldConfig ───────────────────────────────────────────────────────────────

/// Grid dimensions, regrowth timing, and resource layout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    pub width:  u32,
    pub height: u32,

    /// When `false`, consumed cells stay `Consumed` forever.
    pub regrowth_enabled: bool,

    /// Inclusive bounds (ticks) for each regrowth duration draw.  The minimum
    /// must be at least 1.
    pub min_regrowth_time: u32,
    pub max_regrowth_time: u32,

    /// One entry per resource type, generated in order.
    pub resources: Vec<ResourceSpec>,

    /// Random draws allowed when looking for an empty cluster centre before
    /// the cluster is skipped.
    pub center_attempts: u32,
}

impl WorldConfig {
    /// The configured spec for `kind`, if any.
    pub fn spec_for(&self, kind: ResourceType) -> Option<&ResourceSpec> {
        self.resources.iter().find(|s| s.kind == kind)
    }

    /// Value of one full cell of `kind`; `0` for unconfigured kinds.
    pub fn value_of(&self, kind: ResourceType) -> u32 {
        self.spec_for(kind).map_or(0, |s| s.value)
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn validate(&self) -> FgResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FgError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(FgError::Config("grid dimensions exceed i32::MAX".into()));
        }
        if self.min_regrowth_time == 0 {
            return Err(FgError::Config("min_regrowth_time must be at least 1".into()));
        }
        if self.min_regrowth_time > self.max_regrowth_time {
            return Err(FgError::Config(format!(
                "min_regrowth_time {} exceeds max_regrowth_time {}",
                self.min_regrowth_time, self.max_regrowth_time
            )));
        }
        for spec in &self.resources {
            if !spec.kind.is_resource() {
                return Err(FgError::Config("resource spec kind must not be `none`".into()));
            }
            if spec.value == 0 {
                return Err(FgError::Config(format!("{} value must be positive", spec.kind)));
            }
            if spec.min_cluster_size == 0 || spec.min_cluster_size > spec.max_cluster_size {
                return Err(FgError::Config(format!(
                    "{} cluster size bounds {}..={} are invalid",
                    spec.kind, spec.min_cluster_size, spec.max_cluster_size
                )));
            }
            if !(0.0..=1.0).contains(&spec.density)
                || !(0.0..=1.0).contains(&spec.river_probability)
            {
                return Err(FgError::Config(format!(
                    "{} probabilities must lie in [0, 1]",
                    spec.kind
                )));
            }
        }
        for (i, spec) in self.resources.iter().enumerate() {
            if self.resources[..i].iter().any(|s| s.kind == spec.kind) {
                return Err(FgError::Config(format!("duplicate resource spec for {}", spec.kind)));
            }
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width:             50,
            height:            50,
            regrowth_enabled:  true,
            min_regrowth_time: 100,
            max_regrowth_time: 200,
            resources:         vec![ResourceSpec::food(), ResourceSpec::water()],
            center_attempts:   64,
        }
    }
}

// ── AgentConfig ───────────────────────────────────────────────────────────────

/// Energy budgets and movement parameters shared by every agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Survival reserve at spawn and its cap.
    pub initial_stored_energy: u32,
    pub max_stored_energy:     u32,

    /// Cap on energy carried between harvest and the nightly meal.
    pub max_collected_energy: u32,

    /// Movement energy at spawn and its cap.  Each move costs one unit.
    pub initial_sleep_energy: u32,
    pub max_sleep_energy:     u32,

    /// Movement energy regained per night tick spent asleep.
    pub sleep_recovery: u32,

    /// Energy eaten each night; any shortfall comes out of the reserve.
    pub daily_energy_requirement: u32,

    /// Steps an agent takes each day.  Also the day/night barrier quota.
    pub moves_per_day: u32,

    /// Chebyshev radius of the resource scan.
    pub sensing_radius: u32,

    /// Probability of stepping toward the closest sensed resource rather than
    /// a random sensed one.
    pub optimal_choice_probability: f64,
}

impl AgentConfig {
    pub fn validate(&self) -> FgResult<()> {
        if self.max_stored_energy == 0 || self.max_sleep_energy == 0 {
            return Err(FgError::Config("energy maxima must be positive".into()));
        }
        if self.initial_stored_energy > self.max_stored_energy
            || self.initial_sleep_energy > self.max_sleep_energy
        {
            return Err(FgError::Config("initial energy exceeds its maximum".into()));
        }
        if self.initial_sleep_energy == 0 {
            return Err(FgError::Config("initial_sleep_energy must be positive or agents spawn exhausted".into()));
        }
        if self.moves_per_day == 0 {
            return Err(FgError::Config("moves_per_day must be at least 1".into()));
        }
        if self.sleep_recovery == 0 {
            return Err(FgError::Config("sleep_recovery must be positive or agents never wake".into()));
        }
        if !(0.0..=1.0).contains(&self.optimal_choice_probability) {
            return Err(FgError::Config("optimal_choice_probability must lie in [0, 1]".into()));
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            initial_stored_energy:      20,
            max_stored_energy:          50,
            max_collected_energy:       200,
            initial_sleep_energy:       100,
            max_sleep_energy:           100,
            sleep_recovery:             10,
            daily_energy_requirement:   15,
            moves_per_day:              10,
            sensing_radius:             4,
            optimal_choice_probability: 0.8,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub world: WorldConfig,
    pub agent: AgentConfig,

    /// Number of agents spawned at the home base.
    pub agent_count: usize,

    /// Home base.  `None` places it at the grid centre.
    pub home: Option<GridPos>,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Upper bound on ticks for `Sim::run`.  `0` means run until extinction.
    pub max_ticks: u64,

    /// Agent snapshots are emitted every N ticks.  `0` disables them.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The effective home base.
    pub fn home_pos(&self) -> GridPos {
        self.home.unwrap_or_else(|| {
            GridPos::new((self.world.width / 2) as i32, (self.world.height / 2) as i32)
        })
    }

    /// Check every sub-config and cross-field constraint.
    pub fn validate(&self) -> FgResult<()> {
        self.world.validate()?;
        self.agent.validate()?;
        let span = self.world.width.max(self.world.height);
        if self.agent.sensing_radius > span {
            return Err(FgError::Config(format!(
                "sensing_radius {} exceeds the grid span {}",
                self.agent.sensing_radius, span
            )));
        }
        let home = self.home_pos();
        let in_grid = home.x >= 0
            && home.y >= 0
            && (home.x as u32) < self.world.width
            && (home.y as u32) < self.world.height;
        if !in_grid {
            return Err(FgError::OutOfBounds(home, self.world.width, self.world.height));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world:                 WorldConfig::default(),
            agent:                 AgentConfig::default(),
            agent_count:           4,
            home:                  None,
            seed:                  42,
            max_ticks:             0,
            output_interval_ticks: 1,
        }
    }
}
