//! The collective day/night barrier.
//!
//! `TimeSystem` owns the shared phase flag and nothing else.  It never looks
//! at the world or the clock: a transition fires only when every living
//! participant has finished its part of the current phase.
//!
//! | Phase | Ends when (every living participant…) | Transition  |
//! |-------|---------------------------------------|-------------|
//! | Day   | has `moves_today >= moves_per_day`    | `Nightfall` |
//! | Night | is no longer sleeping                 | `Daybreak`  |
//!
//! With no living participants no transition can fire.

use std::fmt;

use fg_agent::Agent;

/// What the barrier needs to know about one participant.
///
/// Implemented for [`Agent`]; tests and alternative coordinators can supply
/// lighter types.
pub trait PhaseParticipant {
    fn is_alive(&self) -> bool;
    fn moves_today(&self) -> u32;
    fn is_sleeping(&self) -> bool;
    /// Movement energy as a fraction of its maximum, for night progress.
    fn sleep_fraction(&self) -> f32;
}

impl PhaseParticipant for Agent {
    fn is_alive(&self) -> bool {
        Agent::is_alive(self)
    }

    fn moves_today(&self) -> u32 {
        Agent::moves_today(self)
    }

    fn is_sleeping(&self) -> bool {
        Agent::is_sleeping(self)
    }

    fn sleep_fraction(&self) -> f32 {
        Agent::sleep_fraction(self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Day,
    Night,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Day   => "Day",
            Phase::Night => "Night",
        })
    }
}

/// A phase change reported by [`TimeSystem::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Day → night.
    Nightfall,
    /// Night → day.
    Daybreak,
}

impl Transition {
    /// The phase entered by this transition.
    pub fn phase(self) -> Phase {
        match self {
            Transition::Nightfall => Phase::Night,
            Transition::Daybreak  => Phase::Day,
        }
    }
}

/// Snapshot of the cycle counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleStats {
    /// Transitions of either kind so far.
    pub total_cycles: u32,
    /// Completed nights (daybreaks).
    pub days_passed:  u32,
    pub phase:        Phase,
}

#[derive(Clone, Debug)]
pub struct TimeSystem {
    is_day:        bool,
    day_count:     u32,
    time_cycles:   u32,
    moves_per_day: u32,
}

impl TimeSystem {
    /// Start on day 0 with the given daily move quota.
    pub fn new(moves_per_day: u32) -> Self {
        Self { is_day: true, day_count: 0, time_cycles: 0, moves_per_day }
    }

    #[inline]
    pub fn is_day(&self) -> bool {
        self.is_day
    }

    pub fn phase(&self) -> Phase {
        if self.is_day { Phase::Day } else { Phase::Night }
    }

    /// Number of daybreaks so far.
    #[inline]
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Number of transitions so far.
    #[inline]
    pub fn time_cycles(&self) -> u32 {
        self.time_cycles
    }

    pub fn moves_per_day(&self) -> u32 {
        self.moves_per_day
    }

    /// Check the barrier for the current phase and flip it if every living
    /// participant is done.
    pub fn update<P: PhaseParticipant>(&mut self, participants: &[P]) -> Option<Transition> {
        let mut living = participants.iter().filter(|p| p.is_alive()).peekable();
        living.peek()?;

        if self.is_day {
            let quota = self.moves_per_day;
            if !living.all(|p| p.moves_today() >= quota) {
                return None;
            }
            self.is_day       = false;
            self.time_cycles += 1;
            Some(Transition::Nightfall)
        } else {
            if !living.all(|p| !p.is_sleeping()) {
                return None;
            }
            self.is_day       = true;
            self.time_cycles += 1;
            self.day_count   += 1;
            Some(Transition::Daybreak)
        }
    }

    /// How far the current phase has progressed, in `[0, 1]`.
    ///
    /// By day: mean share of the move quota spent by living participants.
    /// By night: mean sleep-energy fraction.  `0.0` with nobody alive.
    pub fn day_progress<P: PhaseParticipant>(&self, participants: &[P]) -> f32 {
        let (sum, n) = participants
            .iter()
            .filter(|p| p.is_alive())
            .fold((0.0f32, 0u32), |(sum, n), p| {
                let v = if self.is_day {
                    p.moves_today() as f32 / self.moves_per_day.max(1) as f32
                } else {
                    p.sleep_fraction()
                };
                (sum + v, n + 1)
            });
        if n == 0 { 0.0 } else { (sum / n as f32).min(1.0) }
    }

    /// `"Day n"` or `"Night n"`.
    pub fn description(&self) -> String {
        format!("{} {}", self.phase(), self.day_count)
    }

    pub fn cycle_stats(&self) -> CycleStats {
        CycleStats {
            total_cycles: self.time_cycles,
            days_passed:  self.day_count,
            phase:        self.phase(),
        }
    }
}
