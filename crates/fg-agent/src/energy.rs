//! Clamped energy counters.

/// A non-negative quantity with a hard ceiling.
///
/// Every mutation saturates at `0` and `max`, so `0 <= value <= max` holds
/// after any sequence of operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyPool {
    value: u32,
    max:   u32,
}

impl EnergyPool {
    /// A pool holding `initial`, clamped to `max`.
    pub fn new(initial: u32, max: u32) -> Self {
        Self { value: initial.min(max), max }
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }

    /// `value / max`, or `0.0` for a zero-capacity pool.
    pub fn fraction(&self) -> f32 {
        if self.max == 0 { 0.0 } else { self.value as f32 / self.max as f32 }
    }

    /// Add up to `amount`; returns how much actually fit.
    pub fn add(&mut self, amount: u32) -> u32 {
        let before = self.value;
        self.value = self.value.saturating_add(amount).min(self.max);
        self.value - before
    }

    /// Remove up to `amount`; returns how much was actually removed.
    pub fn sub(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.value);
        self.value -= taken;
        taken
    }
}
