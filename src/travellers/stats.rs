//! Traveller statistics for diagnostics and tests.

use serde::{Deserialize, Serialize};

/// Counters kept by a traveller over its lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravellerStats {
    /// Moves along the plan towards the target.
    pub forward_steps: u32,

    /// Moves retracing the plan during rollback.
    pub backward_steps: u32,

    /// Full replans (budget exhausted and unwound, or every turn for the
    /// greedy traveller).
    pub replans: u32,

    /// Replans at the current vertex that keep budget and distance.
    pub local_replans: u32,

    /// Switches to a better side crossing.
    pub resourcings: u32,

    /// Ban notifications received.
    pub bans_observed: u32,
}

impl TravellerStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total moves made.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.forward_steps + self.backward_steps
    }

    /// Share of moves that went backwards.
    #[must_use]
    pub fn backtrack_ratio(&self) -> f64 {
        if self.moves() == 0 {
            0.0
        } else {
            self.backward_steps as f64 / self.moves() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_and_ratio() {
        let mut stats = TravellerStats::new();
        assert_eq!(stats.backtrack_ratio(), 0.0);

        stats.forward_steps = 3;
        stats.backward_steps = 1;
        assert_eq!(stats.moves(), 4);
        assert!((stats.backtrack_ratio() - 0.25).abs() < 1e-9);

        stats.reset();
        assert_eq!(stats, TravellerStats::default());
    }
}
