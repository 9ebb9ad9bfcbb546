//! Round and traveller configuration.
//!
//! - `RoundConfig`: Safety limits and shortcuts for the turn protocol
//! - `TravellerConfig`: Bounds for the adaptive traveller's retry loop

use serde::{Deserialize, Serialize};

/// Configuration for a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Hard cap on turns. `None` derives the cap from the vertex count.
    pub max_iterations: Option<usize>,

    /// Turns allowed per vertex when `max_iterations` is `None`.
    pub iterations_per_vertex: usize,

    /// Lower bound for the derived cap, so tiny graphs still get room to
    /// roll back and replan a few times.
    pub min_iterations: usize,

    /// Fail with `UnreachableTarget` before the first turn when the target
    /// cannot be reached in the initial graph.
    pub fail_fast_unreachable: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_iterations: None,
            iterations_per_vertex: 32,
            min_iterations: 64,
            fail_fast_unreachable: true,
        }
    }
}

impl RoundConfig {
    /// Create a config with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Set the per-vertex allowance used for the derived cap.
    #[must_use]
    pub fn with_iterations_per_vertex(mut self, per_vertex: usize) -> Self {
        self.iterations_per_vertex = per_vertex;
        self
    }

    /// Enable or disable the unreachable-target pre-check.
    #[must_use]
    pub fn with_fail_fast_unreachable(mut self, enabled: bool) -> Self {
        self.fail_fast_unreachable = enabled;
        self
    }

    /// The iteration cap for a graph with `vertex_count` vertices.
    #[must_use]
    pub fn iteration_limit(&self, vertex_count: usize) -> usize {
        self.max_iterations.unwrap_or_else(|| {
            self.iterations_per_vertex
                .saturating_mul(vertex_count)
                .max(self.min_iterations)
        })
    }
}

/// Configuration for the adaptive traveller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravellerConfig {
    /// Re-evaluations allowed inside one `make_step` call.
    pub max_retries: usize,
}

impl Default for TravellerConfig {
    fn default() -> Self {
        Self { max_retries: 8 }
    }
}

impl TravellerConfig {
    /// Set the retry cap.
    #[must_use]
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }
}
