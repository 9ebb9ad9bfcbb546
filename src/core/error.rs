//! Error types.
//!
//! - `GraphError`: local failures of graph queries
//! - `BuildError`: rejected graph construction input
//! - `TravellerError`: a traveller strategy that cannot continue
//! - `RoundFailure`: the tagged terminal failure of a round

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{VertexId, Weight};

/// Graph query errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// No edge currently connects the two vertices.
    #[error("edge {0} -> {1} not found")]
    EdgeNotFound(VertexId, VertexId),

    /// Vertex is not part of the graph.
    #[error("unknown vertex {0}")]
    UnknownVertex(VertexId),
}

/// Graph construction errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Edge with a negative weight.
    #[error("edge {0} -> {1} has negative weight {2}")]
    NegativeWeight(VertexId, VertexId, Weight),

    /// Edge from a vertex to itself.
    #[error("self loop on {0}")]
    SelfLoop(VertexId),

    /// Vertex listed twice in one side.
    #[error("side {side} lists {vertex} more than once")]
    DuplicateSideVertex { side: char, vertex: VertexId },

    /// Side vertex that is not part of the graph.
    #[error("side {side} lists {vertex}, which is not a graph vertex")]
    UnknownSideVertex { side: char, vertex: VertexId },
}

/// Errors a traveller strategy can raise instead of a step.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TravellerError {
    /// No route to the target exists from `from`.
    #[error("target {target} is unreachable from {from}")]
    UnreachableTarget { from: VertexId, target: VertexId },

    /// The bounded re-evaluation loop ran out without producing a step.
    #[error("no step found at {at} after {retries} re-evaluations")]
    RetryLimitExceeded { at: VertexId, retries: usize },
}

/// Why a round ended without reaching the target.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundFailure {
    /// No path to the target exists when one was required.
    #[error("target {target} is unreachable from {from}")]
    UnreachableTarget { from: VertexId, target: VertexId },

    /// The step validator rejected the proposed move.
    #[error("invalid move {from} -> {to}")]
    InvalidMove { from: VertexId, to: VertexId },

    /// The traveller declined to move before reaching the target.
    #[error("traveller stuck at {at}")]
    StuckTraveller { at: VertexId },

    /// The round hit its iteration cap.
    #[error("iteration limit of {limit} exceeded")]
    IterationLimitExceeded { limit: usize },
}

impl From<TravellerError> for RoundFailure {
    fn from(err: TravellerError) -> Self {
        match err {
            TravellerError::UnreachableTarget { from, target } => {
                RoundFailure::UnreachableTarget { from, target }
            }
            TravellerError::RetryLimitExceeded { at, .. } => RoundFailure::StuckTraveller { at },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GraphError::EdgeNotFound(VertexId(1), VertexId(2));
        assert_eq!(err.to_string(), "edge V1 -> V2 not found");

        let err = BuildError::DuplicateSideVertex { side: 'A', vertex: VertexId(3) };
        assert_eq!(err.to_string(), "side A lists V3 more than once");
    }

    #[test]
    fn test_traveller_error_maps_to_failure() {
        let unreachable = TravellerError::UnreachableTarget { from: VertexId(1), target: VertexId(9) };
        assert_eq!(
            RoundFailure::from(unreachable),
            RoundFailure::UnreachableTarget { from: VertexId(1), target: VertexId(9) }
        );

        let exhausted = TravellerError::RetryLimitExceeded { at: VertexId(4), retries: 8 };
        assert_eq!(RoundFailure::from(exhausted), RoundFailure::StuckTraveller { at: VertexId(4) });
    }

    #[test]
    fn test_failure_serde() {
        let failure = RoundFailure::InvalidMove { from: VertexId(1), to: VertexId(2) };
        let json = serde_json::to_string(&failure).unwrap();
        let deserialized: RoundFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(failure, deserialized);
    }
}
