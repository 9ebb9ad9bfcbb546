//! Canonical step and ban validators.

use crate::core::VertexId;
use crate::graph::{Graph, GraphView};

use super::roles::{BanValidator, StepValidator};

/// A move is legal iff its edge exists right now.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeStepValidator;

impl StepValidator for EdgeStepValidator {
    fn validate_step(&self, graph: &dyn GraphView, u: VertexId, v: VertexId) -> bool {
        graph.edge_exists(u, v)
    }
}

/// Accepts every ban of an existing edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeBanValidator;

impl BanValidator for EdgeBanValidator {
    fn try_remove(&mut self, graph: &mut Graph, u: VertexId, v: VertexId) -> bool {
        graph.remove_edge(u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn v(id: u32) -> VertexId {
        VertexId(id)
    }

    #[test]
    fn test_step_validator_tracks_current_graph() {
        let mut graph = GraphBuilder::undirected().with_edge(v(1), v(2)).build().unwrap();
        let validator = EdgeStepValidator;

        assert!(validator.validate_step(&graph, v(2), v(1)));
        assert!(!validator.validate_step(&graph, v(1), v(3)));

        graph.remove_edge(v(1), v(2));
        assert!(!validator.validate_step(&graph, v(1), v(2)));
    }

    #[test]
    fn test_ban_validator_is_idempotent() {
        let mut graph = GraphBuilder::undirected().with_edge(v(1), v(2)).build().unwrap();
        let mut validator = EdgeBanValidator;

        assert!(validator.request_ban_edge(&mut graph, v(1), v(2)));
        assert!(!validator.try_remove(&mut graph, v(1), v(2)));
        assert!(!validator.try_remove(&mut graph, v(5), v(6)));
    }
}
