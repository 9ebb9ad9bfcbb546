//! Read-only graph contract.
//!
//! Every role receives a `&dyn GraphView`: it can query the current edges
//! but has no way to delete one. Shortest-path queries have default
//! implementations on top of `visit_neighbors`.

use crate::core::{GraphError, VertexId, Weight};

use super::algo;
use super::edge::{EdgeProps, GraphMode};
use super::path::Path;

/// Read-only view of a game graph.
///
/// ## Implementation Notes
///
/// - `visit_neighbors` must enumerate in a stable order for a fixed graph
///   state. Tie-break rules elsewhere depend on it.
/// - The visitor must not mutate the graph. Collect first, act afterwards.
/// - `side_a`/`side_b` never change after construction.
pub trait GraphView {
    /// Direction and weighting flags.
    fn mode(&self) -> GraphMode;

    /// Number of vertices (fixed for the graph's lifetime).
    fn vertex_count(&self) -> usize;

    /// Is `v` one of the graph's vertices?
    fn contains_vertex(&self, v: VertexId) -> bool;

    /// Does an edge from `u` to `v` currently exist?
    ///
    /// False for unknown vertices. Never fails.
    fn edge_exists(&self, u: VertexId, v: VertexId) -> bool;

    /// Properties of the edge from `u` to `v`.
    fn edge_properties(&self, u: VertexId, v: VertexId) -> Result<EdgeProps, GraphError>;

    /// Call `visitor(u, v, props)` once per vertex `v` currently adjacent to `u`.
    fn visit_neighbors(&self, u: VertexId, visitor: &mut dyn FnMut(VertexId, VertexId, EdgeProps));

    /// The ordered side A sequence.
    fn side_a(&self) -> &[VertexId];

    /// The ordered side B sequence.
    fn side_b(&self) -> &[VertexId];

    // === Convenience Methods ===

    /// Collect the current neighbours of `u` with their edge properties.
    fn neighbors(&self, u: VertexId) -> Vec<(VertexId, EdgeProps)> {
        let mut out = Vec::new();
        self.visit_neighbors(u, &mut |_, v, props| out.push((v, props)));
        out
    }

    /// Minimum-weight path from `u` to `v` over the current edges.
    ///
    /// Returns `None` when `v` cannot be reached.
    fn shortest_path(&self, u: VertexId, v: VertexId) -> Option<Path> {
        algo::shortest_path(self, u, v)
    }

    /// Weight of the minimum-weight path from `u` to `v`.
    fn shortest_path_length(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        algo::distance(self, u, v)
    }
}
