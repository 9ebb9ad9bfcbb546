//! The mutable game graph.

use std::sync::Arc;

use im::OrdMap;

use crate::core::{GraphError, VertexId};

use super::edge::{Edge, EdgeProps, GraphMode};
use super::view::GraphView;

type Adjacency = OrdMap<VertexId, OrdMap<VertexId, EdgeProps>>;

/// Adjacency structure over a fixed vertex set.
///
/// Every vertex has an entry in the outer map, even when all of its edges
/// are gone, so the vertex set never changes. Undirected edges are stored in
/// both directions and always removed together.
#[derive(Clone, Debug)]
pub struct Graph {
    mode: GraphMode,
    adjacency: Adjacency,
    edge_count: usize,
    side_a: Arc<[VertexId]>,
    side_b: Arc<[VertexId]>,
}

impl Graph {
    pub(crate) fn from_parts(
        mode: GraphMode,
        adjacency: Adjacency,
        side_a: Vec<VertexId>,
        side_b: Vec<VertexId>,
    ) -> Self {
        let directed_entries: usize = adjacency.values().map(OrdMap::len).sum();
        let edge_count = if mode.is_directed() {
            directed_entries
        } else {
            directed_entries / 2
        };

        Self {
            mode,
            adjacency,
            edge_count,
            side_a: side_a.into(),
            side_b: side_b.into(),
        }
    }

    /// Permanently delete the edge from `u` to `v`.
    ///
    /// Returns `false` (and changes nothing) when there is no such edge.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let removed = self
            .adjacency
            .get_mut(&u)
            .is_some_and(|neighbors| neighbors.remove(&v).is_some());
        if !removed {
            return false;
        }

        if !self.mode.is_directed() {
            if let Some(neighbors) = self.adjacency.get_mut(&v) {
                neighbors.remove(&u);
            }
        }
        self.edge_count -= 1;
        true
    }

    /// Number of edges currently present.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Call `visitor(u, v, props)` once per current edge.
    ///
    /// Undirected edges are reported once, with `u < v`.
    pub fn visit_all_edges(&self, mut visitor: impl FnMut(VertexId, VertexId, EdgeProps)) {
        for (&u, neighbors) in &self.adjacency {
            for (&v, &props) in neighbors {
                if self.mode.is_directed() || u < v {
                    visitor(u, v, props);
                }
            }
        }
    }

    /// Collect every current edge, in the order `visit_all_edges` reports them.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::with_capacity(self.edge_count);
        self.visit_all_edges(|u, v, props| out.push(Edge::new(u, v, props)));
        out
    }
}

impl GraphView for Graph {
    fn mode(&self) -> GraphMode {
        self.mode
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    fn edge_exists(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency
            .get(&u)
            .is_some_and(|neighbors| neighbors.contains_key(&v))
    }

    fn edge_properties(&self, u: VertexId, v: VertexId) -> Result<EdgeProps, GraphError> {
        self.adjacency
            .get(&u)
            .and_then(|neighbors| neighbors.get(&v))
            .copied()
            .ok_or(GraphError::EdgeNotFound(u, v))
    }

    fn visit_neighbors(&self, u: VertexId, visitor: &mut dyn FnMut(VertexId, VertexId, EdgeProps)) {
        if let Some(neighbors) = self.adjacency.get(&u) {
            for (&v, &props) in neighbors {
                visitor(u, v, props);
            }
        }
    }

    fn side_a(&self) -> &[VertexId] {
        &self.side_a
    }

    fn side_b(&self) -> &[VertexId] {
        &self.side_b
    }
}
