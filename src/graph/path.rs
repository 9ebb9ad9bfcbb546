//! Vertex paths with cumulative weights.

use serde::{Deserialize, Serialize};

use crate::core::{GraphError, VertexId, Weight};

use super::view::GraphView;

/// An ordered walk through the graph.
///
/// Alongside the vertices the path keeps the cumulative weight up to each
/// vertex, so `remaining_from(i)` is O(1). The weights are those of the edges
/// when the path was built; later deletions do not change them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    vertices: Vec<VertexId>,
    /// `prefix[i]` is the weight walked from `vertices[0]` to `vertices[i]`.
    prefix: Vec<Weight>,
}

impl Path {
    /// A path that starts and ends at `v`.
    #[must_use]
    pub fn trivial(v: VertexId) -> Self {
        Self {
            vertices: vec![v],
            prefix: vec![0],
        }
    }

    /// Build a path from `vertices`, reading each hop's weight from `graph`.
    ///
    /// Fails with `UnknownVertex` when the walk starts off the graph, and with
    /// `EdgeNotFound` on the first hop that is not a current edge.
    pub fn from_vertices<G: GraphView + ?Sized>(
        graph: &G,
        vertices: &[VertexId],
    ) -> Result<Self, GraphError> {
        let Some((&first, rest)) = vertices.split_first() else {
            return Ok(Self {
                vertices: Vec::new(),
                prefix: Vec::new(),
            });
        };

        if !graph.contains_vertex(first) {
            return Err(GraphError::UnknownVertex(first));
        }

        let mut path = Self::trivial(first);
        for &next in rest {
            let from = path.vertices[path.vertices.len() - 1];
            let props = graph.edge_properties(from, next)?;
            path.push(next, props.weight);
        }
        Ok(path)
    }

    /// Append `v`, reached over an edge of weight `weight`.
    pub(crate) fn push(&mut self, v: VertexId, weight: Weight) {
        let walked = self.prefix.last().copied().unwrap_or(0);
        self.vertices.push(v);
        self.prefix.push(walked.saturating_add(weight));
    }

    /// Return a new path that starts at `v` and joins this one over an edge
    /// of weight `weight`.
    #[must_use]
    pub fn prepended(&self, v: VertexId, weight: Weight) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.push(v);
        vertices.extend_from_slice(&self.vertices);

        let mut prefix = Vec::with_capacity(self.prefix.len() + 1);
        prefix.push(0);
        prefix.extend(self.prefix.iter().map(|w| w.saturating_add(weight)));

        Self { vertices, prefix }
    }

    /// The vertices in walk order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at position `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<VertexId> {
        self.vertices.get(index).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Total weight of the path.
    #[must_use]
    pub fn weight(&self) -> Weight {
        self.prefix.last().copied().unwrap_or(0)
    }

    /// Weight still to walk from position `index` to the end.
    ///
    /// Positions past the end have nothing left to walk.
    #[must_use]
    pub fn remaining_from(&self, index: usize) -> Weight {
        self.prefix
            .get(index)
            .map_or(0, |walked| self.weight() - walked)
    }
}

impl From<Path> for Vec<VertexId> {
    fn from(path: Path) -> Self {
        path.vertices
    }
}
