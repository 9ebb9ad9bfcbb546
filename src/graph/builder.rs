//! Graph construction.
//!
//! The builder collects vertices, edges and the two side sequences, then
//! validates them once in `build`. After that the graph's vertex set and
//! sides are frozen and its edges can only be removed.

use im::OrdMap;
use rustc_hash::FxHashSet;

use crate::core::{BuildError, VertexId, Weight};

use super::dynamic::Graph;
use super::edge::{Edge, EdgeProps, GraphMode};

/// Builder for a `Graph`.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    mode: GraphMode,
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
    side_a: Vec<VertexId>,
    side_b: Vec<VertexId>,
}

impl GraphBuilder {
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn undirected() -> Self {
        Self::new(GraphMode::UNDIRECTED)
    }

    pub fn undirected_weighted() -> Self {
        Self::new(GraphMode::UNDIRECTED_WEIGHTED)
    }

    pub fn directed() -> Self {
        Self::new(GraphMode::DIRECTED)
    }

    pub fn directed_weighted() -> Self {
        Self::new(GraphMode::DIRECTED_WEIGHTED)
    }

    /// Add an isolated vertex (vertices on edges are added implicitly).
    #[must_use]
    pub fn with_vertex(mut self, v: VertexId) -> Self {
        self.vertices.push(v);
        self
    }

    /// Add an edge of weight 1.
    #[must_use]
    pub fn with_edge(self, u: VertexId, v: VertexId) -> Self {
        self.with_weighted_edge(u, v, 1)
    }

    /// Add an edge. The weight is ignored in unweighted mode.
    ///
    /// Adding the same pair twice keeps the last weight.
    #[must_use]
    pub fn with_weighted_edge(mut self, u: VertexId, v: VertexId, weight: Weight) -> Self {
        let weight = if self.mode.is_weighted() { weight } else { 1 };
        self.edges.push(Edge::new(u, v, EdgeProps::weighted(weight)));
        self
    }

    /// Set the ordered side A sequence.
    #[must_use]
    pub fn with_side_a(mut self, side: impl IntoIterator<Item = VertexId>) -> Self {
        self.side_a = side.into_iter().collect();
        self
    }

    /// Set the ordered side B sequence.
    #[must_use]
    pub fn with_side_b(mut self, side: impl IntoIterator<Item = VertexId>) -> Self {
        self.side_b = side.into_iter().collect();
        self
    }

    /// The graph mode this builder produces.
    #[must_use]
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Validate and freeze the graph.
    pub fn build(self) -> Result<Graph, BuildError> {
        let mut adjacency: OrdMap<VertexId, OrdMap<VertexId, EdgeProps>> = OrdMap::new();

        for &v in &self.vertices {
            adjacency.entry(v).or_insert_with(OrdMap::new);
        }

        for edge in &self.edges {
            if edge.u == edge.v {
                return Err(BuildError::SelfLoop(edge.u));
            }
            if edge.props.weight < 0 {
                return Err(BuildError::NegativeWeight(edge.u, edge.v, edge.props.weight));
            }

            adjacency
                .entry(edge.u)
                .or_insert_with(OrdMap::new)
                .insert(edge.v, edge.props);
            let reverse = adjacency.entry(edge.v).or_insert_with(OrdMap::new);
            if !self.mode.is_directed() {
                reverse.insert(edge.u, edge.props);
            }
        }

        for (name, side) in [('A', &self.side_a), ('B', &self.side_b)] {
            let mut seen = FxHashSet::default();
            for &vertex in side {
                if !seen.insert(vertex) {
                    return Err(BuildError::DuplicateSideVertex { side: name, vertex });
                }
                if !adjacency.contains_key(&vertex) {
                    return Err(BuildError::UnknownSideVertex { side: name, vertex });
                }
            }
        }

        Ok(Graph::from_parts(self.mode, adjacency, self.side_a, self.side_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphView;

    fn v(id: u32) -> VertexId {
        VertexId(id)
    }

    #[test]
    fn test_build_undirected_is_symmetric() {
        let graph = GraphBuilder::undirected()
            .with_edge(v(0), v(1))
            .with_edge(v(1), v(2))
            .with_edge(v(2), v(0))
            .build()
            .unwrap();

        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            assert!(graph.edge_exists(v(a), v(b)));
            assert!(graph.edge_exists(v(b), v(a)));
        }
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_build_directed_is_one_way() {
        let graph = GraphBuilder::directed().with_edge(v(0), v(1)).build().unwrap();

        assert!(graph.edge_exists(v(0), v(1)));
        assert!(!graph.edge_exists(v(1), v(0)));
        assert!(graph.contains_vertex(v(1)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_unweighted_ignores_weights() {
        let graph = GraphBuilder::undirected()
            .with_weighted_edge(v(0), v(1), 40)
            .build()
            .unwrap();
        assert_eq!(graph.edge_properties(v(1), v(0)).unwrap().weight, 1);
    }

    #[test]
    fn test_repeated_edge_keeps_last_weight() {
        let graph = GraphBuilder::undirected_weighted()
            .with_weighted_edge(v(0), v(1), 4)
            .with_weighted_edge(v(1), v(0), 9)
            .build()
            .unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_properties(v(0), v(1)).unwrap().weight, 9);
    }

    #[test]
    fn test_rejects_bad_input() {
        let self_loop = GraphBuilder::undirected().with_edge(v(1), v(1)).build();
        assert_eq!(self_loop.unwrap_err(), BuildError::SelfLoop(v(1)));

        let negative = GraphBuilder::undirected_weighted()
            .with_weighted_edge(v(1), v(2), -3)
            .build();
        assert_eq!(negative.unwrap_err(), BuildError::NegativeWeight(v(1), v(2), -3));

        let duplicate = GraphBuilder::undirected()
            .with_edge(v(1), v(2))
            .with_side_a([v(1), v(2), v(1)])
            .build();
        assert_eq!(
            duplicate.unwrap_err(),
            BuildError::DuplicateSideVertex { side: 'A', vertex: v(1) }
        );

        let unknown = GraphBuilder::undirected()
            .with_edge(v(1), v(2))
            .with_side_b([v(1), v(7)])
            .build();
        assert_eq!(
            unknown.unwrap_err(),
            BuildError::UnknownSideVertex { side: 'B', vertex: v(7) }
        );
    }

    #[test]
    fn test_sides_are_kept_in_order() {
        let graph = GraphBuilder::undirected()
            .with_edge(v(1), v(2))
            .with_edge(v(2), v(9))
            .with_edge(v(1), v(6))
            .with_edge(v(6), v(9))
            .with_side_a([v(1), v(2), v(9)])
            .with_side_b([v(1), v(6), v(9)])
            .build()
            .unwrap();

        assert_eq!(graph.side_a(), &[v(1), v(2), v(9)]);
        assert_eq!(graph.side_b(), &[v(1), v(6), v(9)]);
    }
}
