//! Edge records and graph mode flags.

use serde::{Deserialize, Serialize};

use crate::core::{VertexId, Weight};

/// Whether edges are one-way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `(u, v)` only allows moving from `u` to `v`.
    Directed,
    /// `(u, v)` and `(v, u)` are the same edge.
    Undirected,
}

/// Whether edges carry their own weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weighting {
    /// Weights come from the builder.
    Weighted,
    /// Every edge weighs 1.
    Unweighted,
}

/// Direction and weighting of a graph, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphMode {
    pub direction: Direction,
    pub weighting: Weighting,
}

impl GraphMode {
    pub const UNDIRECTED: Self = Self::new(Direction::Undirected, Weighting::Unweighted);
    pub const UNDIRECTED_WEIGHTED: Self = Self::new(Direction::Undirected, Weighting::Weighted);
    pub const DIRECTED: Self = Self::new(Direction::Directed, Weighting::Unweighted);
    pub const DIRECTED_WEIGHTED: Self = Self::new(Direction::Directed, Weighting::Weighted);

    #[must_use]
    pub const fn new(direction: Direction, weighting: Weighting) -> Self {
        Self { direction, weighting }
    }

    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self.direction, Direction::Directed)
    }

    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(self.weighting, Weighting::Weighted)
    }
}

impl Default for GraphMode {
    fn default() -> Self {
        Self::UNDIRECTED
    }
}

/// Properties attached to an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeProps {
    pub weight: Weight,
}

impl EdgeProps {
    #[must_use]
    pub const fn weighted(weight: Weight) -> Self {
        Self { weight }
    }
}

impl Default for EdgeProps {
    fn default() -> Self {
        Self { weight: 1 }
    }
}

/// An edge as handed to the builder or reported by edge enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
    pub props: EdgeProps,
}

impl Edge {
    #[must_use]
    pub const fn new(u: VertexId, v: VertexId, props: EdgeProps) -> Self {
        Self { u, v, props }
    }

    /// Does this edge join `a` and `b`, in either orientation?
    #[must_use]
    pub fn joins(&self, a: VertexId, b: VertexId) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }
}
