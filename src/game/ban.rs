//! The mutating handle lent to the adversary for one turn.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::VertexId;
use crate::graph::{Graph, GraphView};

use super::record::Ban;
use super::roles::BanValidator;

/// Routes an adversary's ban requests through the ban validator.
///
/// The adversary can read the graph through `graph()` but cannot touch it
/// directly. Every accepted request is logged, in order, so the round can
/// notify the traveller once the adversary's turn is over.
///
/// Because `graph()` borrows the gate, an adversary that scans neighbours
/// collects its candidates first and requests bans afterwards.
pub struct BanGate<'a> {
    graph: &'a mut Graph,
    validator: &'a mut dyn BanValidator,
    applied: SmallVec<[Ban; 4]>,
}

impl<'a> BanGate<'a> {
    /// Open a gate over `graph`, guarded by `validator`.
    pub fn new(graph: &'a mut Graph, validator: &'a mut dyn BanValidator) -> Self {
        Self {
            graph,
            validator,
            applied: SmallVec::new(),
        }
    }

    /// Read-only view of the current graph.
    #[must_use]
    pub fn graph(&self) -> &dyn GraphView {
        &*self.graph
    }

    /// Ask the validator to remove the edge `(u, v)`.
    ///
    /// Returns whether the edge was removed.
    pub fn try_remove(&mut self, u: VertexId, v: VertexId) -> bool {
        let removed = self.validator.try_remove(&mut *self.graph, u, v);
        self.record(u, v, removed)
    }

    /// Same as `try_remove`, through the validator's alias entry point.
    pub fn request_ban_edge(&mut self, u: VertexId, v: VertexId) -> bool {
        let removed = self.validator.request_ban_edge(&mut *self.graph, u, v);
        self.record(u, v, removed)
    }

    /// Bans applied through this gate so far.
    #[must_use]
    pub fn applied(&self) -> &[Ban] {
        &self.applied
    }

    /// Close the gate and hand back the applied bans.
    #[must_use]
    pub fn into_applied(self) -> SmallVec<[Ban; 4]> {
        self.applied
    }

    fn record(&mut self, u: VertexId, v: VertexId, removed: bool) -> bool {
        if removed {
            debug_assert!(!self.graph.edge_exists(u, v), "ban validator reported a removal that did not happen");
            trace!(%u, %v, "edge banned");
            self.applied.push(Ban::new(u, v));
        } else {
            trace!(%u, %v, "ban rejected");
        }
        removed
    }
}
