//! Greedy shortest-path traveller.

use crate::core::{TravellerError, VertexId};
use crate::game::Traveller;
use crate::graph::GraphView;

use super::stats::TravellerStats;

/// Always takes the first hop of the current shortest path to the target.
///
/// Every turn is a fresh Dijkstra run, so bans are picked up immediately.
#[derive(Clone, Debug)]
pub struct ShortestPathTraveller {
    target: VertexId,
    stats: TravellerStats,
}

impl ShortestPathTraveller {
    pub fn new(target: VertexId) -> Self {
        Self {
            target,
            stats: TravellerStats::new(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> &TravellerStats {
        &self.stats
    }
}

impl Traveller for ShortestPathTraveller {
    fn make_step(
        &mut self,
        graph: &dyn GraphView,
        current: VertexId,
    ) -> Result<Option<VertexId>, TravellerError> {
        if current == self.target {
            return Ok(None);
        }

        let path = graph
            .shortest_path(current, self.target)
            .ok_or(TravellerError::UnreachableTarget {
                from: current,
                target: self.target,
            })?;
        self.stats.replans += 1;
        self.stats.forward_steps += 1;
        Ok(path.get(1))
    }

    fn notify_banned(&mut self, _u: VertexId, _v: VertexId) {
        self.stats.bans_observed += 1;
    }
}
