//! Budget-doubling traveller with side-crossing resourcing.
//!
//! The traveller walks a shortest-path plan while the distance walked since
//! the last replan stays under a budget. Once the budget is spent it retraces
//! the plan back to where it was computed, replans from there and doubles the
//! budget. Along the way it watches for edges joining the unconsumed parts of
//! the graph's two sides; a crossing that leads to the target more cheaply
//! than the current plan becomes the new logical source.
//!
//! # Usage
//!
//! ```
//! use rust_ctp::core::{TravellerConfig, VertexId};
//! use rust_ctp::game::Traveller;
//! use rust_ctp::graph::GraphBuilder;
//! use rust_ctp::travellers::AdaptiveTraveller;
//!
//! let v = VertexId;
//! let graph = GraphBuilder::undirected()
//!     .with_edge(v(1), v(2))
//!     .with_edge(v(2), v(3))
//!     .build()
//!     .unwrap();
//!
//! let mut traveller = AdaptiveTraveller::new(&graph, v(1), v(3), TravellerConfig::default()).unwrap();
//! assert_eq!(traveller.make_step(&graph, v(1)), Ok(Some(v(2))));
//! // Budget 1 is spent: walk back and replan with budget 2
//! assert_eq!(traveller.make_step(&graph, v(2)), Ok(Some(v(1))));
//! assert_eq!(traveller.make_step(&graph, v(1)), Ok(Some(v(2))));
//! assert_eq!(traveller.budget(), 2);
//! ```

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{TravellerConfig, TravellerError, VertexId, Weight};
use crate::game::Traveller;
use crate::graph::{GraphView, Path};

use super::stats::TravellerStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    A,
    B,
}

/// A crossing neighbour and its distance to the target.
#[derive(Clone, Copy, Debug)]
struct Crossing {
    vertex: VertexId,
    distance: Weight,
}

/// The adaptive traveller.
///
/// Invariant: between calls the vertex the traveller stands on is
/// `plan[plan_cursor]`.
#[derive(Clone, Debug)]
pub struct AdaptiveTraveller {
    config: TravellerConfig,
    logical_source: VertexId,
    target: VertexId,
    plan: Path,
    plan_cursor: usize,
    distance_since_replan: Weight,
    budget: Weight,
    rollback: bool,
    /// Position of each vertex in side A / side B.
    side_a: FxHashMap<VertexId, usize>,
    side_b: FxHashMap<VertexId, usize>,
    /// Vertices before these offsets are consumed.
    cursor_a: usize,
    cursor_b: usize,
    budget_history: Vec<Weight>,
    stats: TravellerStats,
}

impl AdaptiveTraveller {
    /// Plan the initial route from `source` to `target`.
    ///
    /// Fails with `UnreachableTarget` when the graph has no such route.
    pub fn new(
        graph: &dyn GraphView,
        source: VertexId,
        target: VertexId,
        config: TravellerConfig,
    ) -> Result<Self, TravellerError> {
        let plan = graph
            .shortest_path(source, target)
            .ok_or(TravellerError::UnreachableTarget { from: source, target })?;
        debug!(%source, %target, length = plan.weight(), "initial plan");

        let index = |side: &[VertexId]| -> FxHashMap<VertexId, usize> {
            side.iter().enumerate().map(|(i, &v)| (v, i)).collect()
        };

        Ok(Self {
            config,
            logical_source: source,
            target,
            plan,
            plan_cursor: 0,
            distance_since_replan: 0,
            budget: 1,
            rollback: false,
            side_a: index(graph.side_a()),
            side_b: index(graph.side_b()),
            cursor_a: 0,
            cursor_b: 0,
            budget_history: vec![1],
            stats: TravellerStats::new(),
        })
    }

    /// Current distance budget.
    #[must_use]
    pub fn budget(&self) -> Weight {
        self.budget
    }

    /// Every budget value taken so far, in order.
    ///
    /// Resourcing restarts the sequence at 1.
    #[must_use]
    pub fn budget_history(&self) -> &[Weight] {
        &self.budget_history
    }

    #[must_use]
    pub fn plan(&self) -> &Path {
        &self.plan
    }

    #[must_use]
    pub fn plan_cursor(&self) -> usize {
        self.plan_cursor
    }

    /// Consumed prefix lengths of side A and side B.
    #[must_use]
    pub fn side_cursors(&self) -> (usize, usize) {
        (self.cursor_a, self.cursor_b)
    }

    /// The vertex the current plan was rebased on by the last resourcing.
    #[must_use]
    pub fn logical_source(&self) -> VertexId {
        self.logical_source
    }

    #[must_use]
    pub fn distance_since_replan(&self) -> Weight {
        self.distance_since_replan
    }

    #[must_use]
    pub fn is_rolling_back(&self) -> bool {
        self.rollback
    }

    #[must_use]
    pub fn stats(&self) -> &TravellerStats {
        &self.stats
    }

    // === Side bookkeeping ===

    /// Which unconsumed side `x` belongs to, with its position there.
    ///
    /// A vertex on both sides (or neither) belongs to no side.
    fn side_of(&self, x: VertexId) -> Option<(Side, usize)> {
        let in_a = self.side_a.get(&x).copied().filter(|&i| i >= self.cursor_a);
        let in_b = self.side_b.get(&x).copied().filter(|&i| i >= self.cursor_b);
        match (in_a, in_b) {
            (Some(i), None) => Some((Side::A, i)),
            (None, Some(i)) => Some((Side::B, i)),
            _ => None,
        }
    }

    fn consume(&mut self, x: VertexId) {
        match self.side_of(x) {
            Some((Side::A, i)) => self.cursor_a = self.cursor_a.max(i + 1),
            Some((Side::B, i)) => self.cursor_b = self.cursor_b.max(i + 1),
            None => {}
        }
    }

    fn is_crossing(&self, graph: &dyn GraphView, u: VertexId, v: VertexId) -> bool {
        let excluded = [self.logical_source, self.target];
        if excluded.contains(&u) || excluded.contains(&v) || !graph.edge_exists(u, v) {
            return false;
        }
        match (self.side_of(u), self.side_of(v)) {
            (Some((a, _)), Some((b, _))) => a != b,
            _ => false,
        }
    }

    /// The crossing neighbour of `u` closest to the target.
    fn best_crossing(&self, graph: &dyn GraphView, u: VertexId) -> Option<Crossing> {
        let mut neighbors: SmallVec<[VertexId; 8]> = SmallVec::new();
        graph.visit_neighbors(u, &mut |_, v, _| neighbors.push(v));

        neighbors
            .into_iter()
            .filter(|&v| self.is_crossing(graph, u, v))
            .filter_map(|v| {
                graph
                    .shortest_path_length(v, self.target)
                    .map(|distance| Crossing { vertex: v, distance })
            })
            .min_by_key(|c| (c.distance, c.vertex))
    }

    // === Plan maintenance ===

    fn plan_from(&self, graph: &dyn GraphView, u: VertexId) -> Result<Path, TravellerError> {
        graph
            .shortest_path(u, self.target)
            .ok_or(TravellerError::UnreachableTarget { from: u, target: self.target })
    }

    /// Rollback finished at `u`: plan afresh with twice the budget.
    fn replan(&mut self, graph: &dyn GraphView, u: VertexId) -> Result<(), TravellerError> {
        self.rollback = false;
        self.plan = self.plan_from(graph, u)?;
        self.plan_cursor = 0;
        self.budget = self.budget.saturating_mul(2);
        self.distance_since_replan = 0;
        self.budget_history.push(self.budget);
        self.stats.replans += 1;
        debug!(at = %u, budget = self.budget, "replanned");
        Ok(())
    }

    /// Planned edge at `u` is gone: route around it without touching the budget.
    fn local_replan(&mut self, graph: &dyn GraphView, u: VertexId) -> Result<(), TravellerError> {
        self.plan = self.plan_from(graph, u)?;
        self.plan_cursor = 0;
        self.stats.local_replans += 1;
        trace!(at = %u, "local replan");
        Ok(())
    }

    /// Rebase on `crossing` and cross over to it.
    ///
    /// The crossing hop is the step returned; the new plan starts at the
    /// crossing vertex, so a later rollback stops there.
    fn resource(&mut self, graph: &dyn GraphView, u: VertexId, crossing: Crossing) -> Option<VertexId> {
        if !graph.edge_exists(u, crossing.vertex) {
            return None;
        }
        let plan = graph.shortest_path(crossing.vertex, self.target)?;

        self.consume(u);
        self.consume(crossing.vertex);
        self.logical_source = crossing.vertex;
        self.plan = plan;
        self.plan_cursor = 0;
        self.distance_since_replan = 0;
        self.budget = 1;
        self.budget_history.push(1);
        self.stats.resourcings += 1;
        self.stats.forward_steps += 1;
        debug!(
            at = %u,
            via = %crossing.vertex,
            remaining = crossing.distance,
            "resourced on side crossing"
        );
        Some(crossing.vertex)
    }

    /// Retrace one edge of the plan. `None` once back at the plan's start,
    /// or when the edge to retrace has been banned.
    fn step_back(&mut self, graph: &dyn GraphView, u: VertexId) -> Option<VertexId> {
        let back = self.plan.get(self.plan_cursor.checked_sub(1)?)?;
        let props = graph.edge_properties(u, back).ok()?;

        self.plan_cursor -= 1;
        self.distance_since_replan = self.distance_since_replan.saturating_add(props.weight);
        self.stats.backward_steps += 1;
        Some(back)
    }

    /// One evaluation pass. `Ok(None)` asks the caller to evaluate again.
    fn evaluate(&mut self, graph: &dyn GraphView, u: VertexId) -> Result<Option<VertexId>, TravellerError> {
        if self.distance_since_replan >= self.budget && !self.rollback {
            trace!(at = %u, budget = self.budget, "budget spent, rolling back");
            self.rollback = true;
        }

        if self.rollback {
            if let Some(back) = self.step_back(graph, u) {
                return Ok(Some(back));
            }
            self.replan(graph, u)?;
        }

        let crossing = self.best_crossing(graph, u);
        if let Some(crossing) = crossing {
            if crossing.distance < self.plan.remaining_from(self.plan_cursor) {
                if let Some(next) = self.resource(graph, u, crossing) {
                    return Ok(Some(next));
                }
            }
        }

        if let Some(next) = self.plan.get(self.plan_cursor + 1) {
            if let Ok(props) = graph.edge_properties(u, next) {
                self.distance_since_replan = self.distance_since_replan.saturating_add(props.weight);
                self.plan_cursor += 1;
                self.stats.forward_steps += 1;
                return Ok(Some(next));
            }
        }

        if crossing.is_none() {
            trace!(at = %u, "planned edge gone, rolling back");
            self.rollback = true;
        } else {
            self.local_replan(graph, u)?;
        }
        Ok(None)
    }
}

impl Traveller for AdaptiveTraveller {
    fn make_step(
        &mut self,
        graph: &dyn GraphView,
        current: VertexId,
    ) -> Result<Option<VertexId>, TravellerError> {
        if current == self.target {
            return Ok(None);
        }

        // Moved somewhere the plan does not know about
        if self.plan.get(self.plan_cursor) != Some(current) {
            self.rollback = false;
            self.local_replan(graph, current)?;
        }

        for _ in 0..self.config.max_retries {
            if let Some(next) = self.evaluate(graph, current)? {
                return Ok(Some(next));
            }
        }
        Err(TravellerError::RetryLimitExceeded {
            at: current,
            retries: self.config.max_retries,
        })
    }

    fn notify_banned(&mut self, u: VertexId, v: VertexId) {
        self.stats.bans_observed += 1;
        let ahead = &self.plan.vertices()[self.plan_cursor.min(self.plan.len())..];
        let on_plan = ahead
            .windows(2)
            .any(|hop| (hop[0], hop[1]) == (u, v) || (hop[0], hop[1]) == (v, u));
        trace!(%u, %v, on_plan, "ban observed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Graph, GraphBuilder};

    fn v(id: u32) -> VertexId {
        VertexId(id)
    }

    fn diamond() -> Graph {
        GraphBuilder::undirected()
            .with_edge(v(1), v(2))
            .with_edge(v(2), v(4))
            .with_edge(v(1), v(3))
            .with_edge(v(3), v(4))
            .build()
            .unwrap()
    }

    fn traveller(graph: &Graph, s: u32, t: u32) -> AdaptiveTraveller {
        AdaptiveTraveller::new(graph, v(s), v(t), TravellerConfig::default()).unwrap()
    }

    #[test]
    fn test_new_unreachable() {
        let graph = GraphBuilder::undirected()
            .with_edge(v(1), v(2))
            .with_vertex(v(3))
            .build()
            .unwrap();
        let err = AdaptiveTraveller::new(&graph, v(1), v(3), TravellerConfig::default()).unwrap_err();
        assert_eq!(err, TravellerError::UnreachableTarget { from: v(1), target: v(3) });
    }

    #[test]
    fn test_initial_state() {
        let graph = diamond();
        let t = traveller(&graph, 1, 4);

        assert_eq!(t.budget(), 1);
        assert_eq!(t.plan().vertices(), &[v(1), v(2), v(4)]);
        assert_eq!(t.plan_cursor(), 0);
        assert_eq!(t.side_cursors(), (0, 0));
        assert_eq!(t.logical_source(), v(1));
        assert!(!t.is_rolling_back());
    }

    #[test]
    fn test_at_target_returns_none() {
        let graph = diamond();
        let mut t = traveller(&graph, 1, 4);
        assert_eq!(t.make_step(&graph, v(4)), Ok(None));
    }

    #[test]
    fn test_rollback_then_double() {
        let graph = diamond();
        let mut t = traveller(&graph, 1, 4);

        assert_eq!(t.make_step(&graph, v(1)), Ok(Some(v(2))));
        assert_eq!(t.make_step(&graph, v(2)), Ok(Some(v(1))));
        assert!(t.is_rolling_back());
        assert_eq!(t.plan_cursor(), 0);

        assert_eq!(t.make_step(&graph, v(1)), Ok(Some(v(2))));
        assert_eq!(t.budget(), 2);
        assert_eq!(t.make_step(&graph, v(2)), Ok(Some(v(4))));
        assert_eq!(t.budget_history(), &[1, 2]);
        assert_eq!(t.stats().backward_steps, 1);
        assert_eq!(t.stats().forward_steps, 3);
    }

    #[test]
    fn test_replan_after_ban_on_plan() {
        let mut graph = diamond();
        let mut t = traveller(&graph, 1, 4);

        assert_eq!(t.make_step(&graph, v(1)), Ok(Some(v(2))));
        graph.remove_edge(v(2), v(4));
        t.notify_banned(v(2), v(4));

        assert_eq!(t.make_step(&graph, v(2)), Ok(Some(v(1))));
        assert_eq!(t.make_step(&graph, v(1)), Ok(Some(v(3))));
        assert_eq!(t.plan().vertices(), &[v(1), v(3), v(4)]);
        assert_eq!(t.make_step(&graph, v(3)), Ok(Some(v(4))));
        assert_eq!(t.stats().bans_observed, 1);
    }

    #[test]
    fn test_banned_retrace_edge_replans_in_place() {
        // 1 - 2 - 3 - 4 with a detour 2 - 5 - 4
        let mut graph = GraphBuilder::undirected()
            .with_edge(v(1), v(2))
            .with_edge(v(2), v(3))
            .with_edge(v(3), v(4))
            .with_edge(v(2), v(5))
            .with_edge(v(5), v(6))
            .with_edge(v(6), v(4))
            .build()
            .unwrap();
        let mut t = traveller(&graph, 1, 4);

        assert_eq!(t.make_step(&graph, v(1)), Ok(Some(v(2))));
        // Budget spent and the way back is gone: replan from 2
        graph.remove_edge(v(1), v(2));
        assert_eq!(t.make_step(&graph, v(2)), Ok(Some(v(3))));
        assert_eq!(t.budget(), 2);
        assert_eq!(t.plan().first(), Some(v(2)));
    }

    #[test]
    fn test_retry_limit() {
        let graph = diamond();
        let config = TravellerConfig::default().with_max_retries(0);
        let mut t = AdaptiveTraveller::new(&graph, v(1), v(4), config).unwrap();

        assert_eq!(
            t.make_step(&graph, v(1)),
            Err(TravellerError::RetryLimitExceeded { at: v(1), retries: 0 })
        );
    }

    #[test]
    fn test_isolated_after_bans_is_unreachable() {
        let mut graph = diamond();
        let mut t = traveller(&graph, 1, 4);

        assert_eq!(t.make_step(&graph, v(1)), Ok(Some(v(2))));
        graph.remove_edge(v(2), v(4));
        graph.remove_edge(v(3), v(4));

        // Rolls back to 1, then finds no route at all
        assert_eq!(t.make_step(&graph, v(2)), Ok(Some(v(1))));
        assert_eq!(
            t.make_step(&graph, v(1)),
            Err(TravellerError::UnreachableTarget { from: v(1), target: v(4) })
        );
    }

    /// Long way round on side A, with a shortcut over to side B.
    ///
    /// ```text
    ///   A: 1 - 2 - 3 - 4 - 5 - 9
    ///   B: 1 - 6 ------------- 9
    /// ```
    ///
    /// The direct 1-6-9 route is banned up front so the initial plan runs
    /// along A; 2-6 is the crossing.
    fn two_sides() -> Graph {
        GraphBuilder::undirected()
            .with_edge(v(1), v(2))
            .with_edge(v(2), v(3))
            .with_edge(v(3), v(4))
            .with_edge(v(4), v(5))
            .with_edge(v(5), v(9))
            .with_edge(v(2), v(6))
            .with_edge(v(6), v(7))
            .with_edge(v(7), v(9))
            .with_side_a([v(1), v(2), v(3), v(4), v(5), v(9)])
            .with_side_b([v(1), v(6), v(7), v(9)])
            .build()
            .unwrap()
    }

    #[test]
    fn test_shortest_plan_already_crosses() {
        let graph = two_sides();
        let t = traveller(&graph, 1, 9);
        assert_eq!(t.plan().vertices(), &[v(1), v(2), v(6), v(7), v(9)]);
    }

    #[test]
    fn test_resourcing_on_crossing() {
        let graph = two_sides();
        let mut without_crossing = graph.clone();
        without_crossing.remove_edge(v(2), v(6));

        // Planned while 2-6 was missing, so the plan runs the long way along A
        let mut t = traveller(&without_crossing, 1, 9);
        assert_eq!(t.plan().len(), 6);

        assert_eq!(t.make_step(&graph, v(1)), Ok(Some(v(2))));
        t.distance_since_replan = 0;

        // From 2 the crossing to 6 has 2 left against the plan's 4
        assert_eq!(t.make_step(&graph, v(2)), Ok(Some(v(6))));
        assert_eq!(t.logical_source(), v(6));
        assert_eq!(t.plan().vertices(), &[v(6), v(7), v(9)]);
        assert_eq!(t.plan_cursor(), 0);
        assert_eq!(t.distance_since_replan(), 0);
        assert_eq!(t.side_cursors(), (2, 2));
        assert_eq!(t.budget(), 1);
        assert_eq!(t.budget_history(), &[1, 1]);
        assert_eq!(t.stats().resourcings, 1);
    }

    #[test]
    fn test_rollback_after_resourcing_stops_at_crossing() {
        let graph = two_sides();
        let mut without_crossing = graph.clone();
        without_crossing.remove_edge(v(2), v(6));

        let mut t = traveller(&without_crossing, 1, 9);
        assert_eq!(t.make_step(&graph, v(1)), Ok(Some(v(2))));
        t.distance_since_replan = 0;
        assert_eq!(t.make_step(&graph, v(2)), Ok(Some(v(6))));

        // Budget 1 is spent on 6 -> 7; the retrace ends on 6, not back on 2
        assert_eq!(t.make_step(&graph, v(6)), Ok(Some(v(7))));
        assert_eq!(t.make_step(&graph, v(7)), Ok(Some(v(6))));
        assert_eq!(t.plan_cursor(), 0);
        assert!(t.is_rolling_back());

        assert_eq!(t.make_step(&graph, v(6)), Ok(Some(v(7))));
        assert_eq!(t.plan().first(), Some(v(6)));
        assert_eq!(t.budget_history(), &[1, 1, 2]);
        assert_eq!(t.logical_source(), v(6));
    }

    #[test]
    fn test_huge_weights_saturate() {
        let graph = GraphBuilder::undirected_weighted()
            .with_weighted_edge(v(1), v(2), Weight::MAX)
            .with_weighted_edge(v(2), v(3), Weight::MAX)
            .build()
            .unwrap();
        let mut t = traveller(&graph, 1, 3);

        assert_eq!(t.make_step(&graph, v(1)), Ok(Some(v(2))));
        assert_eq!(t.make_step(&graph, v(2)), Ok(Some(v(1))));
        assert_eq!(t.distance_since_replan(), Weight::MAX);
    }

    #[test]
    fn test_crossing_excludes_source_and_target() {
        let graph = two_sides();
        let t = traveller(&graph, 1, 9);

        assert!(!t.is_crossing(&graph, v(1), v(6)));
        assert!(t.is_crossing(&graph, v(2), v(6)));
        assert!(!t.is_crossing(&graph, v(2), v(3)));
        assert!(!t.is_crossing(&graph, v(2), v(7)));
    }
}
