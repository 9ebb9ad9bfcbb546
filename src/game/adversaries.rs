//! Stock adversaries.
//!
//! - `PassiveAdversary`: never bans anything
//! - `ScriptedAdversary`: bans fixed edges on fixed turns or arrivals
//! - `RandomBanAdversary`: commits to a random edge set up front and bans
//!   each edge when the traveller first stands next to it

use rustc_hash::FxHashSet;

use crate::core::{GameRng, VertexId};
use crate::graph::{Edge, Graph};

use super::ban::BanGate;
use super::roles::Adversary;

/// An adversary that never bans.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassiveAdversary;

impl Adversary for PassiveAdversary {
    fn notify_traveller_step(&mut self, _previous: VertexId, _current: VertexId, _bans: &mut BanGate<'_>) {}
}

/// When a scripted ban fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BanTrigger {
    /// After the n-th move of the round (the first move is turn 1).
    Turn(usize),
    /// The first time the traveller arrives at this vertex.
    Arrival(VertexId),
}

/// Bans a fixed list of edges at scripted moments.
///
/// Each entry fires at most once.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAdversary {
    script: Vec<(BanTrigger, VertexId, VertexId)>,
    fired: Vec<bool>,
    turn: usize,
}

impl ScriptedAdversary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ban `(u, v)` right after move number `turn`.
    #[must_use]
    pub fn with_ban_on_turn(mut self, turn: usize, u: VertexId, v: VertexId) -> Self {
        self.script.push((BanTrigger::Turn(turn), u, v));
        self.fired.push(false);
        self
    }

    /// Ban `(u, v)` the first time the traveller arrives at `at`.
    #[must_use]
    pub fn with_ban_on_arrival(mut self, at: VertexId, u: VertexId, v: VertexId) -> Self {
        self.script.push((BanTrigger::Arrival(at), u, v));
        self.fired.push(false);
        self
    }

    /// Moves observed so far.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }
}

impl Adversary for ScriptedAdversary {
    fn notify_traveller_step(&mut self, _previous: VertexId, current: VertexId, bans: &mut BanGate<'_>) {
        self.turn += 1;
        for (i, &(trigger, u, v)) in self.script.iter().enumerate() {
            if self.fired[i] {
                continue;
            }
            let due = match trigger {
                BanTrigger::Turn(turn) => turn == self.turn,
                BanTrigger::Arrival(at) => at == current,
            };
            if due {
                self.fired[i] = true;
                bans.request_ban_edge(u, v);
            }
        }
    }
}

/// A non-adaptive adversary.
///
/// At construction it samples `k` edges of the initial graph with a seeded
/// RNG. Whenever the traveller arrives at a vertex, it requests bans of all
/// still-pending sampled edges incident to that vertex. Each sampled edge is
/// requested once, whether or not the validator accepts it.
#[derive(Clone, Debug)]
pub struct RandomBanAdversary {
    pending: Vec<Edge>,
    requested: FxHashSet<(VertexId, VertexId)>,
}

impl RandomBanAdversary {
    /// Sample `k` of `graph`'s current edges using `seed`.
    pub fn new(graph: &Graph, k: usize, seed: u64) -> Self {
        let edges = graph.edges();
        let mut rng = GameRng::new(seed);
        let pending = rng
            .sample_indices(edges.len(), k)
            .into_iter()
            .map(|i| edges[i])
            .collect();

        Self {
            pending,
            requested: FxHashSet::default(),
        }
    }

    /// Sampled edges not yet requested.
    #[must_use]
    pub fn pending(&self) -> &[Edge] {
        &self.pending
    }

    /// Sampled edges already requested.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested.len()
    }
}

impl Adversary for RandomBanAdversary {
    fn notify_traveller_step(&mut self, _previous: VertexId, current: VertexId, bans: &mut BanGate<'_>) {
        let (due, rest): (Vec<Edge>, Vec<Edge>) = self
            .pending
            .iter()
            .copied()
            .partition(|edge| edge.u == current || edge.v == current);
        self.pending = rest;

        for edge in due {
            self.requested.insert((edge.u, edge.v));
            bans.request_ban_edge(edge.u, edge.v);
        }
    }
}
