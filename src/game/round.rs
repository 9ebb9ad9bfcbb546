//! The turn protocol state machine.

use tracing::{debug, trace, warn};

use crate::core::{RoundConfig, RoundFailure, VertexId};
use crate::graph::{Graph, GraphView};

use super::ban::BanGate;
use super::observer::RoundObserver;
use super::record::{RoundRecord, Turn};
use super::roles::Roles;

/// Lifecycle of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundState {
    /// Built but not yet run.
    Idle,
    /// Inside `run`.
    Active,
    /// The traveller reached the target.
    Success,
    /// The round ended early.
    Failure(RoundFailure),
}

impl RoundState {
    /// Is this a terminal state?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, RoundState::Success | RoundState::Failure(_))
    }
}

/// One game from `source` to `target`.
///
/// The round owns the graph and the four roles for the game's duration.
/// `run` may be called once; afterwards the round keeps the trajectory, the
/// per-turn log and the final graph for inspection.
pub struct Round {
    graph: Graph,
    source: VertexId,
    target: VertexId,
    roles: Roles,
    config: RoundConfig,
    observers: Vec<Box<dyn RoundObserver>>,
    state: RoundState,
    trajectory: Vec<VertexId>,
    turns: Vec<Turn>,
}

impl Round {
    /// Create a round with the default configuration.
    pub fn new(graph: Graph, source: VertexId, target: VertexId, roles: Roles) -> Self {
        Self {
            graph,
            source,
            target,
            roles,
            config: RoundConfig::default(),
            observers: Vec::new(),
            state: RoundState::Idle,
            trajectory: Vec::new(),
            turns: Vec::new(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RoundConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach an observer. Observers are called in attachment order.
    #[must_use]
    pub fn with_observer(mut self, observer: impl RoundObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// The graph in its current (possibly pruned) state.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Give the graph back once the round is over.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Vertices visited so far, starting at the source.
    #[must_use]
    pub fn trajectory(&self) -> &[VertexId] {
        &self.trajectory
    }

    /// Committed moves with the bans that followed each.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Snapshot of the round for replay.
    #[must_use]
    pub fn record(&self) -> RoundRecord {
        RoundRecord {
            source: self.source,
            target: self.target,
            trajectory: self.trajectory.clone(),
            turns: self.turns.clone(),
            failure: match &self.state {
                RoundState::Failure(failure) => Some(failure.clone()),
                _ => None,
            },
        }
    }

    /// Play the game to a terminal state.
    ///
    /// Returns the trajectory on success, or the tagged failure.
    ///
    /// # Panics
    ///
    /// Panics if the round has already been run.
    pub fn run(&mut self) -> Result<Vec<VertexId>, RoundFailure> {
        assert!(self.state == RoundState::Idle, "Round can only be run once");

        self.state = RoundState::Active;
        self.trajectory = vec![self.source];
        debug!(source = %self.source, target = %self.target, "round started");

        let result = self.play();

        self.state = match &result {
            Ok(_) => RoundState::Success,
            Err(failure) => RoundState::Failure(failure.clone()),
        };
        debug!(state = ?self.state, moves = self.turns.len(), "round finished");

        for observer in &mut self.observers {
            observer.on_finish(&self.state, &self.trajectory);
        }
        result
    }

    fn play(&mut self) -> Result<Vec<VertexId>, RoundFailure> {
        if self.config.fail_fast_unreachable
            && self.graph.shortest_path_length(self.source, self.target).is_none()
        {
            return Err(RoundFailure::UnreachableTarget {
                from: self.source,
                target: self.target,
            });
        }

        let limit = self.config.iteration_limit(self.graph.vertex_count());
        let mut current = self.source;

        for _ in 0..limit {
            if current == self.target {
                return Ok(self.trajectory.clone());
            }
            current = self.play_turn(current)?;
        }

        if current == self.target {
            return Ok(self.trajectory.clone());
        }
        warn!(limit, at = %current, "round aborted on iteration limit");
        Err(RoundFailure::IterationLimitExceeded { limit })
    }

    /// One pass of the protocol: step, validate, commit, react, notify.
    fn play_turn(&mut self, current: VertexId) -> Result<VertexId, RoundFailure> {
        let next = self
            .roles
            .traveller
            .make_step(&self.graph, current)?
            .ok_or(RoundFailure::StuckTraveller { at: current })?;

        if !self.roles.step_validator.validate_step(&self.graph, current, next) {
            return Err(RoundFailure::InvalidMove { from: current, to: next });
        }

        self.trajectory.push(next);
        trace!(from = %current, to = %next, "move committed");
        for observer in &mut self.observers {
            observer.on_step(current, next);
        }

        let applied = {
            let mut gate = BanGate::new(&mut self.graph, self.roles.ban_validator.as_mut());
            self.roles.adversary.notify_traveller_step(current, next, &mut gate);
            gate.into_applied()
        };

        for ban in &applied {
            self.roles.traveller.notify_banned(ban.u, ban.v);
            for observer in &mut self.observers {
                observer.on_ban(ban.u, ban.v);
            }
        }

        self.turns.push(Turn {
            from: current,
            to: next,
            bans: applied,
        });
        Ok(next)
    }
}

impl std::fmt::Debug for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Round")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("state", &self.state)
            .field("trajectory", &self.trajectory)
            .finish_non_exhaustive()
    }
}
