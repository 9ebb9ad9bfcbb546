//! Role traits for the four participants of a round.

use crate::core::{TravellerError, VertexId};
use crate::graph::{Graph, GraphView};

use super::ban::BanGate;

/// The player trying to reach the target.
///
/// ## Implementation Notes
///
/// - `make_step`: Return `Ok(None)` only at the target; anywhere else the
///   round treats it as a stuck traveller.
/// - `notify_banned`: Called once per applied ban, in the order applied,
///   after the adversary's turn. It may name edges the traveller never
///   looked at.
pub trait Traveller {
    /// Pick the next vertex to move to from `current`.
    fn make_step(
        &mut self,
        graph: &dyn GraphView,
        current: VertexId,
    ) -> Result<Option<VertexId>, TravellerError>;

    /// An edge was deleted.
    fn notify_banned(&mut self, _u: VertexId, _v: VertexId) {}
}

/// Judges whether a proposed move is legal.
pub trait StepValidator {
    /// Is moving from `u` to `v` legal right now?
    fn validate_step(&self, graph: &dyn GraphView, u: VertexId, v: VertexId) -> bool;
}

/// Gatekeeper for edge deletions.
///
/// Rejections are ordinary `false` results, never errors. Asking to remove
/// an edge that is already gone must return `false`.
pub trait BanValidator {
    /// Apply the policy and, if accepted, remove the edge from `graph`.
    ///
    /// Returns whether an edge was actually removed.
    fn try_remove(&mut self, graph: &mut Graph, u: VertexId, v: VertexId) -> bool;

    /// Alias entry point for adversaries that enumerate candidates.
    fn request_ban_edge(&mut self, graph: &mut Graph, u: VertexId, v: VertexId) -> bool {
        self.try_remove(graph, u, v)
    }
}

/// The player deleting edges.
pub trait Adversary {
    /// Observe the move `previous -> current` and request any bans.
    ///
    /// Runs synchronously inside the round's turn.
    fn notify_traveller_step(&mut self, previous: VertexId, current: VertexId, bans: &mut BanGate<'_>);
}

/// The four role objects a round is played with.
pub struct Roles {
    pub traveller: Box<dyn Traveller>,
    pub adversary: Box<dyn Adversary>,
    pub ban_validator: Box<dyn BanValidator>,
    pub step_validator: Box<dyn StepValidator>,
}

impl Roles {
    /// Box up the four roles.
    pub fn new(
        traveller: impl Traveller + 'static,
        adversary: impl Adversary + 'static,
        ban_validator: impl BanValidator + 'static,
        step_validator: impl StepValidator + 'static,
    ) -> Self {
        Self {
            traveller: Box::new(traveller),
            adversary: Box::new(adversary),
            ban_validator: Box::new(ban_validator),
            step_validator: Box::new(step_validator),
        }
    }
}

impl std::fmt::Debug for Roles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roles").finish_non_exhaustive()
    }
}
