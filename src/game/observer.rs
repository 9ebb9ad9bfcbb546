//! Per-turn callbacks for presentation layers.

use crate::core::VertexId;

use super::round::RoundState;

/// Hooks invoked by the round as the game progresses.
///
/// A console driver prints moves here; tests record them. All methods
/// default to doing nothing.
pub trait RoundObserver {
    /// The traveller moved from `from` to `to`.
    fn on_step(&mut self, _from: VertexId, _to: VertexId) {}

    /// The edge `(u, v)` was banned after the last move.
    fn on_ban(&mut self, _u: VertexId, _v: VertexId) {}

    /// The round reached a terminal state.
    fn on_finish(&mut self, _state: &RoundState, _trajectory: &[VertexId]) {}
}
