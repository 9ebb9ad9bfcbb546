//! # rust-ctp
//!
//! A turn-based engine for the Canadian traveller game: a traveller walks a
//! graph towards a target while an adversary permanently deletes edges.
//!
//! ## Design Principles
//!
//! 1. **Pluggable Roles**: Traveller, adversary, ban validator and step
//!    validator are traits. A round takes one boxed implementation of each.
//!
//! 2. **Single Writer**: The round owns the graph. Roles see it through the
//!    read-only `GraphView`; only the ban validator, reached through a
//!    `BanGate`, gets to delete edges.
//!
//! 3. **Deterministic**: Neighbour enumeration, shortest-path ties and the
//!    random adversary are all reproducible for a fixed graph and seed.
//!
//! ## Architecture
//!
//! - **Persistent Adjacency**: `im::OrdMap` gives ordered neighbours and
//!   O(1) graph snapshots.
//!
//! - **Explicit Outcomes**: A round ends in a trajectory or a tagged
//!   `RoundFailure`; nothing escapes it as a panic.
//!
//! ## Modules
//!
//! - `core`: Vertex ids, weights, RNG, configuration, errors
//! - `graph`: Graph, builder, read-only view, shortest paths
//! - `game`: Role traits, the round state machine, stock roles
//! - `travellers`: Shortest-path and adaptive traveller strategies

pub mod core;
pub mod game;
pub mod graph;
pub mod travellers;

// Re-export commonly used types
pub use crate::core::{
    BuildError, GameRng, GraphError, RoundConfig, RoundFailure, TravellerConfig,
    TravellerError, VertexId, Weight,
};

pub use crate::graph::{Edge, EdgeProps, Graph, GraphBuilder, GraphMode, GraphView, Path};

pub use crate::game::{
    Adversary, BanGate, BanValidator, EdgeBanValidator, EdgeStepValidator, PassiveAdversary,
    RandomBanAdversary, Roles, Round, RoundObserver, RoundRecord, RoundState,
    ScriptedAdversary, StepValidator, Traveller,
};

pub use crate::travellers::{AdaptiveTraveller, ShortestPathTraveller, TravellerStats};
