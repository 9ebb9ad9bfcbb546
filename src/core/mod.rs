//! Core engine types: vertex ids, weights, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by the graph, the round
//! protocol and the traveller strategies. Nothing here knows about roles.

pub mod vertex;
pub mod rng;
pub mod config;
pub mod error;

pub use vertex::{VertexId, Weight};
pub use rng::GameRng;
pub use config::{RoundConfig, TravellerConfig};
pub use error::{BuildError, GraphError, RoundFailure, TravellerError};
