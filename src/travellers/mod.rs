//! Traveller strategies.
//!
//! - `ShortestPathTraveller`: recompute the shortest path every turn and
//!   take its first hop. Optimal when nothing is banned, oblivious otherwise.
//! - `AdaptiveTraveller`: follow a plan under a distance budget, retrace
//!   and double the budget when it runs out, and jump to a better route when
//!   an edge crossing between the two graph sides shows up.

mod adaptive;
mod shortest_path;
mod stats;

pub use adaptive::AdaptiveTraveller;
pub use shortest_path::ShortestPathTraveller;
pub use stats::TravellerStats;
