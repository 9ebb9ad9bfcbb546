//! The turn protocol and its pluggable roles.
//!
//! A `Round` drives one game from a source vertex to a target vertex. Each
//! turn it:
//!
//! 1. asks the [`Traveller`] for a step,
//! 2. asks the [`StepValidator`] whether the step is legal,
//! 3. commits the move,
//! 4. lets the [`Adversary`] react through a [`BanGate`], which forwards ban
//!    requests to the [`BanValidator`],
//! 5. tells the traveller about every ban that was actually applied.
//!
//! ## Ownership
//!
//! The round owns the `Graph` for the whole game. Travellers, validators and
//! adversaries only ever receive `&dyn GraphView`; the only `&mut Graph` in
//! circulation is the one the `BanGate` lends to the ban validator.
//!
//! ## Example
//!
//! ```
//! use rust_ctp::core::VertexId;
//! use rust_ctp::game::{EdgeBanValidator, EdgeStepValidator, PassiveAdversary, Roles, Round};
//! use rust_ctp::graph::GraphBuilder;
//! use rust_ctp::travellers::ShortestPathTraveller;
//!
//! let v = VertexId::new;
//! let graph = GraphBuilder::undirected()
//!     .with_edge(v(1), v(2))
//!     .with_edge(v(2), v(4))
//!     .with_edge(v(1), v(3))
//!     .with_edge(v(3), v(4))
//!     .build()
//!     .unwrap();
//!
//! let roles = Roles::new(
//!     ShortestPathTraveller::new(v(4)),
//!     PassiveAdversary,
//!     EdgeBanValidator,
//!     EdgeStepValidator,
//! );
//! let mut round = Round::new(graph, v(1), v(4), roles);
//!
//! let path = round.run().unwrap();
//! assert_eq!(path, vec![v(1), v(2), v(4)]);
//! ```

mod adversaries;
mod ban;
mod observer;
mod record;
mod roles;
mod round;
mod validators;

pub use adversaries::{BanTrigger, PassiveAdversary, RandomBanAdversary, ScriptedAdversary};
pub use ban::BanGate;
pub use observer::RoundObserver;
pub use record::{Ban, RoundRecord, Turn};
pub use roles::{Adversary, BanValidator, Roles, StepValidator, Traveller};
pub use round::{Round, RoundState};
pub use validators::{EdgeBanValidator, EdgeStepValidator};
