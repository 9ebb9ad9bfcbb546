//! Graph layer: a fixed vertex set whose edges can only disappear.
//!
//! ## Design
//!
//! - **Shrinking only**: edges are created by `GraphBuilder` and afterwards
//!   can only be removed. A removed edge never comes back.
//! - **Deterministic**: neighbours are enumerated in ascending `VertexId`
//!   order and shortest-path ties resolve the same way every time, so games
//!   replay identically.
//! - **Cheap snapshots**: adjacency lives in persistent maps (`im-rs`), so
//!   cloning a `Graph` is O(1). Useful for checking a finished round against
//!   the graph it started from.
//!
//! Roles only ever see a `&dyn GraphView`. Mutation goes through
//! `Graph::remove_edge`, which the round lends to the ban validator alone.
//!
//! ## Example
//!
//! ```
//! use rust_ctp::core::VertexId;
//! use rust_ctp::graph::{GraphBuilder, GraphView};
//!
//! let v = VertexId::new;
//! let mut graph = GraphBuilder::undirected()
//!     .with_edge(v(1), v(2))
//!     .with_edge(v(2), v(4))
//!     .with_edge(v(1), v(3))
//!     .with_edge(v(3), v(4))
//!     .build()
//!     .unwrap();
//!
//! let path = graph.shortest_path(v(1), v(4)).unwrap();
//! assert_eq!(path.vertices(), &[v(1), v(2), v(4)]);
//!
//! assert!(graph.remove_edge(v(4), v(2)));
//! assert!(!graph.edge_exists(v(2), v(4)));
//! assert_eq!(graph.shortest_path(v(1), v(4)).unwrap().vertices(), &[v(1), v(3), v(4)]);
//! ```

pub mod algo;
pub mod builder;
pub mod dynamic;
pub mod edge;
pub mod path;
pub mod view;

pub use builder::GraphBuilder;
pub use edge::{Direction, Edge, EdgeProps, GraphMode, Weighting};
pub use dynamic::Graph;
pub use path::Path;
pub use view::GraphView;
