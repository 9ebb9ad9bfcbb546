//! Vertex identification.
//!
//! Every vertex of a game graph has a `VertexId`. Ids are opaque to the
//! engine apart from their total order, which is used wherever a rule needs
//! a deterministic tie-break (neighbour enumeration, crossing selection,
//! equal-cost shortest paths).
//!
//! ## Usage
//!
//! ```
//! use rust_ctp::core::VertexId;
//!
//! let a = VertexId::new(1);
//! let b = VertexId::from(4);
//!
//! assert!(a < b);
//! assert_eq!(b.raw(), 4);
//! assert_eq!(format!("{}", a), "V1");
//! ```

use serde::{Deserialize, Serialize};

/// Edge weight. Unweighted graphs use 1 for every edge.
pub type Weight = i64;

/// Unique identifier for a graph vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Create a new vertex ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "V{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_raw_value() {
        let mut ids = vec![VertexId(7), VertexId(2), VertexId(5)];
        ids.sort();
        assert_eq!(ids, vec![VertexId(2), VertexId(5), VertexId(7)]);
        assert_eq!(VertexId(3).max(VertexId(9)), VertexId(9));
    }

    #[test]
    fn test_from_u32() {
        let id: VertexId = 12.into();
        assert_eq!(id, VertexId::new(12));
        assert_eq!(id.raw(), 12);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", VertexId(42)), "V42");
    }

    #[test]
    fn test_serialization() {
        let id = VertexId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: VertexId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
