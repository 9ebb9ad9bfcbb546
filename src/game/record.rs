//! Turn records and serialisable round replays.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{RoundFailure, VertexId};

/// An edge deletion applied by the ban validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ban {
    pub u: VertexId,
    pub v: VertexId,
}

impl Ban {
    #[must_use]
    pub const fn new(u: VertexId, v: VertexId) -> Self {
        Self { u, v }
    }
}

/// One committed move and the bans that followed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub from: VertexId,
    pub to: VertexId,
    /// Bans applied during the adversary's reaction, in order.
    pub bans: SmallVec<[Ban; 4]>,
}

/// Everything needed to replay a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub source: VertexId,
    pub target: VertexId,
    /// Vertices visited, starting at `source`.
    pub trajectory: Vec<VertexId>,
    pub turns: Vec<Turn>,
    /// `None` when the traveller reached the target.
    pub failure: Option<RoundFailure>,
}

impl RoundRecord {
    /// Did the round end at the target?
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failure.is_none() && self.trajectory.last() == Some(&self.target)
    }

    /// Every ban applied during the round, in order.
    pub fn bans(&self) -> impl Iterator<Item = &Ban> + '_ {
        self.turns.iter().flat_map(|turn| turn.bans.iter())
    }

    /// Encode as bincode.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
