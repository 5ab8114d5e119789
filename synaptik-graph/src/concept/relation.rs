// Layer 1: Standard library imports
use std::fmt::{self, Display};

// Layer 2: Third-party crate imports
use serde::{Deserialize, Serialize};

// Layer 3: Internal module imports
use super::tuning::{WEIGHT_CEIL, WEIGHT_FLOOR};

/// The closed set of edge types between concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Source brings about target.
    Causes,
    /// Source is a kind of target.
    IsA,
    /// Source is a component of target.
    PartOf,
    /// Source and target mean the same thing.
    Synonym,
    /// Source and target mean opposite things.
    Antonym,
    /// Co-occurrence without a sharper label.
    AssociatedWith,
    /// Application-defined edge.
    Custom,
}

impl Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Causes => "causes",
            Self::IsA => "is-a",
            Self::PartOf => "part-of",
            Self::Synonym => "synonym",
            Self::Antonym => "antonym",
            Self::AssociatedWith => "associated-with",
            Self::Custom => "custom",
        };
        write!(f, "{name}")
    }
}

/// A weighted typed edge from one concept to another.
///
/// Identity within a concept's relation list is `(target, kind)`: there is
/// at most one edge of a given kind to a given target, and re-adding it
/// upgrades the weight instead of duplicating the edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    /// Target concept id (the facade's external identity, not an actor
    /// handle).
    pub target: u64,

    /// Edge type.
    pub kind: RelationKind,

    /// Edge strength, always within [`WEIGHT_FLOOR`, `WEIGHT_CEIL`].
    pub weight: f64,

    /// Unix seconds when this edge was last created, upgraded, or used for
    /// propagation. Drives learning.
    pub last_accessed: i64,
}

impl Relation {
    /// Create a relation, clamping the weight into its legal range.
    pub fn new(target: u64, kind: RelationKind, weight: f64, now: i64) -> Self {
        Self {
            target,
            kind,
            weight: weight.clamp(WEIGHT_FLOOR, WEIGHT_CEIL),
            last_accessed: now,
        }
    }

    /// Whether this edge matches the given identity.
    pub fn matches(&self, target: u64, kind: RelationKind) -> bool {
        self.target == target && self.kind == kind
    }
}
