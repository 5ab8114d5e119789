//! The concept actor's message vocabulary.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
use crate::concept::relation::RelationKind;
use synaptik_rt::Message;

/// Everything a concept actor can be asked to do.
///
/// A typed sum: parameterized operations (activation with a strength,
/// relation insertion) carry their arguments as fields rather than as
/// erased payloads, so replication is `Clone` and disposal is `Drop`.
#[derive(Debug, Clone)]
pub enum ConceptMessage {
    /// Direct activation: full boost, energy gain, may propagate inline.
    Activate,

    /// Spread the current activation to related concepts.
    Propagate,

    /// Receive attenuated activation from a propagating neighbour.
    /// Never propagates further on receipt.
    Inject {
        /// Activation amount to absorb, already attenuated by the sender.
        strength: f64,
    },

    /// Upsert an outgoing relation.
    AddRelation {
        /// Target concept id.
        target: u64,
        /// Edge type.
        kind: RelationKind,
        /// Proposed weight; clamped to the legal range on arrival.
        weight: f64,
    },

    /// Adjust relation weights by recency of use.
    Learn,

    /// Multiplicative activation and energy decay.
    Decay,

    /// Advisory: flag this concept for merging if it is weak and simple.
    MergeCheck,

    /// Advisory: flag this concept for splitting if it is dense and complex.
    SplitCheck,

    /// Self-destruct when old, idle, and exhausted.
    DeathCheck,
}

impl Message for ConceptMessage {
    const MESSAGE_TYPE: &'static str = "concept";
}
