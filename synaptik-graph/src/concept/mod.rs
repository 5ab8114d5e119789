//! Concept actors: numeric state, relations, and message handling.
//!
//! A concept is one term's worth of knowledge: four clamped scalars
//! (activation, energy, stability, complexity), an access history, and a
//! list of weighted typed relations to other concepts. Everything evolves
//! through messages handled one at a time by the concept's actor.
//!
//! This mod.rs file contains ONLY module declarations and re-exports.
//! Implementation code is in individual module files:
//!
//! - `actor.rs` - ConceptActor message handlers
//! - `atomic.rs` - AtomicF64 scalar cell
//! - `relation.rs` - Relation and RelationKind
//! - `state.rs` - ConceptState and ConceptSnapshot
//! - `tuning.rs` - Thresholds, decay factors, and clamp bounds

pub mod actor;
pub mod atomic;
pub mod relation;
pub mod state;
pub mod tuning;

pub use actor::ConceptActor;
pub use relation::{Relation, RelationKind};
pub use state::{ConceptSnapshot, ConceptState};
