//! The knowledge graph: directory and facade.
//!
//! This mod.rs file contains ONLY module declarations and re-exports.
//! Implementation code is in individual module files:
//!
//! - `directory.rs` - Concurrent term/id → concept mapping
//! - `knowledge.rs` - KnowledgeGraph facade

pub mod directory;
pub mod knowledge;

pub use directory::{ConceptDirectory, ConceptHandle};
pub use knowledge::KnowledgeGraph;
