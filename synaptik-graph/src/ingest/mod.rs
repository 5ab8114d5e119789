//! Text ingestion front-end.
//!
//! A deliberately small analyzer that turns raw text into graph
//! operations. It is a pure consumer of the facade's public surface
//! (`create_concept`, `activate_concept`, `add_relation`) and never
//! reaches into actor state.
//!
//! This mod.rs file contains ONLY module declarations and re-exports.
//! Implementation code is in individual module files:
//!
//! - `analyzer.rs` - Tokenization, co-occurrence, sentence patterns

pub mod analyzer;

pub use analyzer::{IngestReport, TextIngestor};
