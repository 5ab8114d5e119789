//! # synaptik-graph - Actor-Based Knowledge Graph Engine
//!
//! Every concept in the graph is an autonomous actor holding numeric state
//! (activation, energy, stability, complexity) and weighted typed
//! relations to other concepts. Documents enter through a text-analysis
//! front-end that creates concepts and relations; afterwards spreading
//! activation, learning, decay, and lifecycle transitions evolve the graph
//! one message at a time, in parallel across concepts.
//!
//! Built on [`synaptik_rt`]: mailbox-per-actor scheduling, per-sender FIFO
//! delivery, poisoning as the only cancellation.
//!
//! # Quick Start
//!
//! ```rust
//! use synaptik_graph::{KnowledgeGraph, RelationKind, TextIngestor};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), synaptik_graph::GraphError> {
//!     let graph = KnowledgeGraph::init(4, 500)?;
//!
//!     // Feed it text...
//!     TextIngestor::new(&graph)
//!         .ingest("Fire causes smoke. Smoke is a signal.")
//!         .await?;
//!
//!     // ...or build the graph by hand.
//!     let fire = graph.create_concept("fire").await?;
//!     let ember = graph.create_concept("ember").await?;
//!     graph.add_relation(fire, ember, RelationKind::AssociatedWith, 0.8).await;
//!
//!     let _ = graph.query("fire").await;
//!     graph.wait_all().await;
//!
//!     if let Some(stats) = graph.get_stats(fire) {
//!         println!("fire: activation {:.2}", stats.activation);
//!     }
//!
//!     graph.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Semantics at a Glance
//!
//! - **Activation** spreads over relations, attenuated by edge weight, and
//!   never chains: a concept receiving spread activation does not
//!   re-propagate it, so cycles stay quiet.
//! - **Learning** reinforces recently used edges and erodes stale ones,
//!   with weights clamped to [0.1, 1.0].
//! - **Decay** bleeds activation and energy on maintenance ticks.
//! - **Lifecycle**: weak simple concepts are flagged for merge, dense
//!   complex ones for split, and old exhausted ones poison themselves.
//!
//! # Module Organization
//!
//! - [`concept`] - Concept actors, state, relations, tuning constants
//! - [`graph`] - Concept directory and the KnowledgeGraph facade
//! - [`ingest`] - Text-analysis front-end
//! - [`message`] - The concept message vocabulary
//! - [`error`] - Graph-level errors

pub mod concept;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod message;

// Re-export commonly used types
pub use concept::{ConceptSnapshot, Relation, RelationKind};
pub use error::GraphError;
pub use graph::KnowledgeGraph;
pub use ingest::{IngestReport, TextIngestor};
pub use message::ConceptMessage;
