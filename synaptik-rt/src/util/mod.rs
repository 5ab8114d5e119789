//! Shared utilities for the actor runtime.
//!
//! This mod.rs file contains ONLY module declarations and re-exports.
//! Implementation code is in individual module files:
//!
//! - `ids.rs` - ActorId handle type

pub mod ids;

pub use ids::ActorId;
