//! Actor trait and per-actor execution context.
//!
//! Actors are independent units of computation that:
//! - Maintain isolated state (no shared memory between actors)
//! - Communicate via asynchronous message passing
//! - Process messages sequentially (one at a time per actor)
//! - Follow a defined lifecycle (started → handle_message* → stopped)
//!
//! This mod.rs file contains ONLY module declarations and re-exports.
//! Implementation code is in individual module files:
//!
//! - `traits.rs` - Actor trait
//! - `context.rs` - ActorContext handed to every handler invocation

pub mod context;
pub mod traits;

pub use context::ActorContext;
pub use traits::Actor;
