//! # synaptik-rt - Mailbox-Per-Actor Runtime
//!
//! A small actor runtime: typed messages, bounded FIFO mailboxes, a
//! concurrent registry of actor handles, and a worker pool that handles
//! messages in parallel across actors while serializing delivery within
//! each actor.
//!
//! # Quick Start
//!
//! ```rust
//! use synaptik_rt::prelude::*;
//! use async_trait::async_trait;
//!
//! // 1. Define your message type
//! #[derive(Debug, Clone)]
//! enum CounterMsg {
//!     Increment,
//! }
//!
//! impl Message for CounterMsg {
//!     const MESSAGE_TYPE: &'static str = "counter";
//! }
//!
//! // 2. Define your actor
//! #[derive(Default)]
//! struct CounterActor {
//!     count: u64,
//! }
//!
//! // 3. Implement the Actor trait
//! #[async_trait]
//! impl Actor for CounterActor {
//!     type Message = CounterMsg;
//!     type Error = std::io::Error;
//!
//!     async fn handle_message(
//!         &mut self,
//!         msg: Self::Message,
//!         _ctx: &mut ActorContext<Self::Message>,
//!     ) -> Result<(), Self::Error> {
//!         match msg {
//!             CounterMsg::Increment => self.count += 1,
//!         }
//!         Ok(())
//!     }
//! }
//!
//! // 4. Spawn and use your actor
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), SystemError> {
//!     let system = ActorSystem::new(SystemConfig::default());
//!     let id = system.spawn(CounterActor::default()).await?;
//!
//!     system.send(id, CounterMsg::Increment).await?;
//!     system.wait_all().await;
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Scheduling Model
//!
//! - **Parallel across actors, serialized within an actor.** Each actor is
//!   one task draining one bounded mailbox; a shared semaphore of
//!   `worker_permits` bounds how many actors are mid-handler at once.
//! - **Per-sender FIFO.** Sequential sends from one caller to one target
//!   arrive in program order; different senders interleave arbitrarily.
//! - **Poisoning is the only cancellation.** In-flight handling completes;
//!   queued messages are destroyed without delivery.
//! - **Handler errors are logged and swallowed.** An actor only ever stops
//!   by being poisoned or by system shutdown.
//!
//! # Module Organization
//!
//! - [`actor`] - Actor trait and per-actor context
//! - [`message`] - Message trait and envelopes
//! - [`mailbox`] - Bounded FIFO message queues
//! - [`system`] - ActorSystem, configuration, errors
//! - [`util`] - ActorId handles

pub mod actor;
pub mod mailbox;
pub mod message;
pub mod system;
pub mod util;

// Re-export commonly used types
pub use actor::{Actor, ActorContext};
pub use mailbox::{Mailbox, MailboxError, MailboxSender, MailboxStats};
pub use message::{Message, MessageEnvelope};
pub use system::{ActorSystem, SystemConfig, SystemConfigBuilder, SystemError};
pub use util::ActorId;

/// Convenience imports for building on the runtime.
pub mod prelude {
    pub use crate::actor::{Actor, ActorContext};
    pub use crate::message::{Message, MessageEnvelope};
    pub use crate::system::{ActorSystem, SystemConfig, SystemError};
    pub use crate::util::ActorId;
}
