//! Actor system: configuration, registry, and the runtime itself.
//!
//! This mod.rs file contains ONLY module declarations and re-exports.
//! Implementation code is in individual module files:
//!
//! - `actor_system.rs` - ActorSystem (spawn/send/poison/wait/shutdown)
//! - `config.rs` - SystemConfig and builder
//! - `errors.rs` - SystemError
//! - `registry.rs` - Concurrent handle → actor mapping (crate-internal)

pub mod actor_system;
pub mod config;
pub mod errors;
pub(crate) mod registry;

pub use actor_system::ActorSystem;
pub use config::{
    SystemConfig, SystemConfigBuilder, DEFAULT_MAILBOX_CAPACITY, DEFAULT_MAX_ACTORS,
    DEFAULT_SHUTDOWN_TIMEOUT, DEFAULT_WORKER_PERMITS,
};
pub use errors::SystemError;
