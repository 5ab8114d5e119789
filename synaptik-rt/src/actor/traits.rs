// Layer 1: Standard library imports
use std::error::Error;

// Layer 2: Third-party crate imports
use async_trait::async_trait;

// Layer 3: Internal module imports
use super::context::ActorContext;
use crate::message::Message;

/// Core actor trait.
///
/// All actors must implement this trait to participate in the actor system.
/// Associated types for `Message` and `Error` give compile-time type
/// checking; there is no runtime dispatch on message kinds outside the
/// actor's own `match`.
///
/// # Error policy
///
/// A handler returning `Err` does NOT stop the actor: the runtime logs the
/// failure and delivers the next message. Poisoning is the only way an
/// actor terminates early.
///
/// # Example
/// ```rust
/// use synaptik_rt::{Actor, ActorContext, Message};
/// use async_trait::async_trait;
///
/// #[derive(Debug, Clone)]
/// struct Increment(u64);
///
/// impl Message for Increment {
///     const MESSAGE_TYPE: &'static str = "increment";
/// }
///
/// struct Counter {
///     value: u64,
/// }
///
/// #[async_trait]
/// impl Actor for Counter {
///     type Message = Increment;
///     type Error = std::io::Error;
///
///     async fn handle_message(
///         &mut self,
///         message: Self::Message,
///         _context: &mut ActorContext<Self::Message>,
///     ) -> Result<(), Self::Error> {
///         self.value += message.0;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Actor: Send + 'static {
    /// The type of messages this actor can handle.
    type Message: Message;

    /// The error type returned by actor operations.
    type Error: Error + Send + Sync + 'static;

    /// Handle an incoming message.
    ///
    /// This runs on the worker that dequeued the message; no other worker
    /// touches this actor until it returns.
    async fn handle_message(
        &mut self,
        message: Self::Message,
        context: &mut ActorContext<Self::Message>,
    ) -> Result<(), Self::Error>;

    /// Lifecycle hook called once before the first message is delivered.
    ///
    /// Default implementation does nothing.
    async fn started(&mut self, _context: &mut ActorContext<Self::Message>) {}

    /// Lifecycle hook called after the mailbox closes, including after
    /// poisoning. Runs exactly once; the actor is gone when it returns.
    ///
    /// Default implementation does nothing.
    async fn stopped(&mut self, _context: &mut ActorContext<Self::Message>) {}
}
