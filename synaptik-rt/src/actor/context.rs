// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use chrono::{DateTime, Utc};
use tracing::warn;

// Layer 3: Internal module imports
use crate::message::Message;
use crate::system::ActorSystem;
use crate::util::ActorId;

/// Per-actor execution context handed to every handler invocation.
///
/// Carries the actor's own handle plus a cheap-clone handle to the owning
/// [`ActorSystem`], which is how handlers reach other actors. There is no
/// raw back-pointer anywhere: the system handle is reference-counted, so
/// an actor can never outlive the runtime it sends through.
pub struct ActorContext<M: Message> {
    id: ActorId,
    spawned_at: DateTime<Utc>,
    system: ActorSystem<M>,
}

impl<M: Message> ActorContext<M> {
    /// Create a context for a newly spawned actor.
    pub(crate) fn new(id: ActorId, system: ActorSystem<M>) -> Self {
        Self {
            id,
            spawned_at: Utc::now(),
            system,
        }
    }

    /// This actor's handle.
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// When this actor was spawned.
    pub fn spawned_at(&self) -> DateTime<Utc> {
        self.spawned_at
    }

    /// Handle to the owning system.
    pub fn system(&self) -> &ActorSystem<M> {
        &self.system
    }

    /// Fire-and-forget send to another actor.
    ///
    /// Handler-origin sends must never block on a peer's mailbox (two full
    /// actors sending to each other would deadlock), so this uses try-send
    /// semantics: a full, closed, or poisoned target drops the message with
    /// a `warn!` instead of propagating an error into the handler.
    pub fn send(&self, to: ActorId, message: M) {
        if let Err(error) = self.system.try_send_from(self.id, to, message) {
            warn!(
                from = %self.id,
                to = %to,
                message_type = M::MESSAGE_TYPE,
                %error,
                "dropping handler-origin message"
            );
        }
    }

    /// Request termination of this actor.
    ///
    /// The current handler runs to completion; queued messages are
    /// destroyed without delivery.
    pub fn poison_self(&self) {
        // Already-gone is fine: poison is idempotent from the actor's view.
        let _ = self.system.poison(self.id);
    }
}
