// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use chrono::{DateTime, Utc};

// Layer 3: Internal module imports
use super::traits::Message;
use crate::util::ActorId;

/// Generic message envelope carried through mailboxes.
///
/// The envelope is generic over the message type M, ensuring compile-time
/// type safety without runtime dispatch or type erasure. It is
/// stack-allocated when M is stack-allocated.
///
/// # Example
/// ```rust
/// use synaptik_rt::message::{Message, MessageEnvelope};
/// use synaptik_rt::util::ActorId;
///
/// #[derive(Debug, Clone)]
/// struct Ping;
///
/// impl Message for Ping {
///     const MESSAGE_TYPE: &'static str = "ping";
/// }
///
/// let envelope = MessageEnvelope::new(Ping).with_sender(ActorId::from_u64(3));
/// assert_eq!(envelope.message_type(), "ping");
/// assert_eq!(envelope.sender, Some(ActorId::from_u64(3)));
/// ```
#[derive(Debug, Clone)]
pub struct MessageEnvelope<M: Message> {
    /// The actual message payload.
    pub payload: M,

    /// Originating actor, when the message was sent from a handler.
    /// External callers (the facade) leave this empty.
    pub sender: Option<ActorId>,

    /// Message creation timestamp (chrono `DateTime<Utc>`).
    pub timestamp: DateTime<Utc>,
}

impl<M: Message> MessageEnvelope<M> {
    /// Create a new envelope around a payload.
    pub fn new(payload: M) -> Self {
        Self {
            payload,
            sender: None,
            timestamp: Utc::now(),
        }
    }

    /// Builder method: record the sending actor.
    pub fn with_sender(mut self, sender: ActorId) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Get message type from the payload's const.
    pub fn message_type(&self) -> &'static str {
        M::MESSAGE_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct TestMessage {
        content: String,
    }

    impl Message for TestMessage {
        const MESSAGE_TYPE: &'static str = "test_message";
    }

    #[test]
    fn test_envelope_creation() {
        let envelope = MessageEnvelope::new(TestMessage {
            content: "hello".to_string(),
        });

        assert_eq!(envelope.payload.content, "hello");
        assert_eq!(envelope.sender, None);
        assert_eq!(envelope.message_type(), "test_message");
    }

    #[test]
    fn test_envelope_with_sender() {
        let sender = ActorId::from_u64(9);
        let envelope = MessageEnvelope::new(TestMessage {
            content: "hi".to_string(),
        })
        .with_sender(sender);

        assert_eq!(envelope.sender, Some(sender));
    }

    #[test]
    fn test_envelope_timestamp_is_recent() {
        let before = Utc::now();
        let envelope = MessageEnvelope::new(TestMessage {
            content: "now".to_string(),
        });
        let after = Utc::now();

        assert!(envelope.timestamp >= before);
        assert!(envelope.timestamp <= after);
    }

    #[test]
    fn test_envelope_clone() {
        let envelope = MessageEnvelope::new(TestMessage {
            content: "copy".to_string(),
        });
        let cloned = envelope.clone();

        assert_eq!(cloned.payload.content, envelope.payload.content);
        assert_eq!(cloned.timestamp, envelope.timestamp);
    }
}
