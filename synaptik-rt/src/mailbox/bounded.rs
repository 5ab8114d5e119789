// Layer 1: Standard library imports
use std::sync::Arc;

// Layer 2: Third-party crate imports
use tokio::sync::mpsc;

// Layer 3: Internal module imports
use super::stats::MailboxStats;
use crate::message::{Message, MessageEnvelope};

/// Smallest capacity a mailbox may be created with.
pub const MIN_MAILBOX_CAPACITY: usize = 1;

/// Mailbox error types.
#[derive(Debug, thiserror::Error)]
pub enum MailboxError {
    /// Mailbox is at capacity.
    #[error("Mailbox is full (capacity: {capacity})")]
    Full { capacity: usize },

    /// Mailbox is closed (receiver dropped).
    #[error("Mailbox is closed")]
    Closed,
}

/// Non-blocking receive error types.
#[derive(Debug, thiserror::Error)]
pub enum TryRecvError {
    /// Mailbox is empty (no messages available).
    #[error("Mailbox is empty")]
    Empty,

    /// Mailbox is closed (all senders dropped).
    #[error("Mailbox is closed")]
    Closed,
}

/// Bounded FIFO mailbox: the receiver half, owned by exactly one actor task.
///
/// Built on a tokio mpsc channel; per-sender FIFO order is the channel's
/// guarantee and the runtime's ordering contract rests on it.
///
/// # Example
/// ```rust
/// use synaptik_rt::mailbox::Mailbox;
/// use synaptik_rt::message::{Message, MessageEnvelope};
///
/// #[derive(Debug, Clone)]
/// struct Ping;
/// impl Message for Ping {
///     const MESSAGE_TYPE: &'static str = "ping";
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (mut mailbox, sender) = Mailbox::<Ping>::new(64);
/// sender.send(MessageEnvelope::new(Ping)).await.unwrap();
/// assert!(mailbox.recv().await.is_some());
/// # }
/// ```
pub struct Mailbox<M: Message> {
    receiver: mpsc::Receiver<MessageEnvelope<M>>,
    capacity: usize,
    stats: Arc<MailboxStats>,
}

/// Cloneable sender half of a [`Mailbox`].
pub struct MailboxSender<M: Message> {
    sender: mpsc::Sender<MessageEnvelope<M>>,
    capacity: usize,
    stats: Arc<MailboxStats>,
}

impl<M: Message> Clone for MailboxSender<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            capacity: self.capacity,
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<M: Message> Mailbox<M> {
    /// Create a bounded mailbox and its sender.
    ///
    /// Capacities below [`MIN_MAILBOX_CAPACITY`] are raised to it.
    pub fn new(capacity: usize) -> (Self, MailboxSender<M>) {
        let capacity = capacity.max(MIN_MAILBOX_CAPACITY);
        let (sender, receiver) = mpsc::channel(capacity);
        let stats = Arc::new(MailboxStats::new());

        let mailbox = Self {
            receiver,
            capacity,
            stats: Arc::clone(&stats),
        };
        let sender = MailboxSender {
            sender,
            capacity,
            stats,
        };

        (mailbox, sender)
    }

    /// Receive the next message, waiting until one arrives.
    ///
    /// Returns None once the mailbox is closed and drained.
    pub async fn recv(&mut self) -> Option<MessageEnvelope<M>> {
        self.receiver.recv().await
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&mut self) -> Result<MessageEnvelope<M>, TryRecvError> {
        match self.receiver.try_recv() {
            Ok(envelope) => Ok(envelope),
            Err(mpsc::error::TryRecvError::Empty) => Err(TryRecvError::Empty),
            Err(mpsc::error::TryRecvError::Disconnected) => Err(TryRecvError::Closed),
        }
    }

    /// Fixed capacity of this mailbox.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current queue depth.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Whether the queue is currently empty.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Shared counters for this mailbox.
    pub fn stats(&self) -> &Arc<MailboxStats> {
        &self.stats
    }
}

impl<M: Message> MailboxSender<M> {
    /// Send a message, waiting for capacity when the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`MailboxError::Closed`] if the receiver is gone.
    pub async fn send(&self, envelope: MessageEnvelope<M>) -> Result<(), MailboxError> {
        self.sender
            .send(envelope)
            .await
            .map_err(|_| MailboxError::Closed)?;
        self.stats.record_enqueued();
        Ok(())
    }

    /// Try to send a message without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`MailboxError::Full`] at capacity, [`MailboxError::Closed`]
    /// if the receiver is gone.
    pub fn try_send(&self, envelope: MessageEnvelope<M>) -> Result<(), MailboxError> {
        self.sender.try_send(envelope).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => MailboxError::Full {
                capacity: self.capacity,
            },
            mpsc::error::TrySendError::Closed(_) => MailboxError::Closed,
        })?;
        self.stats.record_enqueued();
        Ok(())
    }

    /// Shared counters for this mailbox.
    pub fn stats(&self) -> &Arc<MailboxStats> {
        &self.stats
    }
}
