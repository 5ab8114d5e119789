//! Concurrent actor registry.
//!
//! Maps actor handles to their mailbox senders and scheduling signals.
//! Backed by DashMap: shard-level locking, O(1) resolution, no torn reads.
//! The id snapshot taken for iteration is point-in-time; registrations and
//! removals racing the snapshot may or may not be observed.

// Layer 1: Standard library imports
use std::sync::atomic::{AtomicBool, AtomicUsize};
use std::sync::Arc;

// Layer 2: Third-party crate imports
use dashmap::DashMap;
use tokio::sync::Notify;

// Layer 3: Internal module imports
use crate::mailbox::MailboxSender;
use crate::message::Message;
use crate::util::ActorId;

/// Scheduling signals shared between the registry, senders, and the actor
/// task. Split from [`ActorCell`] so the actor task can hold them without
/// holding a mailbox sender (which would keep its own channel open
/// forever).
#[derive(Debug, Default)]
pub(crate) struct ActorSignals {
    /// Set once by poison; never cleared.
    pub(crate) poisoned: AtomicBool,

    /// Messages queued plus the one currently being handled.
    pub(crate) pending: AtomicUsize,

    /// Notified each time `pending` drops to zero.
    pub(crate) idle: Notify,
}

/// Registry entry: the mailbox sender plus the actor's signals.
pub(crate) struct ActorCell<M: Message> {
    pub(crate) sender: MailboxSender<M>,
    pub(crate) signals: Arc<ActorSignals>,
}

impl<M: Message> ActorCell<M> {
    pub(crate) fn new(sender: MailboxSender<M>) -> Self {
        Self {
            sender,
            signals: Arc::new(ActorSignals::default()),
        }
    }
}

impl<M: Message> Clone for ActorCell<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            signals: Arc::clone(&self.signals),
        }
    }
}

/// Concurrent handle → cell mapping, Arc-shared and cheaply cloneable.
pub(crate) struct ActorRegistry<M: Message> {
    cells: Arc<DashMap<ActorId, ActorCell<M>>>,
}

impl<M: Message> ActorRegistry<M> {
    pub(crate) fn new() -> Self {
        Self {
            cells: Arc::new(DashMap::new()),
        }
    }

    /// Register a freshly spawned actor. Handles are never reused, so a
    /// collision cannot occur.
    pub(crate) fn register(&self, id: ActorId, cell: ActorCell<M>) {
        self.cells.insert(id, cell);
    }

    /// Remove an actor, returning its cell if it was present.
    pub(crate) fn remove(&self, id: ActorId) -> Option<ActorCell<M>> {
        self.cells.remove(&id).map(|(_, cell)| cell)
    }

    /// Resolve a handle to a cloned cell.
    pub(crate) fn resolve(&self, id: ActorId) -> Option<ActorCell<M>> {
        self.cells.get(&id).map(|entry| entry.value().clone())
    }

    /// Whether a handle is currently registered.
    pub(crate) fn contains(&self, id: ActorId) -> bool {
        self.cells.contains_key(&id)
    }

    /// Number of registered actors.
    pub(crate) fn actor_count(&self) -> usize {
        self.cells.len()
    }

    /// Point-in-time snapshot of all registered handles.
    pub(crate) fn actor_ids(&self) -> Vec<ActorId> {
        self.cells.iter().map(|entry| *entry.key()).collect()
    }
}

impl<M: Message> Clone for ActorRegistry<M> {
    /// Cheap clone via Arc; all clones share the same mapping.
    fn clone(&self) -> Self {
        Self {
            cells: Arc::clone(&self.cells),
        }
    }
}
