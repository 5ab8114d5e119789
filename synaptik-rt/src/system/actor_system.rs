//! Main actor system: spawn, send, poison, wait, shutdown.

// Layer 1: Standard library
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Layer 2: Third-party
use parking_lot::RwLock;
use tokio::sync::{Notify, Semaphore};
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

// Layer 3: Internal
use super::config::SystemConfig;
use super::errors::SystemError;
use super::registry::{ActorCell, ActorRegistry, ActorSignals};
use crate::actor::{Actor, ActorContext};
use crate::mailbox::{Mailbox, MailboxError};
use crate::message::{Message, MessageEnvelope};
use crate::util::ActorId;

/// System state enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SystemState {
    /// System is running normally.
    Running,
    /// Graceful shutdown in progress.
    ShuttingDown,
    /// System has stopped.
    Stopped,
}

/// The actor runtime.
///
/// Owns the actor registry, a fixed pool of worker permits, and the global
/// idle signal. Scheduling is parallel across actors and serialized within
/// an actor: each actor runs as one task that handles one message at a
/// time, and the semaphore bounds how many actors may be mid-handler at
/// any instant.
///
/// # Ordering
///
/// Messages from one sender to one target are delivered FIFO. Messages
/// from different senders to the same target interleave arbitrarily.
///
/// # Cancellation
///
/// Poisoning is the only cancellation. A poisoned actor finishes the
/// message it is handling, then destroys everything left in its mailbox
/// without delivery, runs its `stopped` hook, and is gone.
///
/// # Examples
///
/// ```rust,ignore
/// let system = ActorSystem::new(SystemConfig::default());
/// let id = system.spawn(MyActor::default()).await?;
/// system.send(id, MyMessage::Hello).await?;
/// system.wait_all().await;
/// system.shutdown().await?;
/// ```
pub struct ActorSystem<M: Message> {
    inner: Arc<SystemInner<M>>,
}

struct SystemInner<M: Message> {
    config: SystemConfig,
    registry: ActorRegistry<M>,
    /// Fixed-size worker pool: one permit per concurrently handled message.
    worker_gate: Semaphore,
    /// Messages accepted but not yet fully handled, across all actors.
    in_flight: AtomicUsize,
    /// Notified each time `in_flight` drops to zero.
    all_idle: Notify,
    /// Actor tasks that have not yet run to completion.
    live_tasks: AtomicUsize,
    state: RwLock<SystemState>,
}

impl<M: Message> Clone for ActorSystem<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: Message> ActorSystem<M> {
    /// Create a new actor system.
    pub fn new(config: SystemConfig) -> Self {
        let worker_permits = config.worker_permits.max(1);
        Self {
            inner: Arc::new(SystemInner {
                config,
                registry: ActorRegistry::new(),
                worker_gate: Semaphore::new(worker_permits),
                in_flight: AtomicUsize::new(0),
                all_idle: Notify::new(),
                live_tasks: AtomicUsize::new(0),
                state: RwLock::new(SystemState::Running),
            }),
        }
    }

    /// Get the system configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.inner.config
    }

    /// Number of live (registered) actors.
    pub fn actor_count(&self) -> usize {
        self.inner.registry.actor_count()
    }

    /// Whether a handle currently resolves to a live actor.
    pub fn contains(&self, id: ActorId) -> bool {
        self.inner.registry.contains(id)
    }

    /// Point-in-time snapshot of all live actor handles.
    pub fn actor_ids(&self) -> Vec<ActorId> {
        self.inner.registry.actor_ids()
    }

    /// Check if system is shutting down.
    pub fn is_shutting_down(&self) -> bool {
        *self.inner.state.read() != SystemState::Running
    }

    /// Spawn an actor with its initial state.
    ///
    /// Registers the actor and starts its task; no message is sent as part
    /// of spawn. The returned handle is live immediately.
    ///
    /// # Errors
    ///
    /// `ShuttingDown` after shutdown began; `ActorLimitExceeded` when
    /// `max_actors` is configured and reached.
    pub async fn spawn<A>(&self, actor: A) -> Result<ActorId, SystemError>
    where
        A: Actor<Message = M>,
    {
        if self.is_shutting_down() {
            return Err(SystemError::ShuttingDown);
        }

        if self.inner.config.max_actors > 0 {
            let current = self.actor_count();
            if current >= self.inner.config.max_actors {
                return Err(SystemError::ActorLimitExceeded {
                    current,
                    max: self.inner.config.max_actors,
                });
            }
        }

        let id = ActorId::next();
        let (mailbox, sender) = Mailbox::new(self.inner.config.mailbox_capacity);
        let cell = ActorCell::new(sender);
        let signals = Arc::clone(&cell.signals);

        // Registered before the task starts: the handle must be routable
        // the moment spawn returns.
        self.inner.registry.register(id, cell);
        self.inner.live_tasks.fetch_add(1, Ordering::SeqCst);

        let context = ActorContext::new(id, self.clone());
        let system = self.clone();
        tokio::spawn(async move {
            system.run_actor(actor, mailbox, context, signals).await;
        });

        debug!(actor = %id, "spawned actor");
        Ok(id)
    }

    /// Per-actor task: deliver messages one at a time until the mailbox
    /// closes, gated by the shared worker pool.
    async fn run_actor<A>(
        self,
        mut actor: A,
        mut mailbox: Mailbox<M>,
        mut context: ActorContext<M>,
        signals: Arc<ActorSignals>,
    ) where
        A: Actor<Message = M>,
    {
        actor.started(&mut context).await;

        while let Some(envelope) = mailbox.recv().await {
            if signals.poisoned.load(Ordering::SeqCst) {
                // Queued messages of a poisoned actor are destroyed
                // without delivery.
                mailbox.stats().record_discarded();
                drop(envelope);
                self.finish_message(&signals);
                continue;
            }

            let permit = self.inner.worker_gate.acquire().await.ok();
            mailbox.stats().record_delivered();
            if let Err(error) = actor.handle_message(envelope.payload, &mut context).await {
                // Handler failures never take the actor down.
                warn!(
                    actor = %context.id(),
                    message_type = M::MESSAGE_TYPE,
                    %error,
                    "message handler failed"
                );
            }
            drop(permit);
            self.finish_message(&signals);
        }

        actor.stopped(&mut context).await;
        debug!(actor = %context.id(), "actor stopped");
        self.inner.live_tasks.fetch_sub(1, Ordering::SeqCst);
    }

    /// Account one message accepted for delivery.
    fn begin_message(&self, signals: &ActorSignals) {
        signals.pending.fetch_add(1, Ordering::SeqCst);
        self.inner.in_flight.fetch_add(1, Ordering::SeqCst);
    }

    /// Account one message fully handled (or destroyed).
    fn finish_message(&self, signals: &ActorSignals) {
        if signals.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            signals.idle.notify_waiters();
        }
        if self.inner.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.all_idle.notify_waiters();
        }
    }

    /// Send a message, waiting for mailbox capacity if necessary.
    ///
    /// Sequential sends from one caller to one target are delivered in
    /// program order.
    ///
    /// # Errors
    ///
    /// `ActorNotFound` for unknown handles, `ActorGone` for poisoned ones.
    pub async fn send(&self, to: ActorId, message: M) -> Result<(), SystemError> {
        let cell = self
            .inner
            .registry
            .resolve(to)
            .ok_or(SystemError::ActorNotFound(to))?;
        if cell.signals.poisoned.load(Ordering::SeqCst) {
            return Err(SystemError::ActorGone(to));
        }

        self.begin_message(&cell.signals);
        if let Err(error) = cell.sender.send(MessageEnvelope::new(message)).await {
            self.finish_message(&cell.signals);
            return Err(match error {
                MailboxError::Closed => SystemError::ActorGone(to),
                MailboxError::Full { .. } => SystemError::MailboxFull(to),
            });
        }
        Ok(())
    }

    /// Non-blocking send on behalf of a running handler.
    ///
    /// Used by [`ActorContext::send`]; never awaits, so handlers cannot
    /// deadlock on each other's full mailboxes.
    pub(crate) fn try_send_from(
        &self,
        from: ActorId,
        to: ActorId,
        message: M,
    ) -> Result<(), SystemError> {
        let cell = self
            .inner
            .registry
            .resolve(to)
            .ok_or(SystemError::ActorNotFound(to))?;
        if cell.signals.poisoned.load(Ordering::SeqCst) {
            return Err(SystemError::ActorGone(to));
        }

        self.begin_message(&cell.signals);
        if let Err(error) = cell
            .sender
            .try_send(MessageEnvelope::new(message).with_sender(from))
        {
            self.finish_message(&cell.signals);
            return Err(match error {
                MailboxError::Closed => SystemError::ActorGone(to),
                MailboxError::Full { .. } => SystemError::MailboxFull(to),
            });
        }
        Ok(())
    }

    /// Poison an actor: mark it gone and schedule destruction.
    ///
    /// The actor finishes any in-flight message; everything still queued
    /// is destroyed without delivery. The handle stops resolving
    /// immediately.
    ///
    /// # Errors
    ///
    /// `ActorNotFound` if the handle is unknown (or already poisoned).
    pub fn poison(&self, id: ActorId) -> Result<(), SystemError> {
        let cell = self
            .inner
            .registry
            .remove(id)
            .ok_or(SystemError::ActorNotFound(id))?;
        cell.signals.poisoned.store(true, Ordering::SeqCst);
        debug!(actor = %id, "poisoned actor");
        // Dropping the cell drops the registry's sender; the mailbox
        // closes once any in-progress sends release their clones.
        Ok(())
    }

    /// Block until the actor has an empty mailbox and no handler running.
    ///
    /// Returns immediately for unknown handles: a gone actor is idle.
    pub async fn wait_for_actor(&self, id: ActorId) {
        let signals = match self.inner.registry.resolve(id) {
            Some(cell) => Arc::clone(&cell.signals),
            None => return,
        };

        loop {
            let notified = signals.idle.notified();
            tokio::pin!(notified);
            // Register interest before checking, or a notification landing
            // between the check and the await is lost.
            notified.as_mut().enable();
            if signals.pending.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Block until no message is queued or being handled anywhere.
    ///
    /// Sends made by in-flight handlers are counted before the handler
    /// finishes, so cascades settle before this returns. No deadline;
    /// callers wanting one wrap this in a timeout.
    pub async fn wait_all(&self) {
        loop {
            let notified = self.inner.all_idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.inner.in_flight.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Gracefully shut down: poison every actor and wait for their tasks.
    ///
    /// # Errors
    ///
    /// `ShuttingDown` if called twice; `ShutdownTimeout` if actor tasks
    /// outlive the configured timeout.
    pub async fn shutdown(&self) -> Result<(), SystemError> {
        {
            let mut state = self.inner.state.write();
            if *state != SystemState::Running {
                return Err(SystemError::ShuttingDown);
            }
            *state = SystemState::ShuttingDown;
        }

        for id in self.inner.registry.actor_ids() {
            let _ = self.poison(id);
        }

        let timeout_duration = self.inner.config.shutdown_timeout;
        match timeout(timeout_duration, self.wait_for_tasks()).await {
            Ok(()) => {
                *self.inner.state.write() = SystemState::Stopped;
                Ok(())
            }
            Err(_) => Err(SystemError::ShutdownTimeout(timeout_duration)),
        }
    }

    /// Wait for all actor tasks to run to completion.
    async fn wait_for_tasks(&self) {
        while self.inner.live_tasks.load(Ordering::SeqCst) > 0 {
            sleep(Duration::from_millis(10)).await;
        }
    }
}
