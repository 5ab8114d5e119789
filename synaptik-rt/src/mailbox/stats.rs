// Layer 1: Standard library imports
use std::sync::atomic::{AtomicU64, Ordering};

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
// (none)

/// Lock-free per-mailbox counters.
///
/// Counter operations use `Ordering::Relaxed`; the counters are
/// observability data, not synchronization points.
///
/// # Example
/// ```rust
/// use synaptik_rt::mailbox::MailboxStats;
///
/// let stats = MailboxStats::new();
/// stats.record_enqueued();
/// stats.record_delivered();
///
/// assert_eq!(stats.enqueued(), 1);
/// assert_eq!(stats.delivered(), 1);
/// assert_eq!(stats.discarded(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MailboxStats {
    enqueued: AtomicU64,
    delivered: AtomicU64,
    discarded: AtomicU64,
}

impl MailboxStats {
    /// Create a new stats block with zero counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message accepted into the queue.
    pub fn record_enqueued(&self) {
        self.enqueued.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a message handed to the actor's handler.
    pub fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a message destroyed without delivery (poisoned actor drain).
    pub fn record_discarded(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    /// Total messages accepted into the queue.
    pub fn enqueued(&self) -> u64 {
        self.enqueued.load(Ordering::Relaxed)
    }

    /// Total messages handed to the handler.
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    /// Total messages destroyed without delivery.
    pub fn discarded(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = MailboxStats::new();
        assert_eq!(stats.enqueued(), 0);
        assert_eq!(stats.delivered(), 0);
        assert_eq!(stats.discarded(), 0);
    }

    #[test]
    fn test_record_and_read() {
        let stats = MailboxStats::new();
        stats.record_enqueued();
        stats.record_enqueued();
        stats.record_delivered();
        stats.record_discarded();

        assert_eq!(stats.enqueued(), 2);
        assert_eq!(stats.delivered(), 1);
        assert_eq!(stats.discarded(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        use std::thread;

        let stats = Arc::new(MailboxStats::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stats = Arc::clone(&stats);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.record_enqueued();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread panicked");
        }

        assert_eq!(stats.enqueued(), 4000);
    }
}
