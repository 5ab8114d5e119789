// Layer 1: Standard library imports
use std::fmt::{self, Display};
use std::sync::atomic::{AtomicU64, Ordering};

// Layer 2: Third-party crate imports
use serde::{Deserialize, Serialize};

// Layer 3: Internal module imports
// (none)

/// Next handle value, shared by every actor system in the process.
static NEXT_ACTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Unique handle for actors in the system.
///
/// Handles are monotonic `u64` values allocated from a process-global
/// counter starting at 1, so they double as registry keys. A handle is
/// never reused, even after the actor it referred to has been poisoned.
///
/// # Example
/// ```rust
/// use synaptik_rt::util::ActorId;
///
/// let a = ActorId::next();
/// let b = ActorId::next();
/// assert_ne!(a, b);
/// assert!(b.as_u64() > a.as_u64());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(u64);

impl ActorId {
    /// Allocate the next free handle.
    pub fn next() -> Self {
        Self(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Create an ActorId from a raw handle value.
    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw handle value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor-{}", self.0)
    }
}
