//! System configuration with sensible defaults.

// Layer 1: Standard library
use std::time::Duration;

// Layer 2: Third-party
use serde::{Deserialize, Serialize};

// Layer 3: Internal
// (none)

/// Default number of worker permits (parallel message handlers).
pub const DEFAULT_WORKER_PERMITS: usize = 4;

/// Default mailbox capacity for bounded mailboxes.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 64;

/// Default maximum concurrent actors (0 = unlimited).
pub const DEFAULT_MAX_ACTORS: usize = 0;

/// Default timeout for graceful system shutdown (30 seconds).
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// System-wide configuration for the actor runtime.
///
/// # Examples
///
/// ```rust
/// use synaptik_rt::system::{SystemConfig, DEFAULT_MAILBOX_CAPACITY};
///
/// // Default configuration
/// let config = SystemConfig::default();
/// assert_eq!(config.mailbox_capacity, DEFAULT_MAILBOX_CAPACITY);
///
/// // Builder for custom configuration
/// let config = SystemConfig::builder()
///     .with_worker_permits(8)
///     .with_mailbox_capacity(128)
///     .build()
///     .unwrap();
/// assert_eq!(config.worker_permits, 8);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Number of messages the system will handle in parallel across all
    /// actors (the fixed-size worker pool). Within one actor, handling is
    /// always serialized regardless of this value.
    pub worker_permits: usize,

    /// Capacity of each actor's bounded mailbox.
    pub mailbox_capacity: usize,

    /// Maximum concurrent actors (0 = unlimited).
    pub max_actors: usize,

    /// Timeout for graceful system shutdown.
    pub shutdown_timeout: Duration,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            worker_permits: DEFAULT_WORKER_PERMITS,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            max_actors: DEFAULT_MAX_ACTORS,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }
}

impl SystemConfig {
    /// Create a new configuration builder.
    pub fn builder() -> SystemConfigBuilder {
        SystemConfigBuilder::default()
    }

    /// Validate configuration values.
    ///
    /// Returns `Err` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.worker_permits == 0 {
            return Err("worker_permits must be > 0".to_string());
        }

        if self.mailbox_capacity == 0 {
            return Err("mailbox_capacity must be > 0".to_string());
        }

        if self.shutdown_timeout.is_zero() {
            return Err("shutdown_timeout must be > 0".to_string());
        }

        Ok(())
    }
}

/// Builder for [`SystemConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct SystemConfigBuilder {
    config: SystemConfig,
}

impl SystemConfigBuilder {
    /// Set the number of worker permits.
    pub fn with_worker_permits(mut self, permits: usize) -> Self {
        self.config.worker_permits = permits;
        self
    }

    /// Set the per-actor mailbox capacity.
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.config.mailbox_capacity = capacity;
        self
    }

    /// Set the maximum number of concurrent actors (0 = unlimited).
    pub fn with_max_actors(mut self, max: usize) -> Self {
        self.config.max_actors = max;
        self
    }

    /// Set the graceful shutdown timeout.
    pub fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.config.shutdown_timeout = timeout;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<SystemConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
