// Layer 1: Standard library imports
use std::fmt::Debug;

// Layer 2: Third-party crate imports
// (none for this module)

// Layer 3: Internal module imports
// (none)

/// Core message trait with compile-time type identification.
///
/// # Zero-Cost Abstraction
/// Uses const MESSAGE_TYPE instead of runtime reflection; message types are
/// resolved at compile time and carried in logging output only.
///
/// # Clone discipline
/// `Clone` is how the runtime replicates a message when the same payload
/// must reach several actors; every clone is independently owned and
/// independently dropped, so a payload is destroyed exactly once per copy.
///
/// # Example
/// ```rust
/// use synaptik_rt::message::Message;
///
/// #[derive(Debug, Clone)]
/// struct Ping {
///     seq: u64,
/// }
///
/// impl Message for Ping {
///     const MESSAGE_TYPE: &'static str = "ping";
/// }
/// ```
pub trait Message: Send + Clone + Debug + 'static {
    /// Unique message type identifier (compile-time constant).
    const MESSAGE_TYPE: &'static str;
}
