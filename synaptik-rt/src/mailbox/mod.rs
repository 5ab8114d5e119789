//! Bounded FIFO mailboxes for actor message queuing.
//!
//! Each actor owns exactly one [`Mailbox`] (the receiver half); any number
//! of [`MailboxSender`] clones may feed it. Capacity is fixed at creation,
//! senders observe `Full` when the queue is at capacity and `Closed` once
//! the receiver is gone.
//!
//! This mod.rs file contains ONLY module declarations and re-exports.
//! Implementation code is in individual module files:
//!
//! - `bounded.rs` - Mailbox and MailboxSender over tokio mpsc
//! - `stats.rs` - Lock-free per-mailbox counters

pub mod bounded;
pub mod stats;

pub use bounded::{Mailbox, MailboxError, MailboxSender, TryRecvError};
pub use stats::MailboxStats;
