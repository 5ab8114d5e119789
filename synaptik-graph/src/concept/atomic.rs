// Layer 1: Standard library imports
use std::sync::atomic::{AtomicU64, Ordering};

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
// (none)

/// An `f64` readable and writable from any thread, stored as raw bits in
/// an `AtomicU64`.
///
/// All operations use `Ordering::SeqCst`: concept scalars are read
/// cross-field by lock-free stats snapshots, and sequential consistency
/// keeps those reads coherent with handler writes.
///
/// # Example
/// ```rust
/// use synaptik_graph::concept::atomic::AtomicF64;
///
/// let value = AtomicF64::new(1.5);
/// value.update(|v| (v + 1.0).min(2.0));
/// assert!((value.load() - 2.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug)]
pub struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    /// Create with an initial value.
    pub fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    /// Read the current value.
    pub fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::SeqCst))
    }

    /// Overwrite the current value.
    pub fn store(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::SeqCst);
    }

    /// Atomically replace the value with `f(current)`, returning the new
    /// value. Retries on contention; `f` must be pure.
    pub fn update<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mut current = self.bits.load(Ordering::SeqCst);
        loop {
            let next = f(f64::from_bits(current)).to_bits();
            match self
                .bits
                .compare_exchange_weak(current, next, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return f64::from_bits(next),
                Err(actual) => current = actual,
            }
        }
    }
}

impl Default for AtomicF64 {
    fn default() -> Self {
        Self::new(0.0)
    }
}
