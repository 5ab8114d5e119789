//! Tuning constants for the concept state machine.
//!
//! Weights, thresholds, and decay factors live here so every handler and
//! test reads the same numbers.

/// Activation gained by a direct activation.
pub const ACTIVATION_BOOST: f64 = 0.1;

/// Upper clamp applied by propagation and injection. Direct activation is
/// deliberately not clamped against this bound; see DESIGN.md.
pub const ACTIVATION_CEIL: f64 = 2.0;

/// Energy gained by a direct activation.
pub const ENERGY_BOOST: f64 = 0.5;

/// Upper clamp on energy.
pub const ENERGY_CEIL: f64 = 2.0;

/// A concept propagates inline when a direct activation pushes it past
/// this level.
pub const PROPAGATION_THRESHOLD: f64 = 0.3;

/// Below this activation a concept neither propagates nor sends
/// per-relation strengths.
pub const MIN_ACTIVATION: f64 = 0.1;

/// Fraction of `activation × weight` that actually reaches a neighbour.
pub const PROPAGATION_ATTENUATION: f64 = 0.5;

/// Multiplicative activation decay (after propagation and on decay ticks).
pub const DECAY_RATE: f64 = 0.95;

/// Multiplicative energy decay on decay ticks.
pub const ENERGY_DECAY: f64 = 0.99;

/// Legal relation weight range.
pub const WEIGHT_FLOOR: f64 = 0.1;
pub const WEIGHT_CEIL: f64 = 1.0;

/// Learning: relations used within this window are reinforced.
pub const REINFORCE_WINDOW_SECS: i64 = 3600;

/// Learning: relations untouched for longer than this are weakened.
pub const STALE_AFTER_SECS: i64 = 86_400;

/// Learning multipliers.
pub const REINFORCE_FACTOR: f64 = 1.05;
pub const WEAKEN_FACTOR: f64 = 0.95;

/// Merge advisory: weak and simple.
pub const MERGE_STABILITY_CEIL: f64 = 0.3;
pub const MERGE_COMPLEXITY_CEIL: f64 = 0.2;

/// Split advisory: complex and densely connected.
pub const SPLIT_COMPLEXITY_FLOOR: f64 = 0.8;
pub const SPLIT_RELATION_COUNT: usize = 20;

/// Death: minimum age, idle window, and exhaustion floors.
pub const DEATH_MIN_AGE_SECS: i64 = 86_400;
pub const DEATH_IDLE_SECS: i64 = 3600;
pub const DEATH_ENERGY_FLOOR: f64 = 0.1;
pub const DEATH_STABILITY_FLOOR: f64 = 0.1;

/// Minimum spacing between maintenance sweeps.
pub const MAINTENANCE_INTERVAL_SECS: i64 = 60;
