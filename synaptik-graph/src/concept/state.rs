// Layer 1: Standard library imports
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

// Layer 2: Third-party crate imports
use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;

// Layer 3: Internal module imports
use super::atomic::AtomicF64;
use super::relation::{Relation, RelationKind};
use super::tuning::{
    ACTIVATION_BOOST, ACTIVATION_CEIL, DEATH_ENERGY_FLOOR, DEATH_IDLE_SECS, DEATH_MIN_AGE_SECS,
    DEATH_STABILITY_FLOOR, DECAY_RATE, ENERGY_BOOST, ENERGY_CEIL, ENERGY_DECAY,
    MERGE_COMPLEXITY_CEIL, MERGE_STABILITY_CEIL, MIN_ACTIVATION, PROPAGATION_ATTENUATION,
    REINFORCE_FACTOR, REINFORCE_WINDOW_SECS, SPLIT_COMPLEXITY_FLOOR, SPLIT_RELATION_COUNT,
    STALE_AFTER_SECS, WEAKEN_FACTOR, WEIGHT_CEIL, WEIGHT_FLOOR,
};

/// Numeric state of one concept, shared between its actor task and
/// lock-free stats readers.
///
/// Scalars are atomics so `get_stats` never takes a lock; the relation
/// list is behind a mutex because only the actor task and scoped test
/// inspection ever touch it. Since at most one worker handles a concept at
/// a time, the mutex is uncontended in practice and exists for the
/// cross-thread stats path.
#[derive(Debug)]
pub struct ConceptState {
    id: u64,
    term: String,
    /// Unix seconds at creation. Immutable.
    birth_time: i64,
    activation: AtomicF64,
    energy: AtomicF64,
    stability: AtomicF64,
    complexity: AtomicF64,
    last_activation: AtomicI64,
    access_count: AtomicU64,
    relations: Mutex<Vec<Relation>>,
}

/// Point-in-time view of a concept's scalars, readable without touching
/// the actor. Eventually consistent with in-flight handlers.
#[derive(Debug, Clone, Serialize)]
pub struct ConceptSnapshot {
    pub term: String,
    pub activation: f64,
    pub energy: f64,
    pub stability: f64,
    pub complexity: f64,
    pub relation_count: usize,
    pub access_count: u64,
}

impl ConceptState {
    /// Create state for a freshly minted concept.
    pub fn new(id: u64, term: &str) -> Self {
        let now = Utc::now().timestamp();
        Self::with_birth(id, term, now)
    }

    /// Create state with an explicit birth instant. Lifecycle tests use
    /// this to age a concept without waiting a day.
    pub(crate) fn with_birth(id: u64, term: &str, birth_time: i64) -> Self {
        Self {
            id,
            term: term.to_string(),
            birth_time,
            activation: AtomicF64::new(0.0),
            energy: AtomicF64::new(1.0),
            stability: AtomicF64::new(0.0),
            complexity: AtomicF64::new(0.0),
            last_activation: AtomicI64::new(birth_time),
            access_count: AtomicU64::new(0),
            relations: Mutex::new(Vec::new()),
        }
    }

    /// External identity assigned by the facade.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The term this concept represents.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Unix seconds at creation.
    pub fn birth_time(&self) -> i64 {
        self.birth_time
    }

    pub fn activation(&self) -> f64 {
        self.activation.load()
    }

    pub fn energy(&self) -> f64 {
        self.energy.load()
    }

    pub fn stability(&self) -> f64 {
        self.stability.load()
    }

    pub fn complexity(&self) -> f64 {
        self.complexity.load()
    }

    /// Unix seconds of the most recent activation or injection.
    pub fn last_activation(&self) -> i64 {
        self.last_activation.load(Ordering::SeqCst)
    }

    pub fn access_count(&self) -> u64 {
        self.access_count.load(Ordering::SeqCst)
    }

    /// Seconds since creation, never negative.
    pub fn age_seconds(&self, now: i64) -> i64 {
        (now - self.birth_time).max(0)
    }

    pub fn relation_count(&self) -> usize {
        self.relations.lock().len()
    }

    /// Copy of the relation list, for stats inspection in tests.
    pub fn relations_snapshot(&self) -> Vec<Relation> {
        self.relations.lock().clone()
    }

    /// Record an access: stamp the activation clock, bump the counter.
    pub(crate) fn record_access(&self, now: i64) {
        self.last_activation.store(now, Ordering::SeqCst);
        self.access_count.fetch_add(1, Ordering::SeqCst);
    }

    /// Direct activation boost. Deliberately not clamped against
    /// [`ACTIVATION_CEIL`]; only propagation and injection clamp.
    pub(crate) fn boost_activation(&self) -> f64 {
        self.activation.update(|a| a + ACTIVATION_BOOST)
    }

    /// Energy boost on direct activation, clamped at the ceiling.
    pub(crate) fn boost_energy(&self) {
        self.energy.update(|e| (e + ENERGY_BOOST).min(ENERGY_CEIL));
    }

    /// Absorb attenuated activation from a neighbour, clamped at the
    /// ceiling.
    pub(crate) fn inject_activation(&self, strength: f64) {
        self.activation
            .update(|a| (a + strength).min(ACTIVATION_CEIL));
    }

    /// Multiplicative decay of activation and energy, floored at zero.
    pub(crate) fn decay(&self) {
        self.activation.update(|a| (a * DECAY_RATE).max(0.0));
        self.energy.update(|e| (e * ENERGY_DECAY).max(0.0));
    }

    /// Activation cost paid after a propagation pass.
    pub(crate) fn attenuate_after_propagation(&self) {
        self.activation.update(|a| a * DECAY_RATE);
    }

    /// stability = accesses per minute of lifetime, clamped to 1.
    pub(crate) fn refresh_stability(&self, now: i64) {
        let minutes = (self.age_seconds(now) / 60).max(1);
        let per_minute = self.access_count() as f64 / minutes as f64;
        self.stability.store(per_minute.min(1.0));
    }

    /// complexity = mean relation weight, zero when there are no edges.
    fn refresh_complexity_locked(&self, relations: &[Relation]) {
        let mean = if relations.is_empty() {
            0.0
        } else {
            relations.iter().map(|r| r.weight).sum::<f64>() / relations.len() as f64
        };
        self.complexity.store(mean);
    }

    /// Upsert an edge: `(target, kind)` is the identity, a re-add keeps
    /// the stronger weight and refreshes the access stamp. Returns true
    /// when a new edge was inserted.
    pub(crate) fn upsert_relation(
        &self,
        target: u64,
        kind: RelationKind,
        weight: f64,
        now: i64,
    ) -> bool {
        let mut relations = self.relations.lock();
        let inserted = match relations.iter().position(|r| r.matches(target, kind)) {
            Some(index) => {
                let existing = &mut relations[index];
                existing.weight = existing
                    .weight
                    .max(weight.clamp(WEIGHT_FLOOR, WEIGHT_CEIL));
                existing.last_accessed = now;
                false
            }
            None => {
                relations.push(Relation::new(target, kind, weight, now));
                true
            }
        };
        self.refresh_complexity_locked(&relations);
        inserted
    }

    /// Collect `(target, strength)` pairs for a propagation pass and stamp
    /// every relation as used. Strengths at or below [`MIN_ACTIVATION`]
    /// are filtered out. The caller is responsible for the cold-concept
    /// early return; by the time this runs, every relation gets its access
    /// stamp refreshed whether or not anything is emitted over it.
    pub(crate) fn collect_propagation(&self, now: i64) -> Vec<(u64, f64)> {
        let activation = self.activation();
        let mut relations = self.relations.lock();
        let mut out = Vec::with_capacity(relations.len());
        for relation in relations.iter_mut() {
            let strength = activation * relation.weight * PROPAGATION_ATTENUATION;
            if strength > MIN_ACTIVATION {
                out.push((relation.target, strength));
            }
            relation.last_accessed = now;
        }
        out
    }

    /// Learning pass: reinforce recently used edges, weaken stale ones,
    /// both clamped to the legal weight range. Refreshes complexity.
    pub(crate) fn adjust_weights(&self, now: i64) {
        let mut relations = self.relations.lock();
        for relation in relations.iter_mut() {
            let idle = now - relation.last_accessed;
            if idle < REINFORCE_WINDOW_SECS {
                relation.weight = (relation.weight * REINFORCE_FACTOR).min(WEIGHT_CEIL);
            } else if idle > STALE_AFTER_SECS {
                relation.weight = (relation.weight * WEAKEN_FACTOR).max(WEIGHT_FLOOR);
            }
        }
        self.refresh_complexity_locked(&relations);
    }

    /// Merge advisory: weak and simple.
    pub(crate) fn is_merge_candidate(&self) -> bool {
        self.stability() < MERGE_STABILITY_CEIL && self.complexity() < MERGE_COMPLEXITY_CEIL
    }

    /// Split advisory: complex and densely connected.
    pub(crate) fn is_split_candidate(&self) -> bool {
        self.complexity() > SPLIT_COMPLEXITY_FLOOR && self.relation_count() > SPLIT_RELATION_COUNT
    }

    /// Death test: old, idle past the window, and exhausted.
    pub(crate) fn is_death_candidate(&self, now: i64) -> bool {
        self.age_seconds(now) > DEATH_MIN_AGE_SECS
            && (now - self.last_activation()) > DEATH_IDLE_SECS
            && self.energy() < DEATH_ENERGY_FLOOR
            && self.stability() < DEATH_STABILITY_FLOOR
    }

    /// Lock-free scalar snapshot.
    pub fn snapshot(&self) -> ConceptSnapshot {
        ConceptSnapshot {
            term: self.term.clone(),
            activation: self.activation(),
            energy: self.energy(),
            stability: self.stability(),
            complexity: self.complexity(),
            relation_count: self.relation_count(),
            access_count: self.access_count(),
        }
    }

    /// Test hook: force the scalar fields into a chosen shape.
    #[cfg(test)]
    pub(crate) fn force_scalars(&self, activation: f64, energy: f64, stability: f64) {
        self.activation.store(activation);
        self.energy.store(energy);
        self.stability.store(stability);
    }

    /// Test hook: pretend the last activation happened at `when`.
    #[cfg(test)]
    pub(crate) fn force_last_activation(&self, when: i64) {
        self.last_activation.store(when, Ordering::SeqCst);
    }
}
