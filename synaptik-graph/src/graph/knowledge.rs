//! The knowledge graph facade: external ids in, actor messages out.

// Layer 1: Standard library imports
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

// Layer 2: Third-party crate imports
use chrono::Utc;
use tracing::{debug, warn};

// Layer 3: Internal module imports
use super::directory::{ConceptDirectory, ConceptHandle};
use crate::concept::actor::ConceptActor;
use crate::concept::relation::RelationKind;
use crate::concept::state::{ConceptSnapshot, ConceptState};
use crate::concept::tuning::MAINTENANCE_INTERVAL_SECS;
use crate::error::GraphError;
use crate::message::ConceptMessage;
use synaptik_rt::{ActorSystem, SystemConfig};

/// The external face of the engine.
///
/// Owns the actor system and the concept directory, translates concept ids
/// and terms into actor handles, and turns every operation into messages.
/// Unknown ids are silent no-ops on all send paths; only synchronous
/// bookkeeping (spawn, configuration) reports errors.
pub struct KnowledgeGraph {
    system: ActorSystem<ConceptMessage>,
    directory: ConceptDirectory,
    next_concept_id: AtomicU64,
    last_maintenance: AtomicI64,
}

impl KnowledgeGraph {
    /// Create an engine with `workers` parallel message handlers and
    /// directory tables pre-sized for `initial_capacity` concepts.
    ///
    /// # Errors
    ///
    /// [`GraphError::Config`] when `workers` is zero.
    pub fn init(workers: usize, initial_capacity: usize) -> Result<Self, GraphError> {
        let config = SystemConfig::builder()
            .with_worker_permits(workers)
            .build()
            .map_err(GraphError::Config)?;
        Ok(Self::with_config(config, initial_capacity))
    }

    /// Create an engine from a full runtime configuration.
    pub fn with_config(config: SystemConfig, initial_capacity: usize) -> Self {
        Self {
            system: ActorSystem::new(config),
            directory: ConceptDirectory::with_capacity(initial_capacity),
            next_concept_id: AtomicU64::new(1),
            last_maintenance: AtomicI64::new(0),
        }
    }

    /// The underlying actor system.
    pub fn system(&self) -> &ActorSystem<ConceptMessage> {
        &self.system
    }

    pub(crate) fn directory(&self) -> &ConceptDirectory {
        &self.directory
    }

    /// Number of live concepts.
    pub fn concept_count(&self) -> usize {
        self.directory.concept_count()
    }

    /// Create a concept for a term, or return the existing one.
    ///
    /// Idempotent: the same term always yields the same id, including for
    /// concurrent callers racing on a brand-new term (the loser's
    /// just-spawned actor is poisoned before anything could address it).
    ///
    /// # Errors
    ///
    /// [`GraphError::Runtime`] when the actor system refuses the spawn
    /// (shutdown in progress, actor limit reached).
    pub async fn create_concept(&self, term: &str) -> Result<u64, GraphError> {
        let term_hash = self.directory.hash_term(term);
        if let Some(existing) = self.directory.concept_for_term(term_hash) {
            return Ok(existing);
        }

        let concept_id = self.next_concept_id.fetch_add(1, Ordering::SeqCst);
        let state = Arc::new(ConceptState::new(concept_id, term));
        let actor = self
            .system
            .spawn(ConceptActor::new(
                Arc::clone(&state),
                self.directory.clone(),
            ))
            .await?;

        // Handle first, term second: a resolvable term mapping must always
        // find its concept already present.
        self.directory
            .insert(concept_id, ConceptHandle { actor, state });
        match self.directory.claim_term(term_hash, concept_id) {
            Ok(()) => {
                debug!(concept = concept_id, term, "created concept");
                Ok(concept_id)
            }
            Err(winner) => {
                // Lost an in-flight duplicate race; fold into the winner.
                self.directory.remove_concept(concept_id);
                let _ = self.system.poison(actor);
                Ok(winner)
            }
        }
    }

    /// Send a full activation to a concept. Unknown id → no-op.
    pub async fn activate_concept(&self, concept_id: u64) {
        self.send_to_concept(concept_id, ConceptMessage::Activate)
            .await;
    }

    /// Send attenuated activation to a concept. Unknown id → no-op.
    pub async fn send_activation(&self, concept_id: u64, strength: f64) {
        self.send_to_concept(concept_id, ConceptMessage::Inject { strength })
            .await;
    }

    /// Upsert a relation on the source concept. Unknown source → no-op.
    /// The target id is carried as data; it is resolved at propagation
    /// time, so relations to not-yet-created or already-dead concepts are
    /// legal and simply never fire.
    pub async fn add_relation(
        &self,
        source_id: u64,
        target_id: u64,
        kind: RelationKind,
        weight: f64,
    ) {
        self.send_to_concept(
            source_id,
            ConceptMessage::AddRelation {
                target: target_id,
                kind,
                weight,
            },
        )
        .await;
    }

    /// Pure lookup: term → concept id, no side effects.
    pub fn find_concept(&self, term: &str) -> Option<u64> {
        self.directory
            .concept_for_term(self.directory.hash_term(term))
    }

    /// Lookup that also activates the found concept.
    pub async fn query(&self, term: &str) -> Option<u64> {
        let concept_id = self.find_concept(term)?;
        self.activate_concept(concept_id).await;
        Some(concept_id)
    }

    /// Lock-free stats snapshot. Eventually consistent with in-flight
    /// handlers; unknown id → None.
    pub fn get_stats(&self, concept_id: u64) -> Option<ConceptSnapshot> {
        self.directory
            .state_for(concept_id)
            .map(|state| state.snapshot())
    }

    /// Periodic upkeep: at most once per minute, send every concept a
    /// decay tick and a death check. Concurrent callers race on an atomic
    /// stamp, so exactly one of them runs the sweep.
    pub async fn run_maintenance(&self) {
        let now = Utc::now().timestamp();
        let last = self.last_maintenance.load(Ordering::SeqCst);
        if now - last <= MAINTENANCE_INTERVAL_SECS {
            return;
        }
        if self
            .last_maintenance
            .compare_exchange(last, now, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        debug!(concepts = self.concept_count(), "running maintenance sweep");
        self.sweep(&[ConceptMessage::Decay, ConceptMessage::DeathCheck])
            .await;
    }

    /// Consolidation pass: adjust every concept's relation weights by
    /// recency, then run the merge/split advisories. Unlike maintenance
    /// this is not rate-limited; callers choose the cadence.
    pub async fn run_consolidation(&self) {
        self.sweep(&[
            ConceptMessage::Learn,
            ConceptMessage::MergeCheck,
            ConceptMessage::SplitCheck,
        ])
        .await;
    }

    /// Block until every mailbox is empty and no handler is running.
    pub async fn wait_all(&self) {
        self.system.wait_all().await;
    }

    /// Block until one concept's mailbox is drained. Unknown id → returns
    /// immediately.
    pub async fn wait_for(&self, concept_id: u64) {
        if let Some(actor) = self.directory.actor_for(concept_id) {
            self.system.wait_for_actor(actor).await;
        }
    }

    /// Poison every concept and stop the runtime.
    ///
    /// # Errors
    ///
    /// [`GraphError::Runtime`] when already shut down or when actor tasks
    /// outlive the configured timeout.
    pub async fn shutdown(&self) -> Result<(), GraphError> {
        self.system.shutdown().await?;
        Ok(())
    }

    /// Route one message to a concept, treating gone targets as no-ops.
    async fn send_to_concept(&self, concept_id: u64, message: ConceptMessage) {
        let Some(actor) = self.directory.actor_for(concept_id) else {
            debug!(concept = concept_id, "dropping message for unknown concept");
            return;
        };
        if let Err(error) = self.system.send(actor, message).await {
            if !error.is_gone() {
                warn!(concept = concept_id, %error, "failed to deliver concept message");
            }
        }
    }

    /// Send a fixed message sequence to every live concept. Concepts dying
    /// mid-sweep are skipped without fuss.
    async fn sweep(&self, messages: &[ConceptMessage]) {
        for concept_id in self.directory.concept_ids() {
            let Some(actor) = self.directory.actor_for(concept_id) else {
                continue;
            };
            for message in messages.iter().cloned() {
                if let Err(error) = self.system.send(actor, message).await {
                    if !error.is_gone() {
                        warn!(concept = concept_id, %error, "maintenance send failed");
                    }
                    break;
                }
            }
        }
    }
}
