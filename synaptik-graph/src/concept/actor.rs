// Layer 1: Standard library imports
use std::convert::Infallible;
use std::sync::Arc;

// Layer 2: Third-party crate imports
use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

// Layer 3: Internal module imports
use super::state::ConceptState;
use super::tuning::{MIN_ACTIVATION, PROPAGATION_THRESHOLD};
use crate::graph::directory::ConceptDirectory;
use crate::message::ConceptMessage;
use synaptik_rt::{Actor, ActorContext};

/// The actor behind one concept.
///
/// Holds the shared numeric state (also readable lock-free by stats
/// callers) and a directory handle for resolving relation targets to actor
/// handles. All mutation happens here, one message at a time.
pub struct ConceptActor {
    state: Arc<ConceptState>,
    directory: ConceptDirectory,
}

impl ConceptActor {
    pub(crate) fn new(state: Arc<ConceptState>, directory: ConceptDirectory) -> Self {
        Self { state, directory }
    }

    /// Direct activation: boost, record the access, gain energy, refresh
    /// stability, and propagate inline once hot enough.
    fn on_activate(&self, now: i64, context: &ActorContext<ConceptMessage>) {
        let activation = self.state.boost_activation();
        self.state.record_access(now);
        self.state.boost_energy();
        self.state.refresh_stability(now);

        if activation > PROPAGATION_THRESHOLD {
            self.on_propagate(now, context);
        }
    }

    /// Spread attenuated activation over every relation, then pay the
    /// propagation cost. Cold concepts return before touching relations.
    fn on_propagate(&self, now: i64, context: &ActorContext<ConceptMessage>) {
        if self.state.activation() < MIN_ACTIVATION {
            return;
        }

        // Targets are collected under the relations lock, sends happen
        // after it is released.
        for (concept_id, strength) in self.state.collect_propagation(now) {
            if let Some(actor) = self.directory.actor_for(concept_id) {
                context.send(actor, ConceptMessage::Inject { strength });
            }
        }

        self.state.attenuate_after_propagation();
    }
}

#[async_trait]
impl Actor for ConceptActor {
    type Message = ConceptMessage;
    type Error = Infallible;

    async fn handle_message(
        &mut self,
        message: Self::Message,
        context: &mut ActorContext<Self::Message>,
    ) -> Result<(), Self::Error> {
        let now = Utc::now().timestamp();
        match message {
            ConceptMessage::Activate => self.on_activate(now, context),
            ConceptMessage::Propagate => self.on_propagate(now, context),
            ConceptMessage::Inject { strength } => {
                // Absorb without re-propagating: injected activation never
                // chains, which keeps cyclic graphs quiet.
                self.state.inject_activation(strength);
                self.state.record_access(now);
            }
            ConceptMessage::AddRelation {
                target,
                kind,
                weight,
            } => {
                self.state.upsert_relation(target, kind, weight, now);
            }
            ConceptMessage::Learn => self.state.adjust_weights(now),
            ConceptMessage::Decay => self.state.decay(),
            ConceptMessage::MergeCheck => {
                if self.state.is_merge_candidate() {
                    info!(
                        concept = self.state.id(),
                        term = self.state.term(),
                        stability = self.state.stability(),
                        complexity = self.state.complexity(),
                        "concept flagged for merge"
                    );
                }
            }
            ConceptMessage::SplitCheck => {
                if self.state.is_split_candidate() {
                    info!(
                        concept = self.state.id(),
                        term = self.state.term(),
                        complexity = self.state.complexity(),
                        relations = self.state.relation_count(),
                        "concept flagged for split"
                    );
                }
            }
            ConceptMessage::DeathCheck => {
                if self.state.is_death_candidate(now) {
                    info!(
                        concept = self.state.id(),
                        term = self.state.term(),
                        "concept died"
                    );
                    context.poison_self();
                }
            }
        }
        Ok(())
    }

    async fn stopped(&mut self, context: &mut ActorContext<Self::Message>) {
        // Drop this concept from the directory so its id stops resolving.
        // Guarded by our own handles: a concept that lost a creation race
        // must not evict the winner's entries.
        self.directory
            .forget(self.state.id(), self.state.term(), context.id());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::concept::relation::RelationKind;
    use crate::concept::tuning::{DEATH_IDLE_SECS, DEATH_MIN_AGE_SECS};
    use crate::graph::directory::ConceptHandle;
    use synaptik_rt::{ActorSystem, SystemConfig};

    async fn spawn_concept(
        system: &ActorSystem<ConceptMessage>,
        directory: &ConceptDirectory,
        id: u64,
        term: &str,
    ) -> (synaptik_rt::ActorId, Arc<ConceptState>) {
        let state = Arc::new(ConceptState::new(id, term));
        let actor = system
            .spawn(ConceptActor::new(Arc::clone(&state), directory.clone()))
            .await
            .unwrap();
        directory.insert(
            id,
            ConceptHandle {
                actor,
                state: Arc::clone(&state),
            },
        );
        directory.claim_term(directory.hash_term(term), id).unwrap();
        (actor, state)
    }

    #[tokio::test]
    async fn test_activate_updates_scalars() {
        let system = ActorSystem::new(SystemConfig::default());
        let directory = ConceptDirectory::new();
        let (actor, state) = spawn_concept(&system, &directory, 1, "spark").await;

        system.send(actor, ConceptMessage::Activate).await.unwrap();
        system.wait_all().await;

        assert!((state.activation() - 0.1).abs() < 1e-9);
        assert!((state.energy() - 1.5).abs() < 1e-9);
        assert_eq!(state.access_count(), 1);
        assert!(state.stability() > 0.0);
    }

    #[tokio::test]
    async fn test_propagation_reaches_neighbour() {
        let system = ActorSystem::new(SystemConfig::default());
        let directory = ConceptDirectory::new();
        let (a, state_a) = spawn_concept(&system, &directory, 1, "fire").await;
        let (_b, state_b) = spawn_concept(&system, &directory, 2, "smoke").await;

        system
            .send(
                a,
                ConceptMessage::AddRelation {
                    target: 2,
                    kind: RelationKind::Causes,
                    weight: 1.0,
                },
            )
            .await
            .unwrap();
        system.wait_all().await;

        // Four activations push "fire" past the propagation threshold with
        // enough strength to clear the per-edge minimum.
        for _ in 0..4 {
            system.send(a, ConceptMessage::Activate).await.unwrap();
        }
        system.wait_all().await;

        assert!(state_a.activation() > 0.0);
        assert!(state_b.activation() > 0.0, "propagation never arrived");
    }

    #[tokio::test]
    async fn test_injection_does_not_chain() {
        let system = ActorSystem::new(SystemConfig::default());
        let directory = ConceptDirectory::new();
        let (a, _state_a) = spawn_concept(&system, &directory, 1, "alpha").await;
        let (_b, state_b) = spawn_concept(&system, &directory, 2, "beta").await;

        // alpha → beta with full weight; then inject a large strength into
        // alpha. Injection must not propagate, so beta stays silent.
        system
            .send(
                a,
                ConceptMessage::AddRelation {
                    target: 2,
                    kind: RelationKind::AssociatedWith,
                    weight: 1.0,
                },
            )
            .await
            .unwrap();
        system
            .send(a, ConceptMessage::Inject { strength: 2.0 })
            .await
            .unwrap();
        system.wait_all().await;

        assert_eq!(state_b.activation(), 0.0);
    }

    #[tokio::test]
    async fn test_death_check_poisons_and_unregisters() {
        let system = ActorSystem::new(SystemConfig::default());
        let directory = ConceptDirectory::new();
        let now = Utc::now().timestamp();

        // A concept past every death threshold.
        let state = Arc::new(ConceptState::with_birth(
            9,
            "forgotten",
            now - DEATH_MIN_AGE_SECS - 100,
        ));
        state.force_scalars(0.0, 0.01, 0.01);
        state.force_last_activation(now - DEATH_IDLE_SECS - 100);

        let actor = system
            .spawn(ConceptActor::new(Arc::clone(&state), directory.clone()))
            .await
            .unwrap();
        directory.insert(
            9,
            ConceptHandle {
                actor,
                state: Arc::clone(&state),
            },
        );
        directory
            .claim_term(directory.hash_term("forgotten"), 9)
            .unwrap();

        system.send(actor, ConceptMessage::DeathCheck).await.unwrap();
        system.wait_all().await;

        // The stopped hook (directory cleanup) runs on the dying actor's
        // task shortly after the mailbox drains.
        for _ in 0..100 {
            if directory.actor_for(9).is_none() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        assert!(!system.contains(actor));
        assert!(directory.actor_for(9).is_none());
        assert!(directory.concept_for_term(directory.hash_term("forgotten")).is_none());
        assert!(system.send(actor, ConceptMessage::Activate).await.is_err());
    }

    #[tokio::test]
    async fn test_death_check_spares_the_living() {
        let system = ActorSystem::new(SystemConfig::default());
        let directory = ConceptDirectory::new();
        let (actor, _state) = spawn_concept(&system, &directory, 1, "alive").await;

        system.send(actor, ConceptMessage::Activate).await.unwrap();
        system.send(actor, ConceptMessage::DeathCheck).await.unwrap();
        system.wait_all().await;

        assert!(system.contains(actor));
        assert!(directory.actor_for(1).is_some());
    }
}
