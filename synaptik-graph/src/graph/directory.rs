//! Concurrent directory from external identities to live concepts.
//!
//! Two u64-keyed maps backed by DashMap: term hash → concept id, and
//! concept id → handle (actor handle plus shared state). Shard-level
//! locking means a reader racing a writer sees the old or the new value,
//! never a torn one; the id snapshot taken for iteration is point-in-time
//! and mutations racing it may or may not be observed.

// Layer 1: Standard library imports
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

// Layer 2: Third-party crate imports
use dashmap::DashMap;

// Layer 3: Internal module imports
use crate::concept::state::ConceptState;
use synaptik_rt::ActorId;

/// A live concept: its actor handle and its shared numeric state.
pub struct ConceptHandle {
    /// Runtime handle for message delivery.
    pub actor: ActorId,
    /// Shared state for lock-free stats reads.
    pub state: Arc<ConceptState>,
}

impl Clone for ConceptHandle {
    fn clone(&self) -> Self {
        Self {
            actor: self.actor,
            state: Arc::clone(&self.state),
        }
    }
}

/// Arc-shared directory; clones are cheap and observe the same maps.
pub struct ConceptDirectory {
    /// term hash → concept id
    terms: Arc<DashMap<u64, u64>>,
    /// concept id → handle
    concepts: Arc<DashMap<u64, ConceptHandle>>,
}

impl Clone for ConceptDirectory {
    fn clone(&self) -> Self {
        Self {
            terms: Arc::clone(&self.terms),
            concepts: Arc::clone(&self.concepts),
        }
    }
}

impl Default for ConceptDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConceptDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            terms: Arc::new(DashMap::new()),
            concepts: Arc::new(DashMap::new()),
        }
    }

    /// Create with pre-sized tables.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: Arc::new(DashMap::with_capacity(capacity)),
            concepts: Arc::new(DashMap::with_capacity(capacity)),
        }
    }

    /// Stable term hash. DefaultHasher with fixed initial state: the same
    /// term always hashes the same way within a process. Distinct terms
    /// colliding would silently alias their concepts; at 64 bits that is
    /// vanishingly rare for any realistic corpus.
    pub fn hash_term(&self, term: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        term.hash(&mut hasher);
        hasher.finish()
    }

    /// Look up the concept id a term hash maps to.
    pub fn concept_for_term(&self, term_hash: u64) -> Option<u64> {
        self.terms.get(&term_hash).map(|entry| *entry.value())
    }

    /// Claim a term hash for a concept id. First writer wins; a loser gets
    /// the winner's id back.
    pub fn claim_term(&self, term_hash: u64, concept_id: u64) -> Result<(), u64> {
        match self.terms.entry(term_hash) {
            dashmap::mapref::entry::Entry::Occupied(existing) => Err(*existing.get()),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(concept_id);
                Ok(())
            }
        }
    }

    /// Insert or overwrite a concept's handle.
    pub fn insert(&self, concept_id: u64, handle: ConceptHandle) {
        self.concepts.insert(concept_id, handle);
    }

    /// Remove a concept's handle.
    pub fn remove_concept(&self, concept_id: u64) -> Option<ConceptHandle> {
        self.concepts.remove(&concept_id).map(|(_, handle)| handle)
    }

    /// Full handle for a concept id.
    pub fn handle(&self, concept_id: u64) -> Option<ConceptHandle> {
        self.concepts.get(&concept_id).map(|entry| entry.value().clone())
    }

    /// Actor handle for a concept id.
    pub fn actor_for(&self, concept_id: u64) -> Option<ActorId> {
        self.concepts.get(&concept_id).map(|entry| entry.value().actor)
    }

    /// Shared state for a concept id.
    pub fn state_for(&self, concept_id: u64) -> Option<Arc<ConceptState>> {
        self.concepts
            .get(&concept_id)
            .map(|entry| Arc::clone(&entry.value().state))
    }

    /// Number of live concepts.
    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    /// Point-in-time snapshot of all live concept ids.
    pub fn concept_ids(&self) -> Vec<u64> {
        self.concepts.iter().map(|entry| *entry.key()).collect()
    }

    /// Erase a dying concept's entries, but only the entries that are
    /// actually its own: a concept that lost a creation race carries the
    /// same term as the winner and must not evict the winner's mappings.
    pub(crate) fn forget(&self, concept_id: u64, term: &str, actor: ActorId) {
        let removed = self
            .concepts
            .remove_if(&concept_id, |_, handle| handle.actor == actor)
            .is_some();
        if removed {
            let term_hash = self.hash_term(term);
            self.terms.remove_if(&term_hash, |_, id| *id == concept_id);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn handle(concept_id: u64, term: &str, actor: ActorId) -> ConceptHandle {
        ConceptHandle {
            actor,
            state: Arc::new(ConceptState::new(concept_id, term)),
        }
    }

    #[test]
    fn test_hash_term_is_stable() {
        let directory = ConceptDirectory::new();
        assert_eq!(directory.hash_term("book"), directory.hash_term("book"));
        assert_ne!(directory.hash_term("book"), directory.hash_term("boot"));
    }

    #[test]
    fn test_claim_term_first_writer_wins() {
        let directory = ConceptDirectory::new();
        let term_hash = directory.hash_term("river");

        assert!(directory.claim_term(term_hash, 1).is_ok());
        assert_eq!(directory.claim_term(term_hash, 2), Err(1));
        assert_eq!(directory.concept_for_term(term_hash), Some(1));
    }

    #[test]
    fn test_insert_resolve_remove() {
        let directory = ConceptDirectory::new();
        let actor = ActorId::next();
        directory.insert(1, handle(1, "stone", actor));

        assert_eq!(directory.concept_count(), 1);
        assert_eq!(directory.actor_for(1), Some(actor));
        assert!(directory.state_for(1).is_some());
        assert!(directory.handle(1).is_some());

        assert!(directory.remove_concept(1).is_some());
        assert_eq!(directory.concept_count(), 0);
        assert!(directory.actor_for(1).is_none());
    }

    #[test]
    fn test_concept_ids_snapshot() {
        let directory = ConceptDirectory::new();
        for id in 1..=4 {
            directory.insert(id, handle(id, "t", ActorId::next()));
        }

        let mut ids = directory.concept_ids();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_forget_removes_own_entries() {
        let directory = ConceptDirectory::new();
        let actor = ActorId::next();
        let term_hash = directory.hash_term("cloud");

        directory.insert(1, handle(1, "cloud", actor));
        directory.claim_term(term_hash, 1).unwrap();

        directory.forget(1, "cloud", actor);
        assert!(directory.actor_for(1).is_none());
        assert!(directory.concept_for_term(term_hash).is_none());
    }

    #[test]
    fn test_forget_spares_race_winner() {
        let directory = ConceptDirectory::new();
        let winner_actor = ActorId::next();
        let loser_actor = ActorId::next();
        let term_hash = directory.hash_term("cloud");

        // Winner owns both mappings.
        directory.insert(1, handle(1, "cloud", winner_actor));
        directory.claim_term(term_hash, 1).unwrap();

        // The loser (id 2, same term) dies and must not evict the winner.
        directory.forget(2, "cloud", loser_actor);
        assert_eq!(directory.actor_for(1), Some(winner_actor));
        assert_eq!(directory.concept_for_term(term_hash), Some(1));
    }

    #[test]
    fn test_clone_shares_maps() {
        let directory = ConceptDirectory::new();
        let copy = directory.clone();

        directory.insert(1, handle(1, "shared", ActorId::next()));
        assert_eq!(copy.concept_count(), 1);
    }

    #[test]
    fn test_with_capacity() {
        let directory = ConceptDirectory::with_capacity(500);
        assert_eq!(directory.concept_count(), 0);
    }
}
