//! In-memory sink, for tests and dry runs.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Sink;
use crate::etl::entity::{Entity, EntityKind, Upsert};

#[derive(Default)]
struct State {
    entities: BTreeMap<(EntityKind, String), Entity>,
    history: Vec<Upsert>,
}

/// Keeps the latest entity per `(kind, id)` and the full write history.
#[derive(Default)]
pub struct MemorySink {
    state: Mutex<State>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        // A panic mid-insert leaves the maps consistent, so keep going.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, kind: EntityKind, id: &str) -> Option<Entity> {
        self.state().entities.get(&(kind, id.to_string())).cloned()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.state()
            .entities
            .keys()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Number of distinct stored entities across all kinds.
    pub fn len(&self) -> usize {
        self.state().entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().entities.is_empty()
    }

    /// Stored state, ordered by kind then id.
    pub fn snapshot(&self) -> BTreeMap<(EntityKind, String), Entity> {
        self.state().entities.clone()
    }

    /// Every upsert received, in arrival order.
    pub fn history(&self) -> Vec<Upsert> {
        self.state().history.clone()
    }

    pub fn clear(&self) {
        let mut state = self.state();
        state.entities.clear();
        state.history.clear();
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn upsert(&self, upsert: &Upsert) -> anyhow::Result<()> {
        let mut state = self.state();
        state
            .entities
            .insert((upsert.kind(), upsert.id.clone()), upsert.entity.clone());
        state.history.push(upsert.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::etl::entity::{AttrEntity, SignatureEntity};

    fn attr(id: &str, value: &str) -> Upsert {
        Upsert::new(
            id.to_string(),
            Entity::Attr(AttrEntity {
                key: "k".to_string(),
                value: value.to_string(),
            }),
        )
    }

    #[test]
    fn test_upsert_overwrites_same_key() {
        let sink = MemorySink::new();
        sink.upsert(&attr("e-0", "1")).unwrap();
        sink.upsert(&attr("e-0", "2")).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.history().len(), 2);
        assert_eq!(
            sink.get(EntityKind::Attr, "e-0"),
            Some(Entity::Attr(AttrEntity {
                key: "k".to_string(),
                value: "2".to_string(),
            }))
        );
    }

    #[test]
    fn test_kinds_do_not_collide() {
        let sink = MemorySink::new();
        sink.upsert(&attr("x-0", "1")).unwrap();
        sink.upsert(&Upsert::new(
            "x-0".to_string(),
            Entity::Signature(SignatureEntity {
                value: "ff".to_string(),
            }),
        ))
        .unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.count(EntityKind::Attr), 1);
        assert_eq!(sink.count(EntityKind::Signature), 1);
    }

    #[test]
    fn test_replaying_history_converges() {
        let sink = MemorySink::new();
        let batch = [attr("a-0", "1"), attr("a-1", "2")];
        sink.upsert_all(&batch).unwrap();
        let once = sink.snapshot();
        sink.upsert_all(&batch).unwrap();
        assert_eq!(sink.snapshot(), once);

        sink.clear();
        assert!(sink.is_empty());
        assert!(sink.history().is_empty());
    }
}
