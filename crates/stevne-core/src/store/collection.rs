// ── Ordered reactive entity collection ──
//
// The canonical mirror of one remote collection. Order is server fetch
// order, amended by local writes. Every mutation goes through the `watch`
// sender, so subscribers see each confirmed change as one atomic snapshot.

use std::sync::Arc;

use tokio::sync::watch;

use crate::entity::Entity;
use crate::model::EntityId;

/// Shared, immutable view of a collection at one point in time.
pub type Snapshot<T> = Arc<Vec<Arc<T>>>;

/// An ordered, reactive collection for a single entity kind.
pub(crate) struct EntityCollection<T: Entity> {
    snapshot: watch::Sender<Snapshot<T>>,
}

impl<T: Entity> EntityCollection<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self { snapshot }
    }

    /// Replace the whole collection, keeping the given order.
    pub(crate) fn replace_all(&self, items: Vec<T>) {
        let values: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        // `send_replace` updates unconditionally, even with zero receivers.
        self.snapshot.send_replace(Arc::new(values));
    }

    /// Append an entity, or replace the element already holding its
    /// identity. Returns `true` if the identity was new.
    pub(crate) fn upsert(&self, entity: T) -> bool {
        let mut is_new = false;
        self.snapshot.send_modify(|snap| {
            let items = Arc::make_mut(snap);
            if let Some(slot) = items.iter_mut().find(|e| e.id() == entity.id()) {
                *slot = Arc::new(entity);
            } else {
                items.push(Arc::new(entity));
                is_new = true;
            }
        });
        is_new
    }

    /// Replace the element with identity `id` in place. Returns `false`
    /// (and notifies nobody) if no such element exists.
    pub(crate) fn replace(&self, id: &EntityId, entity: T) -> bool {
        self.snapshot.send_if_modified(move |snap| {
            let Some(pos) = snap.iter().position(|e| e.id() == id) else {
                return false;
            };
            match Arc::make_mut(snap).get_mut(pos) {
                Some(slot) => {
                    *slot = Arc::new(entity);
                    true
                }
                None => false,
            }
        })
    }

    /// Remove the element with identity `id`. Returns it if it existed.
    pub(crate) fn remove(&self, id: &EntityId) -> Option<Arc<T>> {
        let mut removed = None;
        self.snapshot.send_if_modified(|snap| {
            let Some(pos) = snap.iter().position(|e| e.id() == id) else {
                return false;
            };
            removed = Some(Arc::make_mut(snap).remove(pos));
            true
        });
        removed
    }

    /// Look up an entity by identity.
    pub(crate) fn get(&self, id: &EntityId) -> Option<Arc<T>> {
        self.snapshot
            .borrow()
            .iter()
            .find(|e| e.id() == id)
            .map(Arc::clone)
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Snapshot<T> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Discipline, EntityId};

    fn discipline(id: &str, name: &str) -> Discipline {
        Discipline {
            id: EntityId::from(id),
            name: name.into(),
            result_type: "tid".into(),
            participant_ids: Vec::new(),
        }
    }

    fn names(col: &EntityCollection<Discipline>) -> Vec<String> {
        col.snapshot().iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn upsert_appends_new_identity() {
        let col = EntityCollection::new();
        assert!(col.upsert(discipline("1", "100m")));
        assert!(col.upsert(discipline("2", "Spyd")));
        assert_eq!(names(&col), vec!["100m", "Spyd"]);
    }

    #[test]
    fn upsert_existing_identity_replaces_in_place() {
        let col = EntityCollection::new();
        col.replace_all(vec![discipline("1", "100m"), discipline("2", "Spyd")]);
        assert!(!col.upsert(discipline("1", "200m")));
        assert_eq!(names(&col), vec!["200m", "Spyd"]);
        assert_eq!(col.len(), 2);
    }

    #[test]
    fn replace_preserves_position() {
        let col = EntityCollection::new();
        col.replace_all(vec![
            discipline("1", "100m"),
            discipline("2", "Spyd"),
            discipline("3", "Kugle"),
        ]);
        assert!(col.replace(&EntityId::from("2"), discipline("2", "Diskos")));
        assert_eq!(names(&col), vec!["100m", "Diskos", "Kugle"]);
    }

    #[test]
    fn replace_missing_identity_is_a_no_op() {
        let col = EntityCollection::new();
        col.replace_all(vec![discipline("1", "100m")]);
        let mut rx = col.subscribe();
        rx.mark_unchanged();

        assert!(!col.replace(&EntityId::from("9"), discipline("9", "Stang")));
        assert_eq!(names(&col), vec!["100m"]);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn remove_takes_exactly_one() {
        let col = EntityCollection::new();
        col.replace_all(vec![
            discipline("1", "100m"),
            discipline("2", "Spyd"),
            discipline("3", "Kugle"),
        ]);
        let removed = col.remove(&EntityId::from("2")).unwrap();
        assert_eq!(removed.name, "Spyd");
        assert_eq!(names(&col), vec!["100m", "Kugle"]);
        assert!(col.remove(&EntityId::from("2")).is_none());
        assert!(col.get(&EntityId::from("2")).is_none());
    }

    #[test]
    fn old_snapshots_are_not_mutated() {
        let col = EntityCollection::new();
        col.replace_all(vec![discipline("1", "100m")]);
        let before = col.snapshot();
        col.upsert(discipline("2", "Spyd"));
        assert_eq!(before.len(), 1);
        assert_eq!(col.snapshot().len(), 2);
    }

    #[test]
    fn subscribers_see_mutations() {
        let col = EntityCollection::new();
        let mut rx = col.subscribe();
        rx.mark_unchanged();
        col.upsert(discipline("1", "100m"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
    }
}
