// ── View projector ──
//
// Holds the active view parameters for one store and recomputes the
// projection whenever the canonical collection or a parameter changes.

use std::sync::Arc;

use super::{Projectable, Sort, SortDirection, ViewParams, project};
use crate::store::Snapshot;
use crate::stream::EntityStream;

/// Derived view over one store's canonical collection.
pub struct ViewProjector<T: Projectable> {
    source: EntityStream<T>,
    params: ViewParams<T>,
    view: Vec<Arc<T>>,
}

impl<T: Projectable> ViewProjector<T> {
    pub fn new(source: EntityStream<T>) -> Self {
        let view = source.current().iter().cloned().collect();
        Self {
            source,
            params: ViewParams::default(),
            view,
        }
    }

    /// The current derived sequence.
    pub fn view(&self) -> &[Arc<T>] {
        &self.view
    }

    pub fn params(&self) -> &ViewParams<T> {
        &self.params
    }

    /// The canonical snapshot the view was last computed from.
    pub fn canonical(&self) -> &Snapshot<T> {
        self.source.current()
    }

    pub fn set_filter(&mut self, filter: Option<T::Filter>) {
        self.params.filter = filter;
        self.recompute();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.params.search = search.into();
        self.recompute();
    }

    pub fn set_sort(&mut self, key: T::SortKey, direction: SortDirection) {
        self.params.sort = Some(Sort { key, direction });
        self.recompute();
    }

    /// Pick up a canonical change, if any. Returns `true` if the view was
    /// recomputed.
    pub fn sync(&mut self) -> bool {
        if self.source.refresh() {
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Wait for the next canonical change and recompute.
    /// Returns `false` if the store has been dropped.
    pub async fn changed(&mut self) -> bool {
        if self.source.changed().await.is_none() {
            return false;
        }
        self.recompute();
        true
    }

    /// Clear filter, search and sort; the view becomes the untouched
    /// canonical collection. Never refetches.
    pub fn reset(&mut self) {
        self.source.refresh();
        self.params = ViewParams::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = project(self.source.current(), &self.params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityId, Gender, Participant};
    use crate::store::collection::EntityCollection;
    use crate::view::{ParticipantFilter, ParticipantSortKey};
    use pretty_assertions::assert_eq;

    fn participant(id: &str, name: &str, gender: Gender) -> Participant {
        Participant {
            id: EntityId::from(id),
            name: name.into(),
            gender: Some(gender),
            raw_gender: String::new(),
            age: 20,
            club: "IF".into(),
        }
    }

    fn names(p: &ViewProjector<Participant>) -> Vec<String> {
        p.view().iter().map(|e| e.name.clone()).collect()
    }

    fn seeded() -> EntityCollection<Participant> {
        let col = EntityCollection::new();
        col.replace_all(vec![
            participant("1", "Jonas", Gender::Male),
            participant("2", "Anna", Gender::Female),
            participant("3", "Hanne", Gender::Female),
            participant("4", "Maren", Gender::Female),
        ]);
        col
    }

    #[test]
    fn filter_search_then_reset_restores_canonical_order() {
        let col = seeded();
        let mut projector = ViewProjector::new(EntityStream::new(col.subscribe()));
        let original = names(&projector);

        projector.set_filter(Some(ParticipantFilter::ByGender(Gender::Female)));
        projector.set_search("an");
        assert_eq!(names(&projector), vec!["Anna", "Hanne"]);

        projector.set_sort(ParticipantSortKey::Name, SortDirection::Descending);
        assert_eq!(names(&projector), vec!["Hanne", "Anna"]);

        projector.reset();
        assert_eq!(names(&projector), original);
        assert!(projector.params().is_identity());
    }

    #[test]
    fn sync_recomputes_after_canonical_change() {
        let col = seeded();
        let mut projector = ViewProjector::new(EntityStream::new(col.subscribe()));
        projector.set_search("ma");
        assert_eq!(names(&projector), vec!["Maren"]);

        col.upsert(participant("5", "Mads", Gender::Male));
        assert!(projector.sync());
        assert_eq!(names(&projector), vec!["Maren", "Mads"]);
        assert!(!projector.sync());
    }

    #[test]
    fn reset_does_not_lose_pending_canonical_changes() {
        let col = seeded();
        let mut projector = ViewProjector::new(EntityStream::new(col.subscribe()));
        projector.set_search("x");
        col.remove(&EntityId::from("1"));

        projector.reset();
        assert_eq!(names(&projector), vec!["Anna", "Hanne", "Maren"]);
    }

    #[tokio::test]
    async fn changed_wakes_on_store_mutation() {
        let col = seeded();
        let mut projector = ViewProjector::new(EntityStream::new(col.subscribe()));
        projector.set_filter(Some(ParticipantFilter::ByGender(Gender::Male)));

        col.upsert(participant("5", "Bo", Gender::Male));
        assert!(projector.changed().await);
        assert_eq!(names(&projector), vec!["Jonas", "Bo"]);
    }
}
