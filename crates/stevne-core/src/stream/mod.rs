// ── Reactive entity streams ──
//
// Subscription types for consuming canonical-collection changes.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::Snapshot;

/// A subscription to a store's canonical collection.
///
/// Provides both point-in-time snapshot access and change notification via
/// [`changed()`](Self::changed), or by converting to a `Stream`.
pub struct EntityStream<T: Clone + Send + Sync + 'static> {
    current: Snapshot<T>,
    receiver: watch::Receiver<Snapshot<T>>,
}

impl<T: Clone + Send + Sync + 'static> EntityStream<T> {
    pub(crate) fn new(mut receiver: watch::Receiver<Snapshot<T>>) -> Self {
        let current = receiver.borrow_and_update().clone();
        Self { current, receiver }
    }

    /// The snapshot this subscription last observed.
    pub fn current(&self) -> &Snapshot<T> {
        &self.current
    }

    /// Get the latest snapshot without marking it as seen.
    pub fn latest(&self) -> Snapshot<T> {
        self.receiver.borrow().clone()
    }

    /// Pull the latest snapshot if the store changed since the last
    /// observation. Returns `true` if `current()` moved.
    pub fn refresh(&mut self) -> bool {
        if self.receiver.has_changed().unwrap_or(false) {
            self.current = self.receiver.borrow_and_update().clone();
            true
        } else {
            false
        }
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the store has been dropped.
    pub async fn changed(&mut self) -> Option<Snapshot<T>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    ///
    /// The stream yields the current snapshot first, then one item per change.
    pub fn into_stream(self) -> EntityWatchStream<T> {
        EntityWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct EntityWatchStream<T: Clone + Send + Sync + 'static> {
    inner: WatchStream<Snapshot<T>>,
}

impl<T: Clone + Send + Sync + 'static> Stream for EntityWatchStream<T> {
    type Item = Snapshot<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use futures_util::StreamExt;

    use super::*;
    use crate::model::{EntityId, ResultEntry};
    use crate::store::collection::EntityCollection;

    fn result(id: &str) -> ResultEntry {
        ResultEntry {
            id: EntityId::from(id),
            result_type: "tid".into(),
            date: "2024-06-01".into(),
            value: "10.5".into(),
            participant_id: EntityId::from("p1"),
            discipline_id: EntityId::from("d1"),
        }
    }

    #[test]
    fn refresh_reports_only_new_snapshots() {
        let col = EntityCollection::new();
        let mut stream = EntityStream::new(col.subscribe());
        assert!(!stream.refresh());

        col.upsert(result("r1"));
        assert_eq!(stream.current().len(), 0);
        assert_eq!(stream.latest().len(), 1);
        assert!(stream.refresh());
        assert_eq!(stream.current().len(), 1);
        assert!(!stream.refresh());
    }

    #[tokio::test]
    async fn stream_yields_current_then_changes() {
        let col = EntityCollection::new();
        col.upsert(result("r1"));
        let mut stream = EntityStream::new(col.subscribe()).into_stream();

        assert_eq!(stream.next().await.unwrap().len(), 1);
        col.upsert(result("r2"));
        assert_eq!(stream.next().await.unwrap().len(), 2);
    }
}
