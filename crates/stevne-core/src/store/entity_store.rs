// ── Entity store ──
//
// Owns the canonical mirror of one remote collection and the write paths
// that keep it in step with the server. A local mutation happens only after
// the server confirms, and touches exactly the one record confirmed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use stevne_api::ApiClient;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::collection::{EntityCollection, Snapshot};
use crate::entity::{Creatable, Deletable, Draft, Entity, Updatable};
use crate::error::CoreError;
use crate::model::EntityId;
use crate::stream::EntityStream;

/// Canonical collection plus error slot for one entity kind.
///
/// Operations are not queued or de-duplicated: concurrent calls run
/// independently and each applies its own confirmed response. Two racing
/// `load()`s leave whichever response resolved last.
pub struct EntityStore<E: Entity> {
    api: Arc<ApiClient>,
    canonical: EntityCollection<E>,
    last_error: watch::Sender<Option<String>>,
    last_loaded: watch::Sender<Option<DateTime<Utc>>>,
}

impl<E: Entity> EntityStore<E> {
    pub fn new(api: Arc<ApiClient>) -> Self {
        let (last_error, _) = watch::channel(None);
        let (last_loaded, _) = watch::channel(None);

        Self {
            api,
            canonical: EntityCollection::new(),
            last_error,
            last_loaded,
        }
    }

    /// The gateway this store talks through.
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Current canonical collection (cheap `Arc` clone).
    pub fn snapshot(&self) -> Snapshot<E> {
        self.canonical.snapshot()
    }

    /// Subscribe to canonical-collection changes.
    pub fn subscribe(&self) -> EntityStream<E> {
        EntityStream::new(self.canonical.subscribe())
    }

    pub fn get(&self, id: &EntityId) -> Option<Arc<E>> {
        self.canonical.get(id)
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human-readable message from the most recent failed operation.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    /// When the last successful `load()` completed.
    pub fn last_loaded(&self) -> Option<DateTime<Utc>> {
        *self.last_loaded.borrow()
    }

    // ── Load ─────────────────────────────────────────────────────────

    /// Fetch the full collection and replace the canonical copy wholesale.
    ///
    /// On failure the canonical copy keeps its previous value and the
    /// error slot is set.
    pub async fn load(&self) -> Result<(), CoreError> {
        match E::fetch_all(&self.api).await {
            Ok(items) => {
                let count = items.len();
                self.canonical.replace_all(items);
                self.last_error.send_replace(None);
                self.last_loaded.send_replace(Some(Utc::now()));
                info!(kind = E::KIND, count, "collection loaded");
                Ok(())
            }
            Err(e) => Err(self.fail("load", e.into())),
        }
    }

    /// Record a failed operation in the error slot and hand the error back.
    fn fail(&self, operation: &'static str, err: CoreError) -> CoreError {
        warn!(kind = E::KIND, operation, error = %err, "operation failed");
        self.last_error.send_replace(Some(err.to_string()));
        err
    }
}

// ── Writes ───────────────────────────────────────────────────────────

impl<E: Creatable> EntityStore<E> {
    /// POST the draft as-is (an empty identity included) and append the
    /// server's copy to the canonical collection.
    pub async fn create(&self, draft: &E::Draft) -> Result<Arc<E>, CoreError> {
        let created = E::create(&self.api, draft)
            .await
            .map_err(|e| self.fail("create", e.into()))?;

        let id = created.id().clone();
        let result = Arc::new(created.clone());
        if !self.canonical.upsert(created) {
            debug!(kind = E::KIND, %id, "created identity already present, replaced in place");
        }
        info!(kind = E::KIND, %id, "created");
        Ok(result)
    }

    /// Draft seeded from the stored entity `id`, for edit flows.
    pub fn draft_for(&self, id: &EntityId) -> Result<E::Draft, CoreError> {
        self.get(id)
            .map(|e| E::Draft::from_entity(&e))
            .ok_or_else(|| CoreError::NotFound {
                entity_type: E::KIND.into(),
                identifier: id.to_string(),
            })
    }
}

impl<E: Updatable> EntityStore<E> {
    /// PUT every draft field except the identity to `id`, then replace the
    /// element with that identity by the server's copy, keeping its position.
    pub async fn update(&self, id: &EntityId, draft: &E::Draft) -> Result<Arc<E>, CoreError> {
        if id.is_empty() {
            return Err(self.fail(
                "update",
                CoreError::ValidationFailed {
                    message: format!("cannot update a {} without an identity", E::KIND),
                },
            ));
        }

        let updated = E::update(&self.api, id, draft)
            .await
            .map_err(|e| self.fail("update", e.into()))?;

        let result = Arc::new(updated.clone());
        if self.canonical.replace(id, updated) {
            info!(kind = E::KIND, %id, "updated");
        } else {
            debug!(kind = E::KIND, %id, "updated record is no longer in the local collection");
        }
        Ok(result)
    }
}

impl<E: Deletable> EntityStore<E> {
    /// DELETE `id`, then drop exactly that element from the canonical copy.
    pub async fn delete(&self, id: &EntityId) -> Result<(), CoreError> {
        E::delete(&self.api, id)
            .await
            .map_err(|e| self.fail("delete", e.into()))?;

        if self.canonical.remove(id).is_some() {
            info!(kind = E::KIND, %id, "deleted");
        } else {
            debug!(kind = E::KIND, %id, "deleted record was not in the local collection");
        }
        Ok(())
    }
}
