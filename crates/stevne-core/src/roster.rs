// ── Roster editor ──
//
// Pending participant selection for one discipline, submitted as a single
// additive batch. The server only ever adds to a roster; there is no
// removal path here.

use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{info, warn};

use crate::error::CoreError;
use crate::model::{Discipline, EntityId};
use crate::store::EntityStore;

/// Selection state for the "assign participants" surface.
///
/// The selection survives `close()`/`open()`; it is cleared only by a
/// successful `submit()`.
pub struct RosterEditor {
    disciplines: Arc<EntityStore<Discipline>>,
    pending: IndexSet<EntityId>,
    active: Option<EntityId>,
    visible: bool,
    last_error: Option<String>,
}

impl RosterEditor {
    pub fn new(disciplines: Arc<EntityStore<Discipline>>) -> Self {
        Self {
            disciplines,
            pending: IndexSet::new(),
            active: None,
            visible: false,
            last_error: None,
        }
    }

    /// Show the editor for `discipline_id`.
    pub fn open(&mut self, discipline_id: EntityId) {
        self.active = Some(discipline_id);
        self.visible = true;
    }

    /// Hide the editor and forget the active discipline.
    pub fn close(&mut self) {
        self.active = None;
        self.visible = false;
    }

    /// Flip membership of `participant_id` in the pending selection.
    /// Returns `true` if it is now selected.
    pub fn toggle(&mut self, participant_id: EntityId) -> bool {
        if self.pending.shift_remove(&participant_id) {
            false
        } else {
            self.pending.insert(participant_id);
            true
        }
    }

    pub fn is_selected(&self, participant_id: &EntityId) -> bool {
        self.pending.contains(participant_id)
    }

    /// Pending selection in toggle order.
    pub fn selection(&self) -> impl Iterator<Item = &EntityId> {
        self.pending.iter()
    }

    pub fn active(&self) -> Option<&EntityId> {
        self.active.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// PUT the pending selection to the active discipline's roster.
    ///
    /// On success the discipline store is reloaded, the selection cleared
    /// and the editor closed. On failure the selection is kept for retry.
    pub async fn submit(&mut self) -> Result<(), CoreError> {
        let Some(discipline_id) = self.active.clone() else {
            return Err(self.fail(CoreError::ValidationFailed {
                message: "no discipline selected for roster assignment".into(),
            }));
        };

        let ids: Vec<String> = self.pending.iter().map(|id| id.to_string()).collect();
        if let Err(e) = self
            .disciplines
            .api()
            .add_participants_to_discipline(discipline_id.as_str(), &ids)
            .await
        {
            return Err(self.fail(e.into()));
        }
        info!(discipline = %discipline_id, count = ids.len(), "participants added to roster");

        // Reload failures land in the store's own error slot.
        if let Err(e) = self.disciplines.load().await {
            warn!(error = %e, "roster saved but discipline reload failed");
        }

        self.last_error = None;
        self.pending.clear();
        self.close();
        Ok(())
    }

    fn fail(&mut self, err: CoreError) -> CoreError {
        warn!(error = %err, "roster assignment failed");
        self.last_error = Some(err.to_string());
        err
    }
}
