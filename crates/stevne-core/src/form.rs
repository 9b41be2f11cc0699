// ── Form controller ──
//
// One editable draft plus a visibility flag. The draft's identity is the
// only thing that decides between create and update on submit.

use std::sync::Arc;

use tracing::debug;

use crate::entity::{Draft, Updatable};
use crate::error::CoreError;
use crate::store::EntityStore;

/// Which path `submit()` will take for the current draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit,
}

pub struct FormController<E: Updatable> {
    store: Arc<EntityStore<E>>,
    draft: E::Draft,
    visible: bool,
    last_error: Option<String>,
}

impl<E: Updatable> FormController<E> {
    pub fn new(store: Arc<EntityStore<E>>) -> Self {
        Self {
            store,
            draft: E::Draft::default(),
            visible: false,
            last_error: None,
        }
    }

    /// Show the form. With an existing entity the draft is a copy of all
    /// its fields (edit mode); otherwise every field is empty (create mode).
    pub fn open(&mut self, existing: Option<&E>) {
        self.draft = existing.map_or_else(E::Draft::default, E::Draft::from_entity);
        self.last_error = None;
        self.visible = true;
    }

    /// Merge one field into the draft by name. A rejected value leaves the
    /// draft unchanged.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        self.draft.set_field(name, value)
    }

    pub fn draft(&self) -> &E::Draft {
        &self.draft
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> FormMode {
        if self.draft.id().is_empty() {
            FormMode::Create
        } else {
            FormMode::Edit
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Create or update through the store, depending on the draft identity.
    ///
    /// On success the draft is emptied and the form hidden. On failure the
    /// form stays open with the draft intact.
    pub async fn submit(&mut self) -> Result<Arc<E>, CoreError> {
        let mode = self.mode();
        debug!(kind = E::KIND, %mode, "submitting form");

        let outcome = match mode {
            FormMode::Create => self.store.create(&self.draft).await,
            FormMode::Edit => {
                let id = self.draft.id().clone();
                self.store.update(&id, &self.draft).await
            }
        };

        match outcome {
            Ok(saved) => {
                self.draft = E::Draft::default();
                self.visible = false;
                self.last_error = None;
                Ok(saved)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Hide the form and discard the draft.
    pub fn cancel(&mut self) {
        self.visible = false;
        self.draft = E::Draft::default();
    }
}
