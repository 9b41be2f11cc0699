// ── Discipline domain types ──

use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;
use crate::error::CoreError;

/// An event type, e.g. "100m" measured in "tid".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: EntityId,
    pub name: String,
    /// Free-text unit/format label for this discipline's results.
    pub result_type: String,
    /// Roster as reported by the server. Extended only through the
    /// roster editor, never edited as part of the discipline itself.
    pub participant_ids: Vec<EntityId>,
}

impl Discipline {
    pub fn has_participant(&self, id: &EntityId) -> bool {
        self.participant_ids.contains(id)
    }
}

/// Editable discipline record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisciplineDraft {
    pub id: EntityId,
    pub name: String,
    pub result_type: String,
}

impl DisciplineDraft {
    pub fn from_discipline(d: &Discipline) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            result_type: d.result_type.clone(),
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        match name {
            "id" => self.id = EntityId::from(value),
            "navn" | "name" => value.clone_into(&mut self.name),
            "resultattype" | "result_type" | "result-type" => {
                value.clone_into(&mut self.result_type);
            }
            other => {
                return Err(CoreError::ValidationFailed {
                    message: format!("discipline has no field '{other}'"),
                });
            }
        }
        Ok(())
    }
}
