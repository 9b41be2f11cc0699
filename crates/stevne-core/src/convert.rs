// ── API-to-domain type conversions ──
//
// Bridges raw `stevne_api` wire types into canonical `stevne_core::model`
// types, and drafts back into request bodies.

use stevne_api::types::{
    DisciplineCreateRequest, DisciplineResponse, ParticipantCreateRequest, ParticipantResponse,
    ParticipantUpdateRequest, ResultResponse,
};
use tracing::debug;

use crate::model::{
    Discipline, DisciplineDraft, EntityId, Gender, Participant, ParticipantDraft, ResultEntry,
};

/// Parse a wire gender, dropping empty or unrecognized values.
fn parse_gender(raw: &str) -> Option<Gender> {
    if raw.is_empty() {
        return None;
    }
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        debug!(gender = raw, "unrecognized gender value from server");
    }
    parsed
}

// ── Wire → domain ────────────────────────────────────────────────────

impl From<ParticipantResponse> for Participant {
    fn from(p: ParticipantResponse) -> Self {
        Self {
            id: EntityId::from(p.id),
            gender: parse_gender(&p.gender),
            raw_gender: p.gender,
            name: p.name,
            age: p.age,
            club: p.club,
        }
    }
}

impl From<DisciplineResponse> for Discipline {
    fn from(d: DisciplineResponse) -> Self {
        Self {
            id: EntityId::from(d.id),
            name: d.name,
            result_type: d.result_type,
            participant_ids: d.participant_ids.into_iter().map(EntityId::from).collect(),
        }
    }
}

impl From<ResultResponse> for ResultEntry {
    fn from(r: ResultResponse) -> Self {
        Self {
            id: EntityId::from(r.id),
            result_type: r.result_type,
            date: r.date,
            value: r.value,
            participant_id: EntityId::from(r.participant_id),
            discipline_id: EntityId::from(r.discipline_id),
        }
    }
}

// ── Draft → request body ─────────────────────────────────────────────

impl From<&ParticipantDraft> for ParticipantCreateRequest {
    fn from(d: &ParticipantDraft) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name.clone(),
            gender: d.wire_gender(),
            age: d.age.unwrap_or_default(),
            club: d.club.clone(),
        }
    }
}

impl From<&ParticipantDraft> for ParticipantUpdateRequest {
    fn from(d: &ParticipantDraft) -> Self {
        Self {
            name: d.name.clone(),
            gender: d.wire_gender(),
            age: d.age.unwrap_or_default(),
            club: d.club.clone(),
        }
    }
}

impl From<&DisciplineDraft> for DisciplineCreateRequest {
    fn from(d: &DisciplineDraft) -> Self {
        Self {
            name: d.name.clone(),
            result_type: d.result_type.clone(),
        }
    }
}
