// ── Entity kinds ──
//
// Each remote collection is described by a small set of traits. A store
// gains `create`/`update`/`delete` only for kinds whose endpoints exist, so
// an unsupported operation is a compile error rather than a 405.

use std::future::Future;

use stevne_api::ApiClient;
use stevne_api::types::{
    DisciplineCreateRequest, ParticipantCreateRequest, ParticipantUpdateRequest,
};

use crate::error::CoreError;
use crate::model::{
    Discipline, DisciplineDraft, EntityId, Participant, ParticipantDraft, ResultEntry,
};

/// A record kind mirrored from one remote collection.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable kind, used in logs and error messages.
    const KIND: &'static str;

    fn id(&self) -> &EntityId;

    /// Fetch the whole collection.
    fn fetch_all(api: &ApiClient)
    -> impl Future<Output = Result<Vec<Self>, stevne_api::Error>> + Send;
}

/// Editable record for a kind. The identity decides between create and update.
pub trait Draft<E>: Default + Clone + Send + Sync {
    /// Seed a draft with a copy of every field of `entity`.
    fn from_entity(entity: &E) -> Self;

    fn id(&self) -> &EntityId;

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), CoreError>;
}

/// Kinds the server lets us create.
pub trait Creatable: Entity {
    type Draft: Draft<Self>;

    fn create(
        api: &ApiClient,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<Self, stevne_api::Error>> + Send;
}

/// Kinds the server lets us update in place.
pub trait Updatable: Creatable {
    /// Send every draft field except the identity to `id`.
    fn update(
        api: &ApiClient,
        id: &EntityId,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<Self, stevne_api::Error>> + Send;
}

/// Kinds the server lets us delete.
pub trait Deletable: Entity {
    fn delete(
        api: &ApiClient,
        id: &EntityId,
    ) -> impl Future<Output = Result<(), stevne_api::Error>> + Send;
}

// ── Participant ──────────────────────────────────────────────────────

impl Entity for Participant {
    const KIND: &'static str = "participant";

    fn id(&self) -> &EntityId {
        &self.id
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Self>, stevne_api::Error> {
        let raw = api.list_participants().await?;
        Ok(raw.into_iter().map(Participant::from).collect())
    }
}

impl Draft<Participant> for ParticipantDraft {
    fn from_entity(entity: &Participant) -> Self {
        Self::from_participant(entity)
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        ParticipantDraft::set_field(self, name, value)
    }
}

impl Creatable for Participant {
    type Draft = ParticipantDraft;

    async fn create(api: &ApiClient, draft: &ParticipantDraft) -> Result<Self, stevne_api::Error> {
        let created = api
            .create_participant(&ParticipantCreateRequest::from(draft))
            .await?;
        Ok(Participant::from(created))
    }
}

impl Updatable for Participant {
    async fn update(
        api: &ApiClient,
        id: &EntityId,
        draft: &ParticipantDraft,
    ) -> Result<Self, stevne_api::Error> {
        let updated = api
            .update_participant(id.as_str(), &ParticipantUpdateRequest::from(draft))
            .await?;
        Ok(Participant::from(updated))
    }
}

impl Deletable for Participant {
    async fn delete(api: &ApiClient, id: &EntityId) -> Result<(), stevne_api::Error> {
        api.delete_participant(id.as_str()).await
    }
}

// ── Discipline ───────────────────────────────────────────────────────

impl Entity for Discipline {
    const KIND: &'static str = "discipline";

    fn id(&self) -> &EntityId {
        &self.id
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Self>, stevne_api::Error> {
        let raw = api.list_disciplines().await?;
        Ok(raw.into_iter().map(Discipline::from).collect())
    }
}

impl Draft<Discipline> for DisciplineDraft {
    fn from_entity(entity: &Discipline) -> Self {
        Self::from_discipline(entity)
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn set_field(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        DisciplineDraft::set_field(self, name, value)
    }
}

impl Creatable for Discipline {
    type Draft = DisciplineDraft;

    async fn create(api: &ApiClient, draft: &DisciplineDraft) -> Result<Self, stevne_api::Error> {
        let created = api
            .create_discipline(&DisciplineCreateRequest::from(draft))
            .await?;
        Ok(Discipline::from(created))
    }
}

impl Deletable for Discipline {
    async fn delete(api: &ApiClient, id: &EntityId) -> Result<(), stevne_api::Error> {
        api.delete_discipline(id.as_str()).await
    }
}

// ── Result ───────────────────────────────────────────────────────────

impl Entity for ResultEntry {
    const KIND: &'static str = "result";

    fn id(&self) -> &EntityId {
        &self.id
    }

    async fn fetch_all(api: &ApiClient) -> Result<Vec<Self>, stevne_api::Error> {
        let raw = api.list_results().await?;
        Ok(raw.into_iter().map(ResultEntry::from).collect())
    }
}
