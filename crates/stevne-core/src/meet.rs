// ── Meet facade ──
//
// Owns the shared gateway and the three entity stores for one roster API,
// and hands out the editors and views that operate on them.

use std::sync::Arc;

use stevne_api::ApiClient;
use stevne_api::transport::{TlsMode, TransportConfig};
use tracing::debug;

use crate::config::{MeetConfig, TlsVerification};
use crate::error::CoreError;
use crate::form::FormController;
use crate::model::{Discipline, EntityId, Participant, ResultEntry};
use crate::relation::{self, JoinedResult};
use crate::roster::RosterEditor;
use crate::store::EntityStore;
use crate::view::{Projectable, ViewProjector};

/// Entry point for consumers. Cheap to clone.
#[derive(Clone)]
pub struct Meet {
    config: MeetConfig,
    participants: Arc<EntityStore<Participant>>,
    disciplines: Arc<EntityStore<Discipline>>,
    results: Arc<EntityStore<ResultEntry>>,
}

impl Meet {
    /// Build the HTTP client and empty stores. Nothing is fetched yet.
    pub fn new(config: MeetConfig) -> Result<Self, CoreError> {
        let transport = build_transport(&config);
        let api = ApiClient::new(config.api_url.as_str(), &transport)?;
        debug!(api_url = %config.api_url, "meet client ready");
        Ok(Self::with_client(config, api))
    }

    /// Use an already-built gateway.
    pub fn with_client(config: MeetConfig, api: ApiClient) -> Self {
        let api = Arc::new(api);
        Self {
            config,
            participants: Arc::new(EntityStore::new(Arc::clone(&api))),
            disciplines: Arc::new(EntityStore::new(Arc::clone(&api))),
            results: Arc::new(EntityStore::new(api)),
        }
    }

    pub fn config(&self) -> &MeetConfig {
        &self.config
    }

    pub fn participants(&self) -> &Arc<EntityStore<Participant>> {
        &self.participants
    }

    pub fn disciplines(&self) -> &Arc<EntityStore<Discipline>> {
        &self.disciplines
    }

    pub fn results(&self) -> &Arc<EntityStore<ResultEntry>> {
        &self.results
    }

    /// Load all three stores concurrently. Each failure lands in its own
    /// store's error slot; the first one (participants, disciplines,
    /// results) is also returned.
    pub async fn load_all(&self) -> Result<(), CoreError> {
        let (participants, disciplines, results) = tokio::join!(
            self.participants.load(),
            self.disciplines.load(),
            self.results.load(),
        );
        participants.and(disciplines).and(results)
    }

    /// A form bound to the participant store.
    pub fn form(&self) -> FormController<Participant> {
        FormController::new(Arc::clone(&self.participants))
    }

    /// A roster editor bound to the discipline store.
    pub fn roster_editor(&self) -> RosterEditor {
        RosterEditor::new(Arc::clone(&self.disciplines))
    }

    pub fn participant_view(&self) -> ViewProjector<Participant> {
        project_store(&self.participants)
    }

    pub fn discipline_view(&self) -> ViewProjector<Discipline> {
        project_store(&self.disciplines)
    }

    pub fn result_view(&self) -> ViewProjector<ResultEntry> {
        project_store(&self.results)
    }

    /// Resolve `results` against the current participant and discipline
    /// snapshots.
    pub fn join(&self, results: &[Arc<ResultEntry>]) -> Vec<JoinedResult> {
        relation::join_results(
            results,
            &self.participants.snapshot(),
            &self.disciplines.snapshot(),
        )
    }

    /// Every stored result, joined, in canonical order.
    pub fn joined_results(&self) -> Vec<JoinedResult> {
        self.join(&self.results.snapshot())
    }

    /// Names of a discipline's roster members.
    pub fn roster_names(&self, discipline_id: &EntityId) -> Result<Vec<String>, CoreError> {
        let discipline = self
            .disciplines
            .get(discipline_id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "discipline".into(),
                identifier: discipline_id.to_string(),
            })?;
        Ok(relation::roster_names(
            &discipline,
            &self.participants.snapshot(),
        ))
    }
}

fn project_store<T: Projectable>(store: &EntityStore<T>) -> ViewProjector<T> {
    ViewProjector::new(store.subscribe())
}

fn build_transport(config: &MeetConfig) -> TransportConfig {
    TransportConfig {
        tls: tls_to_transport(&config.tls),
        timeout: config.timeout,
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}
