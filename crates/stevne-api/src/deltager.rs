// Participant endpoints (`/api/deltager`)

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{ParticipantCreateRequest, ParticipantResponse, ParticipantUpdateRequest};

const COLLECTION: &str = "deltager";

impl ApiClient {
    /// List all participants.
    ///
    /// `GET /api/deltager`
    pub async fn list_participants(&self) -> Result<Vec<ParticipantResponse>, Error> {
        let url = self.api_url(&[COLLECTION])?;
        debug!("listing participants");
        self.get(url).await
    }

    /// Create a participant. The server assigns the identity.
    ///
    /// `POST /api/deltager`
    pub async fn create_participant(
        &self,
        body: &ParticipantCreateRequest,
    ) -> Result<ParticipantResponse, Error> {
        let url = self.api_url(&[COLLECTION])?;
        debug!(name = %body.name, "creating participant");
        self.post(url, body).await
    }

    /// Replace a participant's fields.
    ///
    /// `PUT /api/deltager/{id}`
    pub async fn update_participant(
        &self,
        id: &str,
        body: &ParticipantUpdateRequest,
    ) -> Result<ParticipantResponse, Error> {
        let url = self.api_url(&[COLLECTION, id])?;
        debug!(id, "updating participant");
        self.put(url, body).await
    }

    /// Delete a participant.
    ///
    /// `DELETE /api/deltager/{id}`
    pub async fn delete_participant(&self, id: &str) -> Result<(), Error> {
        let url = self.api_url(&[COLLECTION, id])?;
        debug!(id, "deleting participant");
        self.delete(url).await
    }
}
