// Discipline endpoints (`/api/disciplin`)

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{DisciplineCreateRequest, DisciplineResponse};

const COLLECTION: &str = "disciplin";

impl ApiClient {
    /// List all disciplines, each with its current roster.
    ///
    /// `GET /api/disciplin`
    pub async fn list_disciplines(&self) -> Result<Vec<DisciplineResponse>, Error> {
        let url = self.api_url(&[COLLECTION])?;
        debug!("listing disciplines");
        self.get(url).await
    }

    /// Create a discipline.
    ///
    /// `POST /api/disciplin` with `{"navn": ..., "resultattype": ...}`
    pub async fn create_discipline(
        &self,
        body: &DisciplineCreateRequest,
    ) -> Result<DisciplineResponse, Error> {
        let url = self.api_url(&[COLLECTION])?;
        debug!(name = %body.name, "creating discipline");
        self.post(url, body).await
    }

    /// Delete a discipline.
    ///
    /// `DELETE /api/disciplin/{id}`
    pub async fn delete_discipline(&self, id: &str) -> Result<(), Error> {
        let url = self.api_url(&[COLLECTION, id])?;
        debug!(id, "deleting discipline");
        self.delete(url).await
    }

    /// Add participants to a discipline's roster. Additive only: the
    /// server extends the roster, it never replaces it.
    ///
    /// `PUT /api/disciplin/{id}/addDeltager` with `["p1", "p3", ...]`
    pub async fn add_participants_to_discipline(
        &self,
        discipline_id: &str,
        participant_ids: &[String],
    ) -> Result<(), Error> {
        let url = self.api_url(&[COLLECTION, discipline_id, "addDeltager"])?;
        debug!(
            discipline_id,
            count = participant_ids.len(),
            "adding participants to discipline"
        );
        self.put_no_response(url, participant_ids).await
    }
}
