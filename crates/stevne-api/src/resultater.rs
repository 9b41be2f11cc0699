// Result endpoints (`/api/resultater`)

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::ResultResponse;

impl ApiClient {
    /// List all recorded results.
    ///
    /// `GET /api/resultater`
    pub async fn list_results(&self) -> Result<Vec<ResultResponse>, Error> {
        let url = self.api_url(&["resultater"])?;
        debug!("listing results");
        self.get(url).await
    }
}
