// Async HTTP client for the roster API.
//
// Base path: <origin>/api/
// Every request is a single attempt: no retries, no implicit timeout.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;

/// Path prefix shared by every endpoint.
const API_PREFIX: &str = "api";

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the roster API.
///
/// The only component in the workspace that performs network I/O.
/// Endpoint methods live next to their resource (`deltager`, `disciplin`,
/// `resultater`); all of them funnel through [`request`](Self::request) or
/// [`request_empty`](Self::request_empty).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(Self { http, base_url })
    }

    /// The origin every request is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build `<base>/api/<segments…>`, percent-encoding each segment.
    pub(crate) fn api_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    // ── Generic request ──────────────────────────────────────────────

    /// Send `method` to `url` with an optional JSON body and decode the
    /// JSON response into `T`.
    pub async fn request<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let resp = self.send(method, url, body).await?;
        Self::handle_response(resp).await
    }

    /// Like [`request`](Self::request), for endpoints whose success
    /// response carries nothing the caller needs. Any body is ignored.
    pub async fn request_empty<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<(), Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        let resp = self.send(method, url, body).await?;
        Self::handle_empty(&resp)
    }

    async fn send<B>(&self, method: Method, url: Url, body: Option<&B>) -> Result<reqwest::Response, Error>
    where
        B: Serialize + ?Sized + Sync,
    {
        debug!("{method} {url}");
        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            // `.json()` also sets `Content-Type: application/json`.
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        self.request(Method::GET, url, None::<&()>).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        self.request(Method::POST, url, Some(body)).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        self.request(Method::PUT, url, Some(body)).await
    }

    pub(crate) async fn put_no_response<B: Serialize + ?Sized + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<(), Error> {
        self.request_empty(Method::PUT, url, Some(body)).await
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        self.request_empty(Method::DELETE, url, None::<&()>).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::status_error(status));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    fn handle_empty(resp: &reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status))
        }
    }

    fn status_error(status: reqwest::StatusCode) -> Error {
        Error::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::from_reqwest(base, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn api_url_without_trailing_slash() {
        let url = client("http://localhost:8080").api_url(&["deltager"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/deltager");
    }

    #[test]
    fn api_url_keeps_base_path_prefix() {
        let url = client("https://meet.example.org/backend/")
            .api_url(&["disciplin", "d7", "addDeltager"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://meet.example.org/backend/api/disciplin/d7/addDeltager"
        );
    }

    #[test]
    fn api_url_encodes_identity_segments() {
        let url = client("http://localhost:8080")
            .api_url(&["deltager", "a/b c"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/deltager/a%2Fb%20c");
    }

    #[test]
    fn non_base_url_is_rejected() {
        let result = ApiClient::from_reqwest("mailto:meet@example.org", reqwest::Client::new());
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
