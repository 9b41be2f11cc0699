use thiserror::Error;

/// Top-level error type for the `stevne-api` crate.
///
/// Three families matter to callers: the request never completed
/// (transport), the server answered with a non-success status, or the
/// body did not decode. `stevne-core` folds these into one user-facing
/// message per failed operation.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing or path-building error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Status ──────────────────────────────────────────────────────
    /// Non-success HTTP status. The response body is never inspected.
    #[error("Request failed with HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::InvalidUrl(_) | Self::Tls(_))
    }

    /// Returns `true` if this is a "not found" status.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// The HTTP status carried by a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_carries_reason_phrase() {
        let err = Error::Status {
            status: 503,
            status_text: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "Request failed with HTTP 503: Service Unavailable"
        );
        assert_eq!(err.status(), Some(503));
        assert!(!err.is_transport());
    }

    #[test]
    fn not_found_only_for_404() {
        let missing = Error::Status {
            status: 404,
            status_text: "Not Found".into(),
        };
        let bad = Error::Status {
            status: 400,
            status_text: "Bad Request".into(),
        };
        assert!(missing.is_not_found());
        assert!(!bad.is_not_found());
    }
}
