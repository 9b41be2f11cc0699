// ── Core error types ──
//
// User-facing errors from stevne-core. Each failed operation produces one
// of these; its `Display` text is the message stored in a store's or
// editor's error slot. The `From<stevne_api::Error>` impl folds the
// transport layer into three families: transport, status, decode.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Remote errors ────────────────────────────────────────────────
    #[error("Could not reach the roster server: {message}")]
    Transport { message: String },

    #[error("Server responded with HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Unexpected response from server: {message}")]
    Decode { message: String },

    // ── Local errors ─────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` for failures that happened on or on the way to the
    /// server, as opposed to local validation.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<stevne_api::Error> for CoreError {
    fn from(err: stevne_api::Error) -> Self {
        match err {
            stevne_api::Error::Transport(e) => CoreError::Transport {
                message: e.to_string(),
            },
            stevne_api::Error::Tls(message) => CoreError::Transport { message },
            stevne_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            stevne_api::Error::Status {
                status,
                status_text,
            } => CoreError::Status {
                status,
                status_text,
            },
            stevne_api::Error::Deserialization { message, body: _ } => {
                CoreError::Decode { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_through() {
        let err = CoreError::from(stevne_api::Error::Status {
            status: 404,
            status_text: "Not Found".into(),
        });
        assert_eq!(
            err,
            CoreError::Status {
                status: 404,
                status_text: "Not Found".into()
            }
        );
        assert_eq!(err.to_string(), "Server responded with HTTP 404: Not Found");
        assert!(err.is_remote());
    }

    #[test]
    fn deserialization_drops_body() {
        let err = CoreError::from(stevne_api::Error::Deserialization {
            message: "expected array".into(),
            body: "{}".into(),
        });
        assert!(matches!(err, CoreError::Decode { ref message } if message == "expected array"));
    }

    #[test]
    fn validation_is_not_remote() {
        let err = CoreError::ValidationFailed {
            message: "x".into(),
        };
        assert!(!err.is_remote());
    }
}
