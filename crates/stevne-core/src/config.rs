// ── Runtime connection configuration ──
//
// Describes *where* the roster API lives and how to talk to it. Never
// touches disk: `stevne-config` or the CLI builds a `MeetConfig` and hands
// it in.

use std::time::Duration;

use url::Url;

/// Origin used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// Built-in root store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed development servers).
    DangerAcceptInvalid,
}

/// Configuration for talking to one roster API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetConfig {
    /// API origin (e.g. `http://localhost:8080`); endpoints live under `/api/`.
    pub api_url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout. `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
}

impl MeetConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            tls: TlsVerification::default(),
            timeout: None,
        }
    }
}
