//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and process exit codes.

use miette::Diagnostic;
use thiserror::Error;

use stevne_config::ConfigError;
use stevne_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the roster server at {url}: {reason}")]
    #[diagnostic(
        code(stevne::connection_failed),
        help(
            "Check that the server is running and accessible.\n\
             URL: {url}\n\
             Override with --api-url or configure a profile: stevne config init"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    // ── Server ───────────────────────────────────────────────────────
    #[error("Server responded with HTTP {status}: {status_text}")]
    #[diagnostic(code(stevne::http_status))]
    HttpStatus { status: u16, status_text: String },

    #[error("Unexpected response from server: {message}")]
    #[diagnostic(
        code(stevne::decode),
        help("The server answered, but not with the JSON shape stevne expects.")
    )]
    Decode { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(stevne::not_found),
        help("Run: stevne {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(stevne::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(stevne::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: stevne config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(stevne::config))]
    Config(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Operation '{action}' was not confirmed")]
    #[diagnostic(
        code(stevne::not_confirmed),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NotConfirmed { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(stevne::render))]
    Render { message: String },
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ProfileNotFound { .. } | Self::NotConfirmed { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }

    /// Attach the server URL to a connection failure from core.
    pub fn at_url(self, url: &str) -> Self {
        match self {
            Self::ConnectionFailed { reason, .. } => Self::ConnectionFailed {
                url: url.into(),
                reason,
            },
            other => other,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Transport { message } => CliError::ConnectionFailed {
                url: "(configured API)".into(),
                reason: message,
            },

            CoreError::Status {
                status,
                status_text,
            } => CliError::HttpStatus {
                status,
                status_text,
            },

            CoreError::Decode { message } => CliError::Decode { message },

            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::NotFound {
                list_command: format!("{entity_type}s list"),
                resource_type: entity_type,
                identifier,
            },

            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownProfile { name } => CliError::ProfileNotFound {
                name,
                available: "(none)".into(),
            },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_family() {
        let conn = CliError::from(CoreError::Transport {
            message: "refused".into(),
        });
        assert_eq!(conn.exit_code(), exit_code::CONNECTION);

        let missing = CliError::from(CoreError::NotFound {
            entity_type: "participant".into(),
            identifier: "9".into(),
        });
        assert_eq!(missing.exit_code(), exit_code::NOT_FOUND);
        assert!(matches!(
            missing,
            CliError::NotFound { ref list_command, .. } if list_command == "participants list"
        ));

        let invalid = CliError::from(CoreError::ValidationFailed {
            message: "bad age".into(),
        });
        assert_eq!(invalid.exit_code(), exit_code::USAGE);

        let status = CliError::from(CoreError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
        });
        assert_eq!(status.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn at_url_only_touches_connection_errors() {
        let err = CliError::from(CoreError::Transport {
            message: "refused".into(),
        })
        .at_url("http://localhost:8080/");
        assert!(matches!(err, CliError::ConnectionFailed { ref url, .. } if url == "http://localhost:8080/"));
    }
}
