//! Error type for strict introspection calls.

use std::io;
use std::process::ExitStatus;

use mesonic_types::VersionParseError;

/// Failure of an introspection call or version query.
///
/// Test-log reading deliberately does not use this type: it degrades to an
/// empty result instead (see [`crate::IntrospectClient::test_logs`]).
#[derive(Debug, thiserror::Error)]
pub enum IntrospectError {
    #[error("{program} not found in PATH: {source}")]
    MissingExecutable {
        program: String,
        source: which::Error,
    },
    #[error("failed to spawn {program}: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("{program} exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("invalid JSON from {origin}: {source}")]
    Json {
        origin: String,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Version(#[from] VersionParseError),
}
