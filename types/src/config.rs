//! Introspection client configuration.
//!
//! Raw deserialization structs stay private; the public type is validated at
//! the parse boundary, so holding a [`MesonConfig`] is proof the program name
//! is usable.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("meson program must not be empty")]
    EmptyProgram,
}

fn default_program() -> String {
    "meson".to_string()
}

#[derive(Deserialize)]
struct RawMesonConfig {
    #[serde(default = "default_program")]
    program: String,
}

/// Validated client configuration.
///
/// Invariant: `program` is non-empty (enforced via `#[serde(try_from)]` at
/// the deserialization boundary).
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawMesonConfig")]
pub struct MesonConfig {
    program: String,
}

impl MesonConfig {
    /// Configuration invoking a specific program (wrapper script, absolute
    /// path, ...) instead of `meson` from PATH.
    pub fn with_program(program: impl Into<String>) -> Result<Self, ConfigError> {
        let program = program.into();
        if program.trim().is_empty() {
            return Err(ConfigError::EmptyProgram);
        }
        Ok(Self { program })
    }

    /// Program name or path used to invoke Meson.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for MesonConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl TryFrom<RawMesonConfig> for MesonConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMesonConfig) -> Result<Self, Self::Error> {
        Self::with_program(raw.program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_program_is_meson() {
        assert_eq!(MesonConfig::default().program(), "meson");
    }

    #[test]
    fn empty_object_deserializes_to_default() {
        let config: MesonConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.program(), "meson");
    }

    #[test]
    fn explicit_program_is_kept() {
        let config: MesonConfig =
            serde_json::from_str(r#"{ "program": "/opt/meson/bin/meson" }"#).unwrap();
        assert_eq!(config.program(), "/opt/meson/bin/meson");
    }

    #[test]
    fn empty_program_is_rejected() {
        assert!(serde_json::from_str::<MesonConfig>(r#"{ "program": " " }"#).is_err());
        assert!(MesonConfig::with_program("").is_err());
    }
}
