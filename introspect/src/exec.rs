//! Process-execution seam for invoking the Meson tool.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::IntrospectError;

/// Runs the external tool and captures its standard output.
///
/// The client is generic over this seam; tests substitute a fake to observe
/// (or forbid) invocations.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Runs `program` with `args`, optionally in `cwd`, and returns captured
    /// stdout as UTF-8 text.
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<String, IntrospectError>;
}

/// Production runner backed by `tokio::process::Command`.
///
/// Resolves the program through PATH before spawning so a missing tool is
/// reported as such rather than as a generic spawn failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl ToolRunner for SystemRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<String, IntrospectError> {
        let resolved =
            which::which(program).map_err(|source| IntrospectError::MissingExecutable {
                program: program.to_string(),
                source,
            })?;

        let mut cmd = Command::new(&resolved);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .await
            .map_err(|source| IntrospectError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(IntrospectError::ToolFailed {
                program: program.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_executable_is_reported() {
        let err = SystemRunner
            .run("definitely-not-a-real-tool-4f9a", &[], None)
            .await
            .unwrap_err();
        assert!(matches!(err, IntrospectError::MissingExecutable { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stdout() {
        let out = SystemRunner.run("echo", &["hello"], None).await.unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_tool_failure() {
        let err = SystemRunner.run("false", &[], None).await.unwrap_err();
        match err {
            IntrospectError::ToolFailed { program, .. } => assert_eq!(program, "false"),
            other => panic!("expected ToolFailed, got {other}"),
        }
    }
}
