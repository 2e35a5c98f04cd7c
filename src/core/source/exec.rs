//! External command secret source.
//!
//! Runs a user-configured command with the locator appended as the final
//! argument and takes trimmed stdout as the secret value. This is how CLIs
//! for most secret stores already behave (`vault kv get`, `gcloud secrets
//! versions access`, `op read`), so any store with a CLI works without a
//! dedicated backend here.
//!
//! The command string is split on whitespace, not handed to a shell, and
//! stdin is closed so interactive prompts fail instead of hanging.

use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::SecretSource;
use crate::error::{Result, SourceError};

/// Maximum execution time for a secret-resolving command.
const EXEC_TIMEOUT_SECS: u64 = 30;

/// Resolves secrets by executing an external command per locator.
#[derive(Debug)]
pub struct ExecSource {
    program: String,
    args: Vec<String>,
}

impl ExecSource {
    /// Build a source from a command string like `"vault kv get -field=value"`.
    ///
    /// Returns `None` if the command string is empty.
    pub fn new(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

#[async_trait]
impl SecretSource for ExecSource {
    fn name(&self) -> &'static str {
        "exec"
    }

    async fn fetch(&self, locator: &str) -> Result<String> {
        debug!(program = %self.program, locator = %locator, "running secret command");

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.arg(locator);
        cmd.stdin(std::process::Stdio::null());
        cmd.stdout(std::process::Stdio::piped());
        cmd.stderr(std::process::Stdio::piped());

        let output = tokio::time::timeout(
            Duration::from_secs(EXEC_TIMEOUT_SECS),
            cmd.output(),
        )
        .await
        .map_err(|_| SourceError::Timeout {
            locator: locator.to_string(),
            timeout: EXEC_TIMEOUT_SECS,
        })?
        .map_err(|e| SourceError::Exec {
            locator: locator.to_string(),
            reason: format!("failed to execute '{}': {}", self.program, e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SourceError::Exec {
                locator: locator.to_string(),
                reason: format!(
                    "'{}' exited with status {}: {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ),
            }
            .into());
        }

        let value = String::from_utf8_lossy(&output.stdout)
            .trim_end_matches(['\r', '\n'])
            .to_string();

        if value.is_empty() {
            return Err(SourceError::Exec {
                locator: locator.to_string(),
                reason: format!("'{}' produced empty output", self.program),
            }
            .into());
        }

        Ok(value)
    }
}
