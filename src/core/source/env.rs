//! Environment variable secret source.
//!
//! The locator is the name of an environment variable. Useful for local
//! development and CI runners that already inject secrets into the process
//! environment.

use async_trait::async_trait;
use tracing::debug;

use super::SecretSource;
use crate::error::{Result, SourceError};

/// Resolves locators against the process environment.
#[derive(Debug, Default)]
pub struct EnvSource;

#[async_trait]
impl SecretSource for EnvSource {
    fn name(&self) -> &'static str {
        "env"
    }

    async fn fetch(&self, locator: &str) -> Result<String> {
        debug!(var = %locator, "reading secret from environment");
        match std::env::var(locator) {
            Ok(value) => Ok(value),
            Err(std::env::VarError::NotPresent) => {
                Err(SourceError::MissingEnv(locator.to_string()).into())
            }
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(SourceError::NotUtf8(locator.to_string()).into())
            }
        }
    }
}
