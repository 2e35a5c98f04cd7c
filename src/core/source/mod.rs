//! Secret value sources.
//!
//! A source turns a reference's locator into the secret's string value. The
//! trait is async because real stores sit behind the network; the CLI drives
//! it with a small current-thread runtime. Fetch failures are surfaced
//! verbatim and abort the run — no retries, no partial output.

pub mod env;
pub mod exec;

use async_trait::async_trait;

use crate::error::Result;

pub use env::EnvSource;
pub use exec::ExecSource;

/// A backend that can resolve secret locators to values.
#[async_trait]
pub trait SecretSource {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Fetch the secret value for `locator`.
    async fn fetch(&self, locator: &str) -> Result<String>;
}
