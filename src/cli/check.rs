//! Check command.
//!
//! Parses a secrets specification and reports the references it contains
//! without fetching anything. Useful for validating CI configuration before
//! granting the pipeline access to the secret store.

use serde::Serialize;

use crate::cli::output;
use crate::core::reference;
use crate::error::{Error, Result};

#[derive(Serialize)]
struct ReferenceReport<'a> {
    output: &'a str,
    locator: &'a str,
}

/// Parse the specification and print the references.
pub fn execute(secrets: &str, json: bool) -> Result<()> {
    let references = reference::parse(secrets)?;

    if json {
        let report: Vec<ReferenceReport<'_>> = references
            .iter()
            .map(|r| ReferenceReport {
                output: &r.output,
                locator: &r.locator,
            })
            .collect();
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| Error::Other(format!("failed to encode report: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    if references.is_empty() {
        output::dimmed("no references");
        return Ok(());
    }

    for r in &references {
        output::kv(&r.output, &r.locator);
    }
    output::success(&format!(
        "{} reference{} ok",
        references.len(),
        if references.len() == 1 { "" } else { "s" }
    ));
    Ok(())
}
