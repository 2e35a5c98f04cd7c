//! Secret reference parsing.
//!
//! A secrets specification is a single string containing one or more entries
//! separated by newlines and/or commas. Each entry has the form
//! `locator:OUTPUT_KEY`, split on the *last* colon so that locators may
//! themselves contain colons (e.g. store URIs). Whitespace around entries is
//! trimmed and empty entries (blank lines, trailing delimiters) are skipped.
//!
//! ```text
//! projects/p/secrets/db-pass/versions/1:DB_PASS
//! projects/p/secrets/api-key/versions/latest:API_KEY
//! ```
//!
//! The output key names the placeholder (`$DB_PASS` or `${DB_PASS}`) that the
//! interpolation engine looks for, so it must be a valid identifier: ASCII
//! letters, digits, and underscore, not starting with a digit.

use crate::error::{ReferenceError, Result};

/// One parsed secret reference: where to fetch a value, and the output key
/// used to find its placeholder in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretReference {
    /// Opaque resource path understood by the secret source. Not interpreted
    /// here beyond being non-empty.
    pub locator: String,
    /// Substitution key, unique per specification.
    pub output: String,
}

/// Parse a raw secrets specification into an ordered list of references.
///
/// Fails fast: any malformed entry, invalid output key, or duplicate output
/// key aborts the whole parse with no partial result.
pub fn parse(raw: &str) -> Result<Vec<SecretReference>> {
    let mut references: Vec<SecretReference> = Vec::new();

    for entry in raw.split(|c| c == '\n' || c == ',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (locator, output) = entry.rsplit_once(':').ok_or_else(|| {
            ReferenceError::Malformed {
                entry: entry.to_string(),
            }
        })?;

        let locator = locator.trim();
        let output = output.trim();
        if locator.is_empty() || output.is_empty() {
            return Err(ReferenceError::Malformed {
                entry: entry.to_string(),
            }
            .into());
        }

        validate_output_key(output)?;

        if references.iter().any(|r| r.output == output) {
            return Err(ReferenceError::DuplicateOutputKey(output.to_string()).into());
        }

        references.push(SecretReference {
            locator: locator.to_string(),
            output: output.to_string(),
        });
    }

    Ok(references)
}

/// Validate that an output key is usable as a placeholder identifier.
///
/// Keys follow environment variable naming rules:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
fn validate_output_key(key: &str) -> Result<()> {
    if let Some(first_char) = key.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(ReferenceError::InvalidOutputKey {
                key: key.to_string(),
                reason: "cannot start with a digit".to_string(),
            }
            .into());
        }
    }

    for (i, ch) in key.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(ReferenceError::InvalidOutputKey {
                key: key.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only letters, digits, and underscore are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}
