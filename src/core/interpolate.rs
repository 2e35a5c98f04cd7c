//! YAML placeholder interpolation engine.
//!
//! Replaces `$KEY` / `${KEY}` placeholders in a YAML document with resolved
//! secret values. Replacement is whole-scalar: a string value either *is* a
//! placeholder or it is not — if it contains a placeholder anywhere, the
//! entire scalar is replaced with the resolved value. This keeps the engine
//! far away from template-language territory (no partial splicing, no
//! expressions) and matches how deploy configs actually use secrets: a value
//! is either a literal or wholly a secret.
//!
//! The document is parsed once, all substitution keys are applied to the
//! in-memory tree, and the tree is serialized back out. Container structure
//! is never modified: no keys added or removed, no nesting changed, only
//! string leaf values replaced in place. Candidate keys are tried
//! longest-first and a scalar is replaced at most once, so `$DB_PASS` can
//! never be claimed by a shorter key `DB` and resolved values are never
//! re-scanned for further placeholders.

use std::collections::BTreeMap;

use serde_yaml::Value;
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{InterpolateError, Result};

/// Resolved output-key to secret-value table for one interpolation pass.
///
/// Values are held in [`Zeroizing`] so secret material is wiped from memory
/// when the map is dropped.
pub type SubstitutionMap = BTreeMap<String, Zeroizing<String>>;

/// Traversal depth limit. serde_yaml refuses documents nested deeper than
/// this at parse time; the walker enforces the same bound so a hand-built
/// tree cannot overflow the stack either.
const MAX_DEPTH: usize = 128;

/// Both placeholder spellings for one substitution key.
struct Pattern<'a> {
    key: &'a str,
    braced: String,
    bare: String,
    value: &'a str,
}

/// Interpolate `substitutions` into a YAML document, returning new YAML text.
///
/// Unknown placeholders (present in the document, absent from the map) are
/// left untouched. Formatting may normalize during re-serialization; the
/// document's structure and non-placeholder values do not change.
pub fn interpolate(document: &str, substitutions: &SubstitutionMap) -> Result<String> {
    let mut tree: Value =
        serde_yaml::from_str(document).map_err(InterpolateError::DocumentParse)?;

    let mut patterns: Vec<Pattern<'_>> = substitutions
        .iter()
        .map(|(key, value)| Pattern {
            key,
            braced: format!("${{{}}}", key),
            bare: format!("${}", key),
            value: value.as_str(),
        })
        .collect();
    // Longest key first: the most specific pattern wins when one key is a
    // prefix of another.
    patterns.sort_by(|a, b| b.key.len().cmp(&a.key.len()).then(a.key.cmp(b.key)));

    let mut path = Vec::new();
    visit(&mut tree, &patterns, &mut path, 0)?;

    let rendered = serde_yaml::to_string(&tree).map_err(InterpolateError::Serialize)?;
    Ok(rendered)
}

/// Recursive visitor over the YAML value tree.
///
/// Only string scalars are candidates for replacement; sequences, mappings,
/// and tagged values are recursed into, all other scalar kinds are left
/// untouched. Errors carry the path to the offending node.
fn visit(
    node: &mut Value,
    patterns: &[Pattern<'_>],
    path: &mut Vec<String>,
    depth: usize,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(InterpolateError::TooDeep {
            path: render_path(path),
            max: MAX_DEPTH,
        }
        .into());
    }

    match node {
        Value::String(s) => {
            let matched = patterns
                .iter()
                .find(|p| s.contains(&p.braced) || s.contains(&p.bare));
            if let Some(pattern) = matched {
                trace!(
                    path = %render_path(path),
                    key = %pattern.key,
                    "replacing placeholder scalar"
                );
                *s = pattern.value.to_string();
            }
        }
        Value::Sequence(items) => {
            for (i, item) in items.iter_mut().enumerate() {
                path.push(format!("[{}]", i));
                visit(item, patterns, path, depth + 1)?;
                path.pop();
            }
        }
        Value::Mapping(map) => {
            for (key, value) in map.iter_mut() {
                path.push(key_label(key));
                visit(value, patterns, path, depth + 1)?;
                path.pop();
            }
        }
        Value::Tagged(tagged) => {
            visit(&mut tagged.value, patterns, path, depth + 1)?;
        }
        _ => {}
    }

    Ok(())
}

/// Human-readable label for a mapping key in an error path.
fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => "?".to_string(),
    }
}

/// Render a node path like `spec.containers[0].env` for diagnostics.
fn render_path(path: &[String]) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let mut out = String::new();
    for segment in path {
        if segment.starts_with('[') {
            out.push_str(segment);
        } else {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(segment);
        }
    }
    out
}
