//! Log redaction registry.
//!
//! Every resolved secret value is registered here before it enters a
//! substitution map. Multi-line values (private keys, certificates) are
//! registered line by line so each line is masked independently, wherever it
//! appears. Lines shorter than the configured minimum are skipped: masking a
//! two-character fragment would shred unrelated output without protecting
//! anything.

use zeroize::Zeroizing;

/// Replacement marker for redacted material.
const MASK: &str = "***";

/// Default minimum line length eligible for redaction.
pub const DEFAULT_MIN_MASK_LENGTH: usize = 4;

/// Registry of secret lines to scrub from diagnostic output.
#[derive(Debug, Default)]
pub struct Redactor {
    min_length: usize,
    lines: Vec<Zeroizing<String>>,
}

impl Redactor {
    /// Create a registry that masks lines of at least `min_length` characters.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            lines: Vec::new(),
        }
    }

    /// Register a secret value for redaction.
    ///
    /// The value is split on any line-break sequence (`\r\n`, `\r`, or `\n`)
    /// and each qualifying line is recorded individually.
    pub fn register(&mut self, value: &str) {
        for line in split_lines(value) {
            if line.chars().count() >= self.min_length {
                self.lines.push(Zeroizing::new(line.to_string()));
            }
        }
    }

    /// Number of lines currently registered.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether any lines are registered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Replace every occurrence of every registered line in `text` with the
    /// mask marker.
    pub fn redact(&self, text: &str) -> String {
        let mut out = text.to_string();
        for line in &self.lines {
            out = out.replace(line.as_str(), MASK);
        }
        out
    }
}

/// Split on `\r\n`, `\r`, or `\n`. Empty segments (the middle of a `\r\n`
/// pair, blank lines) are dropped.
fn split_lines(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
}
