//! Test support utilities for inlay integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]


use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Each test gets its own project dir. No process-global state is mutated —
/// child processes use `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Write a YAML document into the test dir, returning its path.
    pub fn write_doc(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test document");
        path
    }

    /// Read a file back from the test dir.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("failed to read test file")
    }
}
