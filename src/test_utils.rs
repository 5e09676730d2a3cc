//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory tree, removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create an empty temporary tree.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp root"),
        }
    }

    /// Root of the tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at a path relative to the root, creating any missing
    /// parent directories along the way.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parents");
        }
        fs::write(&full, content).expect("Failed to write file");
        full
    }

    /// Create a directory (and its parents) relative to the root.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full = self.dir.path().join(path);
        fs::create_dir_all(&full).expect("Failed to create dir");
        full
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
