//! Error types for tree walking

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a walk before any output is produced.
///
/// Failures to list individual directories mid-walk are not errors; they are
/// folded into the output as placeholder entries.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The requested root does not exist or is not a directory.
    #[error("'{}' does not exist or is not a directory", .0.display())]
    InvalidRoot(PathBuf),
}
