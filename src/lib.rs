//! Treesnap - directory tree snapshots as text, JSON, and YAML
//!
//! One depth-first walk over a directory produces a visual line rendering,
//! a structural tree, and folder/file totals. The output layer turns those
//! into a timestamped text report plus isomorphic JSON and YAML documents,
//! optionally bundled into a gzipped tarball.

pub mod error;
pub mod exclude;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::WalkError;
pub use exclude::{Exclusion, ExclusionMode, ExclusionRule, ExclusionSet};
pub use output::{ReportFormatter, bundle, to_json, to_yaml, write_outputs};
pub use tree::{StructuralTree, TreeNode, TreeWalker, WalkResult};
