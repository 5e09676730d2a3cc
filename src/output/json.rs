//! JSON structural output

use std::io;

use crate::tree::{StructuralTree, TreeNode};

/// Render the structural tree as pretty-printed JSON.
pub fn to_json(root: &TreeNode) -> io::Result<String> {
    serde_json::to_string_pretty(&StructuralTree::new(root))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
