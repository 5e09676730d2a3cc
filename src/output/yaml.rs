//! YAML structural output

use std::io;

use crate::tree::{StructuralTree, TreeNode};

/// Render the structural tree as YAML.
///
/// The document mirrors the JSON rendering node for node.
pub fn to_yaml(root: &TreeNode) -> io::Result<String> {
    serde_yaml::to_string(&StructuralTree::new(root))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
