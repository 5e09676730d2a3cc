//! Tree node data model and its structural serialization

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One filesystem entry in a walked tree.
///
/// Directories own their children in a name-ordered map; files never have
/// children. A directory whose contents were excluded or unreadable keeps an
/// empty children map.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    File {
        name: String,
    },
    Dir {
        name: String,
        children: BTreeMap<String, TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> Option<&BTreeMap<String, TreeNode>> {
        match self {
            TreeNode::File { .. } => None,
            TreeNode::Dir { children, .. } => Some(children),
        }
    }
}

/// Nested-mapping view of a tree, used for the JSON and YAML renderings.
///
/// The document is a single-entry mapping from the root's name to its
/// contents. Every directory serializes as a mapping from child name to child
/// representation and every file serializes as a null leaf, so the two output
/// formats are isomorphic by construction.
pub struct StructuralTree<'a> {
    root: &'a TreeNode,
}

impl<'a> StructuralTree<'a> {
    pub fn new(root: &'a TreeNode) -> Self {
        Self { root }
    }
}

impl Serialize for StructuralTree<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.root.name(), &Mapping(self.root))?;
        map.end()
    }
}

struct Mapping<'a>(&'a TreeNode);

impl Serialize for Mapping<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            TreeNode::File { .. } => serializer.serialize_none(),
            TreeNode::Dir { children, .. } => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (name, child) in children {
                    map.serialize_entry(name, &Mapping(child))?;
                }
                map.end()
            }
        }
    }
}
