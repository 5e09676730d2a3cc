//! Directory tree walking logic
//!
//! One recursive pass over the filesystem produces three synchronized
//! outputs: the visual rendering lines, the structural [`TreeNode`] tree,
//! and the folder/file totals. See [`TreeWalker`].

mod node;
mod walker;

pub use node::{StructuralTree, TreeNode};
pub use walker::{TreeWalker, WalkResult};
