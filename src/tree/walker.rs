//! TreeWalker - builds rendered lines, structural tree, and totals in one pass

use std::collections::BTreeMap;
use std::fs;
use std::path::{self, Component, Path, PathBuf};

use crate::error::WalkError;
use crate::exclude::{Exclusion, ExclusionSet};

use super::node::TreeNode;

const BRANCH: &str = "+-- ";
const INDENT: &str = "|   ";
const PERMISSION_DENIED: &str = "[Permission Denied]";

/// Everything one walk produces: the structural tree, the rendered lines in
/// visit order, and the folder and file totals.
#[derive(Debug)]
pub struct WalkResult {
    pub root: TreeNode,
    pub lines: Vec<String>,
    pub folders: usize,
    pub files: usize,
}

/// Tree walker that renders text lines and builds the structural tree in a
/// single depth-first pass.
///
/// Within each directory, files are listed first and subdirectories second,
/// each group sorted by name.
pub struct TreeWalker {
    rules: ExclusionSet,
}

/// Result of visiting one directory, merged into the parent's visit.
struct DirVisit {
    node: TreeNode,
    lines: Vec<String>,
    folders: usize,
    files: usize,
}

impl DirVisit {
    /// Visit for a directory whose contents are not walked. The directory
    /// itself still counts and keeps its rendered lines.
    fn pruned(name: &str, lines: Vec<String>) -> Self {
        Self {
            node: TreeNode::Dir {
                name: name.to_string(),
                children: BTreeMap::new(),
            },
            lines,
            folders: 1,
            files: 0,
        }
    }
}

impl TreeWalker {
    pub fn new(rules: ExclusionSet) -> Self {
        Self { rules }
    }

    /// Walk `root` and build the full result.
    ///
    /// The root is validated once up front and always listed under its own
    /// base name; a rule matching that name prunes the root's contents like
    /// any other directory's. A directory that cannot be listed mid-walk
    /// produces a placeholder entry instead of an error.
    pub fn walk(&self, root: &Path) -> Result<WalkResult, WalkError> {
        if !root.is_dir() {
            return Err(WalkError::InvalidRoot(root.to_path_buf()));
        }
        let name = root_display_name(root);
        let visit = self.walk_dir(root, &name, "");
        Ok(WalkResult {
            root: visit.node,
            lines: visit.lines,
            folders: visit.folders,
            files: visit.files,
        })
    }

    fn walk_dir(&self, path: &Path, name: &str, prefix: &str) -> DirVisit {
        let mut lines = vec![format!("{prefix}{BRANCH}{name}")];

        // Both exclusion modes keep the directory's own entry and skip
        // everything inside it. The root is matched under its display name
        // like any other directory.
        if self.rules.classify(name) != Exclusion::None {
            return DirVisit::pruned(name, lines);
        }

        let child_prefix = format!("{prefix}{INDENT}");
        let entries = match fs::read_dir(path) {
            Ok(rd) => rd.filter_map(|e| e.ok()).collect::<Vec<_>>(),
            Err(_) => {
                lines.push(format!("{child_prefix}{BRANCH}{PERMISSION_DENIED}"));
                return DirVisit::pruned(name, lines);
            }
        };

        let mut file_names = Vec::new();
        let mut dir_entries = Vec::new();
        for entry in entries {
            let entry_name = entry.file_name().to_string_lossy().to_string();
            let entry_path = entry.path();
            // Follows symlinks; entries that are neither regular files nor
            // directories are not listed.
            match fs::metadata(&entry_path) {
                Ok(meta) if meta.is_file() => file_names.push(entry_name),
                Ok(meta) if meta.is_dir() => dir_entries.push((entry_name, entry_path)),
                _ => {}
            }
        }
        file_names.sort();
        dir_entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut children = BTreeMap::new();
        let mut folders = 1;
        let mut files = 0;

        for file_name in file_names {
            lines.push(format!("{child_prefix}{BRANCH}{file_name}"));
            files += 1;
            children.insert(file_name.clone(), TreeNode::File { name: file_name });
        }

        for (dir_name, dir_path) in dir_entries {
            let child = self.walk_dir(&dir_path, &dir_name, &child_prefix);
            folders += child.folders;
            files += child.files;
            lines.extend(child.lines);
            children.insert(dir_name, child.node);
        }

        DirVisit {
            node: TreeNode::Dir {
                name: name.to_string(),
                children,
            },
            lines,
            folders,
            files,
        }
    }
}

/// Base name the root is listed under. Relative paths resolve against the
/// current directory first, and `.`/`..` components are resolved lexically
/// without touching symlinks, so `..` names the parent directory.
fn root_display_name(root: &Path) -> String {
    let resolved = path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in resolved.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    normalized
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
