//! Folder hierarchy nodes reconstructed from flat path lists.

use crate::models::FileId;

/// One segment of the reconstructed folder hierarchy.
///
/// A node is a directory iff it was never the final segment of an input
/// path. Directory nodes carry their children in first-seen order; leaf
/// nodes carry the id of the backing file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    /// Path segment this node represents.
    pub name: String,
    /// Directory flag (leaves are files).
    pub is_dir: bool,
    /// Backing file for leaf nodes.
    pub file: Option<FileId>,
    /// Child nodes in insertion order (empty for files).
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a directory node with no children yet.
    pub fn directory(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_dir: true,
            file: None,
            children: Vec::new(),
        }
    }

    /// Create a leaf node backed by a file.
    pub fn leaf(name: &str, file: FileId) -> Self {
        Self {
            name: name.to_string(),
            is_dir: false,
            file: Some(file),
            children: Vec::new(),
        }
    }
}
