//! File-listing data model, deserialized from the content API.

use serde::{Deserialize, Serialize};

/// One entry in a project's file listing. `full_path` is unique across the
/// tree and doubles as the API address of the entry; `children` is ordered
/// and only meaningful for directories. A listing is rebuilt from scratch on
/// every project selection, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub full_path: String,
    pub is_dir: bool,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// The fallback listing for a failed fetch: a childless directory root.
    pub fn empty_root() -> Self {
        Self {
            name: String::new(),
            full_path: "/".to_string(),
            is_dir: true,
            children: Vec::new(),
        }
    }

    pub fn file(name: &str, full_path: &str) -> Self {
        Self {
            name: name.to_string(),
            full_path: full_path.to_string(),
            is_dir: false,
            children: Vec::new(),
        }
    }

    pub fn dir(name: &str, full_path: &str, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.to_string(),
            full_path: full_path.to_string(),
            is_dir: true,
            children,
        }
    }

    /// Number of entries in the subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }
}
