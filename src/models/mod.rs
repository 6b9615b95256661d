//! Data models shared by the kernel and the app layer.

pub mod listing;

pub use listing::TreeNode;
