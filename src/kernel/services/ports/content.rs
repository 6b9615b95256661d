use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::models::TreeNode;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Project name to opaque metadata, as the listing endpoint returns it.
pub type ProjectMap = serde_json::Map<String, serde_json::Value>;

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    Transport(String),
    Status { code: u16, path: String },
    Decode(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Transport(msg) => write!(f, "transport error: {msg}"),
            ContentError::Status { code, path } => {
                write!(f, "unexpected status {code} for {path}")
            }
            ContentError::Decode(msg) => write!(f, "undecodable response: {msg}"),
        }
    }
}

impl std::error::Error for ContentError {}

/// The remote content API the app consumes. Parameters are owned so
/// implementations can move them into their futures.
pub trait ContentApi: Send + Sync {
    /// GET /sites/
    fn list_projects(&self) -> BoxFuture<'_, Result<ProjectMap>>;

    /// GET /sites/{project}/files/
    fn list_files(&self, project: String) -> BoxFuture<'_, Result<TreeNode>>;

    /// GET /sites/{project}/files{path}
    fn read_file(&self, project: String, path: String) -> BoxFuture<'_, Result<String>>;

    /// POST /sites/{project}/files{path}?o=all
    fn write_file(
        &self,
        project: String,
        path: String,
        content: String,
    ) -> BoxFuture<'_, Result<()>>;

    /// PUT /sites/{project}/publish/
    fn publish(&self, project: String) -> BoxFuture<'_, Result<()>>;
}
