//! Fetch runtime: spawns content API calls and answers with completion
//! actions over a channel. Fetch failures end here, logged and replaced by
//! the empty-result fallback, never surfaced.

use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::kernel::services::ports::{ContentApi, ProjectMap};
use crate::kernel::Action;
use crate::models::TreeNode;

pub struct FetchRuntime {
    runtime: tokio::runtime::Runtime,
    api: Arc<dyn ContentApi>,
    tx: Sender<Action>,
}

impl FetchRuntime {
    pub fn new(api: Arc<dyn ContentApi>, tx: Sender<Action>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, api, tx })
    }

    pub fn load_projects(&self) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let projects = match api.list_projects().await {
                Ok(projects) => projects,
                Err(e) => {
                    tracing::error!(error = %e, "list projects failed");
                    ProjectMap::new()
                }
            };
            let _ = tx.send(Action::ProjectsLoaded { projects });
        });
    }

    pub fn load_listing(&self, project: String, generation: u64) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let root = match api.list_files(project.clone()).await {
                Ok(root) => root,
                Err(e) => {
                    // A failed listing renders as an empty tree.
                    tracing::error!(project = %project, error = %e, "list files failed");
                    TreeNode::empty_root()
                }
            };
            let _ = tx.send(Action::ListingLoaded {
                generation,
                project,
                root,
            });
        });
    }

    pub fn load_file(&self, project: String, path: String, generation: u64) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let content = match api.read_file(project.clone(), path.clone()).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::error!(project = %project, path = %path, error = %e, "read file failed");
                    String::new()
                }
            };
            let _ = tx.send(Action::FileLoaded {
                generation,
                project,
                path,
                content,
            });
        });
    }

    pub fn write_file(&self, project: String, path: String, content: String) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match api
                .write_file(project.clone(), path.clone(), content)
                .await
            {
                Ok(()) => tracing::info!(project = %project, path = %path, "saved"),
                Err(e) => {
                    tracing::error!(project = %project, path = %path, error = %e, "write file failed");
                }
            }
            // The save flow continues to publish either way.
            let _ = tx.send(Action::FileSaved { project, path });
        });
    }

    pub fn publish(&self, project: String) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            match api.publish(project.clone()).await {
                Ok(()) => tracing::info!(project = %project, "published"),
                Err(e) => {
                    tracing::error!(project = %project, error = %e, "publish failed");
                }
            }
            let _ = tx.send(Action::Published { project });
        });
    }
}
