//! In-memory content API: fixture data for tests and the offline demo.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::kernel::services::ports::content::Result;
use crate::kernel::services::ports::{BoxFuture, ContentApi, ContentError, ProjectMap};
use crate::models::TreeNode;

#[derive(Default)]
struct MemoryProject {
    // path (with leading /) -> content
    files: BTreeMap<String, String>,
    published: u32,
}

#[derive(Default)]
pub struct MemoryContentApi {
    inner: Mutex<BTreeMap<String, MemoryProject>>,
}

impl MemoryContentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two small demo projects.
    pub fn fixture() -> Self {
        let api = Self::new();
        api.put_file("site1", "/index.html", "<h1>site one</h1>\n");
        api.put_file("site1", "/docs/guide.txt", "read the guide\n");
        api.put_file("site1", "/docs/notes.txt", "some notes\n");
        api.put_file("site2", "/readme.txt", "site two\n");
        api
    }

    pub fn add_project(&self, name: &str) {
        let mut inner = self.lock();
        inner.entry(name.to_string()).or_default();
    }

    pub fn put_file(&self, project: &str, path: &str, content: &str) {
        let mut inner = self.lock();
        inner
            .entry(project.to_string())
            .or_default()
            .files
            .insert(path.to_string(), content.to_string());
    }

    pub fn file_content(&self, project: &str, path: &str) -> Option<String> {
        let inner = self.lock();
        inner.get(project)?.files.get(path).cloned()
    }

    pub fn publish_count(&self, project: &str) -> u32 {
        let inner = self.lock();
        inner.get(project).map(|p| p.published).unwrap_or(0)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, MemoryProject>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn listing_for(files: &BTreeMap<String, String>) -> TreeNode {
    let mut root = TreeNode::dir("", "/", Vec::new());
    for path in files.keys() {
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        insert_path(&mut root, path, &segments);
    }
    root
}

fn insert_path(node: &mut TreeNode, full_path: &str, segments: &[&str]) {
    match segments {
        [] => {}
        [leaf] => node.children.push(TreeNode::file(leaf, full_path)),
        [dir_name, rest @ ..] => {
            let dir_path = format!("{}/{}", node.full_path.trim_end_matches('/'), dir_name);
            let idx = match node
                .children
                .iter()
                .position(|c| c.is_dir && c.name == *dir_name)
            {
                Some(i) => i,
                None => {
                    node.children
                        .push(TreeNode::dir(dir_name, &dir_path, Vec::new()));
                    node.children.len() - 1
                }
            };
            insert_path(&mut node.children[idx], full_path, rest);
        }
    }
}

fn missing(path: String) -> ContentError {
    ContentError::Status { code: 404, path }
}

impl ContentApi for MemoryContentApi {
    fn list_projects(&self) -> BoxFuture<'_, Result<ProjectMap>> {
        let inner = self.lock();
        let mut map = ProjectMap::new();
        for name in inner.keys() {
            map.insert(name.clone(), serde_json::json!({}));
        }
        Box::pin(async move { Ok(map) })
    }

    fn list_files(&self, project: String) -> BoxFuture<'_, Result<TreeNode>> {
        let inner = self.lock();
        let result = inner
            .get(&project)
            .map(|p| listing_for(&p.files))
            .ok_or_else(|| missing(format!("/sites/{project}/files/")));
        Box::pin(async move { result })
    }

    fn read_file(&self, project: String, path: String) -> BoxFuture<'_, Result<String>> {
        let inner = self.lock();
        let result = inner
            .get(&project)
            .and_then(|p| p.files.get(&path).cloned())
            .ok_or_else(|| missing(format!("/sites/{project}/files{path}")));
        Box::pin(async move { result })
    }

    fn write_file(
        &self,
        project: String,
        path: String,
        content: String,
    ) -> BoxFuture<'_, Result<()>> {
        let mut inner = self.lock();
        let result = match inner.get_mut(&project) {
            Some(p) => {
                p.files.insert(path, content);
                Ok(())
            }
            None => Err(missing(format!("/sites/{project}/files{path}"))),
        };
        Box::pin(async move { result })
    }

    fn publish(&self, project: String) -> BoxFuture<'_, Result<()>> {
        let mut inner = self.lock();
        let result = match inner.get_mut(&project) {
            Some(p) => {
                p.published += 1;
                Ok(())
            }
            None => Err(missing(format!("/sites/{project}/publish/"))),
        };
        Box::pin(async move { result })
    }
}
