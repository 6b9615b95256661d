use crate::kernel::services::ports::ProjectMap;
use crate::models::TreeNode;

/// Everything that can happen to the application: user selections and fetch
/// completions. Completions echo the generation their request was issued
/// under so stale responses can be dropped.
#[derive(Debug, Clone)]
pub enum Action {
    ProjectsLoaded {
        projects: ProjectMap,
    },
    SelectProject {
        name: String,
    },
    ListingLoaded {
        generation: u64,
        project: String,
        root: TreeNode,
    },
    OpenFile {
        path: String,
    },
    FileLoaded {
        generation: u64,
        project: String,
        path: String,
        content: String,
    },
    SaveFile {
        project: String,
        path: String,
        content: String,
    },
    FileSaved {
        project: String,
        path: String,
    },
    Published {
        project: String,
    },
}
