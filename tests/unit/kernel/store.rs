use super::*;

use crate::kernel::services::ports::ProjectMap;
use crate::models::TreeNode;

fn store() -> Store {
    Store::new(AppState::new())
}

fn listing() -> TreeNode {
    TreeNode::dir(
        "",
        "/",
        vec![TreeNode::file("a.txt", "/a.txt")],
    )
}

#[test]
fn projects_loaded_records_names() {
    let mut store = store();
    let mut projects = ProjectMap::new();
    projects.insert("site2".to_string(), serde_json::json!({}));
    projects.insert("site1".to_string(), serde_json::json!({}));

    let result = store.dispatch(Action::ProjectsLoaded { projects });

    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state().projects, vec!["site1", "site2"]);
}

#[test]
fn selecting_a_project_requests_its_listing() {
    let mut store = store();
    let result = store.dispatch(Action::SelectProject {
        name: "site1".to_string(),
    });

    assert_eq!(store.state().current_project, "site1");
    assert_eq!(store.state().listing_generation, 1);
    assert_eq!(
        result.effects,
        vec![Effect::LoadListing {
            project: "site1".to_string(),
            generation: 1,
        }]
    );
}

#[test]
fn reselecting_clears_the_open_file() {
    let mut store = store();
    store.dispatch(Action::SelectProject {
        name: "site1".to_string(),
    });
    store.dispatch(Action::OpenFile {
        path: "/a.txt".to_string(),
    });
    assert_eq!(store.state().current_file, "/a.txt");

    store.dispatch(Action::SelectProject {
        name: "site2".to_string(),
    });
    assert_eq!(store.state().current_file, "");
}

#[test]
fn stale_listing_responses_are_dropped() {
    let mut store = store();
    store.dispatch(Action::SelectProject {
        name: "site1".to_string(),
    });
    store.dispatch(Action::SelectProject {
        name: "site2".to_string(),
    });

    let stale = store.dispatch(Action::ListingLoaded {
        generation: 1,
        project: "site1".to_string(),
        root: listing(),
    });
    assert!(!stale.state_changed);

    let current = store.dispatch(Action::ListingLoaded {
        generation: 2,
        project: "site2".to_string(),
        root: listing(),
    });
    assert!(current.state_changed);
}

#[test]
fn opening_a_file_requests_its_content() {
    let mut store = store();
    store.dispatch(Action::SelectProject {
        name: "site1".to_string(),
    });
    let result = store.dispatch(Action::OpenFile {
        path: "/a.txt".to_string(),
    });

    assert_eq!(
        result.effects,
        vec![Effect::LoadFile {
            project: "site1".to_string(),
            path: "/a.txt".to_string(),
            generation: 1,
        }]
    );
}

#[test]
fn stale_file_content_is_dropped() {
    let mut store = store();
    store.dispatch(Action::SelectProject {
        name: "site1".to_string(),
    });
    store.dispatch(Action::OpenFile {
        path: "/a.txt".to_string(),
    });
    store.dispatch(Action::OpenFile {
        path: "/b.txt".to_string(),
    });

    let stale = store.dispatch(Action::FileLoaded {
        generation: 1,
        project: "site1".to_string(),
        path: "/a.txt".to_string(),
        content: "old".to_string(),
    });
    assert!(!stale.state_changed);

    let current = store.dispatch(Action::FileLoaded {
        generation: 2,
        project: "site1".to_string(),
        path: "/b.txt".to_string(),
        content: "new".to_string(),
    });
    assert!(current.state_changed);
}

#[test]
fn save_writes_then_publishes() {
    let mut store = store();
    let write = store.dispatch(Action::SaveFile {
        project: "site1".to_string(),
        path: "/a.txt".to_string(),
        content: "edited".to_string(),
    });
    assert_eq!(
        write.effects,
        vec![Effect::WriteFile {
            project: "site1".to_string(),
            path: "/a.txt".to_string(),
            content: "edited".to_string(),
        }]
    );

    let saved = store.dispatch(Action::FileSaved {
        project: "site1".to_string(),
        path: "/a.txt".to_string(),
    });
    assert_eq!(
        saved.effects,
        vec![Effect::Publish {
            project: "site1".to_string(),
        }]
    );

    let published = store.dispatch(Action::Published {
        project: "site1".to_string(),
    });
    assert!(published.effects.is_empty());
    assert!(!published.state_changed);
}
