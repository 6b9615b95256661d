//! Shell: owns the document, the template engine, the kernel store, the
//! router and the fetch runtime, and turns actions into view work.

use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::dom::{Document, NodeId, ObserveOptions, ObserverId};
use crate::kernel::services::adapters::FetchRuntime;
use crate::kernel::services::ports::ContentApi;
use crate::kernel::{Action, AppState, Effect, Store};
use crate::models::TreeNode;
use crate::router::Router;
use crate::template::{Engine, Record};

use super::walker::{self, CONTENT_PREFIX};
use super::{templates, watcher, ShellError};

pub struct Shell {
    doc: Document,
    engine: Engine,
    store: Store,
    router: Router,
    runtime: FetchRuntime,
    projects_el: NodeId,
    files_el: NodeId,
    workarea_el: NodeId,
    files_observer: ObserverId,
}

impl Shell {
    /// Builds the document scaffold (project selector, listing container,
    /// work area), registers the listing observer and starts the fetch
    /// runtime. Completion actions arrive on `tx`'s receiving end and are
    /// fed back through [`Shell::handle`].
    pub fn new(api: Arc<dyn ContentApi>, tx: Sender<Action>) -> io::Result<Self> {
        let mut doc = Document::new();
        let root = doc.root();

        let projects_el = doc.create_element("select");
        doc.set_attr(projects_el, "id", "projects");
        doc.append_child(root, projects_el);

        let files_el = doc.create_element("div");
        doc.set_attr(files_el, "id", "files");
        doc.append_child(root, files_el);

        let workarea_el = doc.create_element("div");
        doc.set_attr(workarea_el, "id", "workarea");
        doc.append_child(root, workarea_el);

        let files_observer = doc.observe(files_el, ObserveOptions::all());
        let runtime = FetchRuntime::new(api, tx)?;

        Ok(Self {
            doc,
            engine: Engine::new(Box::new(templates::builtin())),
            store: Store::new(AppState::new()),
            router: Router::new(),
            runtime,
            projects_el,
            files_el,
            workarea_el,
            files_observer,
        })
    }

    /// Kicks off the initial project listing.
    pub fn boot(&mut self) {
        self.runtime.load_projects();
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn projects_container(&self) -> NodeId {
        self.projects_el
    }

    pub fn files_container(&self) -> NodeId {
        self.files_el
    }

    pub fn workarea(&self) -> NodeId {
        self.workarea_el
    }

    /// Selects a project, as the project `<select>`'s change event would.
    pub fn select_project(&mut self, name: &str) -> Result<(), ShellError> {
        self.handle(Action::SelectProject {
            name: name.to_string(),
        })
    }

    /// Delivers a click to a node and runs whatever handlers it carries.
    pub fn click(&mut self, node: NodeId) -> Result<(), ShellError> {
        for handler in self.doc.dispatch_click(node) {
            match handler {
                watcher::OPEN_FILE => {
                    let path = self
                        .doc
                        .attr(node, "data-path")
                        .map(str::to_string)
                        .ok_or(ShellError::MissingAttribute("data-path"))?;
                    self.handle(Action::OpenFile { path })?;
                }
                watcher::SAVE_FILE => {
                    let target = self
                        .doc
                        .attr(node, "data-target")
                        .map(str::to_string)
                        .ok_or(ShellError::MissingAttribute("data-target"))?;
                    let editor = self
                        .doc
                        .element_by_id(&target)
                        .ok_or(ShellError::MissingContainer("raweditor"))?;
                    let project = self
                        .doc
                        .attr(editor, "data-project")
                        .map(str::to_string)
                        .ok_or(ShellError::MissingAttribute("data-project"))?;
                    let path = self
                        .doc
                        .attr(editor, "data-path")
                        .map(str::to_string)
                        .ok_or(ShellError::MissingAttribute("data-path"))?;
                    let content = self.doc.value(editor).unwrap_or_default();
                    self.handle(Action::SaveFile {
                        project,
                        path,
                        content,
                    })?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, action: Action) -> Result<(), ShellError> {
        match action {
            Action::ProjectsLoaded { projects } => {
                let result = self.store.dispatch(Action::ProjectsLoaded { projects });
                self.run_effects(result.effects);
                self.render_project_options();
                // A freshly filled select control lands on its first option.
                if let Some(first) = self.store.state().projects.first().cloned() {
                    self.handle(Action::SelectProject { name: first })?;
                }
                Ok(())
            }
            Action::SelectProject { name } => {
                self.router.set_project(&name);
                let result = self.store.dispatch(Action::SelectProject { name });
                self.run_effects(result.effects);
                Ok(())
            }
            Action::ListingLoaded {
                generation,
                project,
                root,
            } => {
                let result = self.store.dispatch(Action::ListingLoaded {
                    generation,
                    project,
                    root: root.clone(),
                });
                if result.state_changed {
                    self.rebuild_listing(&root)?;
                }
                self.run_effects(result.effects);
                Ok(())
            }
            Action::OpenFile { path } => {
                self.router.set_file(&path);
                let result = self.store.dispatch(Action::OpenFile { path });
                self.run_effects(result.effects);
                Ok(())
            }
            Action::FileLoaded {
                generation,
                project,
                path,
                content,
            } => {
                let result = self.store.dispatch(Action::FileLoaded {
                    generation,
                    project: project.clone(),
                    path: path.clone(),
                    content: content.clone(),
                });
                if result.state_changed {
                    self.build_editor(&project, &path, &content)?;
                }
                self.run_effects(result.effects);
                Ok(())
            }
            other => {
                let result = self.store.dispatch(other);
                self.run_effects(result.effects);
                Ok(())
            }
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadProjects => self.runtime.load_projects(),
                Effect::LoadListing {
                    project,
                    generation,
                } => self.runtime.load_listing(project, generation),
                Effect::LoadFile {
                    project,
                    path,
                    generation,
                } => self.runtime.load_file(project, path, generation),
                Effect::WriteFile {
                    project,
                    path,
                    content,
                } => self.runtime.write_file(project, path, content),
                Effect::Publish { project } => self.runtime.publish(project),
            }
        }
    }

    fn render_project_options(&mut self) {
        self.doc.clear_children(self.projects_el);
        let names = self.store.state().projects.clone();
        for name in names {
            let option = self.doc.create_element("option");
            self.doc.set_attr(option, "value", &name);
            let text = self.doc.create_text(&name);
            self.doc.append_child(option, text);
            self.doc.append_child(self.projects_el, option);
        }
    }

    /// Full rebuild: clear both containers, walk the new listing, then let
    /// the watcher process the coalesced mutation batch. Completes
    /// synchronously, so the watcher runs exactly once per rebuild.
    fn rebuild_listing(&mut self, root: &TreeNode) -> Result<(), ShellError> {
        self.doc.clear_children(self.files_el);
        self.doc.clear_children(self.workarea_el);
        for child in &root.children {
            walker::walk(&mut self.doc, &mut self.engine, child, self.files_el)?;
        }
        let wired = watcher::rebind(&mut self.doc, self.files_observer, self.files_el);
        tracing::debug!(wired, "listing rebuilt");
        Ok(())
    }

    fn build_editor(
        &mut self,
        project: &str,
        path: &str,
        content: &str,
    ) -> Result<(), ShellError> {
        self.doc.clear_children(self.workarea_el);

        let editor_id = walker::dom_id(CONTENT_PREFIX, &format!("{project}{path}"));
        let record = Record::new()
            .with("id", editor_id.as_str())
            .with("project", project)
            .with("path", path);

        let editor = self.engine.render(templates::EDITOR, &record, &mut self.doc)?;
        let textarea = self
            .doc
            .fragment_query_class(&editor, "raweditor")
            .ok_or(ShellError::MissingContainer("raweditor"))?;
        self.doc.append_fragment(self.workarea_el, &editor);
        self.doc.set_value(textarea, content);

        let controls = self
            .engine
            .render(templates::CONTROLS, &record, &mut self.doc)?;
        let button = self
            .doc
            .fragment_query_class(&controls, "save")
            .ok_or(ShellError::MissingContainer("save"))?;
        self.doc.append_fragment(self.workarea_el, &controls);
        // The work area is not observed; the save handler is wired directly.
        self.doc.add_listener(button, watcher::SAVE_FILE);

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/shell.rs"]
mod tests;
