use super::{Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    /// Whether the action was applied. False for stale completions; the
    /// shell skips view work when nothing changed.
    pub state_changed: bool,
}

impl DispatchResult {
    fn none() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: true,
        }
    }

    fn effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::ProjectsLoaded { projects } => {
                self.state.projects = projects.keys().cloned().collect();
                DispatchResult::changed()
            }
            Action::SelectProject { name } => {
                self.state.current_project = name.clone();
                self.state.current_file.clear();
                self.state.listing_generation += 1;
                DispatchResult::effects(vec![Effect::LoadListing {
                    project: name,
                    generation: self.state.listing_generation,
                }])
            }
            Action::ListingLoaded {
                generation,
                project,
                ..
            } => {
                if generation != self.state.listing_generation {
                    tracing::debug!(
                        project = %project,
                        generation,
                        current = self.state.listing_generation,
                        "stale listing dropped"
                    );
                    return DispatchResult::none();
                }
                DispatchResult::changed()
            }
            Action::OpenFile { path } => {
                self.state.current_file = path.clone();
                self.state.file_generation += 1;
                DispatchResult::effects(vec![Effect::LoadFile {
                    project: self.state.current_project.clone(),
                    path,
                    generation: self.state.file_generation,
                }])
            }
            Action::FileLoaded {
                generation, path, ..
            } => {
                if generation != self.state.file_generation {
                    tracing::debug!(
                        path = %path,
                        generation,
                        current = self.state.file_generation,
                        "stale file content dropped"
                    );
                    return DispatchResult::none();
                }
                DispatchResult::changed()
            }
            Action::SaveFile {
                project,
                path,
                content,
            } => DispatchResult::effects(vec![Effect::WriteFile {
                project,
                path,
                content,
            }]),
            Action::FileSaved { project, .. } => {
                // Write then publish, unconditionally; a failed write was
                // already logged and replaced by its fallback.
                DispatchResult::effects(vec![Effect::Publish { project }])
            }
            Action::Published { .. } => DispatchResult::none(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
