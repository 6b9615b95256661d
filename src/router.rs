//! Navigation state: the current project/file selection encoded as a
//! location hash token, `#/` + project + file. The file path carries its own
//! leading `/`, so no separator sits between project and file.
//!
//! This is read-based state: selection handlers write it as a side effect
//! and request handlers read it back; it never drives the view.

#[derive(Debug, Clone, Default)]
pub struct Router {
    hash: String,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw token, for sharing or restoring on load.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn set_hash(&mut self, token: &str) {
        self.hash = token.to_string();
    }

    pub fn set_project(&mut self, name: &str) {
        self.hash = format!("#/{name}");
    }

    pub fn set_file(&mut self, path: &str) {
        let project = self.project();
        self.hash = format!("#/{project}{path}");
    }

    /// Segment index 1 of a `/` split; empty when nothing is selected or the
    /// token is malformed.
    pub fn project(&self) -> String {
        self.hash
            .split('/')
            .nth(1)
            .unwrap_or_default()
            .to_string()
    }

    /// Whatever follows the first occurrence of the project name. A file
    /// path containing a token equal to the project name decodes wrong;
    /// kept that way deliberately.
    pub fn file(&self) -> String {
        let project = self.project();
        if project.is_empty() {
            return String::new();
        }
        match self.hash.split_once(project.as_str()) {
            Some((_, rest)) => rest.to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/router.rs"]
mod tests;
