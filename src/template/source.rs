/// Where template bodies come from. The engine resolves each identifier
/// through its source at most once; after that the compiled program is
/// served from the cache.
pub trait TemplateSource {
    fn resolve(&self, id: &str) -> Option<&str>;
}

/// A fixed identifier-to-body table, the usual source for the built-in
/// templates.
#[derive(Debug, Default)]
pub struct StaticTemplates {
    entries: Vec<(String, String)>,
}

impl StaticTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, body: &str) {
        if let Some(slot) = self.entries.iter_mut().find(|(name, _)| name == id) {
            slot.1 = body.to_string();
        } else {
            self.entries.push((id.to_string(), body.to_string()));
        }
    }

    pub fn with(mut self, id: &str, body: &str) -> Self {
        self.insert(id, body);
        self
    }
}

impl TemplateSource for StaticTemplates {
    fn resolve(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, body)| body.as_str())
    }
}
