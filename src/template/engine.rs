use std::sync::Arc;

use compact_str::CompactString;
use rustc_hash::FxHashMap;

use crate::dom::{Document, Fragment};

use super::eval;
use super::parse::{self, Program};
use super::source::TemplateSource;
use super::value::Record;
use super::TemplateError;

/// The template engine: owns the template source and the compiled-program
/// cache. Compilation is idempotent; a given identifier is resolved and
/// parsed once, then served from the cache for the engine's lifetime (no
/// invalidation).
pub struct Engine {
    source: Box<dyn TemplateSource>,
    cache: FxHashMap<CompactString, Arc<Program>>,
}

impl Engine {
    pub fn new(source: Box<dyn TemplateSource>) -> Self {
        Self {
            source,
            cache: FxHashMap::default(),
        }
    }

    /// Compiles the template named `id`, or returns the cached program.
    pub fn compile(&mut self, id: &str) -> Result<Arc<Program>, TemplateError> {
        if let Some(program) = self.cache.get(id) {
            return Ok(program.clone());
        }
        let body = self
            .source
            .resolve(id)
            .ok_or_else(|| TemplateError::UnknownTemplate(id.to_string()))?;
        let program = Arc::new(parse::parse(body)?);
        self.cache
            .insert(CompactString::from(id), program.clone());
        Ok(program)
    }

    /// Compiles a markup body directly, bypassing source and cache.
    pub fn compile_body(body: &str) -> Result<Program, TemplateError> {
        parse::parse(body)
    }

    /// Compiles (cached) and renders in one step.
    pub fn render(
        &mut self,
        id: &str,
        record: &Record,
        doc: &mut Document,
    ) -> Result<Fragment, TemplateError> {
        let program = self.compile(id)?;
        eval::render(doc, &program, record)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/engine.rs"]
mod tests;
