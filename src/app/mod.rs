//! Application layer: the shell that wires document, template engine,
//! kernel store, router and fetch runtime together, plus the tree walker
//! and the mutation watcher.

pub mod shell;
pub mod templates;
pub mod walker;
pub mod watcher;

pub use shell::Shell;

use std::fmt;

use crate::template::TemplateError;

/// Failures in the view-wiring layer. Like template errors these indicate
/// markup defects, not user-facing conditions, and propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    Template(TemplateError),
    MissingContainer(&'static str),
    MissingAttribute(&'static str),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Template(err) => write!(f, "{err}"),
            ShellError::MissingContainer(class) => {
                write!(f, "rendered fragment has no {class:?} element")
            }
            ShellError::MissingAttribute(name) => {
                write!(f, "element is missing the {name:?} attribute")
            }
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Template(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TemplateError> for ShellError {
    fn from(err: TemplateError) -> Self {
        ShellError::Template(err)
    }
}
