//! Markup template engine. A template body is literal text interleaved with
//! `<% %>` directives; compilation parses it into an instruction program,
//! rendering interprets the program against a data record and parses the
//! produced markup into a detached fragment.
//!
//! Directives:
//! - `<%= field %>` emits a record field.
//! - `<% for VAR in FIELD %>` ... `<% end %>` iterates a list field.
//! - `<% if FIELD %>` ... `<% else %>` ... `<% end %>` branches on
//!   truthiness.

pub mod engine;
pub mod eval;
pub mod parse;
pub mod source;
pub mod value;

pub use engine::Engine;
pub use parse::{Op, Program};
pub use source::{StaticTemplates, TemplateSource};
pub use value::{Record, Value};

use std::fmt;

use crate::dom::MarkupError;

/// Compile and render failures. All of these indicate a developer-time
/// defect in a template or in the data handed to it, so they propagate
/// instead of being swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    UnknownTemplate(String),
    UnterminatedDirective,
    UnknownStatement(String),
    InvalidExpression(String),
    StrayElse,
    StrayEnd,
    UnterminatedBlock,
    MissingField(String),
    Unprintable(String),
    NotAList(String),
    Markup(MarkupError),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownTemplate(id) => write!(f, "no template named {id:?}"),
            TemplateError::UnterminatedDirective => {
                write!(f, "directive opened with <% but never closed with %>")
            }
            TemplateError::UnknownStatement(stmt) => {
                write!(f, "unknown statement directive {stmt:?}")
            }
            TemplateError::InvalidExpression(expr) => {
                write!(f, "emit directive is not a field name: {expr:?}")
            }
            TemplateError::StrayElse => write!(f, "else outside an if block"),
            TemplateError::StrayEnd => write!(f, "end without an open block"),
            TemplateError::UnterminatedBlock => write!(f, "block is never closed with end"),
            TemplateError::MissingField(name) => {
                write!(f, "data record has no field {name:?}")
            }
            TemplateError::Unprintable(name) => {
                write!(f, "field {name:?} is a list and cannot be emitted")
            }
            TemplateError::NotAList(name) => {
                write!(f, "field {name:?} is not a list")
            }
            TemplateError::Markup(err) => write!(f, "rendered markup is malformed: {err}"),
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TemplateError::Markup(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MarkupError> for TemplateError {
    fn from(err: MarkupError) -> Self {
        TemplateError::Markup(err)
    }
}
