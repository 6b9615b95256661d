//! Service ports: traits + data contracts.

pub mod content;

pub use content::{BoxFuture, ContentApi, ContentError, ProjectMap, Result as ContentResult};
