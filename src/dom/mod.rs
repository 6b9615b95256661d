//! Retained document model: an arena-backed node tree standing in for a
//! browser DOM. Rendered fragments are parsed into the same arena, queries
//! address nodes by id/class, and structural changes are reported to
//! registered mutation observers.

pub mod document;
pub mod event;
pub mod markup;
pub mod observer;

pub use document::{Document, Fragment, NodeId};
pub use event::HandlerId;
pub use markup::MarkupError;
pub use observer::{MutationRecord, ObserveOptions, ObserverId};
