//! Mutation watcher: reacts to structural changes under the listing
//! container by re-attaching the click-to-open handler to every file leaf.
//! Re-attachment is idempotent, so re-scanning the whole container is
//! enough; nothing tracks which nodes are new.

use crate::dom::{Document, HandlerId, NodeId, ObserverId};

pub const OPEN_FILE: HandlerId = HandlerId(1);
pub const SAVE_FILE: HandlerId = HandlerId(2);

/// Drains the observer's pending batch; when anything was observed,
/// re-scans `container` and wires every `file`-class element. Returns how
/// many file elements are wired after the scan.
pub fn rebind(doc: &mut Document, observer: ObserverId, container: NodeId) -> usize {
    let records = doc.take_records(observer);
    if records.is_empty() {
        return 0;
    }
    let files = doc.query_class(container, "file");
    for &file in &files {
        doc.add_listener(file, OPEN_FILE);
    }
    files.len()
}

#[cfg(test)]
#[path = "../../tests/unit/app/watcher.rs"]
mod tests;
