use rustc_hash::FxHashMap;

use super::document::NodeId;

/// Identity of a handler function. Attachment is keyed on this, so the same
/// handler attached twice to one node stays a single registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(pub u32);

#[derive(Default)]
pub(crate) struct Listeners {
    by_node: FxHashMap<NodeId, Vec<HandlerId>>,
}

impl Listeners {
    /// Returns false when the handler was already attached.
    pub(crate) fn attach(&mut self, node: NodeId, handler: HandlerId) -> bool {
        let entry = self.by_node.entry(node).or_default();
        if entry.contains(&handler) {
            return false;
        }
        entry.push(handler);
        true
    }

    pub(crate) fn on(&self, node: NodeId) -> &[HandlerId] {
        self.by_node.get(&node).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub(crate) fn remove_node(&mut self, node: NodeId) {
        self.by_node.remove(&node);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/event.rs"]
mod tests;
