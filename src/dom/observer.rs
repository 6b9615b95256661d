use compact_str::CompactString;

use super::document::NodeId;

/// What an observer is interested in, mirroring the childList / attributes /
/// subtree trio of observer options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObserveOptions {
    pub attributes: bool,
    pub child_list: bool,
    pub subtree: bool,
}

impl ObserveOptions {
    pub fn all() -> Self {
        Self {
            attributes: true,
            child_list: true,
            subtree: true,
        }
    }
}

/// One observed mutation. Removed node ids may no longer resolve in the
/// arena by the time a batch is drained; consumers re-scan the live tree
/// rather than chase removed nodes.
#[derive(Clone, Debug)]
pub enum MutationRecord {
    ChildList {
        target: NodeId,
        added: Vec<NodeId>,
        removed: Vec<NodeId>,
    },
    Attributes {
        target: NodeId,
        name: CompactString,
    },
}

impl MutationRecord {
    pub fn target(&self) -> NodeId {
        match self {
            MutationRecord::ChildList { target, .. } => *target,
            MutationRecord::Attributes { target, .. } => *target,
        }
    }
}

/// Handle to a registered observer. Observers live for the document's
/// lifetime; there is no disconnect path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObserverId(pub(crate) usize);

pub(crate) struct Observer {
    root: NodeId,
    options: ObserveOptions,
    pending: Vec<MutationRecord>,
}

impl Observer {
    pub(crate) fn new(root: NodeId, options: ObserveOptions) -> Self {
        Self {
            root,
            options,
            pending: Vec::new(),
        }
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn subtree(&self) -> bool {
        self.options.subtree
    }

    pub(crate) fn wants(&self, record: &MutationRecord) -> bool {
        match record {
            MutationRecord::ChildList { .. } => self.options.child_list,
            MutationRecord::Attributes { .. } => self.options.attributes,
        }
    }

    pub(crate) fn push(&mut self, record: MutationRecord) {
        self.pending.push(record);
    }

    pub(crate) fn take_pending(&mut self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/observer.rs"]
mod tests;
