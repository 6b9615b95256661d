use compact_str::CompactString;
use slotmap::{new_key_type, SlotMap};

use super::event::{HandlerId, Listeners};
use super::markup;
use super::observer::{MutationRecord, ObserveOptions, Observer, ObserverId};

new_key_type! { pub struct NodeId; }

#[derive(Debug, Clone)]
pub(crate) enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    tag: CompactString,
    // Insertion order is kept; elements carry a handful of attributes at most.
    attrs: Vec<(CompactString, String)>,
    // Editable value slot, distinct from attributes the way a live
    // `textarea.value` is distinct from its markup.
    value: Option<String>,
}

impl ElementData {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attr(&mut self, name: &str, value: String) {
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((CompactString::from(name), value));
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A detached ordered set of nodes produced by rendering, safe to query and
/// mutate before insertion.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    nodes: Vec<NodeId>,
}

impl Fragment {
    pub(crate) fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

pub struct Document {
    arena: SlotMap<NodeId, Node>,
    root: NodeId,
    observers: Vec<Observer>,
    listeners: Listeners,
}

impl Document {
    pub fn new() -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Node {
            data: NodeData::Element(ElementData {
                tag: CompactString::from("body"),
                attrs: Vec::new(),
                value: None,
            }),
            parent: None,
            children: Vec::new(),
        });
        Self {
            arena,
            root,
            observers: Vec::new(),
            listeners: Listeners::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.insert(Node {
            data: NodeData::Element(ElementData {
                tag: CompactString::from(tag),
                attrs: Vec::new(),
                value: None,
            }),
            parent: None,
            children: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.arena.insert(Node {
            data: NodeData::Text(text.to_string()),
            parent: None,
            children: Vec::new(),
        })
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(
            self.arena.get(id),
            Some(Node {
                data: NodeData::Element(_),
                ..
            })
        )
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.arena.get(id)? {
            Node {
                data: NodeData::Element(el),
                ..
            } => Some(el.tag.as_str()),
            _ => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.arena.get(id)? {
            Node {
                data: NodeData::Text(t),
                ..
            } => Some(t.as_str()),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.arena.get(id)?.data {
            NodeData::Element(el) => el.attr(name),
            NodeData::Text(_) => None,
        }
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        let mut changed = false;
        if let Some(node) = self.arena.get_mut(id) {
            if let NodeData::Element(el) = &mut node.data {
                el.set_attr(name, value.to_string());
                changed = true;
            }
        }
        if changed {
            self.record(MutationRecord::Attributes {
                target: id,
                name: CompactString::from(name),
            });
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .map(|v| v.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// The element's editable value: the value slot if one was set, else the
    /// concatenated text content (a text area's initial value is its markup
    /// content).
    pub fn value(&self, id: NodeId) -> Option<String> {
        match &self.arena.get(id)?.data {
            NodeData::Element(el) => match &el.value {
                Some(v) => Some(v.clone()),
                None => Some(self.text_content(id)),
            },
            NodeData::Text(_) => None,
        }
    }

    pub fn set_value(&mut self, id: NodeId, value: &str) {
        let mut changed = false;
        if let Some(node) = self.arena.get_mut(id) {
            if let NodeData::Element(el) = &mut node.data {
                el.value = Some(value.to_string());
                changed = true;
            }
        }
        if changed {
            self.record(MutationRecord::Attributes {
                target: id,
                name: CompactString::from("value"),
            });
        }
    }

    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            if let Some(t) = self.text(node) {
                out.push_str(t);
            }
        }
        out
    }

    /// Preorder traversal of the subtree below `id` (excluding `id` itself).
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .children(id)
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            for &child in self.children(node).iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// All descendant elements of `scope` carrying `class`, in document order.
    pub fn query_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    /// First element in the whole document with the given id attribute.
    pub fn element_by_id(&self, dom_id: &str) -> Option<NodeId> {
        if self.attr(self.root, "id") == Some(dom_id) {
            return Some(self.root);
        }
        self.descendants(self.root)
            .into_iter()
            .find(|&n| self.attr(n, "id") == Some(dom_id))
    }

    /// First match for `class` among a fragment's roots and their subtrees.
    pub fn fragment_query_class(&self, fragment: &Fragment, class: &str) -> Option<NodeId> {
        for &node in fragment.nodes() {
            if self.has_class(node, class) {
                return Some(node);
            }
            if let Some(found) = self
                .descendants(node)
                .into_iter()
                .find(|&n| self.has_class(n, class))
            {
                return Some(found);
            }
        }
        None
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == self.root {
                return true;
            }
            match self.arena.get(current).and_then(|n| n.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.arena.contains_key(parent) || !self.arena.contains_key(child) {
            return;
        }
        if let Some(old_parent) = self.arena[child].parent {
            self.arena[old_parent].children.retain(|&c| c != child);
            self.record(MutationRecord::ChildList {
                target: old_parent,
                added: Vec::new(),
                removed: vec![child],
            });
        }
        self.arena[child].parent = Some(parent);
        self.arena[parent].children.push(child);
        self.record(MutationRecord::ChildList {
            target: parent,
            added: vec![child],
            removed: Vec::new(),
        });
    }

    /// Appends all fragment roots under `parent`, reported as one child-list
    /// mutation.
    pub fn append_fragment(&mut self, parent: NodeId, fragment: &Fragment) {
        if !self.arena.contains_key(parent) || fragment.is_empty() {
            return;
        }
        let mut added = Vec::new();
        for &node in fragment.nodes() {
            if !self.arena.contains_key(node) {
                continue;
            }
            if let Some(old_parent) = self.arena[node].parent {
                self.arena[old_parent].children.retain(|&c| c != node);
            }
            self.arena[node].parent = Some(parent);
            self.arena[parent].children.push(node);
            added.push(node);
        }
        self.record(MutationRecord::ChildList {
            target: parent,
            added,
            removed: Vec::new(),
        });
    }

    /// Drops the whole subtree below `id`, the `innerHTML = ""` reset:
    /// removed nodes are deleted from the arena and their listeners are gone
    /// with them.
    pub fn clear_children(&mut self, id: NodeId) {
        let removed: Vec<NodeId> = self.children(id).to_vec();
        if removed.is_empty() {
            return;
        }
        self.record(MutationRecord::ChildList {
            target: id,
            added: Vec::new(),
            removed: removed.clone(),
        });
        if let Some(node) = self.arena.get_mut(id) {
            node.children.clear();
        }
        for child in removed {
            self.remove_subtree(child);
        }
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let Some(node) = self.arena.remove(id) else {
            return;
        };
        self.listeners.remove_node(id);
        for child in node.children {
            self.remove_subtree(child);
        }
    }

    // ---- listeners ----

    /// Attaches a handler to a node. Attaching the same handler id to the
    /// same node twice is a no-op, matching listener semantics.
    pub fn add_listener(&mut self, id: NodeId, handler: HandlerId) {
        if self.arena.contains_key(id) {
            self.listeners.attach(id, handler);
        }
    }

    pub fn listeners(&self, id: NodeId) -> &[HandlerId] {
        self.listeners.on(id)
    }

    /// Delivers a click to a node, returning the handlers to run in attach
    /// order. Detached or removed nodes receive nothing.
    pub fn dispatch_click(&self, id: NodeId) -> Vec<HandlerId> {
        if !self.contains(id) || !self.is_attached(id) {
            return Vec::new();
        }
        self.listeners.on(id).to_vec()
    }

    // ---- mutation observers ----

    pub fn observe(&mut self, root: NodeId, options: ObserveOptions) -> ObserverId {
        self.observers.push(Observer::new(root, options));
        ObserverId(self.observers.len() - 1)
    }

    pub fn take_records(&mut self, observer: ObserverId) -> Vec<MutationRecord> {
        self.observers
            .get_mut(observer.0)
            .map(|o| o.take_pending())
            .unwrap_or_default()
    }

    pub fn has_pending(&self, observer: ObserverId) -> bool {
        self.observers
            .get(observer.0)
            .map(|o| o.has_pending())
            .unwrap_or(false)
    }

    fn record(&mut self, record: MutationRecord) {
        if self.observers.is_empty() {
            return;
        }
        let target = record.target();
        let matched: Vec<usize> = self
            .observers
            .iter()
            .enumerate()
            .filter(|(_, o)| o.wants(&record) && self.in_observed_subtree(target, o.root(), o.subtree()))
            .map(|(i, _)| i)
            .collect();
        for i in matched {
            self.observers[i].push(record.clone());
        }
    }

    fn in_observed_subtree(&self, target: NodeId, root: NodeId, subtree: bool) -> bool {
        if target == root {
            return true;
        }
        if !subtree {
            return false;
        }
        let mut current = target;
        while let Some(parent) = self.arena.get(current).and_then(|n| n.parent) {
            if parent == root {
                return true;
            }
            current = parent;
        }
        false
    }

    // ---- serialization ----

    /// Markup for a node and its subtree; used by the demo binary and tests.
    pub fn outer_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(id, &mut out);
        out
    }

    fn write_markup(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.arena.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Text(t) => out.push_str(&markup::escape_text(t)),
            NodeData::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&markup::escape_attr(value));
                    out.push('"');
                }
                if markup::is_void(&el.tag) && node.children.is_empty() {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for &child in &node.children {
                    self.write_markup(child, out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/document.rs"]
mod tests;
