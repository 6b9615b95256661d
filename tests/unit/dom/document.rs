use super::*;

use crate::dom::event::HandlerId;
use crate::dom::observer::{MutationRecord, ObserveOptions};

#[test]
fn append_attaches_and_orders_children() {
    let mut doc = Document::new();
    let root = doc.root();
    let a = doc.create_element("div");
    let b = doc.create_element("div");
    doc.append_child(root, a);
    doc.append_child(root, b);

    assert_eq!(doc.children(root), &[a, b]);
    assert_eq!(doc.parent(a), Some(root));
    assert!(doc.is_attached(a));
}

#[test]
fn detached_nodes_are_not_attached() {
    let mut doc = Document::new();
    let orphan = doc.create_element("div");
    assert!(doc.contains(orphan));
    assert!(!doc.is_attached(orphan));

    doc.append_child(doc.root(), orphan);
    assert!(doc.is_attached(orphan));
}

#[test]
fn attributes_and_classes() {
    let mut doc = Document::new();
    let el = doc.create_element("div");
    doc.set_attr(el, "class", "file hidden");
    doc.set_attr(el, "data-path", "/a.txt");

    assert!(doc.has_class(el, "file"));
    assert!(doc.has_class(el, "hidden"));
    assert!(!doc.has_class(el, "folder"));
    assert_eq!(doc.attr(el, "data-path"), Some("/a.txt"));

    doc.set_attr(el, "data-path", "/b.txt");
    assert_eq!(doc.attr(el, "data-path"), Some("/b.txt"));
}

#[test]
fn query_class_returns_document_order() {
    let mut doc = Document::new();
    let root = doc.root();
    let outer = doc.create_element("div");
    doc.append_child(root, outer);

    let first = doc.create_element("div");
    doc.set_attr(first, "class", "file");
    doc.append_child(outer, first);

    let nested_parent = doc.create_element("div");
    doc.append_child(outer, nested_parent);
    let second = doc.create_element("div");
    doc.set_attr(second, "class", "file");
    doc.append_child(nested_parent, second);

    let third = doc.create_element("div");
    doc.set_attr(third, "class", "file");
    doc.append_child(outer, third);

    assert_eq!(doc.query_class(root, "file"), vec![first, second, third]);
}

#[test]
fn element_by_id_finds_attached_elements() {
    let mut doc = Document::new();
    let el = doc.create_element("textarea");
    doc.set_attr(el, "id", "editor-1");
    doc.append_child(doc.root(), el);

    assert_eq!(doc.element_by_id("editor-1"), Some(el));
    assert_eq!(doc.element_by_id("missing"), None);
}

#[test]
fn clear_children_drops_the_subtree_and_its_listeners() {
    let mut doc = Document::new();
    let root = doc.root();
    let container = doc.create_element("div");
    doc.append_child(root, container);
    let leaf = doc.create_element("div");
    doc.append_child(container, leaf);
    doc.add_listener(leaf, HandlerId(7));

    doc.clear_children(container);

    assert!(!doc.contains(leaf));
    assert!(doc.children(container).is_empty());
    assert!(doc.dispatch_click(leaf).is_empty());
}

#[test]
fn value_falls_back_to_text_content() {
    let mut doc = Document::new();
    let textarea = doc.create_element("textarea");
    let text = doc.create_text("initial content");
    doc.append_child(textarea, text);

    assert_eq!(doc.value(textarea).as_deref(), Some("initial content"));

    doc.set_value(textarea, "edited");
    assert_eq!(doc.value(textarea).as_deref(), Some("edited"));
}

#[test]
fn set_value_reports_an_attribute_mutation() {
    let mut doc = Document::new();
    let area = doc.create_element("textarea");
    doc.append_child(doc.root(), area);
    let observer = doc.observe(doc.root(), ObserveOptions::all());
    doc.take_records(observer);

    doc.set_value(area, "typed");

    let records = doc.take_records(observer);
    assert!(records.iter().any(|r| matches!(
        r,
        MutationRecord::Attributes { target, name } if *target == area && name == "value"
    )));
}

#[test]
fn moving_a_node_records_removal_and_addition() {
    let mut doc = Document::new();
    let root = doc.root();
    let a = doc.create_element("div");
    let b = doc.create_element("div");
    doc.append_child(root, a);
    doc.append_child(root, b);
    let child = doc.create_element("div");
    doc.append_child(a, child);

    let observer = doc.observe(root, ObserveOptions::all());
    doc.append_child(b, child);

    assert_eq!(doc.children(a), &[] as &[NodeId]);
    assert_eq!(doc.children(b), &[child]);

    let records = doc.take_records(observer);
    assert!(records.iter().any(|r| matches!(
        r,
        MutationRecord::ChildList { target, removed, .. } if *target == a && removed.contains(&child)
    )));
    assert!(records.iter().any(|r| matches!(
        r,
        MutationRecord::ChildList { target, added, .. } if *target == b && added.contains(&child)
    )));
}

#[test]
fn outer_markup_round_trips_structure() {
    let mut doc = Document::new();
    let el = doc.create_element("div");
    doc.set_attr(el, "class", "file");
    doc.set_attr(el, "data-path", "/a&b.txt");
    let text = doc.create_text("a < b");
    doc.append_child(el, text);

    let markup = doc.outer_markup(el);
    assert_eq!(
        markup,
        "<div class=\"file\" data-path=\"/a&amp;b.txt\">a &lt; b</div>"
    );
}
