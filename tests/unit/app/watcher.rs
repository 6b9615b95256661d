use super::*;

use crate::dom::{Document, ObserveOptions};

#[test]
fn rebind_wires_new_file_elements_once() {
    let mut doc = Document::new();
    let container = doc.create_element("div");
    doc.append_child(doc.root(), container);
    let observer = doc.observe(container, ObserveOptions::all());
    doc.take_records(observer);

    let file = doc.create_element("div");
    doc.set_attr(file, "class", "file");
    doc.append_child(container, file);

    assert_eq!(rebind(&mut doc, observer, container), 1);
    assert_eq!(doc.dispatch_click(file), vec![OPEN_FILE]);
}

#[test]
fn rebind_without_mutations_does_nothing() {
    let mut doc = Document::new();
    let container = doc.create_element("div");
    doc.append_child(doc.root(), container);
    let observer = doc.observe(container, ObserveOptions::all());
    doc.take_records(observer);

    assert_eq!(rebind(&mut doc, observer, container), 0);
}

#[test]
fn repeated_batches_do_not_stack_handlers() {
    let mut doc = Document::new();
    let container = doc.create_element("div");
    doc.append_child(doc.root(), container);
    let observer = doc.observe(container, ObserveOptions::all());
    doc.take_records(observer);

    let file = doc.create_element("div");
    doc.set_attr(file, "class", "file");
    doc.append_child(container, file);
    rebind(&mut doc, observer, container);

    // A later mutation triggers another full re-scan of the same element.
    let other = doc.create_element("div");
    doc.set_attr(other, "class", "file");
    doc.append_child(container, other);
    rebind(&mut doc, observer, container);

    assert_eq!(doc.dispatch_click(file), vec![OPEN_FILE]);
    assert_eq!(doc.listeners(file).len(), 1);
}
