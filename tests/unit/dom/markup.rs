use super::*;

#[test]
fn parses_nested_elements_with_attributes() {
    let mut doc = Document::new();
    let fragment = parse_fragment(
        &mut doc,
        r#"<div class="controls"><button class="save" data-target="t1">save</button></div>"#,
    )
    .unwrap();

    assert_eq!(fragment.nodes().len(), 1);
    let div = fragment.nodes()[0];
    assert_eq!(doc.tag(div), Some("div"));
    assert!(doc.has_class(div, "controls"));

    let button = doc.children(div)[0];
    assert_eq!(doc.tag(button), Some("button"));
    assert_eq!(doc.attr(button, "data-target"), Some("t1"));
    assert_eq!(doc.text_content(button), "save");
}

#[test]
fn multiple_roots_and_text_between_them() {
    let mut doc = Document::new();
    let fragment = parse_fragment(&mut doc, "<span>a</span> and <span>b</span>").unwrap();

    assert_eq!(fragment.nodes().len(), 3);
    assert_eq!(doc.text(fragment.nodes()[1]), Some(" and "));
}

#[test]
fn void_and_self_closing_elements_take_no_children() {
    let mut doc = Document::new();
    let fragment = parse_fragment(
        &mut doc,
        r#"<input class="checkbox" type="checkbox" /><label for="cb">name</label>"#,
    )
    .unwrap();

    assert_eq!(fragment.nodes().len(), 2);
    let input = fragment.nodes()[0];
    assert_eq!(doc.tag(input), Some("input"));
    assert!(doc.children(input).is_empty());
    assert_eq!(doc.attr(input, "type"), Some("checkbox"));
}

#[test]
fn bare_attributes_parse_as_empty_values() {
    let mut doc = Document::new();
    let fragment = parse_fragment(&mut doc, r#"<input type="checkbox" checked />"#).unwrap();
    let input = fragment.nodes()[0];
    assert_eq!(doc.attr(input, "checked"), Some(""));
}

#[test]
fn entities_decode_in_text_and_attributes() {
    let mut doc = Document::new();
    let fragment =
        parse_fragment(&mut doc, r#"<div data-path="/a&amp;b">x &lt; y &#39;q&#39;</div>"#)
            .unwrap();
    let div = fragment.nodes()[0];
    assert_eq!(doc.attr(div, "data-path"), Some("/a&b"));
    assert_eq!(doc.text_content(div), "x < y 'q'");
}

#[test]
fn unclosed_element_is_an_error() {
    let mut doc = Document::new();
    let err = parse_fragment(&mut doc, "<div><span>text</span>").unwrap_err();
    assert_eq!(err, MarkupError::Unclosed("div".to_string()));
}

#[test]
fn mismatched_close_is_an_error() {
    let mut doc = Document::new();
    let err = parse_fragment(&mut doc, "<div>text</span>").unwrap_err();
    assert_eq!(
        err,
        MarkupError::MismatchedClose {
            expected: "div".to_string(),
            found: "span".to_string(),
        }
    );
}

#[test]
fn stray_close_is_an_error() {
    let mut doc = Document::new();
    let err = parse_fragment(&mut doc, "text</div>").unwrap_err();
    assert_eq!(err, MarkupError::StrayClose("div".to_string()));
}

#[test]
fn truncated_tag_is_an_error() {
    let mut doc = Document::new();
    assert_eq!(
        parse_fragment(&mut doc, "<div class=\"x").unwrap_err(),
        MarkupError::UnexpectedEnd
    );
}
