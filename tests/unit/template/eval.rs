use super::*;

use crate::dom::Document;
use crate::template::parse::parse;
use crate::template::TemplateError;

fn record() -> Record {
    Record::new()
        .with("name", "a.txt")
        .with("path", "/a.txt")
        .with("open", true)
}

#[test]
fn emits_fields_into_literal_text() {
    let program = parse(r#"<div data-path="<%=path%>"><%=name%></div>"#).unwrap();
    let out = evaluate(&program, &record()).unwrap();
    assert_eq!(out, r#"<div data-path="/a.txt">a.txt</div>"#);
}

#[test]
fn missing_field_is_a_named_error() {
    let program = parse("<%=ghost%>").unwrap();
    assert_eq!(
        evaluate(&program, &record()).unwrap_err(),
        TemplateError::MissingField("ghost".to_string())
    );
}

#[test]
fn if_selects_the_truthy_branch() {
    let program = parse("<% if open %>open<% else %>closed<% end %>").unwrap();
    assert_eq!(evaluate(&program, &record()).unwrap(), "open");

    let closed = Record::new().with("open", false);
    assert_eq!(evaluate(&program, &closed).unwrap(), "closed");
}

#[test]
fn empty_string_and_empty_list_are_falsy() {
    let program = parse("<% if v %>t<% else %>f<% end %>").unwrap();
    assert_eq!(
        evaluate(&program, &Record::new().with("v", "")).unwrap(),
        "f"
    );
    assert_eq!(
        evaluate(&program, &Record::new().with("v", Vec::new())).unwrap(),
        "f"
    );
    assert_eq!(
        evaluate(&program, &Record::new().with("v", 0)).unwrap(),
        "f"
    );
}

#[test]
fn for_iterates_and_shadows_the_record() {
    let program = parse("<% for name in names %>(<%=name%>)<% end %><%=name%>").unwrap();
    let record = Record::new()
        .with("name", "outer")
        .with(
            "names",
            vec![Value::from("a"), Value::from("b"), Value::from("c")],
        );
    assert_eq!(evaluate(&program, &record).unwrap(), "(a)(b)(c)outer");
}

#[test]
fn for_over_a_scalar_is_an_error() {
    let program = parse("<% for x in name %><% end %>").unwrap();
    assert_eq!(
        evaluate(&program, &record()).unwrap_err(),
        TemplateError::NotAList("name".to_string())
    );
}

#[test]
fn emitting_a_list_is_an_error() {
    let program = parse("<%=items%>").unwrap();
    let record = Record::new().with("items", vec![Value::from(1)]);
    assert_eq!(
        evaluate(&program, &record).unwrap_err(),
        TemplateError::Unprintable("items".to_string())
    );
}

#[test]
fn numbers_and_booleans_stringify() {
    let program = parse("<%=n%>/<%=b%>").unwrap();
    let record = Record::new().with("n", 42).with("b", true);
    assert_eq!(evaluate(&program, &record).unwrap(), "42/true");
}

#[test]
fn render_parses_the_output_into_a_fragment() {
    let mut doc = Document::new();
    let program = parse(r#"<div class="file" data-path="<%=path%>"><%=name%></div>"#).unwrap();
    let fragment = render(&mut doc, &program, &record()).unwrap();

    assert_eq!(fragment.nodes().len(), 1);
    let div = fragment.nodes()[0];
    assert!(!doc.is_attached(div));
    assert!(doc.has_class(div, "file"));
    assert_eq!(doc.attr(div, "data-path"), Some("/a.txt"));
    assert_eq!(doc.text_content(div), "a.txt");
}

#[test]
fn render_rejects_malformed_output() {
    let mut doc = Document::new();
    let program = parse("<div><%=name%>").unwrap();
    assert!(matches!(
        render(&mut doc, &program, &record()).unwrap_err(),
        TemplateError::Markup(_)
    ));
}
