use super::*;

use crate::template::TemplateError;

#[test]
fn literals_and_emits_alternate_in_source_order() {
    let program = parse(r#"<div id="<%=id%>"><%=name%></div>"#).unwrap();
    assert_eq!(
        program.ops(),
        &[
            Op::Literal("<div id=\"".to_string()),
            Op::Emit("id".into()),
            Op::Literal("\">".to_string()),
            Op::Emit("name".into()),
            Op::Literal("</div>".to_string()),
        ]
    );
}

#[test]
fn line_breaks_and_tabs_collapse_to_spaces() {
    let program = parse("a\n\tb\r").unwrap();
    assert_eq!(program.ops(), &[Op::Literal("a  b ".to_string())]);
}

#[test]
fn emit_directive_trims_whitespace() {
    let program = parse("<%= name %>").unwrap();
    assert_eq!(program.ops(), &[Op::Emit("name".into())]);
}

#[test]
fn for_blocks_nest() {
    let program = parse("<% for item in items %>[<%=item%>]<% end %>").unwrap();
    assert_eq!(
        program.ops(),
        &[Op::For {
            var: "item".into(),
            field: "items".into(),
            body: vec![
                Op::Literal("[".to_string()),
                Op::Emit("item".into()),
                Op::Literal("]".to_string()),
            ],
        }]
    );
}

#[test]
fn if_else_splits_branches() {
    let program = parse("<% if open %>yes<% else %>no<% end %>").unwrap();
    assert_eq!(
        program.ops(),
        &[Op::If {
            field: "open".into(),
            then_ops: vec![Op::Literal("yes".to_string())],
            else_ops: vec![Op::Literal("no".to_string())],
        }]
    );
}

#[test]
fn blocks_nest_inside_blocks() {
    let program =
        parse("<% for row in rows %><% if row %>x<% end %><% end %>").unwrap();
    let Op::For { body, .. } = &program.ops()[0] else {
        panic!("expected for");
    };
    assert!(matches!(&body[0], Op::If { .. }));
}

#[test]
fn unterminated_directive_fails() {
    assert_eq!(
        parse("<div><%=name").unwrap_err(),
        TemplateError::UnterminatedDirective
    );
}

#[test]
fn unterminated_block_fails() {
    assert_eq!(
        parse("<% if open %>yes").unwrap_err(),
        TemplateError::UnterminatedBlock
    );
}

#[test]
fn stray_else_and_end_fail() {
    assert_eq!(parse("<% else %>").unwrap_err(), TemplateError::StrayElse);
    assert_eq!(parse("<% end %>").unwrap_err(), TemplateError::StrayEnd);
    assert_eq!(
        parse("<% for x in xs %><% else %><% end %>").unwrap_err(),
        TemplateError::StrayElse
    );
}

#[test]
fn unknown_statement_fails() {
    assert_eq!(
        parse("<% while x %>").unwrap_err(),
        TemplateError::UnknownStatement("while x".to_string())
    );
}

#[test]
fn emit_expression_must_be_a_field_name() {
    assert_eq!(
        parse("<%= a + b %>").unwrap_err(),
        TemplateError::InvalidExpression("a + b".to_string())
    );
}
