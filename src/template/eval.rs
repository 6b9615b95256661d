//! Program interpreter: walks the instruction sequence against a data
//! record, producing markup text, then parses the text into a detached
//! fragment.

use compact_str::CompactString;

use crate::dom::{markup, Document, Fragment};

use super::parse::{Op, Program};
use super::value::{Record, Value};
use super::TemplateError;

/// Evaluates a program to markup text. Field access is an explicit record
/// lookup; a missing field is an error naming the field.
pub fn evaluate(program: &Program, record: &Record) -> Result<String, TemplateError> {
    let mut out = String::new();
    let mut scopes: Vec<(CompactString, Value)> = Vec::new();
    run(program.ops(), record, &mut scopes, &mut out)?;
    Ok(out)
}

/// Evaluates a program and parses the result into document nodes.
pub fn render(
    doc: &mut Document,
    program: &Program,
    record: &Record,
) -> Result<Fragment, TemplateError> {
    let text = evaluate(program, record)?;
    markup::parse_fragment(doc, &text).map_err(TemplateError::from)
}

fn run(
    ops: &[Op],
    record: &Record,
    scopes: &mut Vec<(CompactString, Value)>,
    out: &mut String,
) -> Result<(), TemplateError> {
    for op in ops {
        match op {
            Op::Literal(text) => out.push_str(text),
            Op::Emit(field) => {
                let value = lookup(field, record, scopes)?;
                emit(field, &value, out)?;
            }
            Op::If {
                field,
                then_ops,
                else_ops,
            } => {
                let branch = if lookup(field, record, scopes)?.truthy() {
                    then_ops
                } else {
                    else_ops
                };
                run(branch, record, scopes, out)?;
            }
            Op::For { var, field, body } => {
                let items = match lookup(field, record, scopes)? {
                    Value::List(items) => items,
                    _ => return Err(TemplateError::NotAList(field.to_string())),
                };
                for item in items {
                    scopes.push((var.clone(), item));
                    let result = run(body, record, scopes, out);
                    scopes.pop();
                    result?;
                }
            }
        }
    }
    Ok(())
}

fn lookup(
    field: &str,
    record: &Record,
    scopes: &[(CompactString, Value)],
) -> Result<Value, TemplateError> {
    if let Some((_, value)) = scopes.iter().rev().find(|(name, _)| name == field) {
        return Ok(value.clone());
    }
    record
        .get(field)
        .cloned()
        .ok_or_else(|| TemplateError::MissingField(field.to_string()))
}

fn emit(field: &str, value: &Value, out: &mut String) -> Result<(), TemplateError> {
    match value {
        Value::Str(s) => out.push_str(s),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::List(_) => return Err(TemplateError::Unprintable(field.to_string())),
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/template/eval.rs"]
mod tests;
