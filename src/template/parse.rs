//! Template body parser: splits the body on `<%`/`%>` markers and builds an
//! instruction program. No code is generated from text; the program is
//! interpreted by `eval`.

use compact_str::CompactString;

use super::TemplateError;

const OPEN: &str = "<%";
const CLOSE: &str = "%>";

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Literal(String),
    Emit(CompactString),
    If {
        field: CompactString,
        then_ops: Vec<Op>,
        else_ops: Vec<Op>,
    },
    For {
        var: CompactString,
        field: CompactString,
        body: Vec<Op>,
    },
}

/// A compiled template: an immutable instruction sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub(crate) ops: Vec<Op>,
}

impl Program {
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }
}

enum Segment {
    Literal(String),
    Directive(String),
}

enum Open {
    If {
        field: CompactString,
        then_ops: Vec<Op>,
        else_ops: Vec<Op>,
        in_else: bool,
    },
    For {
        var: CompactString,
        field: CompactString,
        body: Vec<Op>,
    },
}

pub fn parse(body: &str) -> Result<Program, TemplateError> {
    // Line breaks and tabs become spaces before anything else; templates
    // emit single-line markup and the collapse is part of their output.
    let body: String = body
        .chars()
        .map(|c| if matches!(c, '\r' | '\n' | '\t') { ' ' } else { c })
        .collect();

    let mut ops: Vec<Op> = Vec::new();
    let mut stack: Vec<Open> = Vec::new();

    for segment in split_segments(&body)? {
        let op = match segment {
            Segment::Literal(text) => {
                if text.is_empty() {
                    continue;
                }
                Op::Literal(text)
            }
            Segment::Directive(content) => match parse_directive(&content)? {
                Directive::Emit(field) => Op::Emit(field),
                Directive::If(field) => {
                    stack.push(Open::If {
                        field,
                        then_ops: Vec::new(),
                        else_ops: Vec::new(),
                        in_else: false,
                    });
                    continue;
                }
                Directive::For { var, field } => {
                    stack.push(Open::For {
                        var,
                        field,
                        body: Vec::new(),
                    });
                    continue;
                }
                Directive::Else => {
                    match stack.last_mut() {
                        Some(Open::If { in_else, .. }) if !*in_else => *in_else = true,
                        _ => return Err(TemplateError::StrayElse),
                    }
                    continue;
                }
                Directive::End => match stack.pop() {
                    Some(Open::If {
                        field,
                        then_ops,
                        else_ops,
                        ..
                    }) => Op::If {
                        field,
                        then_ops,
                        else_ops,
                    },
                    Some(Open::For { var, field, body }) => Op::For { var, field, body },
                    None => return Err(TemplateError::StrayEnd),
                },
            },
        };
        sink(&mut ops, &mut stack).push(op);
    }

    if !stack.is_empty() {
        return Err(TemplateError::UnterminatedBlock);
    }
    Ok(Program { ops })
}

/// The op list currently being filled: the innermost open block, or the
/// program root.
fn sink<'a>(ops: &'a mut Vec<Op>, stack: &'a mut [Open]) -> &'a mut Vec<Op> {
    match stack.last_mut() {
        Some(Open::If {
            then_ops,
            else_ops,
            in_else,
            ..
        }) => {
            if *in_else {
                else_ops
            } else {
                then_ops
            }
        }
        Some(Open::For { body, .. }) => body,
        None => ops,
    }
}

fn split_segments(body: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut rest = body;
    loop {
        match rest.find(OPEN) {
            None => {
                segments.push(Segment::Literal(rest.to_string()));
                return Ok(segments);
            }
            Some(idx) => {
                segments.push(Segment::Literal(rest[..idx].to_string()));
                rest = &rest[idx + OPEN.len()..];
                let close = rest.find(CLOSE).ok_or(TemplateError::UnterminatedDirective)?;
                segments.push(Segment::Directive(rest[..close].to_string()));
                rest = &rest[close + CLOSE.len()..];
            }
        }
    }
}

enum Directive {
    Emit(CompactString),
    If(CompactString),
    For {
        var: CompactString,
        field: CompactString,
    },
    Else,
    End,
}

fn parse_directive(content: &str) -> Result<Directive, TemplateError> {
    if let Some(expr) = content.strip_prefix('=') {
        return Ok(Directive::Emit(parse_field(expr)?));
    }
    let words: Vec<&str> = content.split_ascii_whitespace().collect();
    match words.as_slice() {
        ["if", field] => Ok(Directive::If(parse_field(field)?)),
        ["for", var, "in", field] => Ok(Directive::For {
            var: parse_field(var)?,
            field: parse_field(field)?,
        }),
        ["else"] => Ok(Directive::Else),
        ["end"] => Ok(Directive::End),
        _ => Err(TemplateError::UnknownStatement(content.trim().to_string())),
    }
}

fn parse_field(raw: &str) -> Result<CompactString, TemplateError> {
    let name = raw.trim();
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(TemplateError::InvalidExpression(raw.trim().to_string()));
    }
    Ok(CompactString::from(name))
}

#[cfg(test)]
#[path = "../../tests/unit/template/parse.rs"]
mod tests;
