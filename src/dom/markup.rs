//! Parses rendered markup text into detached document nodes. The renderer
//! produces the markup, this module turns it into a `Fragment` inside the
//! document arena.

use std::fmt;

use memchr::memchr;

use super::document::{Document, Fragment, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    UnexpectedEnd,
    BadTagName { at: usize },
    BadAttribute { tag: String },
    MismatchedClose { expected: String, found: String },
    StrayClose(String),
    Unclosed(String),
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::UnexpectedEnd => write!(f, "markup ended inside a tag"),
            MarkupError::BadTagName { at } => write!(f, "invalid tag name at byte {at}"),
            MarkupError::BadAttribute { tag } => {
                write!(f, "invalid attribute in <{tag}>")
            }
            MarkupError::MismatchedClose { expected, found } => {
                write!(f, "expected </{expected}>, found </{found}>")
            }
            MarkupError::StrayClose(tag) => write!(f, "close tag </{tag}> without an open tag"),
            MarkupError::Unclosed(tag) => write!(f, "<{tag}> is never closed"),
        }
    }
}

impl std::error::Error for MarkupError {}

/// Elements that never carry children and need no close tag.
pub(crate) fn is_void(tag: &str) -> bool {
    matches!(tag, "input" | "br" | "hr" | "img" | "meta" | "link")
}

/// Parses `input` into detached nodes owned by `doc`. Structural defects are
/// errors; there is no browser-style auto-correction.
pub fn parse_fragment(doc: &mut Document, input: &str) -> Result<Fragment, MarkupError> {
    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut pos = 0usize;
    let mut roots: Vec<NodeId> = Vec::new();
    let mut stack: Vec<(NodeId, String)> = Vec::new();

    fn attach(
        doc: &mut Document,
        roots: &mut Vec<NodeId>,
        stack: &[(NodeId, String)],
        node: NodeId,
    ) {
        match stack.last() {
            Some((parent, _)) => doc.append_child(*parent, node),
            None => roots.push(node),
        }
    }

    while pos < len {
        let next_tag = memchr(b'<', &bytes[pos..]).map(|off| pos + off);
        let text_end = next_tag.unwrap_or(len);
        if text_end > pos {
            let text = decode_entities(&input[pos..text_end]);
            if !text.is_empty() {
                let node = doc.create_text(&text);
                attach(doc, &mut roots, &stack, node);
            }
        }
        let Some(mut pos_tag) = next_tag else {
            break;
        };

        if pos_tag + 1 >= len {
            return Err(MarkupError::UnexpectedEnd);
        }
        if bytes[pos_tag + 1] == b'/' {
            let end = memchr(b'>', &bytes[pos_tag..])
                .map(|off| pos_tag + off)
                .ok_or(MarkupError::UnexpectedEnd)?;
            let name = input[pos_tag + 2..end].trim();
            match stack.pop() {
                Some((_, open)) if open == name => {}
                Some((_, open)) => {
                    return Err(MarkupError::MismatchedClose {
                        expected: open,
                        found: name.to_string(),
                    })
                }
                None => return Err(MarkupError::StrayClose(name.to_string())),
            }
            pos = end + 1;
            continue;
        }

        // Open tag.
        pos_tag += 1;
        let name_start = pos_tag;
        let mut i = pos_tag;
        while i < len && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-') {
            i += 1;
        }
        if i == name_start {
            return Err(MarkupError::BadTagName { at: name_start - 1 });
        }
        let tag = input[name_start..i].to_string();
        let node = doc.create_element(&tag);

        let self_closing;
        loop {
            while i < len && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            if i >= len {
                return Err(MarkupError::UnexpectedEnd);
            }
            if bytes[i] == b'>' {
                i += 1;
                self_closing = false;
                break;
            }
            if bytes[i] == b'/' {
                if i + 1 >= len || bytes[i + 1] != b'>' {
                    return Err(MarkupError::BadAttribute { tag });
                }
                i += 2;
                self_closing = true;
                break;
            }

            let attr_start = i;
            while i < len
                && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-' || bytes[i] == b'_')
            {
                i += 1;
            }
            if i == attr_start {
                return Err(MarkupError::BadAttribute { tag });
            }
            let attr_name = &input[attr_start..i];

            if i < len && bytes[i] == b'=' {
                i += 1;
                if i >= len || bytes[i] != b'"' {
                    return Err(MarkupError::BadAttribute { tag });
                }
                i += 1;
                let value_end = memchr(b'"', &bytes[i..])
                    .map(|off| i + off)
                    .ok_or(MarkupError::UnexpectedEnd)?;
                let value = decode_entities(&input[i..value_end]);
                doc.set_attr(node, attr_name, &value);
                i = value_end + 1;
            } else {
                // Bare attribute, `checked` style.
                doc.set_attr(node, attr_name, "");
            }
        }

        attach(doc, &mut roots, &stack, node);
        if !self_closing && !is_void(&tag) {
            stack.push((node, tag));
        }
        pos = i;
    }

    if let Some((_, open)) = stack.pop() {
        return Err(MarkupError::Unclosed(open));
    }
    Ok(Fragment::new(roots))
}

fn decode_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        let mut matched = false;
        for (entity, ch) in [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
        ] {
            if rest.starts_with(entity) {
                out.push(ch);
                rest = &rest[entity.len()..];
                matched = true;
                break;
            }
        }
        if !matched {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

pub(crate) fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/dom/markup.rs"]
mod tests;
