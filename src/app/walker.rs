//! Recursive tree walker: materializes a listing into document nodes.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::dom::{Document, NodeId};
use crate::models::TreeNode;
use crate::template::{Engine, Record};

use super::templates;
use super::ShellError;

pub const CHECKBOX_PREFIX: &str = "checkbox_";
pub const CONTENT_PREFIX: &str = "content_";

/// A document-safe identifier for a path: URL-safe base64 over the prefixed
/// path. Reversible, attribute-safe whatever the path contains, and
/// injective, so distinct paths never collide.
pub fn dom_id(prefix: &str, path: &str) -> String {
    URL_SAFE_NO_PAD.encode(format!("{prefix}{path}"))
}

/// Renders `node` and its descendants under `parent`. Children are visited
/// in listing order. The caller is responsible for having cleared `parent`
/// first; there is no incremental mode.
pub fn walk(
    doc: &mut Document,
    engine: &mut Engine,
    node: &TreeNode,
    parent: NodeId,
) -> Result<(), ShellError> {
    let record = Record::new()
        .with("id", dom_id(CHECKBOX_PREFIX, &node.full_path))
        .with("name", node.name.as_str())
        .with("path", node.full_path.as_str());

    if node.is_dir {
        let fragment = engine.render(templates::FOLDER, &record, doc)?;
        // TODO: the content hook class is knowledge of the folder template's
        // markup; it should come from the template source instead.
        let content = doc
            .fragment_query_class(&fragment, "foldercontent")
            .ok_or(ShellError::MissingContainer("foldercontent"))?;
        doc.append_fragment(parent, &fragment);
        for child in &node.children {
            walk(doc, engine, child, content)?;
        }
    } else {
        let fragment = engine.render(templates::FILE, &record, doc)?;
        doc.append_fragment(parent, &fragment);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/app/walker.rs"]
mod tests;
