//! The built-in template bodies and their identifiers.

use crate::template::StaticTemplates;

pub const FOLDER: &str = "folder_tmpl";
pub const FILE: &str = "file_tmpl";
pub const EDITOR: &str = "editor_tmpl";
pub const CONTROLS: &str = "controls_tmpl";

/// A folder row: hidden checkbox driving collapse, a label showing the
/// name, and the `foldercontent` container children are walked into.
const FOLDER_BODY: &str = r#"<input class="hidden checkbox" type="checkbox" id="<%=id%>" />
<label class="folder" for="<%=id%>" data-path="<%=path%>"><%=name%></label>
<div class="foldercontent"></div>"#;

const FILE_BODY: &str = r#"<div class="file" data-path="<%=path%>"><%=name%></div>"#;

/// The editor's value is set programmatically after insertion; file content
/// is not spliced through markup.
const EDITOR_BODY: &str =
    r#"<textarea class="raweditor" id="<%=id%>" data-path="<%=path%>" data-project="<%=project%>"></textarea>"#;

const CONTROLS_BODY: &str = r#"<div class="controls"><button class="save" data-path="<%=path%>" data-project="<%=project%>" data-target="<%=id%>">save</button></div>"#;

pub fn builtin() -> StaticTemplates {
    StaticTemplates::new()
        .with(FOLDER, FOLDER_BODY)
        .with(FILE, FILE_BODY)
        .with(EDITOR, EDITOR_BODY)
        .with(CONTROLS, CONTROLS_BODY)
}
