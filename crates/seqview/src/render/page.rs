use crate::ops::{RangeSet, Sequence};
use crate::render::display::{SEQUENCE_CSS, sequence_display_html};
use crate::render::viewer::{ViewerConfig, viewer_script};
use std::fmt::Write;

/// Script URL of the 3Dmol.js viewer library.
pub const VIEWER_LIBRARY_URL: &str = "https://3Dmol.org/build/3Dmol-min.js";

const VIEWER_ELEMENT_ID: &str = "structure-viewer";

/// Message shown in place of the sequence display when no residue qualified.
pub const NO_SEQUENCE_MESSAGE: &str = "No sequence found.";

/// Everything that ends up on one rendered page.
#[derive(Debug, Clone, Copy)]
pub struct PageContent<'a> {
    pub title: &'a str,
    pub sequence: &'a Sequence,
    /// Raw PDB text handed to the viewer unchanged.
    pub pdb_text: &'a str,
    pub ranges: &'a RangeSet,
    pub viewer: &'a ViewerConfig,
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a standalone HTML page with the sequence display, the 3D viewer, and the
/// color-annotated sequence.
///
/// An empty sequence replaces the sequence display with [`NO_SEQUENCE_MESSAGE`]; the
/// structure itself is still shown.
pub fn render_page(content: &PageContent<'_>) -> String {
    let title = escape_html(content.title);
    let directives = content.ranges.to_style_directives(content.viewer.highlight);
    let script = viewer_script(
        content.pdb_text,
        content.viewer,
        &directives,
        VIEWER_ELEMENT_ID,
    );

    let mut page = String::with_capacity(script.len() + content.sequence.len() * 64 + 1024);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(page, "<title>{title}</title>");
    let _ = writeln!(page, "<script src=\"{VIEWER_LIBRARY_URL}\"></script>");
    let _ = writeln!(page, "<style>\n{SEQUENCE_CSS}.error {{\n    color: #b00020;\n}}\n</style>");
    page.push_str("</head>\n<body>\n");
    let _ = writeln!(page, "<h1>{title}</h1>");

    page.push_str("<h2>Protein Sequence</h2>\n");
    if content.sequence.is_empty() {
        let _ = writeln!(page, "<p class='error'>{NO_SEQUENCE_MESSAGE}</p>");
    } else {
        page.push_str(&sequence_display_html(content.sequence));
        page.push('\n');
    }

    page.push_str("<h2>Protein Structure</h2>\n");
    let _ = writeln!(
        page,
        "<div id=\"{VIEWER_ELEMENT_ID}\" style=\"width: {}px; height: {}px; position: relative;\"></div>",
        content.viewer.width, content.viewer.height
    );
    let _ = writeln!(page, "<script>\n{script}</script>");

    if !content.sequence.is_empty() {
        let _ = writeln!(
            page,
            "<p class='annotated'>{}</p>",
            content.ranges.to_html(content.sequence)
        );
    }

    page.push_str("</body>\n</html>\n");
    page
}
