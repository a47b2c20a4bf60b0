//! 3Dmol.js program generation for the structure viewer.
//!
//! The viewer loads the raw PDB text as a model, applies one base representation to every
//! atom, then layers each [`StyleDirective`] on top in list order. Later directives override
//! earlier ones for residues they share.

use crate::render::directive::{Representation, StyleDirective};
use serde_json::{Value, json};
use std::fmt::Write;

/// Background behind the structure. Not user-configurable in the page UI.
pub const DEFAULT_BACKGROUND: &str = "white";
pub const DEFAULT_WIDTH: u32 = 760;
pub const DEFAULT_HEIGHT: u32 = 460;

/// Viewport and base styling of the 3D viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Representation applied to the whole structure before highlights.
    pub representation: Representation,
    /// Representation used for color-range highlights.
    pub highlight: Representation,
    pub background: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            representation: Representation::Stick,
            highlight: Representation::Stick,
            background: DEFAULT_BACKGROUND.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Serializes `value` for embedding inside an inline `<script>` element.
///
/// `</` is rewritten to the equivalent JSON escape `<\/` so no string content can close the
/// surrounding element.
fn script_literal(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Generates the JavaScript that renders `pdb_text` into the element with id `element_id`.
///
/// The program expects the global `$3Dmol` object to be loaded already.
pub fn viewer_script(
    pdb_text: &str,
    config: &ViewerConfig,
    directives: &[StyleDirective],
    element_id: &str,
) -> String {
    let mut script = String::with_capacity(pdb_text.len() + 256 + directives.len() * 64);

    script.push_str("(function () {\n");
    let _ = writeln!(
        script,
        "  let element = document.getElementById({});",
        script_literal(&json!(element_id))
    );
    let _ = writeln!(
        script,
        "  let viewer = $3Dmol.createViewer(element, {});",
        script_literal(&json!({ "backgroundColor": config.background }))
    );
    let _ = writeln!(
        script,
        "  viewer.addModel({}, \"pdb\");",
        script_literal(&json!(pdb_text))
    );
    let _ = writeln!(
        script,
        "  viewer.setStyle({{}}, {});",
        script_literal(&json!({ config.representation.key(): {} }))
    );
    for directive in directives {
        let _ = writeln!(
            script,
            "  viewer.addStyle({}, {});",
            script_literal(&directive.selector()),
            script_literal(&directive.style())
        );
    }
    script.push_str("  viewer.zoomTo();\n");
    script.push_str("  viewer.render();\n");
    script.push_str("})();\n");

    log::debug!(
        "generated viewer script with {} style directive(s)",
        directives.len()
    );
    script
}
