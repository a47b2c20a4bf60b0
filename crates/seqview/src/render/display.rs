use crate::ops::Sequence;
use std::fmt::Write;

/// Residues per display line.
pub const RESIDUES_PER_LINE: usize = 50;

/// Stylesheet for the markup produced by [`sequence_display_html`].
pub const SEQUENCE_CSS: &str = "\
.residue {
    cursor: pointer;
    margin-right: 2px;
}
.sequence {
    letter-spacing: 3px;
}
";

/// Renders one hoverable `<span>` per residue, titled with its 0-based position.
///
/// A `<br>` precedes every residue whose index is a positive multiple of
/// [`RESIDUES_PER_LINE`].
pub fn sequence_display_html(sequence: &Sequence) -> String {
    let mut html = String::with_capacity(sequence.len() * 48 + 32);
    html.push_str("<div class='sequence'>");

    for (i, code) in sequence.chars().enumerate() {
        if i > 0 && i % RESIDUES_PER_LINE == 0 {
            html.push_str("<br>");
        }
        let _ = write!(
            html,
            "<span class='residue' title='Position: {i}'>{code}</span>"
        );
    }

    html.push_str("</div>");
    html
}
