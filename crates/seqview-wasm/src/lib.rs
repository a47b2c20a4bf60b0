//! WebAssembly bindings for the seqview sequence extractor and range annotator.
//!
//! A browser page uploads a PDB file, calls [`extract_sequence`], collects color ranges from
//! its own widgets, and passes them to [`annotate`]. The returned HTML and viewer directives
//! come from the same sorted range list, so the text view and the 3D view always agree.

use seqview::io::decode;
use seqview::ops::{
    Color, ColorRange as CoreColorRange, Error as OpsError, ExtractConfig, RangeSet,
    ResidueFilter, Sequence, extract_sequence as core_extract_sequence,
};
use seqview::render::{
    Representation, StyleDirective, ViewerConfig, sequence_display_html, viewer_script,
};
use serde::{Deserialize, Serialize};
use tsify::Tsify;
use wasm_bindgen::prelude::*;

// ============================================================================
// Initialization
// ============================================================================

/// Installs the panic hook so panics show up readably in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

// ============================================================================
// Error Handling
// ============================================================================

fn to_js_error<E: std::fmt::Display>(e: E) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// Configuration
// ============================================================================

/// Options for sequence extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Include modified amino acids under their parent's code. Default: `false`
    #[serde(default)]
    pub include_modified: bool,
}

impl From<ExtractOptions> for ExtractConfig {
    fn from(options: ExtractOptions) -> Self {
        let residues = if options.include_modified {
            ResidueFilter::Modified
        } else {
            ResidueFilter::Standard
        };
        ExtractConfig {
            residues,
            ..ExtractConfig::default()
        }
    }
}

/// One color range with inclusive, 0-based sequence indices.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ColorRange {
    pub start: usize,
    pub end: usize,
    #[tsify(
        type = "\"red\" | \"blue\" | \"green\" | \"yellow\" | \"violet\" | \"pink\" | \"orange\" | \"cyan\""
    )]
    pub color: String,
}

impl TryFrom<ColorRange> for CoreColorRange {
    type Error = OpsError;

    fn try_from(range: ColorRange) -> Result<Self, Self::Error> {
        let color = range.color.parse::<Color>()?;
        Ok(CoreColorRange::new(range.start, range.end, color))
    }
}

/// Input of [`annotate`].
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateRequest {
    /// Sequence previously returned by [`extract_sequence`].
    pub sequence: String,
    #[serde(default)]
    pub ranges: Vec<ColorRange>,
    /// Reject overlapping or inverted ranges. Default: `false`
    #[serde(default)]
    pub strict: bool,
    /// Representation for highlighted residues. Default: `"stick"`
    #[tsify(type = "\"stick\" | \"cartoon\" | \"line\" | \"cross\" | \"sphere\"")]
    #[serde(default = "default_representation")]
    pub highlight: String,
}

fn default_representation() -> String {
    Representation::default().key().to_string()
}

/// Output of [`annotate`].
#[derive(Debug, Serialize, Tsify)]
#[tsify(into_wasm_abi)]
pub struct Annotation {
    pub html: String,
    /// One styling call per range, in sorted order. `residues` is a 1-based span like `"1-3"`.
    #[tsify(
        type = "Array<{ residues: string; representation: \"stick\" | \"cartoon\" | \"line\" | \"cross\" | \"sphere\"; color: string }>"
    )]
    pub directives: Vec<StyleDirective>,
}

/// Input of [`viewer_script_for`].
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct ViewerRequest {
    /// Id of the element that hosts the viewer.
    pub element_id: String,
    /// Base representation. Default: `"stick"`
    #[tsify(type = "\"stick\" | \"cartoon\" | \"line\" | \"cross\" | \"sphere\"")]
    #[serde(default = "default_representation")]
    pub style: String,
    /// Representation for highlighted residues. Default: `"stick"`
    #[tsify(type = "\"stick\" | \"cartoon\" | \"line\" | \"cross\" | \"sphere\"")]
    #[serde(default = "default_representation")]
    pub highlight: String,
    /// Same 0-based ranges as passed to [`annotate`].
    #[serde(default)]
    pub ranges: Vec<ColorRange>,
    /// Same flag as passed to [`annotate`]. Default: `false`
    #[serde(default)]
    pub strict: bool,
    /// Same flag as passed to [`extract_sequence`]. Default: `false`
    #[serde(default)]
    pub include_modified: bool,
}

fn validated_set(
    ranges: Vec<ColorRange>,
    sequence_len: usize,
    strict: bool,
) -> Result<RangeSet, OpsError> {
    let ranges = ranges
        .into_iter()
        .map(CoreColorRange::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    RangeSet::validated(ranges, sequence_len, strict)
}

/// Re-extracts the sequence from `content` so the viewer ranges pass the same checks as
/// the ones given to [`annotate`].
fn viewer_directives(
    content: &[u8],
    request: &ViewerRequest,
    highlight: Representation,
) -> Result<Vec<StyleDirective>, OpsError> {
    let config = ExtractConfig::from(ExtractOptions {
        include_modified: request.include_modified,
    });
    let sequence = core_extract_sequence(content, &config)?;
    let set = validated_set(request.ranges.clone(), sequence.len(), request.strict)?;
    Ok(set.to_style_directives(highlight))
}

fn parse_representation(name: &str) -> Result<Representation, JsError> {
    name.parse::<Representation>().map_err(to_js_error)
}

fn parse_sequence(sequence: &str) -> Result<Sequence, JsError> {
    sequence.parse::<Sequence>().map_err(to_js_error)
}

// ============================================================================
// Operations
// ============================================================================

/// Extracts the one-letter sequence of the first chain from raw PDB bytes.
///
/// Returns an empty string when the file holds no qualifying residues.
#[wasm_bindgen(js_name = extractSequence)]
pub fn extract_sequence(content: &[u8], options: Option<ExtractOptions>) -> Result<String, JsError> {
    let config = ExtractConfig::from(options.unwrap_or_default());
    let sequence = core_extract_sequence(content, &config).map_err(to_js_error)?;
    Ok(sequence.to_string())
}

/// Renders the hoverable sequence markup.
#[wasm_bindgen(js_name = sequenceHtml)]
pub fn sequence_html(sequence: &str) -> Result<String, JsError> {
    Ok(sequence_display_html(&parse_sequence(sequence)?))
}

/// Validates the ranges and derives both the colored HTML and the viewer directives.
#[wasm_bindgen]
pub fn annotate(request: AnnotateRequest) -> Result<Annotation, JsError> {
    let sequence = parse_sequence(&request.sequence)?;
    let highlight = parse_representation(&request.highlight)?;
    let set =
        validated_set(request.ranges, sequence.len(), request.strict).map_err(to_js_error)?;

    Ok(Annotation {
        html: set.to_html(&sequence),
        directives: set.to_style_directives(highlight),
    })
}

/// Generates the 3Dmol.js program that renders `content` with the given ranges highlighted.
///
/// Ranges are validated against the sequence of `content` exactly as [`annotate`] does, so a
/// range rejected there is rejected here too.
#[wasm_bindgen(js_name = viewerScript)]
pub fn viewer_script_for(content: &[u8], request: ViewerRequest) -> Result<String, JsError> {
    let pdb_text = decode(content).map_err(to_js_error)?;
    let config = ViewerConfig {
        representation: parse_representation(&request.style)?,
        highlight: parse_representation(&request.highlight)?,
        ..ViewerConfig::default()
    };

    let directives =
        viewer_directives(content, &request, config.highlight).map_err(to_js_error)?;
    Ok(viewer_script(pdb_text, &config, &directives, &request.element_id))
}
